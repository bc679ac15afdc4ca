//! Keyboard shortcuts

/// Key state relevant to shortcut matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
    /// Focus is inside an input, textarea or contenteditable element
    pub in_text_field: bool,
}

impl<'a> KeyPress<'a> {
    pub fn from_event(ev: &'a web_sys::KeyboardEvent, key: &'a str) -> Self {
        Self {
            key,
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            in_text_field: focus_in_text_field(ev),
        }
    }
}

/// Ctrl+N / Cmd+N, except while typing. Shift (`"N"`) is left to the browser.
pub fn is_new_note_shortcut(press: &KeyPress) -> bool {
    (press.ctrl || press.meta) && press.key == "n" && !press.in_text_field
}

fn focus_in_text_field(ev: &web_sys::KeyboardEvent) -> bool {
    use wasm_bindgen::JsCast;

    let Some(element) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return false;
    };
    matches!(element.tag_name().as_str(), "INPUT" | "TEXTAREA")
        || element.get_attribute("contenteditable").as_deref() == Some("true")
}
