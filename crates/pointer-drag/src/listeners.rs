//! Document-level pointer listeners that live only for one drag.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type PointerCallback = Closure<dyn FnMut(web_sys::PointerEvent)>;

/// Events that end a drag. A cancelled pointer (system gesture, pen out of
/// range) never sends `pointerup`.
pub const END_EVENTS: [&str; 2] = ["pointerup", "pointercancel"];

/// `pointermove` plus `END_EVENTS` listeners on the document.
///
/// Attached on drag start; dropping the value removes every listener.
pub struct GlobalPointerListeners {
    document: web_sys::Document,
    on_move: PointerCallback,
    on_up: PointerCallback,
}

impl GlobalPointerListeners {
    /// Returns `None` outside a browser document.
    pub fn attach<M, U>(on_move: M, on_up: U) -> Option<Self>
    where
        M: FnMut(web_sys::PointerEvent) + 'static,
        U: FnMut(web_sys::PointerEvent) + 'static,
    {
        let document = web_sys::window()?.document()?;
        let on_move = PointerCallback::new(on_move);
        let on_up = PointerCallback::new(on_up);

        document
            .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())
            .ok()?;
        let listeners = Self { document, on_move, on_up };
        for event in END_EVENTS {
            // Dropping `listeners` on failure detaches whatever was added
            listeners
                .document
                .add_event_listener_with_callback(event, listeners.on_up.as_ref().unchecked_ref())
                .ok()?;
        }

        Some(listeners)
    }
}

impl Drop for GlobalPointerListeners {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        for event in END_EVENTS {
            let _ = self
                .document
                .remove_event_listener_with_callback(event, self.on_up.as_ref().unchecked_ref());
        }
    }
}
