//! Assistant text handling
//!
//! In text mode the assistant answers with "a title line and bullet points
//! below"; this turns that answer into note parts.

/// Status line shown after the assistant adds a note; same wording as the
/// backend's structured-mode confirmation
pub fn created_message(title: &str, count: usize) -> String {
    format!("Created a note \"{}\" with {} task(s).", title, count)
}

/// Split a freeform answer into `(title, todo texts)`.
///
/// The first non-blank line is the title (Markdown heading marks removed);
/// every later non-blank line becomes a todo with list markers stripped.
/// Returns `None` when there is no text at all.
pub fn note_from_text(content: &str) -> Option<(String, Vec<String>)> {
    let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
    let title = lines.next()?.trim_start_matches('#').trim().to_string();
    let todos = lines
        .map(strip_list_marker)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    Some((title, todos))
}

fn strip_list_marker(line: &str) -> &str {
    let mut rest = line;
    for marker in ["- ", "* ", "• ", "+ "] {
        if let Some(stripped) = rest.strip_prefix(marker) {
            rest = stripped.trim_start();
            break;
        }
    }
    // "1. " / "2) "
    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let after = &rest[digits..];
        if let Some(stripped) = after.strip_prefix(". ").or_else(|| after.strip_prefix(") ")) {
            rest = stripped.trim_start();
        }
    }
    for checkbox in ["[ ] ", "[x] ", "[X] "] {
        if let Some(stripped) = rest.strip_prefix(checkbox) {
            rest = stripped.trim_start();
            break;
        }
    }
    rest.trim()
}
