//! Model output normalization
//!
//! Turns raw completion text into the reply the board understands.
//! Malformed output is never an error; it is passed through as a message.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::{GeneratedNote, StructuredReply};

/// Remove a surrounding ``` / ```json fence, if any
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the language tag line; JSON may also start right after the fence
    match inner.split_once('\n') {
        Some((tag, body)) if is_fence_tag(tag.trim()) => body.trim(),
        _ => inner.trim(),
    }
}

fn is_fence_tag(tag: &str) -> bool {
    tag.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
}

/// `(title, todo texts)` when the content is `{"title": non-empty, "todos": [..]}`
pub fn recognize_note(content: &str) -> Option<(String, Vec<String>)> {
    let value: Value = serde_json::from_str(strip_code_fence(content)).ok()?;
    let object = value.as_object()?;

    let title = object.get("title")?.as_str()?.trim();
    if title.is_empty() {
        return None;
    }
    let todos = object.get("todos")?.as_array()?;

    let texts = todos
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            // null, arrays and objects carry no task text
            _ => None,
        })
        .collect();

    Some((title.to_string(), texts))
}

pub fn confirmation_message(title: &str, count: usize) -> String {
    format!("Created a note \"{}\" with {} task(s).", title, count)
}

/// Structured-mode reply for raw model content
pub fn structured_reply(content: &str, now: DateTime<Utc>) -> StructuredReply {
    match recognize_note(content) {
        Some((title, texts)) => {
            let note = GeneratedNote::new(title, texts, now);
            StructuredReply {
                message: confirmation_message(&note.title, note.todos.len()),
                is_note: true,
                note: Some(note),
            }
        }
        None => StructuredReply {
            message: fallback_message(content),
            is_note: false,
            note: None,
        },
    }
}

/// A JSON `{"message": ..}` answer is unwrapped; anything else is shown verbatim
fn fallback_message(content: &str) -> String {
    serde_json::from_str::<Value>(strip_code_fence(content))
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| content.to_string())
}
