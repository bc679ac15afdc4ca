//! Note Entities
//!
//! The note shape the assistant hands back to the board.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A checkable task line (matches the frontend's stored shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// New, not completed, with a fresh `todo-<millis>-<suffix>` id
    pub fn fresh(text: String, now: DateTime<Utc>) -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..9)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();
        Self {
            id: format!("todo-{}-{}", now.timestamp_millis(), suffix),
            text,
            completed: false,
            created_at: now,
        }
    }
}

/// Title plus todo list recognised in a model reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedNote {
    pub title: String,
    pub todos: Vec<TodoItem>,
}

impl GeneratedNote {
    pub fn new(title: String, todo_texts: Vec<String>, now: DateTime<Utc>) -> Self {
        Self {
            title,
            todos: todo_texts.into_iter().map(|text| TodoItem::fresh(text, now)).collect(),
        }
    }
}
