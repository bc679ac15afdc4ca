//! Frontend Models
//!
//! Notes and todo items as stored in the browser and returned by the assistant.

use chrono::{DateTime, Utc};
use pointer_drag::Point;
use serde::{Deserialize, Serialize};

/// Shown in place of an empty title
pub const UNTITLED_NOTE: &str = "New Note";

/// A single checkable task line, owned by exactly one note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    pub fn new(id: String, text: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: now,
        }
    }
}

/// Top-left corner of a note in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Position {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Point::new(p.x, p.y)
    }
}

/// A positioned card with a title and an ordered todo list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub color: String,
    pub position: Position,
    pub todos: Vec<TodoItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Title to render; empty titles fall back to "New Note"
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_NOTE
        } else {
            &self.title
        }
    }

    /// Commit an edited title. Titles are trimmed; empty is allowed.
    pub fn rename(&mut self, title: &str, now: DateTime<Utc>) {
        self.title = title.trim().to_string();
        self.updated_at = now;
    }

    pub fn move_to(&mut self, position: Position, now: DateTime<Utc>) {
        self.position = position;
        self.updated_at = now;
    }

    /// Append a todo. Returns false (and changes nothing) for blank text.
    pub fn add_todo(&mut self, id: String, text: &str, now: DateTime<Utc>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.todos.push(TodoItem::new(id, text.to_string(), now));
        self.updated_at = now;
        true
    }

    /// Flip `completed` on the matching todo. Unknown ids leave the note untouched.
    pub fn toggle_todo(&mut self, todo_id: &str, now: DateTime<Utc>) -> bool {
        match self.todos.iter_mut().find(|t| t.id == todo_id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                self.updated_at = now;
                true
            }
            None => false,
        }
    }

    pub fn remove_todo(&mut self, todo_id: &str, now: DateTime<Utc>) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != todo_id);
        if self.todos.len() == before {
            return false;
        }
        self.updated_at = now;
        true
    }
}

/// Note shape produced by the assistant (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedNote {
    pub title: String,
    pub todos: Vec<TodoItem>,
}

/// Assistant reply in either deployment mode (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AssistantReply {
    Structured {
        message: String,
        #[serde(rename = "isNote")]
        is_note: bool,
        note: Option<GeneratedNote>,
    },
    Text {
        content: String,
    },
}

/// Error payload sent by the assistant command
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssistantFailure {
    pub status: u16,
    pub error: String,
}
