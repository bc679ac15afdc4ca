//! Board Context
//!
//! Owns the `NoteBoard` for the page and keeps the reactive store in step
//! with it. Provided via the Leptos Context API; copies are cheap handles.

use leptos::prelude::*;

use crate::board::{AssistantOutcome, NoteBoard};
use crate::ids::JsRandom;
use crate::models::{AssistantReply, Note};
use crate::placement::Viewport;
use crate::storage::BoardStorage;
use crate::store::{store_set_delete_all_pending, store_set_notes, BoardStore};

type Board = NoteBoard<BoardStorage, JsRandom>;

/// Fallback when the window size is unknown
const DEFAULT_VIEWPORT: Viewport = Viewport { width: 1280.0, height: 800.0 };

#[derive(Clone, Copy)]
pub struct BoardContext {
    board: StoredValue<Board, LocalStorage>,
    store: BoardStore,
}

impl BoardContext {
    pub fn new(store: BoardStore) -> Self {
        Self {
            board: StoredValue::new_local(NoteBoard::new(BoardStorage::open(), JsRandom)),
            store,
        }
    }

    /// Load saved notes (or seed the welcome note)
    pub fn initialize(&self) {
        self.board.update_value(|b| {
            b.initialize(current_viewport());
        });
        self.sync();
    }

    pub fn create_note(&self) {
        self.board.update_value(|b| {
            b.create_note(current_viewport());
        });
        self.sync();
    }

    pub fn update_note(&self, note: Note) {
        self.board.update_value(|b| {
            b.update_note(note);
        });
        self.sync();
    }

    pub fn delete_note(&self, note_id: &str) {
        self.board.update_value(|b| {
            b.delete_note(note_id);
        });
        self.sync();
    }

    pub fn request_delete_all(&self) {
        self.board.update_value(|b| b.request_delete_all());
        self.sync();
    }

    pub fn cancel_delete_all(&self) {
        self.board.update_value(|b| b.cancel_delete_all());
        self.sync();
    }

    pub fn confirm_delete_all(&self) {
        self.board.update_value(|b| {
            b.confirm_delete_all();
        });
        self.sync();
    }

    pub fn new_todo_id(&self) -> String {
        let mut id = String::new();
        self.board.update_value(|b| id = b.new_todo_id());
        id
    }

    /// Add whatever note the assistant reply describes
    pub fn apply_assistant_reply(&self, reply: AssistantReply) -> AssistantOutcome {
        let mut outcome = AssistantOutcome::Empty;
        self.board
            .update_value(|b| outcome = b.apply_assistant_reply(reply, current_viewport()));
        self.sync();
        outcome
    }

    fn sync(&self) {
        let store = self.store;
        self.board.with_value(|b| {
            store_set_notes(&store, b.notes());
            store_set_delete_all_pending(&store, b.is_delete_all_pending());
        });
    }
}

/// Get the board context
pub fn use_board() -> BoardContext {
    expect_context::<BoardContext>()
}

/// Current window size in CSS pixels
pub fn current_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return DEFAULT_VIEWPORT;
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    match (width, height) {
        (Some(width), Some(height)) => Viewport::new(width, height),
        _ => DEFAULT_VIEWPORT,
    }
}
