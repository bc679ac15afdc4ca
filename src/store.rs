//! Board UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! render mirror of `NoteBoard`; mutations go through `BoardContext`.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Note;

/// Reactive copy of the board for the view layer
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// All notes, in creation order
    pub notes: Vec<Note>,
    /// "Clear board" is waiting for confirmation
    pub delete_all_pending: bool,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered notes with the board's collection
pub fn store_set_notes(store: &BoardStore, notes: &[Note]) {
    store.notes().set(notes.to_vec());
}

/// Note ids in render order (tracked)
pub fn store_note_ids(store: &BoardStore) -> Vec<String> {
    store.notes().with(|notes| notes.iter().map(|n| n.id.clone()).collect())
}

/// Find a note by id (tracked)
pub fn store_find_note(store: &BoardStore, note_id: &str) -> Option<Note> {
    store.notes().with(|notes| notes.iter().find(|n| n.id == note_id).cloned())
}

pub fn store_set_delete_all_pending(store: &BoardStore, pending: bool) {
    store.delete_all_pending().set(pending);
}

pub fn store_delete_all_pending(store: &BoardStore) -> bool {
    store.delete_all_pending().get()
}
