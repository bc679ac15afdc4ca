//! QuillForge Frontend App
//!
//! Board page: note cards, board controls and the assistant prompt.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AssistantChat, DeleteConfirmButton, NoteCard};
use crate::context::BoardContext;
use crate::shortcuts::{is_new_note_shortcut, KeyPress};
use crate::store::{store_delete_all_pending, store_note_ids, BoardState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(BoardState::default());
    let board = BoardContext::new(store);

    // Provide context to all children
    provide_context(store);
    provide_context(board);

    board.initialize();

    // Ctrl/Cmd+N anywhere on the board
    let shortcut = window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        if is_new_note_shortcut(&KeyPress::from_event(&ev, &key)) {
            ev.prevent_default();
            board.create_note();
        }
    });
    on_cleanup(move || shortcut.remove());

    let delete_all_pending = Signal::derive(move || store_delete_all_pending(&store));

    view! {
        <main class="board">
            <nav class="board-nav">
                <span class="brand">"QuillForge"</span>
            </nav>

            <For
                each=move || store_note_ids(&store)
                key=|id: &String| id.clone()
                children=move |id: String| view! { <NoteCard note_id=id /> }
            />

            <div class="board-controls">
                <DeleteConfirmButton
                    button_class="clear-board-btn"
                    label="Clear board"
                    confirm_text="Delete all notes?"
                    pending=delete_all_pending
                    on_request=move |_| board.request_delete_all()
                    on_confirm=move |_| board.confirm_delete_all()
                    on_cancel=move |_| board.cancel_delete_all()
                />
                <button class="new-note-btn" on:click=move |_| board.create_note()>
                    "+ New Note"
                </button>
            </div>

            <AssistantChat />
        </main>
    }
}
