//! UI Components
//!
//! Reusable Leptos components.

mod note_card;
mod assistant_chat;
mod delete_confirm_button;

pub use note_card::NoteCard;
pub use assistant_chat::AssistantChat;
pub use delete_confirm_button::DeleteConfirmButton;
