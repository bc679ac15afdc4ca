//! Note Card Component
//!
//! One sticky note: drag to move, click the title to rename, manage todos.

use chrono::Utc;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use pointer_drag::{DragMachine, GlobalPointerListeners, Point, PressTarget};

use crate::context::{current_viewport, use_board};
use crate::models::TodoItem;
use crate::store::{store_find_note, use_board_store};

fn pointer_point(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// One title-editing session. Enter and blur can both end it; only the
/// first of them commits.
#[derive(Debug, Clone, Default, PartialEq)]
struct TitleEdit {
    draft: Option<String>,
}

impl TitleEdit {
    fn begin(&mut self, title: &str) {
        self.draft = Some(title.to_string());
    }

    fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    fn draft(&self) -> String {
        self.draft.clone().unwrap_or_default()
    }

    fn set_draft(&mut self, text: String) {
        if let Some(draft) = self.draft.as_mut() {
            *draft = text;
        }
    }

    /// Close the session, returning the text to save
    fn commit(&mut self) -> Option<String> {
        self.draft.take()
    }

    fn cancel(&mut self) {
        self.draft = None;
    }
}

#[component]
pub fn NoteCard(#[prop(into)] note_id: String) -> impl IntoView {
    let board = use_board();
    let store = use_board_store();
    let note_id = StoredValue::new(note_id);
    let note = Memo::new(move |_| note_id.with_value(|id| store_find_note(&store, id)));

    // Drag
    let drag = StoredValue::new_local(DragMachine::new());
    let listeners = StoredValue::new_local(None::<GlobalPointerListeners>);
    let (dragging, set_dragging) = signal(false);

    let end_drag = move || {
        drag.update_value(|m| {
            m.release();
        });
        set_dragging.set(false);
        let mut active = None;
        listeners.update_value(|l| active = l.take());
        // Detach after the current event has finished dispatching
        if let Some(active) = active {
            spawn_local(async move { drop(active) });
        }
    };

    let on_pointer_down = move |ev: web_sys::PointerEvent| {
        let Some(current) = note.get_untracked() else { return };
        let target = PressTarget::from_event_target(ev.target());
        let mut started = false;
        drag.update_value(|m| {
            started = m.press(pointer_point(&ev), current.position.into(), ev.button(), target);
        });
        if !started {
            return;
        }
        ev.prevent_default();
        set_dragging.set(true);

        let on_move = move |ev: web_sys::PointerEvent| {
            ev.prevent_default();
            let bounds = current_viewport().note_bounds();
            let Some(position) = drag.with_value(|m| m.drag_to(pointer_point(&ev), &bounds)) else {
                return;
            };
            if let Some(mut current) = note.get_untracked() {
                current.move_to(position.into(), Utc::now());
                board.update_note(current);
            }
        };
        let attached = GlobalPointerListeners::attach(on_move, move |_ev: web_sys::PointerEvent| end_drag());
        if attached.is_none() {
            log::warn!("[NOTE] Could not attach drag listeners");
            end_drag();
            return;
        }
        listeners.set_value(attached);
    };

    on_cleanup(move || {
        listeners.try_update_value(|l| l.take());
    });

    // Title editing
    let title_edit = RwSignal::new(TitleEdit::default());
    let title_input = NodeRef::<html::Input>::new();

    // `autofocus` is ignored for inputs inserted after load
    Effect::new(move |_| {
        if let Some(input) = title_input.get() {
            let _ = input.focus();
        }
    });

    let start_editing = move |_: web_sys::MouseEvent| {
        if let Some(current) = note.get_untracked() {
            title_edit.update(|e| e.begin(&current.title));
        }
    };

    let commit_title = move || {
        let mut committed = None;
        title_edit.update(|e| committed = e.commit());
        let Some(title) = committed else { return };
        if let Some(mut current) = note.get_untracked() {
            current.rename(&title, Utc::now());
            board.update_note(current);
        }
    };

    // Todos
    let (new_todo, set_new_todo) = signal(String::new());

    let add_todo = move || {
        let Some(mut current) = note.get_untracked() else { return };
        if current.add_todo(board.new_todo_id(), &new_todo.get_untracked(), Utc::now()) {
            board.update_note(current);
            set_new_todo.set(String::new());
        }
    };

    let toggle_todo = move |todo_id: String| {
        if let Some(mut current) = note.get_untracked() {
            if current.toggle_todo(&todo_id, Utc::now()) {
                board.update_note(current);
            }
        }
    };

    let remove_todo = move |todo_id: String| {
        if let Some(mut current) = note.get_untracked() {
            if current.remove_todo(&todo_id, Utc::now()) {
                board.update_note(current);
            }
        }
    };

    let card_style = move || {
        note.get()
            .map(|n| {
                format!(
                    "background-color: {}; transform: translate({}px, {}px);",
                    n.color, n.position.x, n.position.y
                )
            })
            .unwrap_or_default()
    };

    view! {
        <div
            class=move || if dragging.get() { "note-card dragging" } else { "note-card" }
            style=card_style
            on:pointerdown=on_pointer_down
        >
            <div class="note-header">
                <Show
                    when=move || title_edit.with(TitleEdit::is_open)
                    fallback=move || view! {
                        <h3 class="note-title" on:click=start_editing>
                            {move || note.get().map(|n| n.display_title().to_string()).unwrap_or_default()}
                        </h3>
                        <button
                            class="note-delete-btn"
                            title="Delete note"
                            on:click=move |_| note_id.with_value(|id| board.delete_note(id))
                        >
                            "×"
                        </button>
                    }
                >
                    <input
                        type="text"
                        class="note-title-input"
                        node_ref=title_input
                        prop:value=move || title_edit.with_untracked(TitleEdit::draft)
                        on:input=move |ev| title_edit.update(|e| e.set_draft(event_target_value(&ev)))
                        on:blur=move |_| commit_title()
                        on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                            "Enter" => commit_title(),
                            "Escape" => title_edit.update(TitleEdit::cancel),
                            _ => {}
                        }
                    />
                </Show>
            </div>

            <ul class="todo-list">
                <For
                    each=move || note.get().map(|n| n.todos).unwrap_or_default()
                    key=|todo: &TodoItem| (todo.id.clone(), todo.completed, todo.text.clone())
                    children=move |todo: TodoItem| {
                        let toggle_id = todo.id.clone();
                        let remove_id = todo.id.clone();
                        let text_class = if todo.completed { "todo-text done" } else { "todo-text" };
                        view! {
                            <li class="todo-row">
                                <input
                                    type="checkbox"
                                    prop:checked=todo.completed
                                    on:change=move |_| toggle_todo(toggle_id.clone())
                                />
                                <span class=text_class>
                                    {todo.text}
                                </span>
                                <button class="todo-delete-btn" on:click=move |_| remove_todo(remove_id.clone())>
                                    "×"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <input
                type="text"
                class="todo-input"
                placeholder="Add a task..."
                prop:value=move || new_todo.get()
                on:input=move |ev| set_new_todo.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add_todo();
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_then_blur_commits_once() {
        let mut edit = TitleEdit::default();
        edit.begin("Groceries");
        edit.set_draft("  Weekend  ".to_string());
        assert_eq!(edit.commit(), Some("  Weekend  ".to_string()));
        // Blur from the input being removed
        assert_eq!(edit.commit(), None);
        assert!(!edit.is_open());
    }

    #[test]
    fn test_escape_discards_draft() {
        let mut edit = TitleEdit::default();
        edit.begin("Groceries");
        edit.set_draft("Typo".to_string());
        edit.cancel();
        assert_eq!(edit.commit(), None);
    }

    #[test]
    fn test_each_session_starts_from_current_title() {
        let mut edit = TitleEdit::default();
        edit.set_draft("ignored".to_string());
        assert!(!edit.is_open());

        edit.begin("First");
        edit.commit();
        edit.begin("Second");
        assert_eq!(edit.draft(), "Second");
    }
}
