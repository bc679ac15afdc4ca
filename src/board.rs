//! Note Board
//!
//! The board's single owned store: load once, mutate, write the whole
//! collection back after every change.

use chrono::Utc;

use crate::assistant::{created_message, note_from_text};
use crate::ids::{self, RandomSource};
use crate::models::{AssistantReply, GeneratedNote, Note, TodoItem};
use crate::placement::{self, Viewport};
use crate::storage::{KeyValueStore, NoteStorage};

pub const WELCOME_TITLE: &str = "Welcome to QuillForge! 👋";
pub const WELCOME_TODOS: [&str; 3] = [
    "Click and drag this note to move it",
    "Add new notes with the + button",
    "Type below to add tasks",
];

/// What an assistant reply did to the board
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantOutcome {
    /// A note was added; carries the confirmation text to show
    Created { note: Note, message: String },
    /// Nothing recognisable as a note; show the reply as-is
    Message(String),
    /// Blank reply
    Empty,
}

/// In-memory notes with write-through persistence
pub struct NoteBoard<S: KeyValueStore, R: RandomSource> {
    notes: Vec<Note>,
    storage: NoteStorage<S>,
    rng: R,
    delete_all_pending: bool,
}

impl<S: KeyValueStore, R: RandomSource> NoteBoard<S, R> {
    /// Empty board; call `initialize` to load saved notes
    pub fn new(store: S, rng: R) -> Self {
        Self {
            notes: Vec::new(),
            storage: NoteStorage::new(store),
            rng,
            delete_all_pending: false,
        }
    }

    /// Load saved notes. A first run gets one welcome note, saved immediately.
    pub fn initialize(&mut self, viewport: Viewport) -> &[Note] {
        self.notes = self.storage.load();
        if self.notes.is_empty() {
            let welcome = self.welcome_note(viewport);
            log::info!("[BOARD] No saved notes, seeding welcome note {}", welcome.id);
            self.notes.push(welcome);
            self.persist();
        } else {
            log::info!("[BOARD] Loaded {} notes", self.notes.len());
        }
        &self.notes
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Empty "New Note" with a random palette colour and free position
    pub fn create_note(&mut self, viewport: Viewport) -> Note {
        let now = Utc::now();
        let note = Note {
            id: self.fresh_note_id(),
            title: "New Note".to_string(),
            color: placement::random_note_color(&mut self.rng).to_string(),
            position: placement::random_note_position(viewport, &mut self.rng),
            todos: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.push(note.clone());
        note
    }

    /// Append a note produced by the assistant
    pub fn add_generated_note(&mut self, generated: GeneratedNote, viewport: Viewport) -> Note {
        let now = Utc::now();
        let mut todos = generated.todos;
        // Assistant ids are only unique per reply; re-key into this board
        for todo in &mut todos {
            todo.id = ids::todo_id(now, &mut self.rng);
        }
        let note = Note {
            id: self.fresh_note_id(),
            title: generated.title,
            color: placement::random_note_color(&mut self.rng).to_string(),
            position: placement::random_note_position(viewport, &mut self.rng),
            todos,
            created_at: now,
            updated_at: now,
        };
        self.push(note.clone());
        note
    }

    /// Turn a freeform assistant answer into a note. `None` for blank text.
    pub fn add_text_note(&mut self, content: &str, viewport: Viewport) -> Option<Note> {
        let (title, lines) = note_from_text(content)?;
        let now = Utc::now();
        let todos = lines
            .into_iter()
            .map(|text| TodoItem::new(ids::todo_id(now, &mut self.rng), text, now))
            .collect();
        Some(self.add_generated_note(GeneratedNote { title, todos }, viewport))
    }

    /// Apply an assistant reply from either deployment mode
    pub fn apply_assistant_reply(&mut self, reply: AssistantReply, viewport: Viewport) -> AssistantOutcome {
        match reply {
            AssistantReply::Structured { message, is_note: true, note: Some(generated) } => {
                let note = self.add_generated_note(generated, viewport);
                AssistantOutcome::Created { note, message }
            }
            AssistantReply::Structured { message, .. } if message.trim().is_empty() => AssistantOutcome::Empty,
            AssistantReply::Structured { message, .. } => AssistantOutcome::Message(message),
            AssistantReply::Text { content } => match self.add_text_note(&content, viewport) {
                Some(note) => {
                    let message = created_message(&note.title, note.todos.len());
                    AssistantOutcome::Created { note, message }
                }
                None => AssistantOutcome::Empty,
            },
        }
    }

    /// Replace the note with the same id. The caller bumps `updated_at`.
    pub fn update_note(&mut self, note: Note) -> bool {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(slot) => {
                *slot = note;
                self.persist();
                true
            }
            None => {
                log::warn!("[BOARD] Update for unknown note {}", note.id);
                false
            }
        }
    }

    pub fn delete_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        let removed = self.notes.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// First step of clearing the board; changes no notes
    pub fn request_delete_all(&mut self) {
        self.delete_all_pending = true;
    }

    pub fn cancel_delete_all(&mut self) {
        self.delete_all_pending = false;
    }

    pub fn is_delete_all_pending(&self) -> bool {
        self.delete_all_pending
    }

    /// Clear the board, only after `request_delete_all`
    pub fn confirm_delete_all(&mut self) -> bool {
        if !self.delete_all_pending {
            return false;
        }
        self.delete_all_pending = false;
        log::info!("[BOARD] Deleting all {} notes", self.notes.len());
        self.notes.clear();
        self.persist();
        true
    }

    /// Fresh id for a todo about to be added to a note
    pub fn new_todo_id(&mut self) -> String {
        ids::todo_id(Utc::now(), &mut self.rng)
    }

    fn push(&mut self, note: Note) {
        self.notes.push(note);
        self.persist();
    }

    fn persist(&self) {
        self.storage.save(&self.notes);
    }

    fn fresh_note_id(&mut self) -> String {
        loop {
            let id = ids::note_id(Utc::now(), &mut self.rng);
            if self.note(&id).is_none() {
                return id;
            }
        }
    }

    fn welcome_note(&mut self, viewport: Viewport) -> Note {
        let now = Utc::now();
        let todos = WELCOME_TODOS
            .iter()
            .map(|text| TodoItem::new(ids::todo_id(now, &mut self.rng), text.to_string(), now))
            .collect();
        Note {
            id: ids::note_id(now, &mut self.rng),
            title: WELCOME_TITLE.to_string(),
            color: placement::WELCOME_COLOR.to_string(),
            position: placement::welcome_position(viewport),
            todos,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::testing::SeededRandom;
    use crate::models::Position;
    use crate::placement::{control_zone, navigation_zone, NOTE_COLORS};
    use crate::storage::{MemoryStorage, STORAGE_KEY};

    const VIEWPORT: Viewport = Viewport { width: 1280.0, height: 800.0 };

    fn board() -> (NoteBoard<MemoryStorage, SeededRandom>, MemoryStorage) {
        let kv = MemoryStorage::new();
        (NoteBoard::new(kv.clone(), SeededRandom::new(11)), kv)
    }

    fn assert_persisted(board: &NoteBoard<MemoryStorage, SeededRandom>, kv: &MemoryStorage) {
        let expected = serde_json::to_string(board.notes()).unwrap();
        assert_eq!(kv.raw(STORAGE_KEY).as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn test_first_run_seeds_welcome_note() {
        let (mut board, kv) = board();
        board.initialize(VIEWPORT);

        assert_eq!(board.notes().len(), 1);
        let welcome = &board.notes()[0];
        assert_eq!(welcome.title, WELCOME_TITLE);
        assert_eq!(welcome.todos.len(), 3);
        assert!(welcome.todos.iter().all(|t| !t.completed));
        assert_eq!(welcome.position, Position::new(490.0, 300.0));
        assert_persisted(&board, &kv);
    }

    #[test]
    fn test_existing_notes_load_unchanged() {
        let (mut seeded, kv) = board();
        seeded.initialize(VIEWPORT);
        seeded.create_note(VIEWPORT);
        let saved = kv.raw(STORAGE_KEY).unwrap();

        let mut reloaded = NoteBoard::new(kv.clone(), SeededRandom::new(99));
        reloaded.initialize(VIEWPORT);

        let ids = |b: &NoteBoard<MemoryStorage, SeededRandom>| -> Vec<String> {
            b.notes().iter().map(|n| n.id.clone()).collect()
        };
        assert_eq!(ids(&reloaded), ids(&seeded));
        assert_eq!(reloaded.notes()[0].title, WELCOME_TITLE);
        assert_eq!(kv.raw(STORAGE_KEY).unwrap(), saved);
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let (mut board, kv) = board();
        board.initialize(VIEWPORT);
        assert_persisted(&board, &kv);

        let a = board.create_note(VIEWPORT);
        assert_persisted(&board, &kv);
        let b = board.create_note(VIEWPORT);
        assert_persisted(&board, &kv);

        let mut edited = a.clone();
        edited.rename("Errands", Utc::now());
        let todo_id = board.new_todo_id();
        edited.add_todo(todo_id, "post office", Utc::now());
        assert!(board.update_note(edited.clone()));
        assert_persisted(&board, &kv);
        assert_eq!(board.note(&a.id), Some(&edited));

        assert!(board.delete_note(&b.id));
        assert_persisted(&board, &kv);
        assert!(!board.delete_note(&b.id));
        assert_persisted(&board, &kv);

        assert_eq!(board.notes().len(), 2);
    }

    #[test]
    fn test_update_replaces_whole_note() {
        let (mut board, _kv) = board();
        let note = board.create_note(VIEWPORT);

        let mut replacement = note.clone();
        replacement.todos.clear();
        replacement.color = "#ffccd5".to_string();
        replacement.move_to(Position::new(5.0, 6.0), Utc::now());
        board.update_note(replacement.clone());

        assert_eq!(board.note(&note.id), Some(&replacement));
    }

    #[test]
    fn test_update_unknown_note_is_ignored() {
        let (mut board, kv) = board();
        board.initialize(VIEWPORT);
        let mut ghost = board.notes()[0].clone();
        ghost.id = "note-ghost".to_string();

        assert!(!board.update_note(ghost));
        assert_eq!(board.notes().len(), 1);
        assert_persisted(&board, &kv);
    }

    #[test]
    fn test_create_note_defaults() {
        let (mut board, _kv) = board();
        let note = board.create_note(VIEWPORT);
        assert_eq!(note.title, "New Note");
        assert!(note.todos.is_empty());
        assert!(NOTE_COLORS.contains(&note.color.as_str()));
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_create_note_never_lands_in_reserved_zones() {
        let (mut board, _kv) = board();
        for _ in 0..150 {
            let note = board.create_note(VIEWPORT);
            assert!(!navigation_zone(VIEWPORT).contains(note.position));
            assert!(!control_zone(VIEWPORT).contains(note.position));
        }
    }

    #[test]
    fn test_note_ids_are_unique() {
        let (mut board, _kv) = board();
        for _ in 0..200 {
            board.create_note(VIEWPORT);
        }
        let mut ids: Vec<_> = board.notes().iter().map(|n| n.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_delete_all_requires_confirmation() {
        let (mut board, kv) = board();
        board.initialize(VIEWPORT);
        board.create_note(VIEWPORT);

        assert!(!board.confirm_delete_all());
        board.request_delete_all();
        assert!(board.is_delete_all_pending());
        assert_eq!(board.notes().len(), 2);
        assert_persisted(&board, &kv);

        board.cancel_delete_all();
        assert!(!board.confirm_delete_all());
        assert_eq!(board.notes().len(), 2);

        board.request_delete_all();
        assert!(board.confirm_delete_all());
        assert!(board.notes().is_empty());
        assert_eq!(kv.raw(STORAGE_KEY).as_deref(), Some("[]"));
        assert!(!board.is_delete_all_pending());
    }

    #[test]
    fn test_generated_note_is_appended() {
        let (mut board, kv) = board();
        board.initialize(VIEWPORT);
        let now = Utc::now();
        let generated = GeneratedNote {
            title: "Groceries".to_string(),
            todos: vec![
                TodoItem::new("todo-0".to_string(), "milk".to_string(), now),
                TodoItem::new("todo-0".to_string(), "eggs".to_string(), now),
            ],
        };

        let note = board.add_generated_note(generated, VIEWPORT);

        assert_eq!(board.notes().last(), Some(&note));
        assert_eq!(note.title, "Groceries");
        assert_ne!(note.todos[0].id, note.todos[1].id);
        assert!(note.todos.iter().all(|t| !t.completed));
        assert_persisted(&board, &kv);
    }

    #[test]
    fn test_text_note_from_assistant() {
        let (mut board, _kv) = board();
        let note = board
            .add_text_note("Trip prep\n- passport\n- tickets\n", VIEWPORT)
            .unwrap();
        assert_eq!(note.title, "Trip prep");
        let texts: Vec<_> = note.todos.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["passport", "tickets"]);

        assert!(board.add_text_note("  \n ", VIEWPORT).is_none());
        assert_eq!(board.notes().len(), 1);
    }

    #[test]
    fn test_structured_reply_adds_note() {
        let (mut board, _kv) = board();
        let reply: AssistantReply = serde_json::from_str(
            r#"{"message":"Created a note","isNote":true,"note":{"title":"Groceries","todos":[
                {"id":"todo-1","text":"milk","completed":false,"createdAt":"2024-05-01T10:00:00Z"},
                {"id":"todo-2","text":"eggs","completed":false,"createdAt":"2024-05-01T10:00:00Z"}]}}"#,
        ).unwrap();

        match board.apply_assistant_reply(reply, VIEWPORT) {
            AssistantOutcome::Created { note, message } => {
                assert_eq!(message, "Created a note");
                assert_eq!(note.title, "Groceries");
                assert_eq!(note.todos.len(), 2);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(board.notes().len(), 1);
    }

    #[test]
    fn test_unrecognised_reply_leaves_board_alone() {
        let (mut board, _kv) = board();
        let reply = AssistantReply::Structured {
            message: "just chatting".to_string(),
            is_note: false,
            note: None,
        };
        assert_eq!(
            board.apply_assistant_reply(reply, VIEWPORT),
            AssistantOutcome::Message("just chatting".to_string())
        );
        assert!(board.notes().is_empty());
    }

    #[test]
    fn test_text_reply_becomes_note() {
        let (mut board, _kv) = board();
        let reply = AssistantReply::Text { content: "Standup\n- blockers\n- demo".to_string() };
        match board.apply_assistant_reply(reply, VIEWPORT) {
            AssistantOutcome::Created { note, message } => {
                assert_eq!(note.title, "Standup");
                assert_eq!(message, "Created a note \"Standup\" with 2 task(s).");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_failed_writes_keep_memory_state() {
        let (mut board, kv) = board();
        board.initialize(VIEWPORT);
        kv.set_fail_writes(true);

        board.create_note(VIEWPORT);

        assert_eq!(board.notes().len(), 2);
        let saved: Vec<Note> = serde_json::from_str(&kv.raw(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(saved.len(), 1);
    }
}
