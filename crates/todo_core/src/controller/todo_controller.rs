//! Controller mediating between view commands and the todo list.
//!
//! # Invariants
//! - Mutations build a candidate list, persist it, and only then replace
//!   the in-memory list and re-render. A failed save changes nothing.
//! - Every mutating method takes `&mut self`, so at most one store call per
//!   controller is ever in flight.
//! - Nothing is saved until a load has succeeded, so an unreadable store is
//!   never overwritten with a partial list.

use crate::model::todo::{TodoId, TodoItem};
use crate::observe::{IgnoreReason, TodoEvent, TodoObserver, TodoOp};
use crate::store::todo_store::TodoStore;
use crate::view::{render, TodoView};

/// Named command produced by an event-binding adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    /// Form submission: add whatever the input field holds.
    Submit,
    Add(String),
    Edit { id: TodoId, text: String },
    Toggle(TodoId),
    Delete(TodoId),
}

/// Result of one command, for adapters and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The list changed and was persisted.
    Applied(TodoId),
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The store rejected the new list; the previous list stays active.
    PersistFailed(TodoId),
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Todo list controller with injected store, view and observer.
pub struct TodoController<S, V, O> {
    store: S,
    view: V,
    observer: O,
    items: Vec<TodoItem>,
    loaded: bool,
}

impl<S, V, O> TodoController<S, V, O>
where
    S: TodoStore,
    V: TodoView,
    O: TodoObserver,
{
    /// Creates a controller with an empty list. Call `initialize` to load.
    pub fn new(store: S, view: V, observer: O) -> Self {
        Self {
            store,
            view,
            observer,
            items: Vec::new(),
            loaded: false,
        }
    }

    /// Loads the persisted list and renders it.
    ///
    /// A load failure is reported to the observer and leaves an empty,
    /// read-only list: later mutations report `PersistFailed` until a
    /// subsequent `initialize` succeeds.
    pub fn initialize(&mut self) {
        self.items = match self.store.load() {
            Ok(items) => {
                self.loaded = true;
                self.observer.on_event(&TodoEvent::Loaded { count: items.len() });
                items
            }
            Err(err) => {
                self.loaded = false;
                self.observer.on_event(&TodoEvent::LoadFailed {
                    error: err.to_string(),
                });
                Vec::new()
            }
        };
        self.render();
    }

    /// Runs one command.
    pub fn dispatch(&mut self, command: TodoCommand) -> CommandOutcome {
        match command {
            TodoCommand::Submit => self.submit(),
            TodoCommand::Add(text) => self.add_todo(&text),
            TodoCommand::Edit { id, text } => self.edit_todo(id, &text),
            TodoCommand::Toggle(id) => self.toggle_todo(id),
            TodoCommand::Delete(id) => self.delete_todo(id),
        }
    }

    /// Adds the current input field value.
    pub fn submit(&mut self) -> CommandOutcome {
        let raw_text = self.view.input_value();
        self.add_todo(&raw_text)
    }

    /// Appends a new item built from trimmed `raw_text`.
    ///
    /// On success the input field is cleared.
    pub fn add_todo(&mut self, raw_text: &str) -> CommandOutcome {
        let item = match TodoItem::new(raw_text) {
            Ok(item) => item,
            Err(_) => return self.ignore(TodoOp::Add, IgnoreReason::EmptyText),
        };
        let id = item.id;

        let mut candidate = self.items.clone();
        candidate.push(item);
        if !self.commit(TodoOp::Add, candidate) {
            return CommandOutcome::PersistFailed(id);
        }

        self.observer.on_event(&TodoEvent::Added { id });
        self.view.set_input_value("");
        CommandOutcome::Applied(id)
    }

    /// Replaces the text of item `id` with trimmed `raw_text`.
    pub fn edit_todo(&mut self, id: TodoId, raw_text: &str) -> CommandOutcome {
        let text = raw_text.trim();
        if text.is_empty() {
            return self.ignore(TodoOp::Edit, IgnoreReason::EmptyText);
        }
        let Some(index) = self.position(id) else {
            return self.ignore(TodoOp::Edit, IgnoreReason::UnknownId(id));
        };

        let mut candidate = self.items.clone();
        candidate[index].text = text.to_string();
        if !self.commit(TodoOp::Edit, candidate) {
            return CommandOutcome::PersistFailed(id);
        }

        self.observer.on_event(&TodoEvent::Edited { id });
        CommandOutcome::Applied(id)
    }

    /// Flips the `done` flag of item `id`.
    pub fn toggle_todo(&mut self, id: TodoId) -> CommandOutcome {
        let Some(index) = self.position(id) else {
            return self.ignore(TodoOp::Toggle, IgnoreReason::UnknownId(id));
        };

        let mut candidate = self.items.clone();
        let done = candidate[index].toggle();
        if !self.commit(TodoOp::Toggle, candidate) {
            return CommandOutcome::PersistFailed(id);
        }

        self.observer.on_event(&TodoEvent::Toggled { id, done });
        CommandOutcome::Applied(id)
    }

    /// Removes item `id`.
    pub fn delete_todo(&mut self, id: TodoId) -> CommandOutcome {
        let Some(index) = self.position(id) else {
            return self.ignore(TodoOp::Delete, IgnoreReason::UnknownId(id));
        };

        let mut candidate = self.items.clone();
        candidate.remove(index);
        if !self.commit(TodoOp::Delete, candidate) {
            return CommandOutcome::PersistFailed(id);
        }

        self.observer.on_event(&TodoEvent::Deleted { id });
        CommandOutcome::Applied(id)
    }

    /// Pushes the current list to the view.
    pub fn render(&mut self) {
        let rows = render(&self.items);
        self.view.show_rows(&rows);
        self.observer
            .on_event(&TodoEvent::Rendered { rows: rows.len() });
    }

    /// Current list in display order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn find(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn ignore(&self, op: TodoOp, reason: IgnoreReason) -> CommandOutcome {
        self.observer.on_event(&TodoEvent::Ignored { op, reason });
        CommandOutcome::Ignored(reason)
    }

    /// Whether the persisted list was read and saves are allowed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn commit(&mut self, op: TodoOp, candidate: Vec<TodoItem>) -> bool {
        if !self.loaded {
            self.observer.on_event(&TodoEvent::PersistFailed {
                op,
                error: "store not loaded; refusing to overwrite unread data".to_string(),
            });
            return false;
        }
        if let Err(err) = self.store.save(&candidate) {
            self.observer.on_event(&TodoEvent::PersistFailed {
                op,
                error: err.to_string(),
            });
            return false;
        }
        self.items = candidate;
        self.render();
        true
    }
}
