#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use todo_core::{
    MemoryTodoStore, StoreError, StoreResult, TodoEvent, TodoItem, TodoObserver, TodoRow,
    TodoStore, TodoView,
};

#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<TodoEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<TodoEvent> {
        self.events.borrow().clone()
    }

    pub fn count<F: Fn(&TodoEvent) -> bool>(&self, predicate: F) -> usize {
        self.events.borrow().iter().filter(|event| predicate(event)).count()
    }
}

impl TodoObserver for RecordingObserver {
    fn on_event(&self, event: &TodoEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub input: String,
    pub rows: Vec<TodoRow>,
    pub renders: usize,
}

impl TodoView for RecordingView {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input = value.to_string();
    }

    fn show_rows(&mut self, rows: &[TodoRow]) {
        self.rows = rows.to_vec();
        self.renders += 1;
    }
}

/// Memory store whose load/save can be switched to fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: MemoryTodoStore,
    pub fail_load: Cell<bool>,
    pub fail_save: Cell<bool>,
}

impl FailingStore {
    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            inner: MemoryTodoStore::with_items(items).unwrap(),
            ..Self::default()
        }
    }
}

impl TodoStore for FailingStore {
    fn load(&self) -> StoreResult<Vec<TodoItem>> {
        if self.fail_load.get() {
            return Err(StoreError::InvalidData("load disabled".to_string()));
        }
        self.inner.load()
    }

    fn save(&mut self, items: &[TodoItem]) -> StoreResult<()> {
        if self.fail_save.get() {
            return Err(StoreError::Io(std::io::Error::other("disk full")));
        }
        self.inner.save(items)
    }
}
