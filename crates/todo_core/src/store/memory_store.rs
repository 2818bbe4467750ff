//! In-process store, used for ephemeral sessions and tests.

use crate::model::todo::TodoItem;
use crate::store::todo_store::{validate_items, StoreResult, TodoStore};

/// Store that keeps the list in memory for the life of the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoStore {
    items: Vec<TodoItem>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items`.
    pub fn with_items(items: Vec<TodoItem>) -> StoreResult<Self> {
        validate_items(&items)?;
        Ok(Self { items })
    }

    /// Returns the currently persisted items.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }
}

impl TodoStore for MemoryTodoStore {
    fn load(&self) -> StoreResult<Vec<TodoItem>> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[TodoItem]) -> StoreResult<()> {
        validate_items(items)?;
        self.items = items.to_vec();
        Ok(())
    }
}
