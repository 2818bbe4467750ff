//! Persistence collaborators for the todo list.
//!
//! # Responsibility
//! - Define the load/save contract the controller persists through.
//! - Provide in-memory, JSON file and SQLite implementations.
//!
//! # Invariants
//! - `load` returns items in display order.
//! - `save` replaces the whole persisted list; partial writes never become
//!   visible to a later `load`.
//! - Loaded items are validated instead of masking bad persisted state.

pub mod json_store;
pub mod memory_store;
pub mod sqlite_store;
pub mod todo_store;
