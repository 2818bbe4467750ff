//! Core logic for the todo list controller.
//! UI adapters translate their events into `TodoCommand`s and inject the
//! store, view and observer they run with.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod observe;
pub mod store;
pub mod view;

pub use config::{ConfigError, LogSettings, StoreSettings, TodoConfig};
pub use controller::todo_controller::{CommandOutcome, TodoCommand, TodoController};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{TodoId, TodoItem, TodoValidationError};
pub use observe::{IgnoreReason, LogObserver, TodoEvent, TodoObserver, TodoOp};
pub use store::json_store::JsonFileTodoStore;
pub use store::memory_store::MemoryTodoStore;
pub use store::sqlite_store::SqliteTodoStore;
pub use store::todo_store::{StoreError, StoreResult, TodoStore};
pub use view::text_view::TextView;
pub use view::{render, TodoRow, TodoView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
