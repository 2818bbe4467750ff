//! Observability interface for controller activity.
//!
//! # Responsibility
//! - Describe every controller outcome as a typed `TodoEvent`.
//! - Forward events to the `log` facade in the crate's `event=` line format.
//!
//! # Invariants
//! - Observers never influence controller state.
//! - Event payloads carry ids and counts, never todo text.

use crate::model::todo::TodoId;
use log::{debug, info, warn};
use std::fmt::{Display, Formatter};

/// Controller operation that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoOp {
    Add,
    Edit,
    Toggle,
    Delete,
}

impl TodoOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Toggle => "toggle",
            Self::Delete => "delete",
        }
    }
}

impl Display for TodoOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a command left the list untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input text was blank after trimming.
    EmptyText,
    /// No item carries the requested id.
    UnknownId(TodoId),
}

impl Display for IgnoreReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => f.write_str("empty_text"),
            Self::UnknownId(id) => write!(f, "unknown_id id={id}"),
        }
    }
}

/// Diagnostic event emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoEvent {
    Loaded { count: usize },
    LoadFailed { error: String },
    Added { id: TodoId },
    Edited { id: TodoId },
    Toggled { id: TodoId, done: bool },
    Deleted { id: TodoId },
    Ignored { op: TodoOp, reason: IgnoreReason },
    PersistFailed { op: TodoOp, error: String },
    Rendered { rows: usize },
}

/// Sink for controller events.
pub trait TodoObserver {
    fn on_event(&self, event: &TodoEvent);
}

/// Observer that writes events through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl TodoObserver for LogObserver {
    fn on_event(&self, event: &TodoEvent) {
        match event {
            TodoEvent::Loaded { count } => {
                info!("event=todo_load module=controller status=ok items={count}")
            }
            TodoEvent::LoadFailed { error } => warn!(
                "event=todo_load module=controller status=error fallback=empty_list error={error}"
            ),
            TodoEvent::Added { id } => {
                info!("event=todo_add module=controller status=ok id={id}")
            }
            TodoEvent::Edited { id } => {
                info!("event=todo_edit module=controller status=ok id={id}")
            }
            TodoEvent::Toggled { id, done } => {
                info!("event=todo_toggle module=controller status=ok id={id} done={done}")
            }
            TodoEvent::Deleted { id } => {
                info!("event=todo_delete module=controller status=ok id={id}")
            }
            TodoEvent::Ignored { op, reason } => {
                debug!("event=todo_{op} module=controller status=skip reason={reason}")
            }
            TodoEvent::PersistFailed { op, error } => warn!(
                "event=todo_{op} module=controller status=error error_code=persist_failed error={error}"
            ),
            TodoEvent::Rendered { rows } => {
                debug!("event=todo_render module=controller status=ok rows={rows}")
            }
        }
    }
}
