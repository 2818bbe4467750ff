//! Todo item domain model.
//!
//! # Responsibility
//! - Define the canonical record shown as one row of the todo list.
//! - Enforce the text and identity rules at construction time.
//!
//! # Invariants
//! - `id` is stable, non-nil and never reused for another item.
//! - `text` is trimmed and non-empty once an item exists.
//! - `created_at` is Unix epoch milliseconds and never negative.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for one todo item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Validation failure for todo item construction or persisted data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Text is empty after trimming.
    EmptyText,
    /// Identifier is the nil UUID.
    NilId,
    /// Creation timestamp is before the Unix epoch.
    NegativeCreatedAt(i64),
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "todo text cannot be empty"),
            Self::NilId => write!(f, "todo id cannot be nil"),
            Self::NegativeCreatedAt(value) => {
                write!(f, "todo created_at cannot be negative: {value}")
            }
        }
    }
}

impl Error for TodoValidationError {}

/// One entry of the todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Opaque identity assigned at creation.
    pub id: TodoId,
    /// Trimmed, non-empty task text.
    pub text: String,
    /// Completion flag, flipped by toggle.
    pub done: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl TodoItem {
    /// Creates a new open item with a generated id and the current time.
    ///
    /// # Errors
    /// - `EmptyText` when `text` is blank after trimming.
    pub fn new(text: &str) -> Result<Self, TodoValidationError> {
        Self::with_id(Uuid::new_v4(), text, now_epoch_ms())
    }

    /// Creates an item with caller-provided identity and timestamp.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(
        id: TodoId,
        text: &str,
        created_at: i64,
    ) -> Result<Self, TodoValidationError> {
        let item = Self {
            id,
            text: text.trim().to_string(),
            done: false,
            created_at,
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks identity, text and timestamp rules.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id.is_nil() {
            return Err(TodoValidationError::NilId);
        }
        if self.text.trim().is_empty() {
            return Err(TodoValidationError::EmptyText);
        }
        if self.created_at < 0 {
            return Err(TodoValidationError::NegativeCreatedAt(self.created_at));
        }
        Ok(())
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}

/// Returns the current wall-clock time as Unix epoch milliseconds.
///
/// Falls back to `0` if the system clock reports a time before the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
