//! Store contract and error type shared by all backends.

use crate::db::DbError;
use crate::model::todo::{TodoItem, TodoValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for todo list persistence.
#[derive(Debug)]
pub enum StoreError {
    Validation(TodoValidationError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Db(DbError),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "todo store io failure: {err}"),
            Self::Json(err) => write!(f, "todo store json failure: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TodoValidationError> for StoreError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable storage for the ordered todo list.
pub trait TodoStore {
    /// Returns the persisted list in display order.
    fn load(&self) -> StoreResult<Vec<TodoItem>>;
    /// Replaces the persisted list with `items`.
    fn save(&mut self, items: &[TodoItem]) -> StoreResult<()>;
}

impl<S: TodoStore + ?Sized> TodoStore for Box<S> {
    fn load(&self) -> StoreResult<Vec<TodoItem>> {
        (**self).load()
    }

    fn save(&mut self, items: &[TodoItem]) -> StoreResult<()> {
        (**self).save(items)
    }
}

/// Validates every item and rejects duplicate ids.
pub(crate) fn validate_items(items: &[TodoItem]) -> StoreResult<()> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;
        if !seen.insert(item.id) {
            return Err(StoreError::InvalidData(format!(
                "duplicate todo id `{}`",
                item.id
            )));
        }
    }
    Ok(())
}
