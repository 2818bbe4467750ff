//! SQLite-backed todo store.
//!
//! # Invariants
//! - `save` rewrites the table inside one transaction.
//! - Row order is carried by `position`, never by timestamps.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::model::todo::TodoItem;
use crate::store::todo_store::{validate_items, StoreError, StoreResult, TodoStore};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const TODO_SELECT_SQL: &str = "SELECT
    id,
    text,
    done,
    created_at
FROM todos
ORDER BY position ASC";

/// Store over a migrated SQLite connection (see `db::open_db`).
pub struct SqliteTodoStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoStore for SqliteTodoStore<'_> {
    fn load(&self) -> StoreResult<Vec<TodoItem>> {
        let mut stmt = self.conn.prepare(TODO_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_todo_row(row)?);
        }

        validate_items(&items)?;
        Ok(items)
    }

    fn save(&mut self, items: &[TodoItem]) -> StoreResult<()> {
        validate_items(items)?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM todos;", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO todos (id, text, done, created_at, position)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
            )?;
            for (position, item) in items.iter().enumerate() {
                let position = i64::try_from(position).map_err(|_| {
                    StoreError::InvalidData(format!("todo position overflow at {position}"))
                })?;
                insert.execute(params![
                    item.id.to_string(),
                    item.text.as_str(),
                    bool_to_int(item.done),
                    item.created_at,
                    position,
                ])?;
            }
        }
        tx.commit()?;

        Ok(())
    }
}

fn parse_todo_row(row: &Row<'_>) -> StoreResult<TodoItem> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{id_text}` in todos.id"))
    })?;

    let done = match row.get::<_, i64>("done")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid done value `{other}` in todos.done"
            )));
        }
    };

    let item = TodoItem {
        id,
        text: row.get("text")?,
        done,
        created_at: row.get("created_at")?,
    };
    item.validate()?;
    Ok(item)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
