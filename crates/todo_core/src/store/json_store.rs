//! JSON file store.
//!
//! The file holds a pretty-printed array of `TodoItem` records
//! (`id` UUID, `text`, `done`, `created_at` epoch ms). Files in any other
//! shape are rejected as invalid data, never reinterpreted.
//!
//! # Invariants
//! - A missing file loads as an empty list.
//! - Writes land in a sibling temp file that is renamed over the target, so a
//!   failed write leaves the previous file intact and no temp file behind.

use crate::model::todo::TodoItem;
use crate::store::todo_store::{validate_items, StoreError, StoreResult, TodoStore};
use log::{debug, warn};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Default file name used when no path is configured.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Store that serializes the list as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileTodoStore {
    path: PathBuf,
}

impl JsonFileTodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| DEFAULT_TASKS_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TodoStore for JsonFileTodoStore {
    fn load(&self) -> StoreResult<Vec<TodoItem>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=store_load module=json_store status=ok path={} items=0 reason=missing_file",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let items: Vec<TodoItem> = serde_json::from_slice(&bytes).map_err(|err| {
            warn!(
                "event=store_load module=json_store status=error path={} error={err}",
                self.path.display()
            );
            StoreError::InvalidData(format!("{}: {err}", self.path.display()))
        })?;
        validate_items(&items)?;
        Ok(items)
    }

    fn save(&mut self, items: &[TodoItem]) -> StoreResult<()> {
        validate_items(items)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut payload = serde_json::to_vec_pretty(items)?;
        payload.push(b'\n');

        let temp_path = self.temp_path();
        if let Err(err) = replace_file(&temp_path, &self.path, &payload) {
            if let Err(cleanup_err) = fs::remove_file(&temp_path) {
                if cleanup_err.kind() != ErrorKind::NotFound {
                    warn!(
                        "event=store_save module=json_store status=error path={} error_code=temp_cleanup_failed error={cleanup_err}",
                        temp_path.display()
                    );
                }
            }
            return Err(err.into());
        }

        debug!(
            "event=store_save module=json_store status=ok path={} items={}",
            self.path.display(),
            items.len()
        );
        Ok(())
    }
}

fn replace_file(temp_path: &Path, target: &Path, payload: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(payload)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp_path, target)
}
