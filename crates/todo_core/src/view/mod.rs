//! View collaborator for the todo list.
//!
//! # Responsibility
//! - Map the ordered list to visual rows with a pure `render` function.
//! - Define the primitives a concrete view (terminal, DOM bridge) exposes.
//!
//! # Invariants
//! - `render` keeps list order and holds no state between calls.
//! - `TodoView::show_rows` replaces the whole visible list, so showing the
//!   same rows twice leaves the same visible result.

pub mod text_view;

use crate::model::todo::{TodoId, TodoItem};

/// One visual row of the todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    pub text: String,
    pub done: bool,
}

impl TodoRow {
    /// Checkbox marker for plain-text views.
    pub fn marker(&self) -> &'static str {
        if self.done {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// Maps the list to rows, one per item, in list order.
pub fn render(items: &[TodoItem]) -> Vec<TodoRow> {
    items
        .iter()
        .map(|item| TodoRow {
            id: item.id,
            text: item.text.clone(),
            done: item.done,
        })
        .collect()
}

/// Primitives the controller needs from a view.
pub trait TodoView {
    /// Returns the current input field value.
    fn input_value(&self) -> String;
    /// Replaces the input field value.
    fn set_input_value(&mut self, value: &str);
    /// Replaces all visible rows with `rows`.
    fn show_rows(&mut self, rows: &[TodoRow]);
}
