//! Plain-text view writing rows to any `io::Write` sink.

use crate::view::{TodoRow, TodoView};
use log::warn;
use std::io::Write;

/// Terminal-style view: one line per row, plus an in-memory input buffer.
pub struct TextView<W: Write> {
    out: W,
    input: String,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: String::new(),
        }
    }

    /// Consumes the view and returns its sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_rows(&mut self, rows: &[TodoRow]) -> std::io::Result<()> {
        if rows.is_empty() {
            writeln!(self.out, "(no todos)")?;
        }
        for row in rows {
            writeln!(self.out, "{} {}  ({})", row.marker(), row.text, row.id)?;
        }
        self.out.flush()
    }
}

impl<W: Write> TodoView for TextView<W> {
    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn set_input_value(&mut self, value: &str) {
        self.input = value.to_string();
    }

    fn show_rows(&mut self, rows: &[TodoRow]) {
        if let Err(err) = self.write_rows(rows) {
            warn!("event=view_render module=view status=error rows={} error={err}", rows.len());
        }
    }
}
