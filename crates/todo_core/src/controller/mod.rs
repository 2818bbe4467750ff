//! Todo UI controller.
//!
//! # Responsibility
//! - Translate named commands into list mutations.
//! - Keep the persisted list, the in-memory list and the view in sync.
//!
//! # Invariants
//! - The in-memory list only changes after the store accepted the new list.
//! - Empty text and unknown ids are ignored, never surfaced as errors.

pub mod todo_controller;
