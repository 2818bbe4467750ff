//! Domain model for the todo list.
//!
//! # Responsibility
//! - Define the data structures the controller and stores share.
//!
//! # Invariants
//! - Every item is identified by a stable `TodoId`.
//! - List order is insertion order; the model carries no sort key.

pub mod todo;
