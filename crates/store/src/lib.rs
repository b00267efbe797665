//! In-memory entity store for FutureFlow.
//!
//! Owns the task, note and goal collections for the lifetime of a session.
//! Nothing is persisted.

#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod store;

pub use error::{StoreError, Result};
pub use filter::{TaskFilter, TaskSort};
pub use store::EntityStore;
