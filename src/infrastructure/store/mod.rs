//! # Task Storage
//!
//! Durable task persistence. The only backend is SQLite.

mod sqlite;

pub use sqlite::SqliteTaskStore;
