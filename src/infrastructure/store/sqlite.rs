//! # SQLite Task Store
//!
//! Implements `TaskStore` on a local SQLite file. A fresh connection is
//! opened for every operation and released when it returns, so an unclean
//! shutdown never leaves a connection behind; SQLite's own locking
//! serializes concurrent writers. Blocking work runs on the tokio blocking
//! pool.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rusqlite::Connection;

use crate::domain::errors::StoreError;
use crate::domain::traits::TaskStore;
use crate::domain::types::Task;

pub struct SqliteTaskStore {
    db_path: PathBuf,
}

impl SqliteTaskStore {
    /// Open (or create) the database at `db_path` and ensure the schema
    /// exists.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, StoreError> {
        let store = Self {
            db_path: db_path.as_ref().to_path_buf(),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        let conn = Connection::open(&self.db_path)?;
        // AUTOINCREMENT keeps ids monotonic for the lifetime of the store:
        // deleting the newest row must not free its id for reuse.
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                owner_id INTEGER NOT NULL,
                text TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_tasks_owner ON tasks(owner_id);
            ",
        )?;
        Ok(())
    }

    /// Open a connection, run `f` on the blocking pool, release it.
    async fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let conn = Connection::open(path)?;
            f(&conn)
        })
        .await
        .map_err(|e| StoreError::Runtime(e.to_string()))?
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn add(&self, owner_id: i64, text: &str) -> Result<i64, StoreError> {
        let text = text.to_string();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO tasks (owner_id, text) VALUES (?1, ?2)",
                rusqlite::params![owner_id, text],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    async fn list(&self, owner_id: i64) -> Result<Vec<Task>, StoreError> {
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, owner_id, text, created_at FROM tasks
                 WHERE owner_id = ?1 ORDER BY id",
            )?;

            let task_iter = stmt.query_map([owner_id], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    owner_id: row.get(1)?,
                    text: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?;

            let mut tasks = Vec::new();
            for task in task_iter {
                tasks.push(task?);
            }

            Ok(tasks)
        })
        .await
    }

    async fn delete(&self, owner_id: i64, id: i64) -> Result<bool, StoreError> {
        self.with_conn(move |conn| {
            let removed = conn.execute(
                "DELETE FROM tasks WHERE id = ?1 AND owner_id = ?2",
                rusqlite::params![id, owner_id],
            )?;
            Ok(removed > 0)
        })
        .await
    }
}
