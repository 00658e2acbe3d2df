//! Single write connection behind a mutex.
//! Inserts are serialized here, so concurrent callers never interleave.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use recall_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use recall_core::errors::{RecallResult, StorageError};

use super::pragmas::apply_pragmas;

/// A single write connection protected by a mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a new write connection to the given database path.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> RecallResult<Self> {
        let conn = Connection::open(path).map_err(|e| StorageError::Unavailable {
            reason: format!("cannot open {}: {e}", path.display()),
        })?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> RecallResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::Unavailable {
            reason: format!("cannot open in-memory database: {e}"),
        })?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and execute a closure with the connection.
    /// Safe to call from inside an async runtime; the wait is bounded by
    /// the other holder's SQLite busy timeout.
    pub fn with_conn<F, T>(&self, f: F) -> RecallResult<T>
    where
        F: FnOnce(&Connection) -> RecallResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| StorageError::Unavailable {
            reason: format!("write connection lock poisoned: {e}"),
        })?;
        f(&guard)
    }
}
