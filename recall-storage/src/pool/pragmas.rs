//! PRAGMA configuration applied to every SQLite connection.

use std::time::Duration;

use rusqlite::Connection;

use recall_core::errors::RecallResult;

use crate::to_storage_err;

/// WAL mode, NORMAL sync, bounded busy wait for the writer.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> RecallResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA cache_size = -16000;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    conn.busy_timeout(Duration::from_millis(busy_timeout_ms as u64))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Readers only need the busy timeout and a page cache.
pub fn apply_read_pragmas(conn: &Connection, busy_timeout_ms: u32) -> RecallResult<()> {
    conn.execute_batch("PRAGMA cache_size = -16000;")
        .map_err(|e| to_storage_err(e.to_string()))?;
    conn.busy_timeout(Duration::from_millis(busy_timeout_ms as u64))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> RecallResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
