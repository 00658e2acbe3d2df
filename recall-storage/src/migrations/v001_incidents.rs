//! v001: incidents table, tag index, store_meta.

use rusqlite::Connection;

use recall_core::errors::RecallResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> RecallResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS incidents (
            id                  TEXT PRIMARY KEY,
            description         TEXT NOT NULL,
            service             TEXT NOT NULL,
            environment         TEXT NOT NULL,
            root_cause_summary  TEXT NOT NULL,
            patch_diff          TEXT,
            embedding           BLOB NOT NULL,
            dimensions          INTEGER NOT NULL,
            timestamp           TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_incidents_tags
            ON incidents(service, environment);
        CREATE INDEX IF NOT EXISTS idx_incidents_timestamp
            ON incidents(timestamp);

        CREATE TABLE IF NOT EXISTS store_meta (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
