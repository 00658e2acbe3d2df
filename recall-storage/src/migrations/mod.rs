//! Schema migrations using PRAGMA user_version.

pub mod v001_incidents;

use rusqlite::Connection;

use recall_core::errors::{RecallResult, StorageError};

type Migration = fn(&Connection) -> RecallResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_incidents::migrate)];

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> RecallResult<u32> {
    let mut version = current_version(conn)?;

    for &(target, migrate) in MIGRATIONS {
        if version >= target {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version: target,
            reason: e.to_string(),
        })?;
        conn.pragma_update(None, "user_version", target)
            .map_err(|e| StorageError::MigrationFailed {
                version: target,
                reason: e.to_string(),
            })?;
        tracing::info!(version = target, "applied migration");
        version = target;
    }

    Ok(version)
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> RecallResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| {
            StorageError::SqliteError {
                message: e.to_string(),
            }
            .into()
        })
}

/// Latest schema version this build knows how to produce.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map(|&(v, _)| v).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_migrations(&conn).unwrap(), latest_version());
        assert_eq!(run_migrations(&conn).unwrap(), latest_version());
        assert_eq!(current_version(&conn).unwrap(), 1);
    }
}
