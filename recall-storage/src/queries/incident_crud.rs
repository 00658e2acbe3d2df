//! Insert, get, scan, count for incidents.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

use recall_core::errors::{RecallResult, StorageError};
use recall_core::models::IncidentRecord;

use crate::codec::{decode_embedding, encode_embedding};
use crate::to_storage_err;

pub(crate) const SELECT_COLUMNS: &str = "id, description, service, environment, root_cause_summary, \
     patch_diff, embedding, dimensions, timestamp";

/// Raw row before the blob and timestamp are decoded.
pub(crate) struct RawIncidentRow {
    pub id: String,
    pub description: String,
    pub service: String,
    pub environment: String,
    pub root_cause_summary: String,
    pub patch_diff: Option<String>,
    pub embedding: Vec<u8>,
    pub dimensions: i64,
    pub timestamp: String,
}

impl RawIncidentRow {
    /// Read a row without letting one bad column fail the cursor.
    ///
    /// The outer error is a cursor fault. The inner error is a row whose
    /// columns hold the wrong SQLite types, reported as `CorruptRecord`.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Result<Self, StorageError>> {
        let id = match row.get_ref(0)? {
            ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
            other => format!("<{} id>", other.data_type()),
        };
        let read = || -> rusqlite::Result<Self> {
            Ok(Self {
                id: id.clone(),
                description: row.get(1)?,
                service: row.get(2)?,
                environment: row.get(3)?,
                root_cause_summary: row.get(4)?,
                patch_diff: row.get(5)?,
                embedding: row.get(6)?,
                dimensions: row.get(7)?,
                timestamp: row.get(8)?,
            })
        };
        match read() {
            Ok(raw) => Ok(Ok(raw)),
            Err(
                e @ (rusqlite::Error::InvalidColumnType(..)
                | rusqlite::Error::FromSqlConversionFailure(..)
                | rusqlite::Error::IntegralValueOutOfRange(..)),
            ) => Ok(Err(StorageError::CorruptRecord {
                id,
                reason: e.to_string(),
            })),
            Err(e) => Err(e),
        }
    }

    /// Read and decode in one step.
    pub(crate) fn read_record(
        row: &Row<'_>,
    ) -> rusqlite::Result<Result<IncidentRecord, StorageError>> {
        Ok(Self::from_row(row)?.and_then(Self::decode))
    }

    /// Decode into a record, or report why the row cannot be trusted.
    pub(crate) fn decode(self) -> Result<IncidentRecord, StorageError> {
        let corrupt = |id: &str, reason: String| StorageError::CorruptRecord {
            id: id.to_string(),
            reason,
        };
        let dims = usize::try_from(self.dimensions)
            .map_err(|_| corrupt(&self.id, format!("negative dimensions {}", self.dimensions)))?;
        let embedding = decode_embedding(&self.embedding, dims).map_err(|r| corrupt(&self.id, r))?;
        let timestamp = DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|e| corrupt(&self.id, format!("bad timestamp: {e}")))?
            .with_timezone(&Utc);
        Ok(IncidentRecord {
            id: self.id,
            description: self.description,
            service: self.service,
            environment: self.environment,
            root_cause_summary: self.root_cause_summary,
            patch_diff: self.patch_diff,
            embedding,
            timestamp,
        })
    }
}

/// Insert a record. A primary key collision becomes `DuplicateId`.
pub fn insert_incident(conn: &Connection, record: &IncidentRecord) -> RecallResult<()> {
    let result = conn.execute(
        "INSERT INTO incidents (id, description, service, environment, root_cause_summary,
                                patch_diff, embedding, dimensions, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            record.id,
            record.description,
            record.service,
            record.environment,
            record.root_cause_summary,
            record.patch_diff,
            encode_embedding(&record.embedding),
            record.embedding.len() as i64,
            record
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Nanos, true),
        ],
    );

    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Err(StorageError::DuplicateId {
                id: record.id.clone(),
            }
            .into())
        }
        Err(e) => Err(to_storage_err(e.to_string())),
    }
}

/// Fetch one incident by id. A row that fails to decode is an error here.
pub fn get_incident(conn: &Connection, id: &str) -> RecallResult<Option<IncidentRecord>> {
    let record = conn
        .query_row(
            &format!("SELECT {SELECT_COLUMNS} FROM incidents WHERE id = ?1"),
            params![id],
            RawIncidentRow::read_record,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match record {
        Some(record) => Ok(Some(record?)),
        None => Ok(None),
    }
}

/// Every decodable incident. Corrupt rows are logged and skipped.
pub fn scan_incidents(conn: &Connection) -> RecallResult<Vec<IncidentRecord>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {SELECT_COLUMNS} FROM incidents"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], RawIncidentRow::read_record)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        match row.map_err(|e| to_storage_err(e.to_string()))? {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(error = %e, "skipping undecodable incident row"),
        }
    }
    Ok(records)
}

pub fn count_incidents(conn: &Connection) -> RecallResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM incidents", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Read the dimension recorded when the store was created, if any.
pub fn stored_dimensions(conn: &Connection) -> RecallResult<Option<usize>> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM store_meta WHERE key = 'dimensions'",
            [],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(value.and_then(|v| v.parse().ok()))
}

/// Record the store dimension on first open. Existing values are kept.
pub fn init_dimensions(conn: &Connection, dimensions: usize) -> RecallResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO store_meta (key, value) VALUES ('dimensions', ?1)",
        params![dimensions.to_string()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
