//! Offline cache for activity suggestions.
//!
//! The network layer fetches suggestion records from the remote activity API
//! and stores them here wholesale so the UI has a fallback when offline.
//! There is no TTL or per-row expiry; the caller replaces or wipes the whole
//! cache on its own refresh policy.

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::storage::database::DatabaseError;

/// A cached activity suggestion, keyed by the upstream API's activity id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Upstream activity id
    #[serde(alias = "key")]
    pub id: i64,
    /// Suggestion text
    pub activity: Option<String>,
    /// Category of the suggestion
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    /// How many people the activity is for
    pub participants: Option<i64>,
}

/// Store for cached activity suggestions.
pub struct ActivityCache<'a> {
    conn: &'a Connection,
}

impl<'a> ActivityCache<'a> {
    /// Create a new cache handle on a database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Get every cached record. Row order is unspecified.
    pub fn get_all(&self) -> Result<Vec<ActivityRecord>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, activity, activity_type, participants FROM activities")
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ActivityRecord {
                    id: row.get(0)?,
                    activity: row.get(1)?,
                    activity_type: row.get(2)?,
                    participants: row.get(3)?,
                })
            })
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| DatabaseError::QueryFailed(e.to_string()))?);
        }

        Ok(records)
    }

    /// Get a cached record by id.
    pub fn get(&self, id: i64) -> Result<Option<ActivityRecord>, DatabaseError> {
        let result = self.conn.query_row(
            "SELECT id, activity, activity_type, participants FROM activities WHERE id = ?1",
            params![id],
            |row| {
                Ok(ActivityRecord {
                    id: row.get(0)?,
                    activity: row.get(1)?,
                    activity_type: row.get(2)?,
                    participants: row.get(3)?,
                })
            },
        );

        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::QueryFailed(e.to_string())),
        }
    }

    /// Upsert records in bulk inside one transaction: an insert with a
    /// colliding id replaces the prior row entirely, and the batch either
    /// fully succeeds or fully fails.
    pub fn insert_all(&self, records: &[ActivityRecord]) -> Result<(), DatabaseError> {
        if records.is_empty() {
            return Ok(());
        }

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        {
            let mut stmt = tx
                .prepare(
                    "INSERT OR REPLACE INTO activities (id, activity, activity_type, participants)
                     VALUES (?1, ?2, ?3, ?4)",
                )
                .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

            for record in records {
                stmt.execute(params![
                    record.id,
                    record.activity,
                    record.activity_type,
                    record.participants,
                ])
                .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
            }
        }

        tx.commit()
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// Delete every cached record. Idempotent.
    pub fn clear(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute("DELETE FROM activities", [])
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    /// Count cached records.
    pub fn count(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM activities", [], |row| row.get(0))
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        Ok(count as usize)
    }
}
