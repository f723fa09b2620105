//! Database schema definitions for DrawPath.

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// SQL for creating the schema version table.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- Offline cache of activity suggestions fetched from the remote API.
-- Rows are keyed by the upstream activity id; a re-insert with the same
-- id replaces the prior row wholesale.
CREATE TABLE IF NOT EXISTS activities (
    id INTEGER PRIMARY KEY,
    activity TEXT,
    activity_type TEXT,
    participants INTEGER
);
"#;
