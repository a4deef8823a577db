//! SQL schema for the fitlog SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id    TEXT PRIMARY KEY,
    username   TEXT NOT NULL,    -- duplicates permitted
    created_at TEXT NOT NULL     -- ISO 8601 UTC; server-assigned
);

-- Exercise log rows are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS exercises (
    user_id     TEXT NOT NULL REFERENCES users(user_id),
    seq         INTEGER NOT NULL,  -- 0-based insertion order within one log
    description TEXT NOT NULL,
    duration    INTEGER NOT NULL,
    date        TEXT NOT NULL,     -- ISO 8601 calendar date, no time component
    PRIMARY KEY (user_id, seq)
);

PRAGMA user_version = 1;
";
