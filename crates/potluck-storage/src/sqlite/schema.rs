//! DDL statements for the SQLite store.
//!
//! Every collection is a "sheet": its header row lives in `sheets`, its data
//! rows in `rows` with the field list encoded as a JSON array. Store order is
//! insertion order (`rows.id`).

/// Current schema version. Bumped whenever the DDL changes.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// DDL statements executed when a store is opened.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS metadata (
        key   TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sheets (
        name   TEXT PRIMARY KEY,
        header TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS rows (
        id     INTEGER PRIMARY KEY AUTOINCREMENT,
        sheet  TEXT NOT NULL REFERENCES sheets(name),
        fields TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_rows_sheet ON rows(sheet, id)",
];
