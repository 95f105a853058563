pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS sample (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    date     TEXT NOT NULL,
    time     TEXT,
    category TEXT NOT NULL,
    reason   TEXT NOT NULL,
    cost     INTEGER NOT NULL,
    memo     TEXT
);

CREATE TABLE IF NOT EXISTS card (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    date     TEXT NOT NULL,
    time     TEXT,
    category TEXT NOT NULL,
    reason   TEXT NOT NULL,
    cost     INTEGER NOT NULL,
    memo     TEXT
);

CREATE INDEX IF NOT EXISTS idx_sample_date ON sample(date);
CREATE INDEX IF NOT EXISTS idx_card_date ON card(date);
"#;

pub(crate) const CURRENT_VERSION: i32 = 2;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[
    // v1 stores keyed rows by date only; natural-key lookups scan (date, category, reason).
    (
        1,
        "CREATE INDEX IF NOT EXISTS idx_sample_key ON sample(date, category, reason);
         CREATE INDEX IF NOT EXISTS idx_card_key ON card(date, category, reason);",
    ),
];
