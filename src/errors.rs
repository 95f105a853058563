use thiserror::Error;

/// Conditions callers branch on. Everything else travels as `anyhow::Error`.
#[derive(Debug, Error)]
pub(crate) enum LedgerError {
    #[error("no record in '{table}' matches {key}")]
    NoMatch { table: &'static str, key: String },

    #[error("{count} records in '{table}' match {key}; refusing to touch any of them (use --id)")]
    Ambiguous {
        table: &'static str,
        key: String,
        count: usize,
    },

    #[error("unknown category pair: {major} / {minor}")]
    UnknownCategory { major: String, minor: String },

    #[error("cost must be non-negative, got {0}")]
    NegativeCost(i64),

    #[error("budget must be non-negative, got {0}")]
    NegativeBudget(i64),

    #[error("memo is {len} characters long; the limit is {max}")]
    MemoTooLong { len: usize, max: usize },

    #[error("no API key configured for narrative feedback (set OPENAI_API_KEY)")]
    MissingApiKey,
}
