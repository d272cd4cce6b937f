use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The dictionary file could not be opened or read.
    #[error("cannot read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The query pattern is not a valid regular expression.
    #[error("invalid pattern {pattern:?}: {source}")]
    PatternCompile {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A query parameter is out of range.
    #[error("invalid query: {0}")]
    Validation(String),

    /// The dictionary location could not be resolved.
    #[error("config error: {0}")]
    Config(String),

    /// A result page could not be serialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    /// Per-query failures leave the dictionary usable; everything else is fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PatternCompile { .. } | Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
