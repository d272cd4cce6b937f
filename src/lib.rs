//! # Wordsearcher
//!
//! Search a system word list by regular expression and word length.
//!
//! The dictionary is loaded once and shared read-only; every query compiles its
//! pattern, scans the dictionary in stored order and returns the matching words
//! with their count.

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod page;
pub mod query;

pub use config::Config;
pub use dictionary::{Dictionary, LoadStats};
pub use engine::{find_matches, MatchEngine, MatchResult};
pub use error::{Result, SearchError};
pub use page::SearchPage;
pub use query::{Query, MATCH_ALL};
