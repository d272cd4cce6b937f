//! Filter-and-match engine.
//!
//! A query's pattern is compiled once, then the dictionary is scanned in its
//! stored order. A word is kept when its length falls within the query bounds
//! and the pattern matches anywhere inside it. No anchors are added: callers
//! who want whole-word matches write `^...$` themselves.
//!
//! The scan is split across the rayon pool; collection preserves dictionary
//! order, so results are identical to a sequential pass.

use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::error::{Result, SearchError};
use crate::query::Query;

/// Ordered matches for one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub matches: Vec<String>,
    pub count: usize,
}

impl MatchResult {
    fn new(matches: Vec<String>) -> Self {
        let count = matches.len();
        Self { matches, count }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// A compiled query, reusable across dictionaries
#[derive(Debug, Clone)]
pub struct MatchEngine {
    pattern: Regex,
    query: Query,
}

impl MatchEngine {
    pub fn compile(query: &Query) -> Result<Self> {
        let pattern = query.effective_pattern();
        let regex = Regex::new(pattern).map_err(|source| SearchError::PatternCompile {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: regex,
            query: query.clone(),
        })
    }

    /// Check a single word against bounds and pattern.
    ///
    /// Length is measured in bytes.
    pub fn is_match(&self, word: &str) -> bool {
        self.query.admits_length(word.len()) && self.pattern.is_match(word)
    }

    pub fn run(&self, dictionary: &Dictionary) -> MatchResult {
        if self.query.is_empty_range() {
            return MatchResult::default();
        }

        let matches: Vec<String> = dictionary
            .words()
            .par_iter()
            .filter(|word| self.is_match(word))
            .cloned()
            .collect();

        MatchResult::new(matches)
    }
}

/// Compile the query and scan the dictionary once
pub fn find_matches(dictionary: &Dictionary, query: &Query) -> Result<MatchResult> {
    let engine = MatchEngine::compile(query)?;
    let result = engine.run(dictionary);

    tracing::debug!(
        pattern = %query.pattern,
        min = query.min,
        max = query.max,
        count = result.count,
        "query complete"
    );

    Ok(result)
}
