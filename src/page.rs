//! Result pages handed to a rendering layer.
//!
//! Nothing here escapes output; HTML or terminal renderers must encode words
//! themselves.

use std::fmt::Write as _;

use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::engine::find_matches;
use crate::error::Result;
use crate::query::Query;

/// Fixed page label
pub const PAGE_TITLE: &str = "wordsearcher";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPage {
    pub title: String,
    /// The pattern exactly as the caller supplied it
    pub query: String,
    pub matches: Vec<String>,
    pub min: usize,
    pub max: usize,
    pub count: usize,
}

impl SearchPage {
    pub fn build(dictionary: &Dictionary, query: &Query) -> Result<Self> {
        let result = find_matches(dictionary, query)?;
        Ok(Self {
            title: PAGE_TITLE.to_string(),
            query: query.pattern.clone(),
            matches: result.matches,
            min: query.min,
            max: query.max,
            count: result.count,
        })
    }

    /// Header line followed by one match per line
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}: query={:?} min={} max={} count={}",
            self.title, self.query, self.min, self.max, self.count
        );
        for word in &self.matches {
            out.push_str(word);
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
