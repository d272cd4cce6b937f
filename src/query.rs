//! Search requests.

use serde::Serialize;

use crate::error::{Result, SearchError};

/// Pattern used when the caller supplies none
pub const MATCH_ALL: &str = ".*";

/// A single search request: a pattern plus inclusive length bounds.
///
/// A bound of 0 means unbounded on that side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    pub pattern: String,
    pub min: usize,
    pub max: usize,
}

impl Query {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            min: 0,
            max: 0,
        }
    }

    pub fn with_min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    pub fn with_max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    /// Build a query from signed bounds, rejecting negative values
    pub fn from_signed(pattern: impl Into<String>, min: i64, max: i64) -> Result<Self> {
        Ok(Self {
            pattern: pattern.into(),
            min: non_negative("min", min)?,
            max: non_negative("max", max)?,
        })
    }

    /// The pattern actually compiled: empty means match-all
    pub fn effective_pattern(&self) -> &str {
        if self.pattern.is_empty() {
            MATCH_ALL
        } else {
            &self.pattern
        }
    }

    /// True when both bounds are set and no length can satisfy them
    pub fn is_empty_range(&self) -> bool {
        self.min > 0 && self.max > 0 && self.min > self.max
    }

    /// Check a word length against both bounds
    pub fn admits_length(&self, len: usize) -> bool {
        if self.min > 0 && len < self.min {
            return false;
        }
        if self.max > 0 && len > self.max {
            return false;
        }
        true
    }
}

fn non_negative(name: &str, value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| SearchError::Validation(format!("{name} must be >= 0, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_pattern() {
        assert_eq!(Query::new("").effective_pattern(), ".*");
        assert_eq!(Query::new("^a").effective_pattern(), "^a");
    }

    #[test]
    fn test_admits_length() {
        let q = Query::new("").with_min(2).with_max(3);
        assert!(!q.admits_length(1));
        assert!(q.admits_length(2));
        assert!(q.admits_length(3));
        assert!(!q.admits_length(4));
        assert!(Query::new("").admits_length(0));
    }

    #[test]
    fn test_negative_bounds_rejected() {
        assert!(matches!(
            Query::from_signed("a", -1, 0),
            Err(SearchError::Validation(_))
        ));
        assert!(matches!(
            Query::from_signed("a", 0, -3),
            Err(SearchError::Validation(_))
        ));
        let q = Query::from_signed("a", 2, 5).unwrap();
        assert_eq!((q.min, q.max), (2, 5));
    }

    #[test]
    fn test_empty_range() {
        assert!(Query::new("").with_min(5).with_max(2).is_empty_range());
        assert!(!Query::new("").with_min(5).is_empty_range());
    }
}
