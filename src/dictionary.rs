//! Loading and normalizing the word list.
//!
//! A dictionary is built once from a line-oriented source. Each line is a
//! candidate word; entries carrying an apostrophe or an uppercase ASCII letter
//! (proper nouns and possessives in the usual system word lists) are dropped,
//! and repeated entries keep only their first occurrence.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, SearchError};

/// Counters collected while building a dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub lines_read: usize,
    pub rejected: usize,
    pub empty: usize,
    pub duplicates: usize,
    pub kept: usize,
}

/// Immutable, deduplicated word list in first-seen order.
///
/// Cloning is cheap: clones share the same storage.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Arc<[String]>,
    stats: LoadStats,
}

/// Returns true if the candidate belongs in the searchable set
pub fn is_searchable(word: &str) -> bool {
    !word.is_empty() && !word.bytes().any(|b| b == b'\'' || b.is_ascii_uppercase())
}

/// Remove one trailing `\n` or `\r\n`, matching `BufRead::lines`
fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

struct Builder {
    seen: HashSet<String>,
    words: Vec<String>,
    stats: LoadStats,
}

impl Builder {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            words: Vec::new(),
            stats: LoadStats::default(),
        }
    }

    /// Add one line whose terminator has already been removed
    fn push(&mut self, word: &str) {
        self.stats.lines_read += 1;

        if word.is_empty() {
            self.stats.empty += 1;
            return;
        }
        if !is_searchable(word) {
            self.stats.rejected += 1;
            return;
        }
        if self.seen.contains(word) {
            self.stats.duplicates += 1;
            return;
        }

        self.seen.insert(word.to_owned());
        self.words.push(word.to_owned());
    }

    fn finish(mut self) -> Dictionary {
        self.stats.kept = self.words.len();
        Dictionary {
            words: self.words.into(),
            stats: self.stats,
        }
    }
}

impl Dictionary {
    /// Load a newline-delimited word list from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let io_error = |source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let dictionary = Self::from_reader(BufReader::new(file)).map_err(io_error)?;

        tracing::info!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded dictionary"
        );
        tracing::debug!(stats = ?dictionary.stats, "dictionary load stats");

        Ok(dictionary)
    }

    /// Build a dictionary from any buffered reader.
    ///
    /// Both `\n` and `\r\n` terminators are stripped. Invalid UTF-8 surfaces
    /// as an `InvalidData` error.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut builder = Builder::new();
        for line in reader.lines() {
            builder.push(&line?);
        }
        Ok(builder.finish())
    }

    /// Build a dictionary from in-memory lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Builder::new();
        for line in lines {
            builder.push(strip_terminator(line.as_ref()));
        }
        builder.finish()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
