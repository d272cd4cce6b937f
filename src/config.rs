//! Dictionary location.

use std::path::PathBuf;

use crate::error::{Result, SearchError};

/// Environment variable overriding the dictionary path
pub const DICTIONARY_ENV: &str = "WORDSEARCHER_DICTIONARY";

/// File name looked up in the home directory when nothing else is given
pub const DEFAULT_DICTIONARY_NAME: &str = "words";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary_path: PathBuf,
}

impl Config {
    /// Resolve from the process environment.
    ///
    /// Precedence: explicit path, then `WORDSEARCHER_DICTIONARY`, then
    /// `<home>/words`.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        Self::resolve_with(explicit, |key| std::env::var_os(key).map(PathBuf::from))
    }

    /// Resolve against an arbitrary variable lookup
    pub fn resolve_with<F>(explicit: Option<PathBuf>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        if let Some(path) = explicit {
            return Ok(Self {
                dictionary_path: path,
            });
        }

        if let Some(path) = lookup(DICTIONARY_ENV).filter(|p| !p.as_os_str().is_empty()) {
            return Ok(Self {
                dictionary_path: path,
            });
        }

        let non_empty = |key: &str| lookup(key).filter(|p: &PathBuf| !p.as_os_str().is_empty());
        let home = non_empty("HOME")
            .or_else(|| non_empty("USERPROFILE"))
            .ok_or_else(|| {
                SearchError::Config(format!(
                    "no home directory found; pass --dictionary or set {DICTIONARY_ENV}"
                ))
            })?;

        Ok(Self {
            dictionary_path: home.join(DEFAULT_DICTIONARY_NAME),
        })
    }
}
