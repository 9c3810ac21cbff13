//! Error types for building a speller.

use std::path::PathBuf;

/// An invalid speller configuration. Raised when the builder is created, so a
/// speller never exists with one of these conditions.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Delete keys are generated from a prefix that must hold at least two characters
    #[error("Prefix length must be greater than 1, got {0}")]
    PrefixTooShort(usize),

    /// The prefix must survive the maximum number of deletions
    #[error("Prefix length {prefix_length} must be greater than the maximum edit distance {max_edit_distance}")]
    PrefixNotAboveEditDistance {
        /// configured prefix length
        prefix_length: usize,
        /// configured maximum dictionary edit distance
        max_edit_distance: usize,
    },
}

/// Errors raised while reading dictionaries from disk.
///
/// Only failing to read is an error; lines that cannot be parsed are skipped.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// The dictionary file could not be opened or read
    #[error("Failed to read dictionary {}: {source}", path.display())]
    Io {
        /// path of the dictionary
        path: PathBuf,
        /// underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl DictionaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> DictionaryError {
        DictionaryError::Io {
            path: path.into(),
            source,
        }
    }
}
