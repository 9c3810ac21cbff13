//! Unicode word boundaries (UAX #29) for splitting free text into words.
use unic_segment::{WordBoundIndices, Words};

pub mod case_handling;

/// Splits text at Unicode word boundaries.
pub trait Tokenize {
    /// every segment between word boundaries, with its byte offset
    fn word_bound_indices(&self) -> WordBoundIndices<'_>;
    /// only the segments holding a letter or a digit
    fn words(&self) -> Words<'_>;
}

impl Tokenize for str {
    fn word_bound_indices(&self) -> WordBoundIndices<'_> {
        WordBoundIndices::new(self)
    }

    fn words(&self) -> Words<'_> {
        Words::new(self, |s| s.chars().any(|ch| ch.is_alphanumeric()))
    }
}
