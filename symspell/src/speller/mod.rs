//! Fuzzy lookup over a built dictionary.
//!
//! A [`SymSpell`] is read-only: it can be shared between threads and queried
//! concurrently. Use [`SymSpell::into_builder`] to add more words.
use std::cmp::{max, min};
use std::collections::VecDeque;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use self::policy::{AllPolicy, ClosestPolicy, TopPolicy, VerbosityPolicy};
use crate::constants::{DEFAULT_COUNT_THRESHOLD, DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_PREFIX_LENGTH};
use crate::dictionary::edits::remove_at;
use crate::dictionary::{DictionaryBuilder, DictionaryIndex};
use crate::distance::bounded_chars;
use crate::error::ConfigError;

mod complete;
mod compound;
mod policy;
pub mod segment;
pub mod suggestion;

pub use self::segment::Segmentation;
pub use self::suggestion::{SuggestItem, Verbosity};

/// Parameters fixed when a dictionary is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymSpellConfig {
    /// largest edit distance delete keys are generated for, and the ceiling
    /// of every lookup
    pub max_dictionary_edit_distance: usize,
    /// number of leading characters of a word that delete keys are taken from
    pub prefix_length: usize,
    /// count a word must accumulate before it is suggested
    pub count_threshold: u64,
}

impl SymSpellConfig {
    /// edit distance 2, prefix length 7, count threshold 1
    pub const fn default() -> SymSpellConfig {
        SymSpellConfig {
            max_dictionary_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            prefix_length: DEFAULT_PREFIX_LENGTH,
            count_threshold: DEFAULT_COUNT_THRESHOLD,
        }
    }

    /// Checks that delete keys can be generated with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix_length <= 1 {
            return Err(ConfigError::PrefixTooShort(self.prefix_length));
        }

        if self.prefix_length <= self.max_dictionary_edit_distance {
            return Err(ConfigError::PrefixNotAboveEditDistance {
                prefix_length: self.prefix_length,
                max_edit_distance: self.max_dictionary_edit_distance,
            });
        }

        Ok(())
    }
}

impl Default for SymSpellConfig {
    fn default() -> Self {
        SymSpellConfig::default()
    }
}

/// A built dictionary, ready for lookups.
#[derive(Debug, Clone)]
pub struct SymSpell {
    index: DictionaryIndex,
}

impl SymSpell {
    pub(crate) fn from_index(index: DictionaryIndex) -> SymSpell {
        SymSpell { index }
    }

    /// Returns the dictionary to a builder so more entries can be added.
    pub fn into_builder(self) -> DictionaryBuilder {
        DictionaryBuilder::from_index(self.index)
    }

    /// the configuration the dictionary was created with
    pub fn config(&self) -> &SymSpellConfig {
        &self.index.config
    }

    /// number of words that can be suggested
    pub fn word_count(&self) -> usize {
        self.index.words.len()
    }

    /// number of delete keys in the index
    pub fn entry_count(&self) -> usize {
        self.index.deletes.len()
    }

    /// number of bigrams available to compound correction
    pub fn bigram_count(&self) -> usize {
        self.index.bigrams.len()
    }

    /// sum of the counts loaded, used to turn counts into probabilities
    pub fn total_corpus_words(&self) -> u64 {
        self.index.total_corpus_words
    }

    /// length in characters of the longest word
    pub fn max_dictionary_word_length(&self) -> usize {
        self.index.max_word_length
    }

    /// the stored count of `word`, if it can be suggested
    pub fn count(&self, word: &str) -> Option<u64> {
        self.index.words.get(word).copied()
    }

    fn effective_bound(&self, max_edit_distance: Option<usize>) -> usize {
        let ceiling = self.index.config.max_dictionary_edit_distance;
        min(max_edit_distance.unwrap_or(ceiling), ceiling)
    }

    /// Finds dictionary words within `max_edit_distance` of `input`.
    ///
    /// The distance defaults to, and is capped at, the dictionary's maximum.
    /// Results are ordered by distance, then by descending count.
    pub fn lookup(
        &self,
        input: &str,
        verbosity: Verbosity,
        max_edit_distance: Option<usize>,
    ) -> Vec<SuggestItem> {
        let bound = self.effective_bound(max_edit_distance);
        log::trace!("lookup {:?} verbosity={} bound={}", input, verbosity, bound);

        match verbosity {
            Verbosity::Top => self.lookup_with::<TopPolicy>(input, bound),
            Verbosity::Closest => self.lookup_with::<ClosestPolicy>(input, bound),
            Verbosity::All => self.lookup_with::<AllPolicy>(input, bound),
        }
    }

    fn lookup_with<P: VerbosityPolicy>(&self, input: &str, bound: usize) -> Vec<SuggestItem> {
        let index = &self.index;
        let prefix_length = index.config.prefix_length;

        let input_chars = input.chars().collect::<Vec<_>>();
        let input_len = input_chars.len();

        if input_len > index.max_word_length + bound {
            return vec![];
        }

        let mut policy = P::default();
        let mut active_bound = bound;

        if let Some(&count) = index.words.get(input) {
            policy.offer(SuggestItem::new(input, 0, count), &mut active_bound);

            if P::EARLY_TERMINATION {
                return policy.into_suggestions();
            }
        }

        if bound == 0 {
            return policy.into_suggestions();
        }

        let mut considered_deletes = HashSet::new();
        let mut considered_suggestions = HashSet::new();
        considered_suggestions.insert(input);

        let input_prefix_len = min(input_len, prefix_length);
        let mut candidates = VecDeque::new();
        candidates.push_back(input_chars[..input_prefix_len].to_vec());

        while let Some(candidate) = candidates.pop_front() {
            let candidate_len = candidate.len();
            let length_diff = input_prefix_len - candidate_len;

            // Candidates come out in order of deletion depth.
            if length_diff > active_bound {
                if P::EARLY_TERMINATION {
                    break;
                }
                continue;
            }

            let key = candidate.iter().collect::<String>();

            for suggestion in index.deletes.get(key.as_str()).into_iter().flatten() {
                if suggestion.as_str() == input {
                    continue;
                }

                let suggestion_chars = suggestion.chars().collect::<Vec<_>>();
                let suggestion_len = suggestion_chars.len();

                if suggestion_len.abs_diff(input_len) > active_bound
                    || suggestion_len < candidate_len
                    || (suggestion_len == candidate_len && suggestion_chars != candidate)
                {
                    continue;
                }

                let suggestion_prefix_len = min(suggestion_len, prefix_length);
                if suggestion_prefix_len > input_prefix_len
                    && suggestion_prefix_len - candidate_len > active_bound
                {
                    continue;
                }

                let distance = if candidate_len == 0 {
                    let distance = max(input_len, suggestion_len);
                    if distance > active_bound || !considered_suggestions.insert(suggestion.as_str()) {
                        continue;
                    }
                    distance
                } else if suggestion_len == 1 {
                    let distance = if input_chars.contains(&suggestion_chars[0]) {
                        input_len - 1
                    } else {
                        input_len
                    };
                    if distance > active_bound || !considered_suggestions.insert(suggestion.as_str()) {
                        continue;
                    }
                    distance
                } else if prefix_length - bound == candidate_len
                    && has_different_suffix(prefix_length, &input_chars, &suggestion_chars)
                {
                    continue;
                } else {
                    if P::EARLY_TERMINATION
                        && !delete_in_suggestion_prefix(&candidate, &suggestion_chars, prefix_length)
                    {
                        continue;
                    }

                    if !considered_suggestions.insert(suggestion.as_str()) {
                        continue;
                    }

                    match bounded_chars(&input_chars, &suggestion_chars, active_bound) {
                        Some(distance) => distance,
                        None => continue,
                    }
                };

                if distance <= active_bound {
                    let count = index.words.get(suggestion).copied().unwrap_or(0);
                    policy.offer(
                        SuggestItem::new(suggestion.clone(), distance, count),
                        &mut active_bound,
                    );
                }
            }

            if length_diff < bound && candidate_len <= prefix_length {
                if P::EARLY_TERMINATION && length_diff >= active_bound {
                    continue;
                }

                for i in 0..candidate_len {
                    let delete = remove_at(&candidate, i);

                    if considered_deletes.insert(delete.clone()) {
                        candidates.push_back(delete);
                    }
                }
            }
        }

        let mut suggestions = policy.into_suggestions();
        suggestions.sort();
        suggestions
    }
}

/// Whether every character of `delete` occurs in the prefix of `suggestion`.
fn delete_in_suggestion_prefix(delete: &[char], suggestion: &[char], prefix_length: usize) -> bool {
    if delete.is_empty() {
        return true;
    }

    let prefix = &suggestion[..min(prefix_length, suggestion.len())];
    delete.iter().all(|c| prefix.contains(c))
}

/// When a candidate spent the whole edit budget inside the prefix, the
/// characters past the prefix have to line up, up to one transposition
/// across the prefix boundary.
fn has_different_suffix(prefix_length: usize, input: &[char], suggestion: &[char]) -> bool {
    let min_len = min(input.len(), suggestion.len());
    if min_len <= prefix_length {
        return false;
    }

    let m = min_len - prefix_length;
    let (il, sl) = (input.len(), suggestion.len());

    (m > 1 && input[il + 1 - m..] != suggestion[sl + 1 - m..])
        || (input[il - m] != suggestion[sl - m]
            && (input[il - m - 1] != suggestion[sl - m] || input[il - m] != suggestion[sl - m - 1]))
}
