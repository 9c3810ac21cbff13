//! Dictionary construction: word frequencies, below-threshold staging and the
//! delete index.
//!
//! A [`DictionaryBuilder`] owns every mutable structure. Once loading is done
//! it is turned into a read-only [`SymSpell`] with [`DictionaryBuilder::build`].
use std::cmp::max;
use std::path::Path;

use hashbrown::HashMap;
use rayon::prelude::*;
use smol_str::SmolStr;

use crate::constants::STAGE_CHUNK_SIZE;
use crate::error::{ConfigError, DictionaryError};
use crate::speller::{SymSpell, SymSpellConfig};
use crate::tokenizer::Tokenize;

pub mod edits;
mod loader;
pub mod stage;

pub use self::edits::DeleteKeyGenerator;
pub use self::stage::StagingBuffer;

/// Delete key to the words that produced it, in insertion order.
pub type DeleteIndex = HashMap<SmolStr, Vec<SmolStr>>;

#[derive(Debug, Clone)]
pub(crate) struct DictionaryIndex {
    pub(crate) config: SymSpellConfig,
    pub(crate) generator: DeleteKeyGenerator,
    pub(crate) words: HashMap<SmolStr, u64>,
    pub(crate) below_threshold: HashMap<SmolStr, u64>,
    pub(crate) deletes: DeleteIndex,
    pub(crate) bigrams: HashMap<SmolStr, u64>,
    pub(crate) bigram_count_min: u64,
    pub(crate) total_corpus_words: u64,
    pub(crate) max_word_length: usize,
}

impl DictionaryIndex {
    fn new(config: SymSpellConfig) -> DictionaryIndex {
        DictionaryIndex {
            generator: DeleteKeyGenerator::new(
                config.max_dictionary_edit_distance,
                config.prefix_length,
            ),
            config,
            words: HashMap::new(),
            below_threshold: HashMap::new(),
            deletes: HashMap::new(),
            bigrams: HashMap::new(),
            bigram_count_min: u64::MAX,
            total_corpus_words: 0,
            max_word_length: 0,
        }
    }

    /// Adds `count` occurrences of `word`. Returns the word if this promoted
    /// it into the dictionary, in which case its delete keys still have to be
    /// added to the index.
    fn apply_count(&mut self, word: &str, count: i64) -> Option<SmolStr> {
        if count < 0 {
            return None;
        }

        let mut count = count as u64;
        self.total_corpus_words = self.total_corpus_words.saturating_add(count);

        if let Some(existing) = self.words.get_mut(word) {
            *existing = existing.saturating_add(count);
            return None;
        }

        let threshold = self.config.count_threshold;

        if let Some(staged) = self.below_threshold.get_mut(word) {
            let total = staged.saturating_add(count);

            if total < threshold {
                *staged = total;
                return None;
            }

            self.below_threshold.remove(word);
            count = total;
        } else if count < threshold {
            self.below_threshold.insert(word.into(), count);
            return None;
        }

        let word = SmolStr::new(word);
        self.max_word_length = max(self.max_word_length, word.chars().count());
        self.words.insert(word.clone(), count);

        Some(word)
    }

    fn index_word(&mut self, word: SmolStr) {
        for key in self.generator.generate(&word) {
            self.deletes
                .entry(key)
                .or_insert_with(Vec::new)
                .push(word.clone());
        }
    }

    /// Generates delete keys for `promoted` in parallel chunks, one staging
    /// buffer per chunk, and commits the buffers in order.
    fn commit_promoted(&mut self, promoted: Vec<SmolStr>) {
        if promoted.is_empty() {
            return;
        }

        let generator = self.generator;
        let stages = promoted
            .par_chunks(STAGE_CHUNK_SIZE)
            .map(|chunk| {
                let mut stage = StagingBuffer::with_capacity(chunk.len() * 4);

                for word in chunk {
                    for key in generator.generate(word) {
                        stage.add(key, word.clone());
                    }
                }

                stage
            })
            .collect::<Vec<_>>();

        for stage in stages {
            stage.commit(&mut self.deletes);
        }

        log::debug!(
            "Committed {} words, delete index holds {} keys",
            promoted.len(),
            self.deletes.len()
        );
    }
}

/// The mutable side of a speller: word counts, below-threshold words, the
/// delete index and the bigram table.
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    index: DictionaryIndex,
}

impl DictionaryBuilder {
    /// Creates an empty dictionary, failing if the configuration is invalid.
    pub fn new(config: SymSpellConfig) -> Result<DictionaryBuilder, ConfigError> {
        config.validate()?;

        Ok(DictionaryBuilder {
            index: DictionaryIndex::new(config),
        })
    }

    pub(crate) fn from_index(index: DictionaryIndex) -> DictionaryBuilder {
        DictionaryBuilder { index }
    }

    /// Freezes the dictionary into a speller.
    pub fn build(self) -> SymSpell {
        log::debug!(
            "Building speller: {} words, {} delete keys, {} bigrams",
            self.word_count(),
            self.entry_count(),
            self.bigram_count()
        );

        SymSpell::from_index(self.index)
    }

    /// the configuration the dictionary was created with
    pub fn config(&self) -> &SymSpellConfig {
        &self.index.config
    }

    /// number of words usable as suggestions
    pub fn word_count(&self) -> usize {
        self.index.words.len()
    }

    /// number of delete keys in the index
    pub fn entry_count(&self) -> usize {
        self.index.deletes.len()
    }

    /// number of words waiting to reach the count threshold
    pub fn below_threshold_count(&self) -> usize {
        self.index.below_threshold.len()
    }

    /// number of bigrams loaded
    pub fn bigram_count(&self) -> usize {
        self.index.bigrams.len()
    }

    /// sum of all counts added since the last dictionary load
    pub fn total_corpus_words(&self) -> u64 {
        self.index.total_corpus_words
    }

    /// length of the longest word promoted since the last dictionary load
    pub fn max_dictionary_word_length(&self) -> usize {
        self.index.max_word_length
    }

    /// Adds `count` occurrences of `word`.
    ///
    /// Negative counts are ignored. Counts of known words are merged; a new
    /// word is kept aside until its accumulated count reaches the count
    /// threshold. Returns `true` when this call made `word` a suggestion
    /// candidate, which happens at most once per word.
    pub fn create_entry(&mut self, word: &str, count: i64) -> bool {
        match self.index.apply_count(word, count) {
            Some(word) => {
                self.index.index_word(word);
                true
            }
            None => false,
        }
    }

    /// Loads `term count` lines, merging counts into the words already present.
    ///
    /// The corpus word total and maximum word length are reset first, so they
    /// only reflect this load. Lines with the wrong number of columns or a
    /// count that is not an integer are skipped.
    pub fn load_dictionary<I, S>(&mut self, lines: I, term_index: usize, count_index: usize)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.index.total_corpus_words = 0;
        self.index.max_word_length = 0;

        let mut promoted = Vec::new();
        let mut skipped = 0usize;

        for line in lines {
            let line = line.as_ref();

            match loader::parse_entry(line, term_index, count_index) {
                Some((term, count)) => {
                    if let Some(word) = self.index.apply_count(term, count) {
                        promoted.push(word);
                    }
                }
                None => {
                    log::trace!("Skipping dictionary line {:?}", line);
                    skipped += 1;
                }
            }
        }

        log::debug!(
            "Loaded dictionary: {} new words, {} lines skipped",
            promoted.len(),
            skipped
        );

        self.index.commit_promoted(promoted);
    }

    /// Loads a dictionary file, see [`DictionaryBuilder::load_dictionary`].
    pub fn load_dictionary_path<P: AsRef<Path>>(
        &mut self,
        path: P,
        term_index: usize,
        count_index: usize,
    ) -> Result<(), DictionaryError> {
        let content = loader::read_to_string(path.as_ref())?;
        self.load_dictionary(content.lines(), term_index, count_index);
        Ok(())
    }

    /// Loads `first second count` lines into the bigram table. A repeated
    /// phrase replaces the earlier count.
    pub fn load_bigram_dictionary<I, S>(&mut self, lines: I, term_index: usize, count_index: usize)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let line = line.as_ref();

            match loader::parse_bigram(line, term_index, count_index) {
                Some((phrase, count)) => {
                    self.index.bigram_count_min = self.index.bigram_count_min.min(count);
                    self.index.bigrams.insert(phrase, count);
                }
                None => log::trace!("Skipping bigram line {:?}", line),
            }
        }

        log::debug!(
            "Bigram table holds {} phrases, minimum count {}",
            self.index.bigrams.len(),
            self.index.bigram_count_min
        );
    }

    /// Loads a bigram file, see [`DictionaryBuilder::load_bigram_dictionary`].
    pub fn load_bigram_dictionary_path<P: AsRef<Path>>(
        &mut self,
        path: P,
        term_index: usize,
        count_index: usize,
    ) -> Result<(), DictionaryError> {
        let content = loader::read_to_string(path.as_ref())?;
        self.load_bigram_dictionary(content.lines(), term_index, count_index);
        Ok(())
    }

    /// Builds the dictionary from plain text: every word token counts once.
    pub fn create_dictionary<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut promoted = Vec::new();

        for line in lines {
            for word in line.as_ref().words() {
                if let Some(word) = self.index.apply_count(word, 1) {
                    promoted.push(word);
                }
            }
        }

        self.index.commit_promoted(promoted);
    }

    /// Builds the dictionary from a plain text file.
    pub fn create_dictionary_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DictionaryError> {
        let content = loader::read_to_string(path.as_ref())?;
        self.create_dictionary(content.lines());
        Ok(())
    }
}
