//! Word segmentation: inserting missing spaces with dynamic programming.
use std::cmp::min;

use serde::Serialize;
use unic_ucd_category::GeneralCategory;
use unicode_normalization::UnicodeNormalization;

use super::{SymSpell, Verbosity};
use crate::constants::SEPARATOR;
use crate::tokenizer::case_handling::{is_first_upper, lower_case, upper_first};

/// The best split of a text found so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Segmentation {
    /// the input with spaces inserted
    pub segmented_string: String,
    /// the segmented input with every part spelling corrected
    pub corrected_string: String,
    /// inserted spaces plus the edit distances of the corrections
    pub distance_sum: usize,
    /// sum of the log10 probabilities of the parts
    pub probability_log_sum: f64,
}

impl Segmentation {
    /// Extends the segmentation ending before a part with that part.
    fn extend(&self, part: &str, corrected: &str, distance: usize, probability_log: f64) -> Segmentation {
        let mut segmented_string = String::with_capacity(self.segmented_string.len() + part.len() + 1);
        let mut corrected_string = String::with_capacity(self.corrected_string.len() + corrected.len() + 1);

        segmented_string.push_str(&self.segmented_string);
        corrected_string.push_str(&self.corrected_string);

        if !is_single_punctuation(corrected) {
            segmented_string.push(SEPARATOR);
            corrected_string.push(SEPARATOR);
        }

        segmented_string.push_str(part);
        corrected_string.push_str(corrected);

        Segmentation {
            segmented_string,
            corrected_string,
            distance_sum: self.distance_sum + distance,
            probability_log_sum: self.probability_log_sum + probability_log,
        }
    }
}

fn is_single_punctuation(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => GeneralCategory::of(c).is_punctuation(),
        _ => false,
    }
}

/// A window of the input, its correction and how it scores.
struct Part {
    segmented: String,
    corrected: String,
    separator: usize,
    distance: usize,
    probability_log: f64,
}

impl SymSpell {
    /// Splits `input` into dictionary words by inserting spaces, correcting
    /// each part within `max_edit_distance`. Spaces already present are kept
    /// where they fit.
    ///
    /// Compatibility characters such as ligatures are normalized and hyphens
    /// are removed first.
    pub fn word_segmentation(&self, input: &str, max_edit_distance: usize) -> Segmentation {
        let input = input.nfkc().filter(|c| *c != '-').collect::<Vec<char>>();
        let max_word_length = self.index.max_word_length;
        let size = min(max_word_length, input.len());

        if size == 0 {
            return Segmentation::default();
        }

        let mut compositions = vec![Segmentation::default(); size];
        let mut circular = size - 1;

        for j in 0..input.len() {
            for i in 1..=min(input.len() - j, max_word_length) {
                let part = self.score_part(&input[j..j + i], max_edit_distance);
                let destination = (i + circular) % size;

                if j == 0 {
                    compositions[destination] = Segmentation {
                        segmented_string: part.segmented,
                        corrected_string: part.corrected,
                        distance_sum: part.distance,
                        probability_log_sum: part.probability_log,
                    };
                    continue;
                }

                let previous = &compositions[circular];
                let current = &compositions[destination];

                let joined = previous.distance_sum + part.distance;
                let separated = joined + part.separator;
                let more_probable = current.probability_log_sum
                    < previous.probability_log_sum + part.probability_log;

                if i == max_word_length
                    || ((joined == current.distance_sum || separated == current.distance_sum) && more_probable)
                    || separated < current.distance_sum
                {
                    let distance = if is_single_punctuation(&part.corrected) {
                        part.distance
                    } else {
                        part.separator + part.distance
                    };

                    compositions[destination] =
                        previous.extend(&part.segmented, &part.corrected, distance, part.probability_log);
                }
            }

            circular += 1;
            if circular == size {
                circular = 0;
            }
        }

        compositions.swap_remove(circular)
    }

    fn score_part(&self, window: &[char], max_edit_distance: usize) -> Part {
        let (window, separator) = match window.first() {
            Some(c) if c.is_whitespace() => (&window[1..], 0),
            _ => (window, 1),
        };

        let segmented = window.iter().filter(|c| **c != ' ').collect::<String>();
        let spaces = window.len() - segmented.chars().count();
        let total = self.index.total_corpus_words as f64;

        match self
            .lookup(&lower_case(&segmented), Verbosity::Top, Some(max_edit_distance))
            .into_iter()
            .next()
        {
            Some(top) => {
                let corrected = if is_first_upper(&segmented) {
                    upper_first(&top.term).to_string()
                } else {
                    top.term.to_string()
                };

                Part {
                    segmented,
                    corrected,
                    separator,
                    distance: spaces + top.distance,
                    probability_log: (top.count as f64 / total).log10(),
                }
            }
            None => {
                let len = segmented.chars().count();

                Part {
                    corrected: segmented.clone(),
                    segmented,
                    separator,
                    distance: spaces + len,
                    probability_log: (10.0 / (total * 10f64.powi(len as i32))).log10(),
                }
            }
        }
    }
}
