//! Correction of whole sentences: tokens may be merged with their
//! predecessor or split in two, scored against the bigram table.
use std::cmp::max;

use itertools::Itertools;
use smol_str::SmolStr;

use super::{SuggestItem, SymSpell, Verbosity};
use crate::constants::SEPARATOR;
use crate::distance::damerau_levenshtein;
use crate::tokenizer::Tokenize;

/// Stand-in for a token nothing was found for. Its count shrinks tenfold
/// with every character.
fn penalty(token: &str, bound: usize) -> SuggestItem {
    let len = token.chars().count() as i32;
    let count = 10.0 / 10f64.powi(len);
    SuggestItem::new(token, bound + 1, count as u64)
}

impl SymSpell {
    /// Corrects a whole sentence, merging and splitting tokens where that
    /// lowers the edit distance or is better supported by the bigram table.
    ///
    /// Always returns a single suggestion. Its distance is measured between
    /// `input` and the corrected sentence as a whole.
    pub fn lookup_compound(&self, input: &str, max_edit_distance: Option<usize>) -> Vec<SuggestItem> {
        let bound = self.effective_bound(max_edit_distance);
        let total = self.index.total_corpus_words as f64;
        let tokens = input.words().collect::<Vec<_>>();

        let mut parts: Vec<SuggestItem> = Vec::with_capacity(tokens.len());
        let mut merged_last = false;

        for (i, token) in tokens.iter().enumerate() {
            let suggestions = self.lookup(token, Verbosity::Top, Some(bound));

            if i > 0 && !merged_last {
                if let Some(merged) = self.try_merge(&tokens[i - 1], token, &parts, &suggestions, bound) {
                    if let Some(last) = parts.last_mut() {
                        *last = merged;
                    }
                    merged_last = true;
                    continue;
                }
            }

            merged_last = false;

            let token_len = token.chars().count();

            match suggestions.first() {
                Some(best) if best.distance == 0 || token_len == 1 => parts.push(best.clone()),
                _ if token_len > 1 => {
                    let split = self.best_split(token, &suggestions, bound);
                    parts.push(split.unwrap_or_else(|| penalty(token, bound)));
                }
                _ => parts.push(penalty(token, bound)),
            }
        }

        let mut count = total;
        for part in parts.iter() {
            count *= part.count as f64 / total;
        }

        let term = parts.iter().map(|p| p.term.as_str()).join(&SEPARATOR.to_string());
        let distance = damerau_levenshtein(input, &term);

        log::trace!("compound {:?} -> {:?} ({} parts)", input, term, parts.len());

        vec![SuggestItem::new(term, distance, count as u64)]
    }

    /// Looks `previous` and `token` up as one word. Returns the merged
    /// suggestion, one edit dearer for the dropped separator, if it beats
    /// keeping the two apart.
    fn try_merge(
        &self,
        previous: &str,
        token: &str,
        parts: &[SuggestItem],
        suggestions: &[SuggestItem],
        bound: usize,
    ) -> Option<SuggestItem> {
        let combined = format!("{}{}", previous, token);
        let mut merged = self
            .lookup(&combined, Verbosity::Top, Some(bound))
            .into_iter()
            .next()?;

        let best1 = parts.last()?;
        let best2 = match suggestions.first() {
            Some(best) => best.clone(),
            None => penalty(token, bound),
        };

        let separate = best1.distance + best2.distance;
        let total = self.index.total_corpus_words as f64;

        if merged.distance + 1 < separate
            || (merged.distance + 1 == separate
                && merged.count as f64 > best1.count as f64 / total * best2.count as f64)
        {
            merged.distance += 1;
            return Some(merged);
        }

        None
    }

    /// Tries every split point of `token`. Returns the best scoring split, or
    /// the token's own suggestion if no split is as close.
    fn best_split(&self, token: &str, suggestions: &[SuggestItem], bound: usize) -> Option<SuggestItem> {
        let chars = token.chars().collect::<Vec<_>>();
        let own = suggestions.first();
        let mut best = own.cloned();

        for j in 1..chars.len() {
            let part1 = chars[..j].iter().collect::<String>();
            let part2 = chars[j..].iter().collect::<String>();

            let suggestion1 = match self.lookup(&part1, Verbosity::Top, Some(bound)).into_iter().next() {
                Some(s) => s,
                None => continue,
            };
            let suggestion2 = match self.lookup(&part2, Verbosity::Top, Some(bound)).into_iter().next() {
                Some(s) => s,
                None => continue,
            };

            let term: SmolStr = format!("{}{}{}", suggestion1.term, SEPARATOR, suggestion2.term).into();
            let distance = damerau_levenshtein(token, &term);

            if let Some(current) = best.as_ref() {
                if distance > current.distance {
                    continue;
                }
                if distance < current.distance {
                    best = None;
                }
            }

            let unsplit = format!("{}{}", suggestion1.term, suggestion2.term) == token;

            let count = match self.index.bigrams.get(&term) {
                Some(&bigram) => match own {
                    Some(own) if unsplit => max(bigram, own.count + 2),
                    Some(own) if suggestion1.term == own.term || suggestion2.term == own.term => {
                        max(bigram, own.count + 1)
                    }
                    Some(_) => bigram,
                    None if unsplit => max(bigram, max(suggestion1.count, suggestion2.count) + 2),
                    None => bigram,
                },
                None => {
                    let estimate = suggestion1.count as f64 / self.index.total_corpus_words as f64
                        * suggestion2.count as f64;
                    self.index.bigram_count_min.min(estimate as u64)
                }
            };

            let split = SuggestItem::new(term, distance, count);

            match best.as_ref() {
                Some(current) if split.count <= current.count => {}
                _ => best = Some(split),
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures;

    #[test]
    fn merges_and_splits_tokens() {
        let mut builder = crate::dictionary::DictionaryBuilder::new(Default::default()).unwrap();
        builder.load_dictionary("where 100\nis 400\nthe 1000\nlove 50".lines(), 0, 1);
        builder.load_bigram_dictionary("where is 20".lines(), 0, 2);
        let speller = builder.build();

        let result = speller.lookup_compound("whereis th elove", None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].term(), "where is the love");
        assert_eq!(result[0].distance(), 2);
    }

    #[test]
    fn merges_split_words() {
        let speller = fixtures::speller("in 500\ninspired 20\nis 400");

        let result = speller.lookup_compound("ins pired", None);
        assert_eq!(result[0].term(), "inspired");
        assert_eq!(result[0].distance(), 1);
    }

    #[test]
    fn unknown_tokens_are_kept() {
        let speller = fixtures::speller("the 1000\nlove 50");

        let result = speller.lookup_compound("the xyzzyq love", None);
        assert_eq!(result[0].term(), "the xyzzyq love");
        assert_eq!(result[0].distance(), 0);
        assert_eq!(result[0].count(), 0);
    }

    #[test]
    fn empty_input() {
        let speller = fixtures::speller("the 1000\nlove 50");

        let result = speller.lookup_compound("", None);
        assert_eq!(result[0].term(), "");
        assert_eq!(result[0].distance(), 0);
        assert_eq!(result[0].count(), 1050);
    }

    #[test]
    fn corrects_english_sentences() {
        let speller = fixtures::english();

        let cases = [
            (
                "whereis th elove hehad dated forImuch of thepast who couqdn'tread in sixthgrade and ins pired him",
                "where is the love he had dated for much of the past who couldn't read in sixth grade and inspired him",
            ),
            (
                "in te dhird qarter oflast jear he hadlearned ofca sekretplan",
                "in the third quarter of last year he had learned of a secret plan",
            ),
            (
                "the bigjest playrs in te strogsommer film slatew ith plety of funn",
                "the biggest players in the strong summer film slate with plenty of fun",
            ),
            (
                "can yu readthis messa ge despite thehorible sppelingmsitakes",
                "can you read this message despite the horrible spelling mistakes",
            ),
        ];

        for (input, expected) in cases.iter() {
            let result = speller.lookup_compound(input, None);
            assert_eq!(result.len(), 1);
            assert_eq!(result[0].term(), *expected);
            assert_eq!(result[0].distance(), 9);
        }
    }

    #[test]
    fn distance_is_measured_on_the_whole_sentence() {
        let speller = fixtures::english();

        let input = "in te dhird qarter oflast jear";
        let result = speller.lookup_compound(input, None);
        assert_eq!(result[0].term(), "in the third quarter of last year");
        assert_eq!(
            result[0].distance(),
            crate::distance::damerau_levenshtein(input, "in the third quarter of last year")
        );
    }
}
