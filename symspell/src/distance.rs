//! Damerau-Levenshtein edit distance.
//!
//! Insertions, deletions, substitutions and transpositions of adjacent
//! characters all cost 1. Distances are counted in Unicode scalar values.
use std::cmp::min;

use hashbrown::HashMap;

/// Edit distance between `a` and `b`.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();

    damerau_levenshtein_chars(&a, &b)
}

/// Edit distance between `a` and `b` if it does not exceed `max_distance`.
pub fn damerau_levenshtein_within(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();

    bounded_chars(&a, &b, max_distance)
}

#[inline]
pub(crate) fn bounded_chars(a: &[char], b: &[char], max_distance: usize) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max_distance {
        return None;
    }

    Some(damerau_levenshtein_chars(a, b)).filter(|d| *d <= max_distance)
}

/// The matrix carries two sentinel rows and columns holding `|a| + |b|`, so
/// the transposition lookback never needs a bounds check. `last_row` maps a
/// character to the last row of `a` it was seen in.
pub(crate) fn damerau_levenshtein_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }

    if b.is_empty() {
        return a.len();
    }

    let rows = a.len() + 2;
    let cols = b.len() + 2;
    let infinity = a.len() + b.len();
    let at = |i: usize, j: usize| i * cols + j;

    let mut d = vec![0usize; rows * cols];
    d[0] = infinity;

    for i in 1..rows {
        d[at(i, 0)] = infinity;
        d[at(i, 1)] = i - 1;
    }

    for j in 1..cols {
        d[at(0, j)] = infinity;
        d[at(1, j)] = j - 1;
    }

    let mut last_row: HashMap<char, usize> = HashMap::with_capacity(a.len());

    for i in 2..rows {
        let a_char = a[i - 2];
        let mut last_match_col = 1;

        for j in 2..cols {
            let b_char = b[j - 2];
            let k = last_row.get(&b_char).copied().unwrap_or(1);
            let l = last_match_col;

            let cost = if a_char == b_char {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = d[at(i - 1, j - 1)] + cost;
            let insertion = d[at(i, j - 1)] + 1;
            let deletion = d[at(i - 1, j)] + 1;
            let transposition = d[at(k - 1, l - 1)] + (i - k) + (j - l) - 1;

            d[at(i, j)] = min(min(substitution, insertion), min(deletion, transposition));
        }

        last_row.insert(a_char, i);
    }

    d[at(rows - 1, cols - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings() {
        assert_eq!(damerau_levenshtein("", ""), 0);
        assert_eq!(damerau_levenshtein("", "abc"), 3);
        assert_eq!(damerau_levenshtein("abc", ""), 3);
    }

    #[test]
    fn single_operations() {
        assert_eq!(damerau_levenshtein("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein("house", "hous"), 1);
        assert_eq!(damerau_levenshtein("hous", "house"), 1);
        assert_eq!(damerau_levenshtein("house", "mouse"), 1);
        assert_eq!(damerau_levenshtein("steems", "steam"), 2);
        assert_eq!(damerau_levenshtein("same", "same"), 0);
    }

    #[test]
    fn transposition_across_an_insertion() {
        // "ca" -> "ac" -> "abc"
        assert_eq!(damerau_levenshtein("ca", "abc"), 2);
    }

    #[test]
    fn counts_scalar_values() {
        assert_eq!(damerau_levenshtein("łąka", "laka"), 2);
        assert_eq!(damerau_levenshtein("部分居民", "部分"), 2);
    }

    #[test]
    fn agrees_with_strsim() {
        let pairs = [
            ("kitten", "sitting"),
            ("whereis th elove", "where is the love"),
            ("couqdn'tread", "couldn't read"),
            ("abcdef", "abdcef"),
            ("a cat", "an act"),
            ("sppelingmsitakes", "spelling mistakes"),
            ("thehorible", "the horrible"),
        ];

        for (a, b) in pairs.iter() {
            assert_eq!(
                damerau_levenshtein(a, b),
                strsim::damerau_levenshtein(a, b),
                "{} -> {}",
                a,
                b
            );
        }
    }

    #[test]
    fn symmetric() {
        assert_eq!(
            damerau_levenshtein("abolution", "abolition"),
            damerau_levenshtein("abolition", "abolution")
        );
    }

    #[test]
    fn bounded() {
        assert_eq!(damerau_levenshtein_within("steems", "steam", 2), Some(2));
        assert_eq!(damerau_levenshtein_within("steems", "steam", 1), None);
        assert_eq!(damerau_levenshtein_within("a", "abcd", 2), None);
        assert_eq!(damerau_levenshtein_within("", "", 0), Some(0));
    }
}
