//! Delete key generation.
use hashbrown::HashSet;
use smol_str::SmolStr;

/// Produces the delete keys a dictionary word is indexed under: its prefix,
/// and every string reachable from the prefix by deleting up to
/// `max_edit_distance` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteKeyGenerator {
    max_edit_distance: usize,
    prefix_length: usize,
}

impl DeleteKeyGenerator {
    /// creates a generator for the given edit distance and prefix length
    pub fn new(max_edit_distance: usize, prefix_length: usize) -> DeleteKeyGenerator {
        DeleteKeyGenerator {
            max_edit_distance,
            prefix_length,
        }
    }

    /// Generates the deduplicated delete keys of `word`.
    ///
    /// A word no longer than the edit distance also gets the empty key, since
    /// it can be reached from nothing by insertions alone.
    pub fn generate(&self, word: &str) -> HashSet<SmolStr> {
        let mut keys = HashSet::new();
        let word = word.chars().collect::<Vec<_>>();

        if word.len() <= self.max_edit_distance {
            keys.insert(SmolStr::default());
        }

        let prefix = word
            .into_iter()
            .take(self.prefix_length)
            .collect::<Vec<_>>();
        keys.insert(prefix.iter().copied().collect::<SmolStr>());

        // Every path to a given delete removes the same number of characters,
        // so the first visit is at its only possible depth.
        let mut stack = vec![(prefix, 0usize)];

        while let Some((current, depth)) = stack.pop() {
            if depth >= self.max_edit_distance || current.len() <= 1 {
                continue;
            }

            for index in 0..current.len() {
                let delete = remove_at(&current, index);

                if keys.insert(delete.iter().copied().collect::<SmolStr>()) {
                    stack.push((delete, depth + 1));
                }
            }
        }

        keys
    }
}

#[inline(always)]
pub(crate) fn remove_at(chars: &[char], index: usize) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len().saturating_sub(1));
    out.extend_from_slice(&chars[..index]);
    out.extend_from_slice(&chars[index + 1..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(keys: HashSet<SmolStr>) -> Vec<String> {
        let mut keys = keys.into_iter().map(|k| k.to_string()).collect::<Vec<_>>();
        keys.sort();
        keys
    }

    #[test]
    fn single_deletions() {
        let generator = DeleteKeyGenerator::new(1, 7);
        assert_eq!(
            sorted(generator.generate("abc")),
            vec!["ab", "abc", "ac", "bc"]
        );
    }

    #[test]
    fn double_deletions_are_deduplicated() {
        let generator = DeleteKeyGenerator::new(2, 7);
        assert_eq!(
            sorted(generator.generate("aab")),
            vec!["a", "aa", "aab", "ab", "b"]
        );
    }

    #[test]
    fn short_words_get_the_empty_key() {
        let generator = DeleteKeyGenerator::new(2, 7);
        assert_eq!(sorted(generator.generate("ab")), vec!["", "a", "ab", "b"]);

        let generator = DeleteKeyGenerator::new(1, 7);
        assert_eq!(sorted(generator.generate("a")), vec!["", "a"]);
        assert!(!generator.generate("ab").contains(""));
    }

    #[test]
    fn only_the_prefix_is_used() {
        let generator = DeleteKeyGenerator::new(1, 3);
        assert_eq!(
            sorted(generator.generate("abcdefghij")),
            vec!["ab", "abc", "ac", "bc"]
        );
    }

    #[test]
    fn zero_distance_keeps_only_the_prefix() {
        let generator = DeleteKeyGenerator::new(0, 7);
        assert_eq!(sorted(generator.generate("pawn")), vec!["pawn"]);
    }

    #[test]
    fn deletion_depth_is_bounded() {
        let generator = DeleteKeyGenerator::new(2, 7);
        let keys = generator.generate("abcdefghij");

        assert!(keys.contains("abcdefg"));
        assert!(keys.contains("cdefg"));
        assert!(!keys.contains("defg"));
        assert!(keys.iter().all(|k| k.chars().count() >= 5));
        // 1 + C(7,1) + C(7,2)
        assert_eq!(keys.len(), 1 + 7 + 21);
    }

    #[test]
    fn idempotent() {
        let generator = DeleteKeyGenerator::new(2, 7);
        assert_eq!(generator.generate("steamed"), generator.generate("steamed"));
    }

    #[test]
    fn multibyte_characters() {
        let generator = DeleteKeyGenerator::new(1, 7);
        assert_eq!(sorted(generator.generate("łąk")), vec!["ąk", "łk", "łą", "łąk"]);
    }
}
