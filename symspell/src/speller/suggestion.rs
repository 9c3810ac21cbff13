//! Suggestion for a spelling correction.
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::Serialize;
use smol_str::SmolStr;

#[derive(Clone, Debug, Serialize)]
/// Suggestion for a spelling correction
pub struct SuggestItem {
    /// the suggested word-form
    pub term: SmolStr,
    /// edit distance between the input and the suggested word-form
    pub distance: usize,
    /// frequency of the suggested word-form
    pub count: u64,
}

impl SuggestItem {
    /// creates a spelling correction suggestion
    pub fn new<S: Into<SmolStr>>(term: S, distance: usize, count: u64) -> SuggestItem {
        SuggestItem {
            term: term.into(),
            distance,
            count,
        }
    }

    /// gets the suggested word-form
    pub fn term(&self) -> &str {
        &self.term
    }

    /// gets the edit distance to the input
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// gets the frequency of the suggested word-form
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl PartialOrd for SuggestItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Closer suggestions first, then more frequent ones, then by term.
///
/// Equality only looks at the term, so two items for the same word with
/// different distances are `==` while `cmp` does not return `Equal`. Sorting
/// stays deterministic; do not rely on `cmp` for deduplication.
impl Ord for SuggestItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.count.cmp(&self.count))
            .then_with(|| self.term.cmp(&other.term))
    }
}

/// Two suggestions are the same suggestion when their terms match.
impl PartialEq for SuggestItem {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl Eq for SuggestItem {}

impl Hash for SuggestItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.term.hash(state);
    }
}

/// Which of the matches within the edit distance a lookup returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// the closest match, the most frequent one on ties
    Top,
    /// every match at the smallest distance found
    Closest,
    /// every match within the edit distance
    All,
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Top
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Verbosity::Top),
            "closest" => Ok(Verbosity::Closest),
            "all" => Ok(Verbosity::All),
            other => Err(format!(
                "unknown verbosity '{}', expected top, closest or all",
                other
            )),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verbosity::Top => "top",
            Verbosity::Closest => "closest",
            Verbosity::All => "all",
        };

        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn ordered_by_distance_then_frequency() {
        let mut items = vec![
            SuggestItem::new("steem", 2, 100),
            SuggestItem::new("steam", 1, 5),
            SuggestItem::new("steams", 1, 50),
            SuggestItem::new("stem", 0, 1),
        ];
        items.sort();

        let terms = items.iter().map(|i| i.term()).collect::<Vec<_>>();
        assert_eq!(terms, vec!["stem", "steams", "steam", "steem"]);
    }

    #[test]
    fn equality_is_by_term() {
        assert_eq!(SuggestItem::new("pipe", 1, 5), SuggestItem::new("pipe", 2, 9));
        assert_ne!(SuggestItem::new("pipe", 1, 5), SuggestItem::new("pips", 1, 5));
        assert_eq!(
            SuggestItem::new("pipe", 1, 5).cmp(&SuggestItem::new("pipe", 2, 9)),
            Ordering::Less
        );

        let mut set = HashSet::new();
        set.insert(SuggestItem::new("pipe", 1, 5));
        assert!(!set.insert(SuggestItem::new("pipe", 0, 10)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn verbosity_round_trips_through_strings() {
        for v in [Verbosity::Top, Verbosity::Closest, Verbosity::All].iter() {
            assert_eq!(v.to_string().parse::<Verbosity>(), Ok(*v));
        }
        assert!("most".parse::<Verbosity>().is_err());
    }
}
