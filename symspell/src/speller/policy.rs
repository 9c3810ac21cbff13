//! Verbosity policies: how a lookup collects verified matches and how far
//! each match narrows the search.
use super::suggestion::SuggestItem;

pub(crate) trait VerbosityPolicy: Default {
    /// Whether the search may stop early and an exact match is final.
    const EARLY_TERMINATION: bool;

    /// Offers a match whose distance is within `bound`. The policy may
    /// tighten `bound` for the rest of the search.
    fn offer(&mut self, item: SuggestItem, bound: &mut usize);

    fn into_suggestions(self) -> Vec<SuggestItem>;
}

/// Keeps a single slot holding the closest, then most frequent, match.
#[derive(Debug, Default)]
pub(crate) struct TopPolicy {
    best: Option<SuggestItem>,
}

impl VerbosityPolicy for TopPolicy {
    const EARLY_TERMINATION: bool = true;

    fn offer(&mut self, item: SuggestItem, bound: &mut usize) {
        match self.best.as_mut() {
            Some(best) => {
                if item.distance < *bound || item.count > best.count {
                    *bound = item.distance;
                    *best = item;
                }
            }
            None => {
                *bound = item.distance;
                self.best = Some(item);
            }
        }
    }

    fn into_suggestions(self) -> Vec<SuggestItem> {
        self.best.into_iter().collect()
    }
}

/// Keeps every match tied at the smallest distance seen so far.
#[derive(Debug, Default)]
pub(crate) struct ClosestPolicy {
    items: Vec<SuggestItem>,
}

impl VerbosityPolicy for ClosestPolicy {
    const EARLY_TERMINATION: bool = true;

    fn offer(&mut self, item: SuggestItem, bound: &mut usize) {
        if item.distance < *bound {
            self.items.clear();
        }

        *bound = item.distance;
        self.items.push(item);
    }

    fn into_suggestions(self) -> Vec<SuggestItem> {
        self.items
    }
}

/// Keeps everything.
#[derive(Debug, Default)]
pub(crate) struct AllPolicy {
    items: Vec<SuggestItem>,
}

impl VerbosityPolicy for AllPolicy {
    const EARLY_TERMINATION: bool = false;

    fn offer(&mut self, item: SuggestItem, _bound: &mut usize) {
        self.items.push(item);
    }

    fn into_suggestions(self) -> Vec<SuggestItem> {
        self.items
    }
}
