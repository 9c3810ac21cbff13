use super::{SuggestItem, SymSpell};

impl SymSpell {
    /// Lists the words starting with `prefix`, most frequent first. The
    /// distance of each item is the number of characters completed.
    pub fn complete(&self, prefix: &str) -> Vec<SuggestItem> {
        let prefix_len = prefix.chars().count();

        let mut suggestions = self
            .index
            .words
            .iter()
            .filter(|(word, _)| word.starts_with(prefix))
            .map(|(word, &count)| SuggestItem::new(word.clone(), word.chars().count() - prefix_len, count))
            .collect::<Vec<_>>();

        suggestions.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        suggestions
    }
}
