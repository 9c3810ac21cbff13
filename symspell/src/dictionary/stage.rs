//! Staging of delete key associations during bulk loads.
//!
//! Associations are appended to a flat node arena, threaded per key as a
//! linked list, and merged into the delete index in one pass. Each buffer is
//! independent of the index, so several can be filled in parallel and
//! committed one after another.
use hashbrown::HashMap;
use smol_str::SmolStr;

use super::DeleteIndex;

#[derive(Debug, Clone)]
struct Node {
    word: SmolStr,
    next: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: usize,
    first: usize,
    last: usize,
}

/// Append-only buffer of (delete key, word) associations.
#[derive(Debug, Default)]
pub struct StagingBuffer {
    deletes: HashMap<SmolStr, Entry>,
    nodes: Vec<Node>,
}

impl StagingBuffer {
    /// creates an empty staging buffer
    pub fn new() -> StagingBuffer {
        StagingBuffer::default()
    }

    /// creates a staging buffer sized for roughly `capacity` associations
    pub fn with_capacity(capacity: usize) -> StagingBuffer {
        StagingBuffer {
            deletes: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// number of distinct delete keys staged
    pub fn delete_count(&self) -> usize {
        self.deletes.len()
    }

    /// number of associations staged
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Stages `word` under `key`.
    pub fn add(&mut self, key: SmolStr, word: SmolStr) {
        let index = self.nodes.len();
        self.nodes.push(Node { word, next: None });

        match self.deletes.get_mut(&key) {
            Some(entry) => {
                self.nodes[entry.last].next = Some(index);
                entry.last = index;
                entry.count += 1;
            }
            None => {
                self.deletes.insert(
                    key,
                    Entry {
                        count: 1,
                        first: index,
                        last: index,
                    },
                );
            }
        }
    }

    /// Merges every staged association into `index`, appending to the lists
    /// already present. Words keep the order they were staged in.
    pub fn commit(self, index: &mut DeleteIndex) {
        let StagingBuffer { deletes, nodes } = self;
        index.reserve(deletes.len());

        for (key, entry) in deletes.into_iter() {
            let words = index.entry(key).or_insert_with(Vec::new);
            words.reserve(entry.count);

            let mut next = Some(entry.first);
            while let Some(i) = next {
                let node = &nodes[i];
                words.push(node.word.clone());
                next = node.next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words<'a>(index: &'a DeleteIndex, key: &str) -> Vec<&'a str> {
        index[key].iter().map(|w| w.as_str()).collect()
    }

    #[test]
    fn commit_keeps_staged_order() {
        let mut stage = StagingBuffer::new();
        stage.add("ab".into(), "abc".into());
        stage.add("ac".into(), "abc".into());
        stage.add("ab".into(), "abd".into());
        stage.add("ab".into(), "xab".into());

        assert_eq!(stage.delete_count(), 2);
        assert_eq!(stage.node_count(), 4);

        let mut index = DeleteIndex::new();
        stage.commit(&mut index);

        assert_eq!(words(&index, "ab"), vec!["abc", "abd", "xab"]);
        assert_eq!(words(&index, "ac"), vec!["abc"]);
    }

    #[test]
    fn commit_appends_to_existing_lists() {
        let mut index = DeleteIndex::new();
        index.insert("ab".into(), vec!["aby".into()]);

        let mut stage = StagingBuffer::with_capacity(2);
        stage.add("ab".into(), "abz".into());
        stage.add("zz".into(), "zzz".into());
        stage.commit(&mut index);

        assert_eq!(words(&index, "ab"), vec!["aby", "abz"]);
        assert_eq!(words(&index, "zz"), vec!["zzz"]);
    }

    #[test]
    fn empty_commit_is_a_no_op() {
        let mut index = DeleteIndex::new();
        StagingBuffer::new().commit(&mut index);
        assert!(index.is_empty());
    }
}
