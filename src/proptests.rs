use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

/// Brute-force reference model: remembers the inserted words and answers
/// lookups by direct string scanning.
#[derive(Default)]
struct RefModel {
    /// Words inserted with suffix expansion.
    suffix_words: Vec<Vec<u8>>,
    /// Words inserted as single paths.
    full_words: Vec<Vec<u8>>,
}

fn contains_subslice(hay: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && hay.windows(needle.len()).any(|w| w == needle)
}

impl RefModel {
    fn insert_word(&mut self, word: &[u8]) {
        if !word.is_empty() {
            self.suffix_words.push(word.to_vec());
        }
    }

    fn insert_full_word(&mut self, word: &[u8]) {
        self.full_words.push(word.to_vec());
    }

    /// The tree's reachable paths are exactly the substrings of
    /// suffix-inserted words plus the prefixes of full-inserted words.
    fn is_path(&self, s: &[u8]) -> bool {
        if s.is_empty() {
            return true;
        }
        self.suffix_words.iter().any(|w| contains_subslice(w, s))
            || self.full_words.iter().any(|w| w.starts_with(s))
    }

    /// A word-end path is exactly an inserted word (either mode).
    fn is_word(&self, s: &[u8]) -> bool {
        self.suffix_words.iter().any(|w| w == s) || self.full_words.iter().any(|w| w == s)
    }

    /// Longest prefix of `q` that is a reachable path. The path set is
    /// prefix-closed, so the longest hit is what a greedy walk matches.
    fn matched_len(&self, q: &[u8]) -> usize {
        (0..=q.len())
            .rev()
            .find(|&l| self.is_path(&q[..l]))
            .unwrap_or(0)
    }

    fn lookup_string(&self, q: &[u8]) -> Option<(usize, usize)> {
        (0..q.len()).find_map(|s| self.is_word(&q[s..]).then_some((s, q.len() - s)))
    }

    fn lookup_full_string(&self, q: &[u8]) -> Option<(usize, usize)> {
        self.is_word(q).then_some((0, q.len()))
    }

    fn lookup_substrings(&self, q: &[u8]) -> Vec<(usize, usize)> {
        (0..q.len())
            .filter(|&s| self.is_word(&q[s..]))
            .map(|s| (s, q.len() - s))
            .collect()
    }

    fn lookup_max_substrings(&self, q: &[u8]) -> Vec<(usize, usize)> {
        let mut best: Vec<(usize, usize)> = Vec::new();
        let mut best_len = 0usize;
        for s in 0..q.len() {
            let l = self.matched_len(&q[s..]);
            if l == 0 {
                continue;
            }
            if l > best_len {
                best_len = l;
                best.clear();
            }
            if l == best_len {
                best.push((s, l));
            }
        }
        best
    }

    /// All distinct non-empty paths the tree must contain, one per node.
    fn distinct_paths(&self) -> BTreeSet<Vec<u8>> {
        let mut paths = BTreeSet::new();
        for w in &self.suffix_words {
            for s in 0..w.len() {
                for e in (s + 1)..=w.len() {
                    paths.insert(w[s..e].to_vec());
                }
            }
        }
        for w in &self.full_words {
            for e in 1..=w.len() {
                paths.insert(w[..e].to_vec());
            }
        }
        paths
    }

    fn distinct_words(&self) -> BTreeSet<Vec<u8>> {
        self.suffix_words
            .iter()
            .chain(self.full_words.iter())
            .cloned()
            .collect()
    }
}

/// Structural validation: integrity issues, node count against the distinct
/// path set, and word-end paths against the inserted word set.
fn validate_tree(tree: &SuffixTree, model: &RefModel) {
    let issues = tree.verify_integrity();
    assert!(issues.is_empty(), "integrity issues: {:?}", issues);

    assert_eq!(
        tree.len(),
        model.distinct_paths().len() + 1,
        "node count must be distinct paths plus root"
    );

    let mut word_paths = BTreeSet::new();
    for i in 0..tree.len() {
        let id = NodeId::new(i);
        if tree.node(id).is_word_end() {
            word_paths.insert(tree.path(id));
        }
    }
    assert_eq!(
        word_paths,
        model.distinct_words(),
        "word-end paths must equal the inserted word set"
    );
}

#[derive(Clone, Debug)]
enum Op {
    InsertWord(Vec<u8>),
    InsertFullWord(Vec<u8>),
}

fn word_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // A tiny alphabet forces heavy suffix sharing.
    prop::collection::vec(b'a'..=b'd', 0..=8)
}

fn query_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // One extra symbol the inserts never use, to exercise misses.
    prop::collection::vec(b'a'..=b'e', 0..=12)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        2 => word_strategy().prop_map(Op::InsertWord),
        1 => word_strategy().prop_map(Op::InsertFullWord),
    ];
    prop::collection::vec(op, 0..=12)
}

fn key(m: Match) -> (usize, usize) {
    (m.start, m.len)
}

fn apply(tree: &mut SuffixTree, model: &mut RefModel, ops: &[Op]) {
    for op in ops {
        match op {
            Op::InsertWord(w) => {
                tree.insert_word(w);
                model.insert_word(w);
            }
            Op::InsertFullWord(w) => {
                tree.insert_full_word(w);
                model.insert_full_word(w);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_lookup_equivalence(ops in ops_strategy(), queries in prop::collection::vec(query_strategy(), 0..=16)) {
        let mut tree = SuffixTree::new();
        let mut model = RefModel::default();
        apply(&mut tree, &mut model, &ops);

        validate_tree(&tree, &model);

        for q in &queries {
            prop_assert_eq!(tree.lookup_string(q).map(key), model.lookup_string(q));
            prop_assert_eq!(tree.lookup_full_string(q).map(key), model.lookup_full_string(q));
            prop_assert_eq!(
                tree.lookup_substrings(q).into_iter().map(key).collect::<Vec<_>>(),
                model.lookup_substrings(q)
            );
            prop_assert_eq!(
                tree.lookup_max_substrings(q).into_iter().map(key).collect::<Vec<_>>(),
                model.lookup_max_substrings(q)
            );
        }

        // Every inserted word must round-trip through the strict lookup.
        for w in model.suffix_words.iter().chain(model.full_words.iter()) {
            prop_assert_eq!(tree.lookup_full_string(w).map(key), Some((0, w.len())));
        }
    }

    #[test]
    fn prop_reinsert_is_identity(ops in ops_strategy()) {
        let mut tree = SuffixTree::new();
        let mut model = RefModel::default();
        apply(&mut tree, &mut model, &ops);

        let node_count = tree.len();
        let rendered = tree.render();

        // Replaying the same inserts allocates no new ids and changes nothing.
        apply(&mut tree, &mut RefModel::default(), &ops);
        prop_assert_eq!(tree.len(), node_count);
        prop_assert_eq!(tree.render(), rendered);
    }
}
