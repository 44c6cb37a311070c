//! Uncompressed suffix trie.
//!
//! Every inserted suffix is walked and materialized one symbol-node at a
//! time; there is no edge compression and no Ukkonen-style linear-time
//! construction. This trades O(n²) worst-case build time for a structure
//! whose correctness is easy to state: every root-to-node path spells exactly
//! one byte sequence, and a node's `is_word_end` flag records that the path
//! was explicitly inserted as a complete word.
//!
//! Two insertion entry points:
//! - [`SuffixTree::insert_word`] registers every suffix of a word (substring
//!   search semantics); only the whole word is marked as a word end.
//! - [`SuffixTree::insert_full_word`] registers the single word path (classic
//!   trie insert).
//!
//! Four lookup modes, all built on the same branch locator:
//! - [`SuffixTree::lookup_string`]: first query suffix that is a registered word
//! - [`SuffixTree::lookup_full_string`]: whole query must be a registered word
//! - [`SuffixTree::lookup_substrings`]: all query suffixes that are registered words
//! - [`SuffixTree::lookup_max_substrings`]: longest reachable substrings,
//!   word-end status ignored

mod debug;
mod node;

pub use node::{Node, NodeId};

/// Result of walking a byte sequence from a starting node.
///
/// `node` is the deepest node reached, `matched` the number of symbols
/// consumed before the walk stopped, and `complete` whether the whole
/// sequence was matched.
#[derive(Clone, Copy, Debug)]
pub struct BranchPoint {
    /// Deepest node reached by the walk.
    pub node: NodeId,
    /// Count of symbols successfully matched.
    pub matched: usize,
    /// True iff every symbol of the sequence was matched.
    pub complete: bool,
}

/// A lookup hit.
///
/// `start` is the offset within the query where the match begins and `len`
/// the number of matched bytes; the matched slice of a query `q` is
/// `&q[m.start..m.end()]`. The end offset is exclusive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Match {
    /// Node at which the matched path ends.
    pub node: NodeId,
    /// Start offset of the match within the query.
    pub start: usize,
    /// Number of matched bytes.
    pub len: usize,
}

impl Match {
    /// Exclusive end offset of the match within the query.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Shape and memory statistics for a tree.
#[derive(Debug, Clone, Default)]
pub struct TreeStats {
    /// Total nodes, including the root.
    pub node_count: usize,
    /// Nodes flagged as word ends.
    pub word_count: usize,
    /// Length of the longest root-to-node path.
    pub max_depth: usize,
    /// Approximate bytes used by node storage.
    pub node_bytes: usize,
}

/// An uncompressed suffix trie over byte sequences.
pub struct SuffixTree {
    /// Node arena; index = node id. Slot 0 is the root.
    nodes: Vec<Node>,
}

impl SuffixTree {
    /// Create an empty tree containing only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
        }
    }

    /// Number of nodes ever created, including the root. This is also the
    /// next id that will be assigned.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True iff no word has created any node (the root alone does not count).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Id of the root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Borrow a node by id.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Reconstruct the byte sequence spelled by the root-to-`id` path, using
    /// the parent back-references.
    pub fn path(&self, id: NodeId) -> Vec<u8> {
        let mut bytes = Vec::new();
        let mut cursor = id;
        while let Some(parent) = self.nodes[cursor.index()].parent {
            bytes.push(self.nodes[cursor.index()].value);
            cursor = parent;
        }
        bytes.reverse();
        bytes
    }

    /// Child of `parent` carrying `value`, if any. Linear scan; the branching
    /// factor is bounded by the alphabet size.
    fn child_by_value(&self, parent: NodeId, value: u8) -> Option<NodeId> {
        self.nodes[parent.index()]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child.index()].value == value)
    }

    // =========================================================================
    // Branch locator
    // =========================================================================

    /// Walk `seq` symbol by symbol from `start`, following matching children,
    /// and stop at the first symbol with no matching child.
    ///
    /// Read-only; used by both insertion and every lookup mode.
    pub fn locate(&self, start: NodeId, seq: &[u8]) -> BranchPoint {
        let mut cursor = start;
        for (i, &byte) in seq.iter().enumerate() {
            match self.child_by_value(cursor, byte) {
                Some(child) => cursor = child,
                None => {
                    return BranchPoint {
                        node: cursor,
                        matched: i,
                        complete: false,
                    }
                }
            }
        }
        BranchPoint {
            node: cursor,
            matched: seq.len(),
            complete: true,
        }
    }

    // =========================================================================
    // Insertion engine
    // =========================================================================

    /// Ensure the path spelling `seq` exists below `from`, creating nodes only
    /// past the divergence point. Returns the node at the end of the path.
    fn extend(&mut self, from: NodeId, seq: &[u8]) -> NodeId {
        let branch = self.locate(from, seq);
        let mut cursor = branch.node;
        for &byte in &seq[branch.matched..] {
            let id = NodeId::new(self.nodes.len());
            self.nodes.push(Node::new(byte, cursor));
            self.nodes[cursor.index()].children.push(id);
            cursor = id;
        }
        cursor
    }

    /// Register every suffix of `word` as a path in the trie.
    ///
    /// Only the suffix starting at offset 0 (the word itself) is marked as a
    /// word end; proper suffixes extend the shared structure for substring
    /// search but are not registered as complete words. Idempotent: no
    /// duplicate nodes are created for paths that already exist. The empty
    /// word is a no-op.
    pub fn insert_word(&mut self, word: &[u8]) {
        for start in 0..word.len() {
            let end = self.extend(NodeId::ROOT, &word[start..]);
            if start == 0 {
                self.nodes[end.index()].is_word_end = true;
            }
        }
    }

    /// Register only the single path spelling `word` and mark its terminal
    /// node as a word end (classic trie insert, no suffix expansion).
    ///
    /// Inserting the empty word creates no nodes but marks the root as a
    /// word end.
    pub fn insert_full_word(&mut self, word: &[u8]) {
        let end = self.extend(NodeId::ROOT, word);
        self.nodes[end.index()].is_word_end = true;
    }

    // =========================================================================
    // Lookup engine
    // =========================================================================

    /// True iff `word` was explicitly inserted as a complete word.
    ///
    /// This is the "registered word" predicate, distinct from mere substring
    /// reachability; see [`SuffixTree::lookup_max_substrings`] for the latter.
    pub fn contains_word(&self, word: &[u8]) -> bool {
        let branch = self.locate(NodeId::ROOT, word);
        branch.complete && self.nodes[branch.node.index()].is_word_end
    }

    /// Find the first start offset whose suffix of `query` fully matches a
    /// path ending at a word-end node.
    pub fn lookup_string(&self, query: &[u8]) -> Option<Match> {
        for start in 0..query.len() {
            let branch = self.locate(NodeId::ROOT, &query[start..]);
            if branch.complete && self.nodes[branch.node.index()].is_word_end {
                return Some(Match {
                    node: branch.node,
                    start,
                    len: branch.matched,
                });
            }
        }
        None
    }

    /// Match the whole query against a word-end path; offset 0 only.
    ///
    /// Stricter than [`SuffixTree::lookup_string`]: no prefix of the query may
    /// be discarded. The empty query matches iff the empty word was inserted.
    pub fn lookup_full_string(&self, query: &[u8]) -> Option<Match> {
        let branch = self.locate(NodeId::ROOT, query);
        if branch.complete && self.nodes[branch.node.index()].is_word_end {
            Some(Match {
                node: branch.node,
                start: 0,
                len: branch.matched,
            })
        } else {
            None
        }
    }

    /// Collect every start offset whose suffix of `query` fully matches a
    /// word-end path, in increasing offset order.
    pub fn lookup_substrings(&self, query: &[u8]) -> Vec<Match> {
        let mut matches = Vec::new();
        for start in 0..query.len() {
            let branch = self.locate(NodeId::ROOT, &query[start..]);
            if branch.complete && self.nodes[branch.node.index()].is_word_end {
                matches.push(Match {
                    node: branch.node,
                    start,
                    len: branch.matched,
                });
            }
        }
        matches
    }

    /// Find the longest substrings of `query` reachable in the tree at all;
    /// word-end status is irrelevant here.
    ///
    /// Every start offset with a positive-length match is a candidate; only
    /// candidates of maximum length are returned, ties all reported in
    /// increasing offset order.
    pub fn lookup_max_substrings(&self, query: &[u8]) -> Vec<Match> {
        let mut best: Vec<Match> = Vec::new();
        let mut best_len = 0usize;
        for start in 0..query.len() {
            let branch = self.locate(NodeId::ROOT, &query[start..]);
            if branch.matched == 0 {
                continue;
            }
            if branch.matched > best_len {
                best_len = branch.matched;
                best.clear();
            }
            if branch.matched == best_len {
                best.push(Match {
                    node: branch.node,
                    start,
                    len: branch.matched,
                });
            }
        }
        best
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Shape and memory statistics.
    pub fn stats(&self) -> TreeStats {
        let mut word_count = 0;
        let mut max_depth = 0;
        // Parents are created before children, so a single forward pass can
        // carry depths.
        let mut depths = vec![0usize; self.nodes.len()];
        let mut node_bytes = self.nodes.capacity() * std::mem::size_of::<Node>();
        for (i, node) in self.nodes.iter().enumerate() {
            if node.is_word_end {
                word_count += 1;
            }
            if let Some(parent) = node.parent {
                depths[i] = depths[parent.index()] + 1;
                max_depth = max_depth.max(depths[i]);
            }
            if node.children.spilled() {
                node_bytes += node.children.capacity() * std::mem::size_of::<NodeId>();
            }
        }
        TreeStats {
            node_count: self.nodes.len(),
            word_count,
            max_depth,
            node_bytes,
        }
    }
}

impl Default for SuffixTree {
    fn default() -> Self {
        Self::new()
    }
}
