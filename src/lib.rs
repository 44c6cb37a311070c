//! # suffix-trie
//!
//! An uncompressed suffix trie over byte sequences, with word-boundary aware
//! substring lookup.
//!
//! ## Features
//!
//! - **Two insertion modes**: register every suffix of a word (substring
//!   search), or just the word itself (classic trie)
//! - **Four lookup modes**: first matching suffix, exact whole-word, all
//!   matching suffixes, and longest reachable substrings
//! - **Arena storage**: nodes are indexed by stable creation-order ids; no
//!   reference cycles, no per-node allocation beyond the child list
//! - **Shared wrapper**: single-writer/multi-reader access via
//!   [`SharedSuffixTree`]
//!
//! ## Example
//!
//! ```rust
//! use suffix_trie::SuffixTree;
//!
//! let mut tree = SuffixTree::new();
//! tree.insert_word(b"cgi");
//!
//! // The whole word matches at offset 0.
//! let m = tree.lookup_string(b"cgi").unwrap();
//! assert_eq!((m.start, m.len), (0, 3));
//!
//! // A suffix of the query matches, starting at offset 1.
//! let m = tree.lookup_string(b"xcgi").unwrap();
//! assert_eq!((m.start, m.len), (1, 3));
//!
//! // Whole-query matching is stricter.
//! assert!(tree.lookup_full_string(b"xcgi").is_none());
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod segment;
pub mod tree;

pub use segment::segment;
pub use tree::{BranchPoint, Match, Node, NodeId, SuffixTree, TreeStats};

use parking_lot::RwLock;

/// A thread-safe wrapper around [`SuffixTree`].
///
/// The tree itself is not designed for concurrent mutation: node creation can
/// reallocate child lists observed mid-walk. This wrapper applies the
/// single-writer/multi-reader discipline: inserts take the write lock,
/// lookups take the read lock, and lookup results are owned values so no
/// guard escapes.
pub struct SharedSuffixTree {
    inner: RwLock<SuffixTree>,
}

impl SharedSuffixTree {
    /// Create a new empty shared tree.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SuffixTree::new()),
        }
    }

    /// Register every suffix of `word`. See [`SuffixTree::insert_word`].
    pub fn insert_word(&self, word: impl AsRef<[u8]>) {
        self.inner.write().insert_word(word.as_ref());
    }

    /// Register only the word path. See [`SuffixTree::insert_full_word`].
    pub fn insert_full_word(&self, word: impl AsRef<[u8]>) {
        self.inner.write().insert_full_word(word.as_ref());
    }

    /// First query suffix matching a registered word.
    /// See [`SuffixTree::lookup_string`].
    pub fn lookup_string(&self, query: impl AsRef<[u8]>) -> Option<Match> {
        self.inner.read().lookup_string(query.as_ref())
    }

    /// Whole-query match against a registered word.
    /// See [`SuffixTree::lookup_full_string`].
    pub fn lookup_full_string(&self, query: impl AsRef<[u8]>) -> Option<Match> {
        self.inner.read().lookup_full_string(query.as_ref())
    }

    /// All query suffixes matching registered words.
    /// See [`SuffixTree::lookup_substrings`].
    pub fn lookup_substrings(&self, query: impl AsRef<[u8]>) -> Vec<Match> {
        self.inner.read().lookup_substrings(query.as_ref())
    }

    /// Longest reachable substrings of the query.
    /// See [`SuffixTree::lookup_max_substrings`].
    pub fn lookup_max_substrings(&self, query: impl AsRef<[u8]>) -> Vec<Match> {
        self.inner.read().lookup_max_substrings(query.as_ref())
    }

    /// True iff `word` was inserted as a complete word.
    pub fn contains_word(&self, word: impl AsRef<[u8]>) -> bool {
        self.inner.read().contains_word(word.as_ref())
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True iff no word has created any node.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Shape and memory statistics.
    pub fn stats(&self) -> TreeStats {
        self.inner.read().stats()
    }

    /// Render the tree as a diagram. See [`SuffixTree::render`].
    pub fn render(&self) -> String {
        self.inner.read().render()
    }
}

impl Default for SharedSuffixTree {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests;
