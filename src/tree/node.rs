//! Node storage for the suffix trie.
//!
//! Nodes live in an arena owned by the tree. A [`NodeId`] is the node's index
//! in that arena and doubles as its creation-order identifier (root = 0).
//! Child lists use a small-vector since the branching factor is bounded by the
//! alphabet size and is usually tiny.

use smallvec::SmallVec;

/// Inline capacity for child lists. Most nodes built from natural-language
/// input have very few children, so four inline slots cover the common case
/// without a heap allocation.
const INLINE_CHILDREN: usize = 4;

/// Identifier of a node inside a tree's arena.
///
/// Ids are assigned at node creation in strictly increasing order and are
/// never reused; the tree has no deletion, so an id stays valid for the
/// lifetime of the tree. The root is always [`NodeId::ROOT`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        NodeId(index as u32)
    }

    /// Index of this node in the tree's arena, equal to its creation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single symbol in the trie.
///
/// The path from the root down to a node spells a byte sequence; no two
/// root-to-node paths spell the same sequence (sibling values are unique at
/// every level).
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) value: u8,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[NodeId; INLINE_CHILDREN]>,
    pub(crate) is_word_end: bool,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            value: 0,
            parent: None,
            children: SmallVec::new(),
            is_word_end: false,
        }
    }

    pub(crate) fn new(value: u8, parent: NodeId) -> Self {
        Self {
            value,
            parent: Some(parent),
            children: SmallVec::new(),
            is_word_end: false,
        }
    }

    /// The symbol on the edge leading into this node. Meaningless for the
    /// root (stored as `0`).
    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Non-owning back-reference to the parent; `None` only for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ids of this node's children. No two children carry the same value.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True iff the root-to-here path spells a word that was explicitly
    /// inserted as a terminal sequence. Once set, never cleared.
    #[inline]
    pub fn is_word_end(&self) -> bool {
        self.is_word_end
    }
}
