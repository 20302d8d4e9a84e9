//! Errors reported by the tree. Looking up or deleting a missing key is not an error and never
//! shows up here.

use std::fmt;

/// A broken red-black or search tree property found by [`Tree::verify`][crate::Tree::verify].
/// Every variant names the node where the property fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation<K: fmt::Debug> {
    /// The root is red.
    #[error("root {key:?} is red")]
    RedRoot {
        /// Key of the root.
        key: K,
    },

    /// The sentinel has been recolored.
    #[error("sentinel is red")]
    RedSentinel,

    /// A red node has a red child.
    #[error("red node {parent:?} has red child {child:?}")]
    RedRed {
        /// Key of the red parent.
        parent: K,
        /// Key of the red child.
        child: K,
    },

    /// The two subtrees of a node have different black-heights.
    #[error("node {key:?} has black-height {left} on the left but {right} on the right")]
    BlackHeight {
        /// Key of the unbalanced node.
        key: K,
        /// Black-height of the left subtree, sentinel included.
        left: usize,
        /// Black-height of the right subtree, sentinel included.
        right: usize,
    },

    /// An in-order walk found a key smaller than the one before it.
    #[error("key {key:?} follows larger key {previous:?} in order")]
    OutOfOrder {
        /// The key that is out of place.
        key: K,
        /// The key visited just before it.
        previous: K,
    },

    /// A node's parent link does not point at the node that holds it as a child.
    #[error("node {key:?} has a parent link that does not match its position")]
    BrokenParentLink {
        /// Key of the node with the stale link.
        key: K,
    },
}

/// Failure to bulk-load a tree with [`Tree::from_sorted`][crate::Tree::from_sorted].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError<K: fmt::Debug> {
    /// Two neighbouring input keys are out of order, or equal while duplicates are rejected.
    #[error("keys are not sorted: {previous:?} is followed by {next:?}")]
    Unsorted {
        /// The earlier key.
        previous: K,
        /// The key that follows it.
        next: K,
    },
}
