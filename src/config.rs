//! Construction-time settings for a [`Tree`][crate::Tree].
//!
//! # Examples
//!
//! ```
//! use rbtree::{Config, DuplicateKeys, Tree};
//!
//! let mut tree = Tree::with_config(Config::default().duplicates(DuplicateKeys::Reject));
//!
//! assert!(tree.insert(1));
//! // The second `1` is turned away.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//! ```

/// What `insert` does with a key that is already in the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateKeys {
    /// Equal keys descend into the right subtree and are stored alongside the existing ones.
    #[default]
    Allow,
    /// Inserting a key that is already present leaves the tree untouched.
    Reject,
}

/// Settings for a [`Tree`][crate::Tree].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Duplicate key policy. Defaults to [`DuplicateKeys::Allow`].
    pub duplicates: DuplicateKeys,
    /// Number of nodes to preallocate room for.
    pub capacity: usize,
}

impl Config {
    /// Sets the duplicate key policy.
    pub fn duplicates(mut self, duplicates: DuplicateKeys) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Sets how many nodes to preallocate room for.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
