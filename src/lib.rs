//! This crate exposes a red-black tree: a Binary Search Tree that keeps itself balanced no
//! matter what order keys arrive in.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of key (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key no greater than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key no less than its own key.
//!
//! Searching takes `O(height)` (where `height` is the longest path from the root `Node` to a
//! leaf). BSTs also naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! ## Red-Black Trees
//!
//! A red-black tree additionally colors every `Node` red or black and keeps these properties
//! after every insert and delete:
//!
//! 1. The root is black.
//! 2. The sentinel standing in for every missing child is black.
//! 3. A red `Node` never has a red child.
//! 4. Every path from a `Node` down to a sentinel passes through the same number of black
//!    `Node`s (its black-height).
//!
//! Together these bound the height by `2 * lg(N + 1)`. Insertion and deletion do an ordinary
//! BST change and then repair the colors on the way back up with at most a few rotations.
//! [`Tree::verify`] checks every property and reports the first one that fails.
//!
//! # Examples
//!
//! ```
//! use rbtree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in 1..=1000 {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.height() <= 20);
//! assert!(tree.verify().is_ok());
//! assert_eq!(tree.inorder(), (1..=1000).collect::<Vec<_>>());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod build;
pub mod config;
mod delete;
pub mod error;
mod insert;
mod node;
mod rotate;
mod traverse;
pub mod tree;
mod verify;

#[cfg(test)]
mod test;

pub use config::{Config, DuplicateKeys};
pub use error::{BuildError, Violation};
pub use node::{Color, Key};
pub use traverse::Iter;
pub use tree::Tree;
