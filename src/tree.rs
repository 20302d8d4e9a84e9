//! A red-black tree whose nodes live in an arena and point at each other by index.
//!
//! # Examples
//!
//! ```
//! use rbtree::{Color, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(10);
//! tree.insert(20);
//! tree.insert(30);
//!
//! // Ascending inserts still give a balanced tree.
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.search(&20), Some(Color::Black));
//! assert_eq!(tree.search(&10), Some(Color::Red));
//!
//! // Deleting reports whether the key was there.
//! assert!(tree.delete(&20));
//! assert!(!tree.delete(&20));
//! assert_eq!(tree.inorder(), vec![10, 30]);
//! assert!(tree.verify().is_ok());
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::debug;
use slab::Slab;

use crate::config::Config;
use crate::node::{Color, Key, Node, NodeId, Side, NIL};

/// A self-balancing Binary Search Tree (specifically, a red-black tree). This can be used for
/// inserting, searching for, and deleting keys.
#[derive(Clone)]
pub struct Tree<K> {
    // Slot 0 always holds the sentinel.
    pub(crate) nodes: Slab<Node<K>>,
    pub(crate) root: NodeId,
    pub(crate) config: Config,
}

impl<K: Key> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> Tree<K> {
    /// Generate a new, empty `Tree` that allows duplicate keys.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Generate a new, empty `Tree` with the given settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{Config, Tree};
    ///
    /// let tree = Tree::<u32>::with_config(Config::default().capacity(64));
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_config(config: Config) -> Self {
        let mut nodes = Slab::with_capacity(config.capacity + 1);
        let sentinel = nodes.insert(Node::sentinel());
        assert_eq!(sentinel, NIL.0, "the sentinel must occupy the first slot");

        Self {
            nodes,
            root: NIL,
            config,
        }
    }

    /// The settings this tree was built with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Looks for a node holding `key`. If one is found its color is returned, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{Color, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(Color::Black));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<Color> {
        match self.find_node(key) {
            NIL => None,
            id => Some(self.color(id)),
        }
    }

    /// Whether any node holds `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.find_node(key) != NIL
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<K> {
        match self.root {
            NIL => None,
            root => Some(self.key(self.minimum(root))),
        }
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<K> {
        let mut current = self.root;
        if current == NIL {
            return None;
        }
        while self.right(current) != NIL {
            current = self.right(current);
        }
        Some(self.key(current))
    }

    /// Number of keys in the tree. Unlike [`Tree::count`] this doesn't walk the tree.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Removes every key, keeping the allocated room for reuse.
    pub fn clear(&mut self) {
        debug!("clearing {} nodes", self.len());
        self.nodes.clear();
        let sentinel = self.nodes.insert(Node::sentinel());
        debug_assert_eq!(sentinel, NIL.0);
        self.root = NIL;
    }

    /// Descends from the root to the first node holding `key`, or the sentinel.
    pub(crate) fn find_node(&self, key: &K) -> NodeId {
        let mut current = self.root;
        while current != NIL {
            current = match key.cmp(&self.nodes[current.0].key) {
                Ordering::Less => self.left(current),
                Ordering::Equal => return current,
                Ordering::Greater => self.right(current),
            };
        }
        NIL
    }

    /// The leftmost node of the subtree rooted at `id`, which must not be the sentinel.
    pub(crate) fn minimum(&self, mut id: NodeId) -> NodeId {
        debug_assert_ne!(id, NIL, "the sentinel has no minimum");
        while self.left(id) != NIL {
            id = self.left(id);
        }
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.0]
    }

    pub(crate) fn key(&self, id: NodeId) -> K {
        self.node(id).key
    }

    pub(crate) fn color(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        debug_assert!(
            id != NIL || color == Color::Black,
            "the sentinel must stay black"
        );
        self.node_mut(id).color = color;
    }

    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.node(id).left
    }

    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.node(id).right
    }

    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.node(id).parent
    }

    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        self.node(id).child(side)
    }

    /// Which child of its parent `id` is. Must not be called on the root.
    pub(crate) fn side_of(&self, id: NodeId) -> Side {
        if self.left(self.parent(id)) == id {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// In debug builds, checks the sentinel hasn't been disturbed by a mutation.
    pub(crate) fn debug_check_sentinel(&self) {
        if cfg!(debug_assertions) {
            let sentinel = self.node(NIL);
            assert_eq!(sentinel.color, Color::Black, "sentinel was recolored");
            assert_eq!(sentinel.left, NIL, "sentinel gained a left child");
            assert_eq!(sentinel.right, NIL, "sentinel gained a right child");
            assert_eq!(sentinel.parent, NIL, "sentinel parent was left set");
            if self.root != NIL {
                assert_eq!(self.color(self.root), Color::Black, "root is red");
            }
        }
    }
}

impl<K: Key> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Key> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// Borrowed view of one node so that `Debug` can print the subtree under it.
struct DebugNode<'a, K> {
    tree: &'a Tree<K>,
    id: NodeId,
}

impl<K: Key> fmt::Debug for DebugNode<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let child = |id: NodeId| (id != NIL).then_some(DebugNode { tree: self.tree, id });
        let node = self.tree.node(self.id);
        f.debug_struct("Node")
            .field("key", &node.key)
            .field("color", &node.color)
            .field("left", &child(node.left))
            .field("right", &child(node.right))
            .finish()
    }
}

impl<K: Key> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = (self.root != NIL).then_some(DebugNode {
            tree: self,
            id: self.root,
        });
        f.debug_struct("Tree").field("root", &root).finish()
    }
}
