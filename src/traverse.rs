//! Read-only walks over a [`Tree`]. Every walk keeps its own explicit stack or queue, so none
//! of them recurse and each call starts again from the root.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Color, Key, NodeId, NIL};
use crate::tree::Tree;

impl<K: Key> Tree<K> {
    /// Keys in ascending order (left subtree, node, right subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Tree;
    ///
    /// let tree: Tree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.inorder(), vec![1, 2, 3]);
    /// ```
    pub fn inorder(&self) -> Vec<K> {
        self.iter().collect()
    }

    /// Keys with every node before its subtrees (node, left subtree, right subtree).
    pub fn preorder(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        if self.root != NIL {
            stack.push(self.root);
        }

        while let Some(id) = stack.pop() {
            keys.push(self.key(id));
            // Right goes on first so that left comes off first.
            for child in [self.right(id), self.left(id)] {
                if child != NIL {
                    stack.push(child);
                }
            }
        }
        keys
    }

    /// Keys with every node after its subtrees (left subtree, right subtree, node).
    pub fn postorder(&self) -> Vec<K> {
        // A node-right-left walk is exactly the reverse of left-right-node.
        let mut keys = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        if self.root != NIL {
            stack.push(self.root);
        }

        while let Some(id) = stack.pop() {
            keys.push(self.key(id));
            for child in [self.left(id), self.right(id)] {
                if child != NIL {
                    stack.push(child);
                }
            }
        }
        keys.reverse();
        keys
    }

    /// Keys level by level from the root down, left to right within a level.
    pub fn level_order(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        let mut queue = VecDeque::new();
        if self.root != NIL {
            queue.push_back(self.root);
        }

        while let Some(id) = queue.pop_front() {
            keys.push(self.key(id));
            for child in [self.left(id), self.right(id)] {
                if child != NIL {
                    queue.push_back(child);
                }
            }
        }
        keys
    }

    /// A lazy in-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Number of nodes on the longest path from the root down to a sentinel. An empty tree has
    /// height 0 and a single node has height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if self.root != NIL {
            stack.push((self.root, 1));
        }

        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [self.left(id), self.right(id)] {
                if child != NIL {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }

    /// Number of black nodes between the root and a sentinel, counting the sentinel but not
    /// the root. An empty tree has black-height 0.
    ///
    /// Only the leftmost path is followed; [`Tree::verify`] checks that every other path
    /// agrees.
    pub fn black_height(&self) -> usize {
        if self.root == NIL {
            return 0;
        }

        let mut black_height = 1;
        let mut current = self.left(self.root);
        while current != NIL {
            if self.color(current) == Color::Black {
                black_height += 1;
            }
            current = self.left(current);
        }
        black_height
    }

    /// Number of nodes reachable from the root, found by walking the whole tree. Always equal
    /// to [`Tree::len`] for a well formed tree.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = Vec::new();
        if self.root != NIL {
            stack.push(self.root);
        }
        while let Some(id) = stack.pop() {
            count += 1;
            for child in [self.left(id), self.right(id)] {
                if child != NIL {
                    stack.push(child);
                }
            }
        }
        count
    }
}

/// In-order iterator over the keys of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, K> {
    tree: &'a Tree<K>,
    /// Nodes whose key hasn't been yielded yet but whose left subtree has been pushed.
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<K: Key> Iter<'_, K> {
    fn push_left_spine(&mut self, mut id: NodeId) {
        while id != NIL {
            self.stack.push(id);
            id = self.tree.left(id);
        }
    }
}

impl<K: Key> Iterator for Iter<'_, K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.tree.right(id));
        self.remaining -= 1;
        Some(self.tree.key(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Key> ExactSizeIterator for Iter<'_, K> {}

impl<K: Key> FusedIterator for Iter<'_, K> {}

impl<'a, K: Key> IntoIterator for &'a Tree<K> {
    type Item = K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
