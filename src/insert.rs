use std::cmp::Ordering;

use log::{debug, trace};

use crate::config::DuplicateKeys;
use crate::node::{Color, Key, Node, NodeId, NIL};
use crate::tree::Tree;

impl<K: Key> Tree<K> {
    /// Inserts `key` into the tree and returns whether a node was added. Equal keys go to the
    /// right of existing ones unless the tree was configured with [`DuplicateKeys::Reject`], in
    /// which case `false` is returned and nothing changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(tree.insert(1));
    /// assert_eq!(tree.inorder(), vec![1, 1]);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let mut parent = NIL;
        let mut current = self.root;
        while current != NIL {
            parent = current;
            current = match key.cmp(&self.node(current).key) {
                Ordering::Less => self.left(current),
                Ordering::Equal if self.config.duplicates == DuplicateKeys::Reject => {
                    debug!("rejecting duplicate key {:?}", key);
                    return false;
                }
                Ordering::Equal | Ordering::Greater => self.right(current),
            };
        }

        let z = NodeId(self.nodes.insert(Node::new(key, parent)));
        if parent == NIL {
            self.root = z;
        } else if key < self.key(parent) {
            self.node_mut(parent).left = z;
        } else {
            self.node_mut(parent).right = z;
        }
        debug!("inserted {:?}", key);

        self.fix_after_insert(z);
        self.debug_check_sentinel();
        true
    }

    /// Repairs the red-red edge a new red node `z` may have created with its parent.
    fn fix_after_insert(&mut self, mut z: NodeId) {
        while self.color(self.parent(z)) == Color::Red {
            // A red parent is never the root, so the grandparent is a real node.
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            let side = self.side_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.color(uncle) == Color::Red {
                trace!("insert fixup at {:?}: red uncle", self.key(z));
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            if z == self.child(parent, side.opposite()) {
                trace!("insert fixup at {:?}: triangle", self.key(z));
                z = parent;
                self.rotate(z, side);
            }

            trace!("insert fixup at {:?}: line", self.key(z));
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }
}
