use log::{debug, trace};

use crate::node::{Color, Key, NodeId, Side, NIL};
use crate::tree::Tree;

impl<K: Key> Tree<K> {
    /// Deletes a node holding `key` and returns whether one was found. If the tree holds
    /// several equal keys only one of them is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    /// assert_eq!(tree.search(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        let z = self.find_node(key);
        if z == NIL {
            debug!("delete of missing key {:?}", key);
            return false;
        }

        // `y` is the node that leaves its position: `z` itself, or `z`'s successor when `z` has
        // two children. `x` moves into the position `y` leaves.
        let mut y = z;
        let mut removed_color = self.color(y);
        let x;

        if self.left(z) == NIL {
            x = self.right(z);
            self.transplant(z, x);
        } else if self.right(z) == NIL {
            x = self.left(z);
            self.transplant(z, x);
        } else {
            y = self.minimum(self.right(z));
            removed_color = self.color(y);
            x = self.right(y);

            if self.parent(y) == z {
                // `x` may be the sentinel. Its parent is still needed by the fixup.
                self.node_mut(x).parent = y;
            } else {
                self.transplant(y, x);
                let z_right = self.right(z);
                self.node_mut(y).right = z_right;
                self.node_mut(z_right).parent = y;
            }

            self.transplant(z, y);
            let z_left = self.left(z);
            self.node_mut(y).left = z_left;
            self.node_mut(z_left).parent = y;
            let z_color = self.color(z);
            self.set_color(y, z_color);
        }

        self.nodes.remove(z.0);
        debug!("deleted {:?}", key);

        if removed_color == Color::Black {
            self.fix_after_delete(x);
        }
        self.node_mut(NIL).parent = NIL;
        self.debug_check_sentinel();
        true
    }

    /// Puts the subtree rooted at `v` where the subtree rooted at `u` hangs. `v`'s parent link
    /// is written even when `v` is the sentinel.
    fn transplant(&mut self, u: NodeId, v: NodeId) {
        let parent = self.parent(u);
        if parent == NIL {
            self.root = v;
        } else {
            let side = self.side_of(u);
            *self.node_mut(parent).child_mut(side) = v;
        }
        self.node_mut(v).parent = parent;
    }

    /// Restores the black-heights after a black node was removed from above `x`. Until the loop
    /// ends, `x` counts as one black node more than its color says.
    fn fix_after_delete(&mut self, mut x: NodeId) {
        while x != self.root && self.color(x) == Color::Black {
            let parent = self.parent(x);
            // When `x` is the sentinel its sibling is a real node, so this can't confuse two
            // sentinel children.
            let side = if self.left(parent) == x {
                Side::Left
            } else {
                Side::Right
            };
            let mut w = self.child(parent, side.opposite());

            if self.color(w) == Color::Red {
                trace!("delete fixup below {:?}: red sibling", self.key(parent));
                self.set_color(w, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                w = self.child(self.parent(x), side.opposite());
            }

            let near = self.child(w, side);
            let far = self.child(w, side.opposite());
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                trace!("delete fixup below {:?}: black nephews", self.key(parent));
                self.set_color(w, Color::Red);
                x = self.parent(x);
                continue;
            }

            if self.color(far) == Color::Black {
                trace!("delete fixup below {:?}: red near nephew", self.key(parent));
                self.set_color(near, Color::Black);
                self.set_color(w, Color::Red);
                self.rotate(w, side.opposite());
                w = self.child(self.parent(x), side.opposite());
            }

            trace!("delete fixup below {:?}: red far nephew", self.key(parent));
            let parent = self.parent(x);
            let parent_color = self.color(parent);
            self.set_color(w, parent_color);
            self.set_color(parent, Color::Black);
            let far = self.child(w, side.opposite());
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            x = self.root;
        }

        self.set_color(x, Color::Black);
    }
}
