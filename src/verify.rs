use crate::error::Violation;
use crate::node::{Color, Key, NodeId, NIL};
use crate::tree::Tree;

impl<K: Key> Tree<K> {
    /// Checks every red-black property in one pass: the sentinel and the root are black, no red
    /// node has a red child, and every path to a sentinel crosses the same number of black
    /// nodes. Also checks that keys are in order and that parent links match child links. On
    /// failure the first broken property is returned along with the node where it broke.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::Tree;
    ///
    /// let tree: Tree<i32> = (0..100).collect();
    /// assert_eq!(tree.verify(), Ok(()));
    /// ```
    pub fn verify(&self) -> Result<(), Violation<K>> {
        if self.color(NIL) != Color::Black {
            return Err(Violation::RedSentinel);
        }
        if self.root == NIL {
            return Ok(());
        }
        if self.color(self.root) == Color::Red {
            return Err(Violation::RedRoot {
                key: self.key(self.root),
            });
        }
        if self.parent(self.root) != NIL {
            return Err(Violation::BrokenParentLink {
                key: self.key(self.root),
            });
        }

        self.verify_subtree(self.root)?;

        let mut keys = self.iter();
        if let Some(mut previous) = keys.next() {
            for key in keys {
                if key < previous {
                    return Err(Violation::OutOfOrder { key, previous });
                }
                previous = key;
            }
        }
        Ok(())
    }

    /// Returns the black-height of the subtree at `id`, counting `id` and the sentinel.
    fn verify_subtree(&self, id: NodeId) -> Result<usize, Violation<K>> {
        if id == NIL {
            return Ok(1);
        }

        let (left, right) = (self.left(id), self.right(id));
        for child in [left, right] {
            if child == NIL {
                continue;
            }
            if self.parent(child) != id {
                return Err(Violation::BrokenParentLink {
                    key: self.key(child),
                });
            }
            if self.color(id) == Color::Red && self.color(child) == Color::Red {
                return Err(Violation::RedRed {
                    parent: self.key(id),
                    child: self.key(child),
                });
            }
        }

        let left_height = self.verify_subtree(left)?;
        let right_height = self.verify_subtree(right)?;
        if left_height != right_height {
            return Err(Violation::BlackHeight {
                key: self.key(id),
                left: left_height,
                right: right_height,
            });
        }

        Ok(left_height + usize::from(self.color(id) == Color::Black))
    }
}
