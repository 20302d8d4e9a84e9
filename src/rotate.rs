//! Rotations, the one structural change all rebalancing is made of. A rotation only rewires
//! the links around two adjacent nodes and never touches colors.

use log::trace;

use crate::node::{Key, NodeId, Side, NIL};
use crate::tree::Tree;

impl<K: Key> Tree<K> {
    /// Moves `x` down into its `side` slot and lifts its child from the opposite side into
    /// `x`'s place. `Side::Left` is a left rotation and `Side::Right` its mirror.
    ///
    /// ## Panics
    ///
    /// When `x` has no child on the opposite side.
    ///
    /// # Diagram
    ///
    /// A left rotation:
    ///
    /// ```text
    ///    parent                 parent
    ///      |                      |
    ///      x                      y
    ///     / \                    / \
    ///    a   y    rotate ->     x   c
    ///       / \                / \
    ///      b   c              a   b
    /// ```
    pub(crate) fn rotate(&mut self, x: NodeId, side: Side) {
        assert_ne!(x, NIL, "Cannot rotate the sentinel.");
        let up = side.opposite();
        let y = self.child(x, up);
        assert_ne!(y, NIL, "Rotating {side:?} needs a child on the {up:?}");
        trace!("rotating {:?} at {:?}", side, self.key(x));

        // `y`'s inner subtree changes hands.
        let inner = self.child(y, side);
        *self.node_mut(x).child_mut(up) = inner;
        if inner != NIL {
            self.node_mut(inner).parent = x;
        }

        let parent = self.parent(x);
        self.node_mut(y).parent = parent;
        if parent == NIL {
            self.root = y;
        } else {
            let x_side = self.side_of(x);
            *self.node_mut(parent).child_mut(x_side) = y;
        }

        *self.node_mut(y).child_mut(side) = x;
        self.node_mut(x).parent = y;
    }
}
