//! The storage unit of a [`Tree`][crate::Tree] and the sentinel that stands in for every
//! missing child or parent.

use std::fmt;

/// Bound for the keys a [`Tree`][crate::Tree] can hold: totally ordered scalars.
///
/// `Default` only provides the placeholder key stored in the sentinel slot. That key is never
/// compared against anything.
pub trait Key: Ord + Copy + Default + fmt::Debug {}

impl<T> Key for T where T: Ord + Copy + Default + fmt::Debug {}

/// The color tag every node carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// A red node never has a red child.
    Red,
    /// Black nodes are the ones counted by the black-height.
    Black,
}

/// Index of a node in the tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// The sentinel lives in the first arena slot and is never removed.
pub(crate) const NIL: NodeId = NodeId(0);

/// Which child of its parent a node is, or which way a rotation moves a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) parent: NodeId,
}

impl<K> Node<K> {
    /// New nodes are red so that attaching one can never change a black-height.
    pub(crate) fn new(key: K, parent: NodeId) -> Self {
        Self {
            key,
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent,
        }
    }

    pub(crate) fn sentinel() -> Self
    where
        K: Default,
    {
        Self {
            key: K::default(),
            color: Color::Black,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }

    pub(crate) fn child(&self, side: Side) -> NodeId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut NodeId {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
