use log::debug;

use crate::config::{Config, DuplicateKeys};
use crate::error::BuildError;
use crate::node::{Color, Key, Node, NodeId, NIL};
use crate::tree::Tree;

impl<K: Key> Tree<K> {
    /// Builds a balanced tree from keys that are already sorted, in linear time.
    ///
    /// Every node on the deepest level is red and every other node is black, which satisfies
    /// all of the red-black properties without any rotations.
    ///
    /// ## Errors
    ///
    /// [`BuildError::Unsorted`] if a key is smaller than the one before it, or equal to it when
    /// `config` rejects duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{Config, Tree};
    ///
    /// let tree = Tree::from_sorted(1..=7, Config::default()).unwrap();
    ///
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.preorder(), vec![4, 2, 1, 3, 6, 5, 7]);
    /// assert!(tree.verify().is_ok());
    ///
    /// assert!(Tree::from_sorted([2, 1], Config::default()).is_err());
    /// ```
    pub fn from_sorted<I>(keys: I, config: Config) -> Result<Self, BuildError<K>>
    where
        I: IntoIterator<Item = K>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        for pair in keys.windows(2) {
            let (previous, next) = (pair[0], pair[1]);
            let duplicate = previous == next && config.duplicates == DuplicateKeys::Reject;
            if next < previous || duplicate {
                return Err(BuildError::Unsorted { previous, next });
            }
        }

        let mut tree = Self::with_config(config.capacity(config.capacity.max(keys.len())));
        // Midpoint splits give a tree whose sentinels are all within one level of each other,
        // so coloring just the deepest level red keeps every path's black count equal.
        let height = (usize::BITS - keys.len().leading_zeros()) as usize;
        tree.root = tree.build_balanced(&keys, NIL, 0, height.saturating_sub(1));
        debug!("built tree of {} keys and height {}", keys.len(), height);

        tree.debug_check_sentinel();
        Ok(tree)
    }

    fn build_balanced(
        &mut self,
        keys: &[K],
        parent: NodeId,
        depth: usize,
        red_depth: usize,
    ) -> NodeId {
        if keys.is_empty() {
            return NIL;
        }

        let mid = keys.len() / 2;
        let mut node = Node::new(keys[mid], parent);
        if depth != red_depth || depth == 0 {
            node.color = Color::Black;
        }
        let id = NodeId(self.nodes.insert(node));

        let left = self.build_balanced(&keys[..mid], id, depth + 1, red_depth);
        let right = self.build_balanced(&keys[mid + 1..], id, depth + 1, red_depth);
        let node = self.node_mut(id);
        node.left = left;
        node.right = right;
        id
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, DuplicateKeys};
    use crate::error::BuildError;
    use crate::node::Color;
    use crate::tree::Tree;

    #[test]
    fn empty_input() {
        let tree = Tree::<i32>::from_sorted([], Config::default()).unwrap();

        assert!(tree.is_empty());
        assert_eq!(tree.verify(), Ok(()));
    }

    #[test]
    fn single_key_is_black() {
        let tree = Tree::from_sorted([1], Config::default()).unwrap();

        assert_eq!(tree.search(&1), Some(Color::Black));
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn every_size_is_valid() {
        for n in 0..200 {
            let tree = Tree::from_sorted(0..n, Config::default()).unwrap();

            assert_eq!(tree.verify(), Ok(()), "size {}", n);
            assert_eq!(tree.inorder(), (0..n).collect::<Vec<_>>());
            assert_eq!(tree.len(), n as usize);
        }
    }

    #[test]
    fn incomplete_last_level_is_red() {
        let tree = Tree::from_sorted([1, 2, 3, 4], Config::default()).unwrap();

        assert_eq!(tree.preorder(), vec![3, 2, 1, 4]);
        assert_eq!(tree.search(&1), Some(Color::Red));
        assert_eq!(tree.search(&2), Some(Color::Black));
        assert_eq!(tree.search(&4), Some(Color::Black));
    }

    #[test]
    fn built_tree_accepts_more_changes() {
        let mut tree = Tree::from_sorted((0..50).map(|x| x * 2), Config::default()).unwrap();

        for x in 0..50 {
            tree.insert(x * 2 + 1);
            assert_eq!(tree.verify(), Ok(()));
        }
        for x in 0..25 {
            assert!(tree.delete(&(x * 4)));
            assert_eq!(tree.verify(), Ok(()));
        }
        assert_eq!(tree.len(), 75);
    }

    #[test]
    fn unsorted_input_is_refused() {
        let result = Tree::from_sorted([1, 3, 2], Config::default());

        assert_eq!(
            result.map(|tree| tree.len()),
            Err(BuildError::Unsorted {
                previous: 3,
                next: 2
            })
        );
    }

    #[test]
    fn duplicates_follow_the_policy() {
        assert!(Tree::from_sorted([1, 1, 2], Config::default()).is_ok());

        let reject = Config::default().duplicates(DuplicateKeys::Reject);
        assert_eq!(
            Tree::from_sorted([1, 1, 2], reject).map(|tree| tree.len()),
            Err(BuildError::Unsorted {
                previous: 1,
                next: 1
            })
        );
    }
}
