use rbtree::{Color, Config, DuplicateKeys, Tree};

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set, checking the tree is
/// still a valid red-black tree after each one. The tree rejects duplicates
/// so that it holds exactly the keys of the set.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: rbtree::Key,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(k) => tree.insert(*k) == set.insert(*k),
            Op::Remove(k) => tree.delete(k) == set.remove(k),
        };
        if !agrees || tree.verify().is_err() {
            return false;
        }
    }

    true
}

fn height_bound(len: usize) -> usize {
    // 2 * lg(n + 1), rounded down since heights are whole.
    (2.0 * ((len + 1) as f64).log2()).floor() as usize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::with_config(Config::default().duplicates(DuplicateKeys::Reject));
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.iter().eq(set.iter().copied())
        && tree.len() == set.len()
        && tree.count() == set.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.delete(delete) {}
    }

    let mut still_present = xs;
    for delete in &deletes {
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }
    still_present.sort();

    deletes.iter().all(|x| tree.search(x).is_none())
        && tree.inorder() == still_present
        && tree.verify().is_ok()
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i32>) -> bool {
    let tree: Tree<i32> = xs.iter().copied().collect();

    tree.inorder().windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<u16>) -> bool {
    let tree: Tree<u16> = xs.into_iter().collect();

    tree.height() <= height_bound(tree.len())
}

#[quickcheck]
fn root_is_black(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    for op in &ops {
        match op {
            Op::Insert(k) => {
                tree.insert(*k);
            }
            Op::Remove(k) => {
                tree.delete(k);
            }
        }
        let root_ok = match tree.preorder().first() {
            Some(root) => tree.search(root) == Some(Color::Black),
            None => true,
        };
        if !root_ok {
            return false;
        }
    }

    true
}

#[quickcheck]
fn insert_then_delete_round_trips(xs: Vec<i16>, key: i16) -> bool {
    let xs: BTreeSet<i16> = xs.into_iter().filter(|x| *x != key).collect();
    let mut tree: Tree<i16> = xs.iter().copied().collect();
    let before = tree.inorder();

    tree.insert(key);
    tree.delete(&key);

    tree.inorder() == before && tree.count() == before.len() && tree.verify().is_ok()
}

#[quickcheck]
fn deleting_absent_keys_is_a_no_op(xs: Vec<i8>, key: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().filter(|x| *x != key).collect();
    let before = tree.preorder();

    !tree.delete(&key) && tree.preorder() == before && tree.verify().is_ok()
}

#[quickcheck]
fn from_sorted_matches_inserting(xs: Vec<i32>) -> bool {
    let mut sorted = xs;
    sorted.sort();
    let Ok(built) = Tree::from_sorted(sorted.iter().copied(), Config::default()) else {
        return false;
    };

    built.verify().is_ok() && built.inorder() == sorted && built.height() <= height_bound(sorted.len())
}
