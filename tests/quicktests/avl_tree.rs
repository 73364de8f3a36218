use avl::{AvlTree, SearchTree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut dyn SearchTree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.remove(k);
                set.remove(k);
            }
        }
    }
}

/// Whether every node in the tree has subtrees within one level of each other, checked only
/// through the public lookups.
fn is_balanced<K>(tree: &dyn SearchTree<K>) -> bool
where
    K: Ord + Clone,
{
    let height = |child: Option<&K>| {
        child
            .and_then(|k| tree.height_of(k))
            .map_or(-1, |h| h as isize)
    };
    tree.in_order().iter().all(|key| {
        let left = height(tree.left_child_of(key));
        let right = height(tree.right_child_of(key));
        (left - right).abs() <= 1
    })
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree: AvlTree<i8> = AvlTree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len()
            && tree.in_order() == set.into_iter().collect::<Vec<_>>()
            && is_balanced(&tree)
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = AvlTree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = AvlTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x) && tree.height_of(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = AvlTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.validate().is_ok()
    }
}

quickcheck::quickcheck! {
    fn traversal_orders_agree(xs: Vec<i8>) -> bool {
        let mut tree = AvlTree::new();
        for x in &xs {
            tree.insert(*x);
        }

        let mut in_order: Vec<_> = tree.in_order().into();
        let mut pre_order: Vec<_> = tree.pre_order().into();
        let mut post_order: Vec<_> = tree.post_order().into();

        // The root comes first in pre-order and last in post-order.
        let root_agrees = pre_order.first() == post_order.last();

        let strictly_ascending = in_order.windows(2).all(|w| w[0] < w[1]);
        in_order.sort_unstable();
        pre_order.sort_unstable();
        post_order.sort_unstable();

        root_agrees && strictly_ascending && in_order == pre_order && in_order == post_order
    }
}
