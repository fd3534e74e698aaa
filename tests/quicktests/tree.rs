use classic_ds::set::Set;
use classic_ds::tree::{Balance, BinaryTree, RedBlackTree, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same values in both.
fn do_ops<T, B>(ops: &[Op<T>], tree: &mut Tree<T, B>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
    B: Balance,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                tree.remove(v);
                set.remove(v);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn binary_tree_matches_btreeset(ops: Vec<Op<i8>>) -> bool {
        let mut tree = BinaryTree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && tree.iter().eq(set.iter())
    }

    fn red_black_tree_matches_btreeset(ops: Vec<Op<i8>>) -> bool {
        let mut tree = RedBlackTree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.rbt_satisfied() && tree.len() == set.len() && tree.iter().eq(set.iter())
    }

    fn both_trees_hold_the_same_values(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
        let mut plain: BinaryTree<_> = xs.iter().copied().collect();
        let mut balanced: RedBlackTree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            plain.remove(delete);
            balanced.remove(delete);
        }

        plain.iter().eq(balanced.iter())
            && deletes.iter().all(|x| !plain.find(x) && !balanced.find(x))
    }

    fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
        let tree: RedBlackTree<_> = xs.into_iter().collect();
        let mut pre: Vec<_> = tree.begin_pre_order().copied().collect();
        let mut post: Vec<_> = tree.begin_post_order().copied().collect();
        pre.sort_unstable();
        post.sort_unstable();

        tree.begin_in_order().copied().eq(pre.iter().copied())
            && pre == post
            && tree.begin_pre_order().next() == tree.begin_post_order().last()
    }

    fn set_operations_match_btreeset(xs: Vec<u8>, ys: Vec<u8>) -> bool {
        let a: Set<_> = xs.iter().copied().collect();
        let b: Set<_> = ys.iter().copied().collect();
        let a_std: BTreeSet<_> = xs.into_iter().collect();
        let b_std: BTreeSet<_> = ys.into_iter().collect();

        (&a + &b).iter().eq(a_std.union(&b_std))
            && (&a - &b).iter().eq(a_std.difference(&b_std))
            && (&a & &b).iter().eq(a_std.intersection(&b_std))
    }
}
