//! Pre-, in-, and post-order iterators.
//!
//! Each iterator is just a position in the tree. Advancing follows left, right, and parent links,
//! so a step costs `O(depth)` in the worst case and `O(1)` amortized over a full walk, with no
//! auxiliary stack. An iterator positioned at [`NIL`] is the end of its sequence.

use std::fmt;
use std::iter::FusedIterator;

use super::{NodeId, Tree, NIL};

impl<T, B> Tree<T, B> {
    /// An iterator over the values in pre-order, starting at the root.
    pub fn begin_pre_order(&self) -> PreOrder<'_, T, B> {
        PreOrder {
            tree: self,
            node: self.root,
        }
    }

    /// The exhausted pre-order iterator.
    pub fn end_pre_order(&self) -> PreOrder<'_, T, B> {
        PreOrder {
            tree: self,
            node: NIL,
        }
    }

    /// An iterator over the values in ascending order, starting at the smallest value.
    pub fn begin_in_order(&self) -> InOrder<'_, T, B> {
        InOrder {
            tree: self,
            node: self.first_in_order(self.root),
        }
    }

    /// The exhausted in-order iterator.
    pub fn end_in_order(&self) -> InOrder<'_, T, B> {
        InOrder {
            tree: self,
            node: NIL,
        }
    }

    /// An iterator over the values in post-order, starting at the first leaf reached by preferring
    /// left children.
    pub fn begin_post_order(&self) -> PostOrder<'_, T, B> {
        PostOrder {
            tree: self,
            node: self.first_post_order(self.root),
        }
    }

    /// The exhausted post-order iterator.
    pub fn end_post_order(&self) -> PostOrder<'_, T, B> {
        PostOrder {
            tree: self,
            node: NIL,
        }
    }

    /// The node visited after `node` in pre-order.
    pub(crate) fn pre_order_successor(&self, node: NodeId) -> NodeId {
        assert!(node != NIL, "Cannot advance past the end.");
        let left = self.left(node);
        if left != NIL {
            return left;
        }
        let right = self.right(node);
        if right != NIL {
            return right;
        }

        // Climb until we come up out of a left subtree whose parent has a right subtree.
        let mut child = node;
        let mut parent = self.parent(node);
        while parent != NIL {
            let right = self.right(parent);
            if right != NIL && right != child {
                return right;
            }
            child = parent;
            parent = self.parent(parent);
        }
        NIL
    }

    fn first_in_order(&self, root: NodeId) -> NodeId {
        if root == NIL {
            NIL
        } else {
            self.leftmost(root)
        }
    }

    /// The node visited after `node` in-order.
    pub(crate) fn in_order_successor(&self, node: NodeId) -> NodeId {
        assert!(node != NIL, "Cannot advance past the end.");
        let right = self.right(node);
        if right != NIL {
            return self.leftmost(right);
        }

        // Climb while we're coming up out of a right subtree.
        let mut child = node;
        let mut parent = self.parent(node);
        while parent != NIL && self.right(parent) == child {
            child = parent;
            parent = self.parent(parent);
        }
        parent
    }

    /// The first node in post-order of the subtree rooted at `node`: keep descending, preferring
    /// the left child, until reaching a leaf.
    pub(crate) fn first_post_order(&self, mut node: NodeId) -> NodeId {
        if node == NIL {
            return NIL;
        }
        loop {
            let left = self.left(node);
            let right = self.right(node);
            if left != NIL {
                node = left;
            } else if right != NIL {
                node = right;
            } else {
                return node;
            }
        }
    }

    /// The node visited after `node` in post-order.
    pub(crate) fn post_order_successor(&self, node: NodeId) -> NodeId {
        assert!(node != NIL, "Cannot advance past the end.");
        let parent = self.parent(node);
        if parent != NIL && self.left(parent) == node && self.right(parent) != NIL {
            self.first_post_order(self.right(parent))
        } else {
            parent
        }
    }
}

/// Implements the traits shared by all three iterators. They only differ in how they step.
macro_rules! traversal_iterator {
    ($name:ident, $successor:ident) => {
        impl<'a, T, B> $name<'a, T, B> {
            /// The value the iterator is positioned at, or `None` at the end.
            pub fn get(&self) -> Option<&'a T> {
                if self.node == NIL {
                    None
                } else {
                    Some(self.tree.value(self.node))
                }
            }
        }

        impl<'a, T, B> Iterator for $name<'a, T, B> {
            type Item = &'a T;

            fn next(&mut self) -> Option<Self::Item> {
                let value = self.get()?;
                self.node = self.tree.$successor(self.node);
                Some(value)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                if self.node == NIL {
                    (0, Some(0))
                } else {
                    (1, Some(self.tree.len()))
                }
            }
        }

        impl<T, B> FusedIterator for $name<'_, T, B> {}

        impl<T, B> Clone for $name<'_, T, B> {
            fn clone(&self) -> Self {
                Self {
                    tree: self.tree,
                    node: self.node,
                }
            }
        }

        impl<T, B> Copy for $name<'_, T, B> {}

        /// Iterators are equal when they're positioned at the same node of the same tree.
        impl<T, B> PartialEq for $name<'_, T, B> {
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self.tree, other.tree) && self.node == other.node
            }
        }

        impl<T, B> Eq for $name<'_, T, B> {}

        impl<T: fmt::Debug, B> fmt::Debug for $name<'_, T, B> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("current", &self.get())
                    .finish()
            }
        }
    };
}

/// Visits each node, then its left subtree, then its right subtree.
pub struct PreOrder<'a, T, B> {
    tree: &'a Tree<T, B>,
    node: NodeId,
}

/// Visits each node's left subtree, then the node, then its right subtree. This yields the values
/// in ascending order.
pub struct InOrder<'a, T, B> {
    tree: &'a Tree<T, B>,
    node: NodeId,
}

/// Visits each node's left subtree, then its right subtree, then the node.
pub struct PostOrder<'a, T, B> {
    tree: &'a Tree<T, B>,
    node: NodeId,
}

traversal_iterator!(PreOrder, pre_order_successor);
traversal_iterator!(InOrder, in_order_successor);
traversal_iterator!(PostOrder, post_order_successor);

#[cfg(test)]
mod tests {
    use crate::tree::{BinaryTree, RedBlackTree};

    fn sample() -> BinaryTree<i32> {
        [5, 3, 7, 1, 4, 6, 8, 2].into_iter().collect()
    }

    #[test]
    fn orders() {
        let tree = sample();

        assert_eq!(
            tree.begin_pre_order().copied().collect::<Vec<_>>(),
            [5, 3, 1, 2, 4, 7, 6, 8]
        );
        assert_eq!(
            tree.begin_in_order().copied().collect::<Vec<_>>(),
            [1, 2, 3, 4, 5, 6, 7, 8]
        );
        assert_eq!(
            tree.begin_post_order().copied().collect::<Vec<_>>(),
            [2, 1, 4, 3, 6, 8, 7, 5]
        );
    }

    #[test]
    fn begin_and_end_of_empty_tree_are_equal() {
        let tree = BinaryTree::<i32>::new();

        assert_eq!(tree.begin_pre_order(), tree.end_pre_order());
        assert_eq!(tree.begin_in_order(), tree.end_in_order());
        assert_eq!(tree.begin_post_order(), tree.end_post_order());
        assert_eq!(tree.begin_in_order().get(), None);
    }

    #[test]
    fn walking_reaches_end() {
        let tree = sample();
        let end = tree.end_in_order();
        let mut it = tree.begin_in_order();
        let mut steps = 0;
        while it != end {
            it.next();
            steps += 1;
        }
        assert_eq!(steps, tree.len());
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn iterators_restart_from_a_copy() {
        let tree = sample();
        let mut it = tree.begin_post_order();
        it.next();
        it.next();
        let saved = it;

        assert_eq!(it.get(), Some(&4));
        assert_eq!(it.copied().collect::<Vec<_>>(), [4, 3, 6, 8, 7, 5]);
        assert_eq!(saved.copied().collect::<Vec<_>>(), [4, 3, 6, 8, 7, 5]);
        assert_eq!(saved, it);
    }

    #[test]
    fn iterators_of_different_trees_differ() {
        let a = sample();
        let b = sample();
        assert_ne!(a.begin_in_order(), b.begin_in_order());
        assert_ne!(a.end_in_order(), b.end_in_order());
    }

    #[test]
    fn single_child_shapes() {
        // 1 -> 3 (right) -> 2 (left)
        let zigzag: BinaryTree<_> = [1, 3, 2].into_iter().collect();
        assert_eq!(zigzag.begin_pre_order().copied().collect::<Vec<_>>(), [1, 3, 2]);
        assert_eq!(zigzag.begin_in_order().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(zigzag.begin_post_order().copied().collect::<Vec<_>>(), [2, 3, 1]);

        // 3 -> 1 (left) -> 2 (right)
        let zagzig: BinaryTree<_> = [3, 1, 2].into_iter().collect();
        assert_eq!(zagzig.begin_pre_order().copied().collect::<Vec<_>>(), [3, 1, 2]);
        assert_eq!(zagzig.begin_in_order().copied().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(zagzig.begin_post_order().copied().collect::<Vec<_>>(), [2, 1, 3]);
    }

    #[test]
    fn deep_chain_iterates_without_recursion() {
        let tree = BinaryTree::chain((0..100_000).rev(), true);

        assert!(tree.begin_in_order().copied().eq(0..100_000));
        assert!(tree.begin_pre_order().copied().eq((0..100_000).rev()));
        assert!(tree.begin_post_order().copied().eq(0..100_000));
    }

    #[test]
    fn red_black_tree_shares_iterators() {
        let tree: RedBlackTree<_> = (1..=7).collect();

        // Ascending inserts of 1..=7 settle into 2 (1, 4 (3, 6 (5, 7))).
        assert_eq!(
            tree.begin_pre_order().copied().collect::<Vec<_>>(),
            [2, 1, 4, 3, 6, 5, 7]
        );
        assert!(tree.begin_in_order().copied().eq(1..=7));
        assert_eq!(
            tree.begin_post_order().copied().collect::<Vec<_>>(),
            [1, 3, 5, 7, 6, 4, 2]
        );
    }

    #[test]
    fn size_hint_bounds() {
        let tree = sample();
        let it = tree.begin_in_order();
        assert_eq!(it.size_hint(), (1, Some(8)));
        assert_eq!(tree.end_in_order().size_hint(), (0, Some(0)));
    }
}
