//! The red-black rebalancing strategy.
//!
//! Every node is red or black and the tree maintains:
//!
//! 1. The root is black.
//! 2. A red node has no red children.
//! 3. Every path from a node down to an absent child passes through the same number of black
//!    nodes.
//!
//! Together these bound the depth by `2 * lg(n + 1)`. New nodes start red; the fixups below restore
//! the invariants after each insert and before each removal using only recoloring and the tree's
//! rotations.
//!
//! See [the Wikipedia page][wiki] for the case names used here.
//!
//! [wiki]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use log::trace;

use super::{Balance, Color, NodeId, Tree, NIL};

/// The strategy of a red-black tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedBlack;

impl Balance for RedBlack {
    fn on_insert<T>(tree: &mut Tree<T, Self>, mut node: NodeId) {
        loop {
            let mut parent = tree.parent(node);
            if parent == NIL {
                tree.set_color(node, Color::Black);
                return;
            }
            if !tree.is_red(parent) {
                return;
            }

            // A red parent is never the root so the grandparent exists.
            let grandparent = tree.parent(parent);
            let uncle = tree.sibling(parent);
            if tree.is_red(uncle) {
                trace!("insert fixup: red uncle, recoloring and moving up");
                tree.set_color(parent, Color::Black);
                tree.set_color(uncle, Color::Black);
                tree.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            // Turn an inner grandchild into an outer one so the last rotation works on a straight
            // line.
            if node == tree.right(parent) && parent == tree.left(grandparent) {
                trace!("insert fixup: inner grandchild, rotating left");
                tree.rotate_left(node);
                std::mem::swap(&mut node, &mut parent);
            } else if node == tree.left(parent) && parent == tree.right(grandparent) {
                trace!("insert fixup: inner grandchild, rotating right");
                tree.rotate_right(node);
                std::mem::swap(&mut node, &mut parent);
            }

            trace!("insert fixup: outer grandchild, rotating parent over grandparent");
            tree.set_color(parent, Color::Black);
            tree.set_color(grandparent, Color::Red);
            if node == tree.left(parent) {
                tree.rotate_right(parent);
            } else {
                tree.rotate_left(parent);
            }
            return;
        }
    }

    fn on_remove<T>(tree: &mut Tree<T, Self>, node: NodeId) {
        if tree.is_red(node) {
            return;
        }
        let child = if tree.left(node) != NIL {
            tree.left(node)
        } else {
            tree.right(node)
        };
        if tree.is_red(child) {
            trace!("remove fixup: red child takes the black");
            tree.set_color(child, Color::Black);
            return;
        }
        remove_fixup(tree, node);
    }
}

/// Restores the black-height around `node`, a black node whose subtree is about to lose one black
/// node. `node` is still linked into the tree and is only spliced out afterwards, so it stands in
/// for the absent child during the fixup.
///
/// The cases are checked in order; a red sibling is first rotated away so every later case sees a
/// black sibling.
fn remove_fixup<T>(tree: &mut Tree<T, RedBlack>, mut node: NodeId) {
    loop {
        let parent = tree.parent(node);
        if parent == NIL {
            return;
        }

        let mut sibling = tree.sibling(node);
        debug_assert!(sibling != NIL, "A black non-root node always has a sibling.");
        if tree.is_red(sibling) {
            trace!("remove fixup: red sibling, rotating it over the parent");
            tree.set_color(parent, Color::Red);
            tree.set_color(sibling, Color::Black);
            if sibling == tree.left(parent) {
                tree.rotate_right(sibling);
            } else {
                tree.rotate_left(sibling);
            }
            sibling = tree.sibling(node);
        }

        let nephews_black = !tree.is_red(tree.left(sibling)) && !tree.is_red(tree.right(sibling));
        if nephews_black && !tree.is_red(parent) {
            trace!("remove fixup: black parent, sibling and nephews, moving up");
            tree.set_color(sibling, Color::Red);
            node = parent;
            continue;
        }
        if nephews_black {
            trace!("remove fixup: red parent with black sibling and nephews, recoloring");
            tree.set_color(sibling, Color::Red);
            tree.set_color(parent, Color::Black);
            return;
        }

        // At least one nephew is red. Make sure it's the far one.
        let node_is_left = node == tree.left(parent);
        if node_is_left && !tree.is_red(tree.right(sibling)) {
            trace!("remove fixup: red near nephew, rotating right");
            let near = tree.left(sibling);
            tree.set_color(sibling, Color::Red);
            tree.set_color(near, Color::Black);
            tree.rotate_right(near);
            sibling = near;
        } else if !node_is_left && !tree.is_red(tree.left(sibling)) {
            trace!("remove fixup: red near nephew, rotating left");
            let near = tree.right(sibling);
            tree.set_color(sibling, Color::Red);
            tree.set_color(near, Color::Black);
            tree.rotate_left(near);
            sibling = near;
        }

        trace!("remove fixup: red far nephew, rotating sibling over parent");
        tree.set_color(sibling, tree.color(parent));
        tree.set_color(parent, Color::Black);
        if node_is_left {
            let far = tree.right(sibling);
            tree.set_color(far, Color::Black);
            tree.rotate_left(sibling);
        } else {
            let far = tree.left(sibling);
            tree.set_color(far, Color::Black);
            tree.rotate_right(sibling);
        }
        return;
    }
}

impl<T> Tree<T, RedBlack> {
    /// Checks the red-black invariants: the root is black, no red node has a red child, and every
    /// path from the root to an absent child has the same number of black nodes.
    ///
    /// Black-heights are computed bottom-up in post-order rather than by recursion.
    pub fn rbt_satisfied(&self) -> bool {
        let root = self.root();
        if root == NIL {
            return true;
        }
        if self.is_red(root) {
            return false;
        }

        // Black nodes on any path from a node down to an absent child, counting the node itself.
        let mut black_height = vec![0; self.len()];
        let height_of = |black_height: &[usize], node: NodeId| {
            if node == NIL {
                0
            } else {
                black_height[node]
            }
        };

        let mut node = self.first_post_order(root);
        while node != NIL {
            let (left, right) = (self.left(node), self.right(node));
            if self.is_red(node) && (self.is_red(left) || self.is_red(right)) {
                return false;
            }
            let left_height = height_of(&black_height, left);
            if left_height != height_of(&black_height, right) {
                return false;
            }
            black_height[node] = left_height + usize::from(!self.is_red(node));
            node = self.post_order_successor(node);
        }
        true
    }
}
