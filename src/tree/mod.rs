//! A Binary Search Tree over unique values, generic over how (or whether) it rebalances itself.
//!
//! Nodes live in an arena owned by the tree and refer to each other by index. Each node knows its
//! parent as well as its children, which is what lets the iterators walk the tree with `O(1)`
//! state and lets the [`RedBlack`] strategy rotate around any node without searching for it.
//!
//! # Examples
//!
//! ```
//! use classic_ds::tree::{BinaryTree, RedBlackTree};
//!
//! let mut tree = BinaryTree::new();
//! let mut rbtree = RedBlackTree::new();
//! for x in 0..100 {
//!     assert!(tree.insert(x));
//!     assert!(rbtree.insert(x));
//! }
//!
//! // Inserting an existing value does nothing.
//! assert!(!tree.insert(42));
//! assert_eq!(tree.len(), 100);
//!
//! // Ascending inserts degenerate a plain BST into a chain but not a red-black tree.
//! assert_eq!(tree.depth(), 100);
//! assert!(rbtree.depth() <= 14);
//!
//! assert!(rbtree.remove(&42));
//! assert!(!rbtree.find(&42));
//! assert!(rbtree.rbt_satisfied());
//! ```

mod iter;
mod redblack;

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::list::SingleList;

pub use iter::{InOrder, PostOrder, PreOrder};
pub use redblack::RedBlack;

/// Index of a node in a tree's arena.
pub type NodeId = usize;

/// The index standing in for "no node": an absent child, the root's parent, or the position of an
/// iterator that has run off the end.
pub const NIL: NodeId = usize::MAX;

/// A Binary Search Tree which never rebalances.
pub type BinaryTree<T> = Tree<T, Unbalanced>;

/// A Binary Search Tree which maintains the red-black invariants.
pub type RedBlackTree<T> = Tree<T, RedBlack>;

mod private {
    pub trait Sealed {}
}

/// The hooks a [`Tree`] calls around structural changes. This is how a red-black tree reuses all
/// of the plain tree's searching, splicing, and iteration.
///
/// This trait is sealed: the strategies are [`Unbalanced`] and [`RedBlack`].
pub trait Balance: private::Sealed + Sized {
    /// Called after `node` has been created and linked under its parent (or made the root).
    #[doc(hidden)]
    fn on_insert<T>(tree: &mut Tree<T, Self>, node: NodeId);

    /// Called right before `node`, which has at most one child, is spliced out of the tree.
    #[doc(hidden)]
    fn on_remove<T>(tree: &mut Tree<T, Self>, node: NodeId);
}

/// The strategy of a plain Binary Search Tree: do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbalanced;

impl private::Sealed for Unbalanced {}
impl private::Sealed for RedBlack {}

impl Balance for Unbalanced {
    fn on_insert<T>(_tree: &mut Tree<T, Self>, _node: NodeId) {}

    fn on_remove<T>(_tree: &mut Tree<T, Self>, _node: NodeId) {}
}

/// Node colors. Every node carries one; only the [`RedBlack`] strategy reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    left: NodeId,
    right: NodeId,
    parent: NodeId,
    color: Color,
}

impl<T> Node<T> {
    fn new(value: T, parent: NodeId) -> Self {
        Self {
            value,
            left: NIL,
            right: NIL,
            parent,
            color: Color::Red,
        }
    }
}

/// Where a value that isn't in the tree would be attached.
enum Slot {
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// A Binary Search Tree holding unique values, rebalanced according to `B`.
///
/// Iterators borrow the tree, so the borrow checker rules out mutating the tree while one is alive.
pub struct Tree<T, B = Unbalanced> {
    nodes: Vec<Node<T>>,
    root: NodeId,
    balance: PhantomData<B>,
}

impl<T, B> Default for Tree<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> Tree<T, B> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: NIL,
            balance: PhantomData,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of nodes on the longest path from the root to a leaf: `0` for an empty tree and
    /// `1` for a lone root.
    ///
    /// This walks the tree with an explicit stack of nodes whose right subtree is still pending,
    /// so it works on degenerate trees far deeper than the call stack would allow.
    pub fn depth(&self) -> usize {
        let mut pending = SingleList::new();
        let mut deepest = 0;
        let mut node = self.root;
        let mut depth = 1;

        while node != NIL {
            deepest = deepest.max(depth);
            let current = &self.nodes[node];
            if current.left != NIL {
                pending.push_front((node, depth));
                node = current.left;
                depth += 1;
            } else if current.right != NIL {
                node = current.right;
                depth += 1;
            } else {
                node = NIL;
                while let Some((parent, parent_depth)) = pending.pop_front() {
                    let right = self.nodes[parent].right;
                    if right != NIL {
                        node = right;
                        depth = parent_depth + 1;
                        break;
                    }
                }
            }
        }

        deepest
    }

    /// Calls `f` on every value in ascending order.
    pub fn in_order_traverse<F: FnMut(&T)>(&self, f: F) {
        self.begin_in_order().for_each(f);
    }

    /// Calls `f` on every value, visiting each node before its left and then its right subtree.
    pub fn pre_order_traverse<F: FnMut(&T)>(&self, f: F) {
        self.begin_pre_order().for_each(f);
    }

    /// Calls `f` on every value, visiting each node after its left and then its right subtree.
    pub fn post_order_traverse<F: FnMut(&T)>(&self, f: F) {
        self.begin_post_order().for_each(f);
    }

    /// An iterator over the values in ascending order. Same as [`Tree::begin_in_order`].
    pub fn iter(&self) -> InOrder<'_, T, B> {
        self.begin_in_order()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.nodes.len());
        self.nodes.clear();
        self.root = NIL;
    }

    /// Moves the contents out of this tree, leaving it empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    pub(crate) fn parent(&self, node: NodeId) -> NodeId {
        self.nodes[node].parent
    }

    pub(crate) fn left(&self, node: NodeId) -> NodeId {
        self.nodes[node].left
    }

    pub(crate) fn right(&self, node: NodeId) -> NodeId {
        self.nodes[node].right
    }

    pub(crate) fn value(&self, node: NodeId) -> &T {
        &self.nodes[node].value
    }

    /// The color of `node`. Absent nodes count as black.
    pub(crate) fn color(&self, node: NodeId) -> Color {
        if node == NIL {
            Color::Black
        } else {
            self.nodes[node].color
        }
    }

    pub(crate) fn is_red(&self, node: NodeId) -> bool {
        self.color(node) == Color::Red
    }

    pub(crate) fn set_color(&mut self, node: NodeId, color: Color) {
        self.nodes[node].color = color;
    }

    /// The other child of `node`'s parent. `node` must not be the root.
    pub(crate) fn sibling(&self, node: NodeId) -> NodeId {
        let parent = self.parent(node);
        if self.left(parent) == node {
            self.right(parent)
        } else {
            self.left(parent)
        }
    }

    /// Lifts `node` above its parent, which becomes `node`'s left child. `node` must be the right
    /// child of its parent.
    ///
    /// # Diagram
    ///
    /// ```text
    ///     Option<grandparent>            Option<grandparent>
    ///       /                              /
    ///    parent                          node
    ///    /    \                         /    \
    ///   x     node      rotate ->   parent    z
    ///         /  \                   /  \
    ///        y    z                 x    y
    /// ```
    pub(crate) fn rotate_left(&mut self, node: NodeId) {
        let parent = self.parent(node);
        assert!(parent != NIL, "Cannot rotate the root up.");
        debug_assert_eq!(self.right(parent), node);
        let grandparent = self.parent(parent);
        let inner = self.left(node);

        self.nodes[parent].right = inner;
        if inner != NIL {
            self.nodes[inner].parent = parent;
        }
        self.replace_child(grandparent, parent, node);
        self.nodes[node].parent = grandparent;
        self.nodes[node].left = parent;
        self.nodes[parent].parent = node;
    }

    /// Lifts `node` above its parent, which becomes `node`'s right child. `node` must be the left
    /// child of its parent. The mirror image of [`Tree::rotate_left`].
    pub(crate) fn rotate_right(&mut self, node: NodeId) {
        let parent = self.parent(node);
        assert!(parent != NIL, "Cannot rotate the root up.");
        debug_assert_eq!(self.left(parent), node);
        let grandparent = self.parent(parent);
        let inner = self.right(node);

        self.nodes[parent].left = inner;
        if inner != NIL {
            self.nodes[inner].parent = parent;
        }
        self.replace_child(grandparent, parent, node);
        self.nodes[node].parent = grandparent;
        self.nodes[node].right = parent;
        self.nodes[parent].parent = node;
    }

    /// Points whichever slot of `parent` held `old` (or the root slot if `parent` is `NIL`) at
    /// `new`. Does not touch `new`'s parent link.
    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if parent == NIL {
            debug_assert_eq!(self.root, old);
            self.root = new;
        } else if self.nodes[parent].left == old {
            self.nodes[parent].left = new;
        } else {
            debug_assert_eq!(self.nodes[parent].right, old);
            self.nodes[parent].right = new;
        }
    }

    /// The leftmost node of the subtree rooted at `node`, i.e. its smallest value.
    pub(crate) fn leftmost(&self, mut node: NodeId) -> NodeId {
        assert!(node != NIL, "An empty subtree has no leftmost node.");
        while self.nodes[node].left != NIL {
            node = self.nodes[node].left;
        }
        node
    }

    /// Replaces `node` by its only child (possibly `NIL`) and leaves `node` unlinked.
    fn splice_out(&mut self, node: NodeId) {
        let Node {
            left,
            right,
            parent,
            ..
        } = self.nodes[node];
        assert!(
            left == NIL || right == NIL,
            "Only nodes with at most one child can be spliced out."
        );
        let child = if left != NIL { left } else { right };

        if child != NIL {
            self.nodes[child].parent = parent;
        }
        self.replace_child(parent, node, child);

        let unlinked = &mut self.nodes[node];
        unlinked.left = NIL;
        unlinked.right = NIL;
        unlinked.parent = NIL;
    }

    /// Frees the slot of an unlinked node and returns its value. The last node in the arena moves
    /// into the freed slot, so every link to it is re-pointed.
    fn release(&mut self, node: NodeId) -> T {
        let last = self.nodes.len() - 1;
        let released = self.nodes.swap_remove(node);

        if node != last {
            let Node {
                left,
                right,
                parent,
                ..
            } = self.nodes[node];
            self.replace_child(parent, last, node);
            if left != NIL {
                self.nodes[left].parent = node;
            }
            if right != NIL {
                self.nodes[right].parent = node;
            }
        }

        released.value
    }

    /// Exchanges the values of two distinct nodes, leaving their links and colors in place.
    fn swap_values(&mut self, a: NodeId, b: NodeId) {
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(high);
        std::mem::swap(&mut head[low].value, &mut tail[0].value);
    }
}

impl<T, B> Tree<T, B>
where
    T: Ord,
    B: Balance,
{
    /// Inserts `value` into the tree. Returns `false`, leaving the tree unchanged, when the value
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let slot = match self.search(&value) {
            Ok(_) => return false,
            Err(slot) => slot,
        };

        let node = self.nodes.len();
        match slot {
            Slot::Root => {
                self.nodes.push(Node::new(value, NIL));
                self.root = node;
            }
            Slot::Left(parent) => {
                self.nodes.push(Node::new(value, parent));
                self.nodes[parent].left = node;
            }
            Slot::Right(parent) => {
                self.nodes.push(Node::new(value, parent));
                self.nodes[parent].right = node;
            }
        }

        B::on_insert(self, node);
        true
    }

    /// Whether `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::BinaryTree;
    ///
    /// let tree: BinaryTree<_> = [5, 10, 3].into_iter().collect();
    ///
    /// assert!(tree.find(&5));
    /// assert!(!tree.find(&15));
    /// ```
    pub fn find(&self, value: &T) -> bool {
        self.search(value).is_ok()
    }

    /// Removes `value` from the tree. Returns `false`, leaving the tree unchanged, when the value
    /// isn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_ds::tree::BinaryTree;
    ///
    /// let mut tree: BinaryTree<_> = [5, 10, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        match self.search(value) {
            Ok(node) => {
                self.remove_node(node);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes `node` from the tree and returns its value. A node with two children takes its
    /// in-order successor's value and the successor node, which has no left child, is removed
    /// instead.
    fn remove_node(&mut self, node: NodeId) -> T {
        let doomed = if self.left(node) != NIL && self.right(node) != NIL {
            let successor = self.leftmost(self.right(node));
            self.swap_values(node, successor);
            successor
        } else {
            node
        };

        B::on_remove(self, doomed);
        self.splice_out(doomed);
        self.release(doomed)
    }

    /// Descends from the root looking for `value`. Yields the node holding it, or the empty slot
    /// where it would be inserted.
    fn search(&self, value: &T) -> Result<NodeId, Slot> {
        let mut node = self.root;
        if node == NIL {
            return Err(Slot::Root);
        }
        loop {
            let current = &self.nodes[node];
            match value.cmp(&current.value) {
                Ordering::Less if current.left == NIL => return Err(Slot::Left(node)),
                Ordering::Less => node = current.left,
                Ordering::Equal => return Ok(node),
                Ordering::Greater if current.right == NIL => return Err(Slot::Right(node)),
                Ordering::Greater => node = current.right,
            }
        }
    }
}

/// Cloning re-inserts the source's values in ascending order into a fresh tree, so the clone's
/// shape can differ from the source's.
impl<T, B> Clone for Tree<T, B>
where
    T: Ord + Clone,
    B: Balance,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.extend(source.iter().cloned());
    }
}

impl<T, B> fmt::Debug for Tree<T, B>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they hold the same values, whatever their shapes.
impl<T, B> PartialEq for Tree<T, B>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, B> Eq for Tree<T, B> {}

/// Builds a tree by inserting each value in turn. Duplicates are dropped.
impl<T, B> FromIterator<T> for Tree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, B> Extend<T> for Tree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, B> IntoIterator for &'a Tree<T, B> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
impl<T, B> Tree<T, B> {
    /// Links `values` into a chain in linear time, each one the right child of the one before
    /// (or the left child, when `leftward`). This is the shape inserting sorted values produces.
    fn chain(values: impl IntoIterator<Item = T>, leftward: bool) -> Self {
        let mut tree = Self::new();
        for value in values {
            let node = tree.nodes.len();
            let parent = node.checked_sub(1).unwrap_or(NIL);
            tree.nodes.push(Node::new(value, parent));
            if parent == NIL {
                tree.root = node;
            } else if leftward {
                tree.nodes[parent].left = node;
            } else {
                tree.nodes[parent].right = node;
            }
        }
        tree
    }

    /// Asserts that every parent link matches the child slot pointing at it.
    fn assert_links(&self) {
        if self.root == NIL {
            assert!(self.nodes.is_empty());
            return;
        }
        assert_eq!(self.parent(self.root), NIL);
        for (id, node) in self.nodes.iter().enumerate() {
            for child in [node.left, node.right] {
                if child != NIL {
                    assert_eq!(self.parent(child), id);
                }
            }
            if node.parent != NIL {
                let parent = &self.nodes[node.parent];
                assert!(parent.left == id || parent.right == id);
            }
        }
    }
}
