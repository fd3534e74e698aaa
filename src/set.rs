//! A set of unique values backed by a [`Tree`].
//!
//! The backing tree is picked by the `B` parameter and defaults to a red-black tree.
//!
//! # Examples
//!
//! ```
//! use classic_ds::set::Set;
//!
//! let odds: Set<_> = [1, 3, 5, 7].into_iter().collect();
//! let small: Set<_> = (1..=4).collect();
//!
//! let union = &odds + &small;
//! let difference = &odds - &small;
//! let intersection = &odds & &small;
//!
//! assert_eq!(union.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 7]);
//! assert_eq!(difference.iter().copied().collect::<Vec<_>>(), [5, 7]);
//! assert_eq!(intersection.iter().copied().collect::<Vec<_>>(), [1, 3]);
//! ```

use std::fmt;

use crate::list::SingleList;
use crate::tree::{Balance, InOrder, RedBlack, Tree};

/// A set of unique, ordered values.
pub struct Set<T, B = RedBlack> {
    tree: Tree<T, B>,
}

impl<T, B> Default for Set<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> Set<T, B> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// The number of values in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the set has no values.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The values in ascending order.
    pub fn iter(&self) -> InOrder<'_, T, B> {
        self.tree.iter()
    }
}

impl<T, B> Set<T, B>
where
    T: Ord,
    B: Balance,
{
    /// Adds `value`. Returns `false` if it was already present.
    ///
    /// Sets also implement `std::ops::Add` on references for union. With that trait imported,
    /// `set.add(value)` resolves to the operator, so write `Set::add(&mut set, value)` there.
    pub fn add(&mut self, value: T) -> bool {
        self.tree.insert(value)
    }

    /// Removes `value`. Returns `false` if it wasn't present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.tree.remove(value)
    }

    /// Whether `value` is in the set.
    pub fn find(&self, value: &T) -> bool {
        self.tree.find(value)
    }

    /// Adds every value of `other`.
    pub fn add_all(&mut self, other: &Self)
    where
        T: Clone,
    {
        other.tree.in_order_traverse(|v| {
            self.add(v.clone());
        });
    }

    /// Removes every value of `other`.
    pub fn remove_all(&mut self, other: &Self) {
        other.tree.in_order_traverse(|v| {
            self.remove(v);
        });
    }

    /// Keeps only the values that are also in `other`.
    pub fn retain_common(&mut self, other: &Self)
    where
        T: Clone,
    {
        let mut to_remove = SingleList::new();
        self.tree.in_order_traverse(|v| {
            if !other.find(v) {
                to_remove.push_back(v.clone());
            }
        });
        for v in &to_remove {
            self.remove(v);
        }
    }
}

impl<T, B> Clone for Set<T, B>
where
    T: Ord + Clone,
    B: Balance,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.tree.clone_from(&source.tree);
    }
}

impl<T: fmt::Debug, B> fmt::Debug for Set<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

impl<T: PartialEq, B> PartialEq for Set<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<T: Eq, B> Eq for Set<T, B> {}

impl<T, B> FromIterator<T> for Set<T, B>
where
    T: Ord,
    B: Balance,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<T, B> Extend<T> for Set<T, B>
where
    T: Ord,
    B: Balance,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<'a, T, B> IntoIterator for &'a Set<T, B> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Union.
impl<T, B> std::ops::Add for &Set<T, B>
where
    T: Ord + Clone,
    B: Balance,
{
    type Output = Set<T, B>;

    fn add(self, other: Self) -> Self::Output {
        let mut result = self.clone();
        result.add_all(other);
        result
    }
}

/// Difference.
impl<T, B> std::ops::Sub for &Set<T, B>
where
    T: Ord + Clone,
    B: Balance,
{
    type Output = Set<T, B>;

    fn sub(self, other: Self) -> Self::Output {
        let mut result = self.clone();
        result.remove_all(other);
        result
    }
}

/// Intersection.
impl<T, B> std::ops::BitAnd for &Set<T, B>
where
    T: Ord + Clone,
    B: Balance,
{
    type Output = Set<T, B>;

    fn bitand(self, other: Self) -> Self::Output {
        let mut result = self.clone();
        result.retain_common(other);
        result
    }
}
