//! A singly linked list with `O(1)` pushes at both ends and a merge sort.
//!
//! The trees use it as an explicit stack (see [`Tree::depth`][crate::tree::Tree::depth]) and the
//! graph keeps one sorted list of edge ends per vertex.
//!
//! # Examples
//!
//! ```
//! use classic_ds::list::SingleList;
//!
//! let mut list = SingleList::new();
//! list.push_front(1);
//! list.push_back(2);
//! list.push_front(0);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
//! assert_eq!(list.pop_front(), Some(0));
//! assert_eq!(list.len(), 2);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A singly linked list. Nodes are allocated with `Box`, leaked into raw links and freed again as
/// they are popped, so the list can keep a pointer to its last node for `push_back`.
pub struct SingleList<T> {
    head: Link<T>,
    // Always points at the last node reachable from `head`, or is `None` when `head` is.
    tail: Link<T>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node and hands ownership of it to the returned link.
    fn new_leaked(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next })))
    }
}

// SAFETY: the list owns its nodes exactly like a `Box` chain would, so it can move between threads
// or be shared whenever `T` can.
unsafe impl<T: Send> Send for SingleList<T> {}
unsafe impl<T: Sync> Sync for SingleList<T> {}

impl<T> Default for SingleList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SingleList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> SingleList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// The number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first value, if any.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by this list and we hold `&self`, so nothing is
        // writing to it.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// The first value, if any, mutably.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `front`, and `&mut self` makes the returned reference unique.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// The last value, if any.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is a live node owned by this list. See `front`.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Adds `value` before the first value.
    pub fn push_front(&mut self, value: T) {
        let node = Node::new_leaked(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds `value` after the last value.
    pub fn push_back(&mut self, value: T) {
        let node = Node::new_leaked(value, None);
        match self.tail {
            // SAFETY: `tail` is the last live node of this list and `&mut self` means nothing else
            // references it.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the first value.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|node| {
            // SAFETY: `head` was allocated by `Node::new_leaked` and is unlinked right here, so it
            // is freed exactly once.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            node.value
        })
    }

    /// Removes every value, one node at a time.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// A forward iterator over references to the values.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// A forward iterator over mutable references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            remaining: self.len,
            marker: PhantomData,
        }
    }

    /// A cursor positioned on the first value (or past the end for an empty list) which can
    /// insert values in the middle of the list.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            current: self.head,
            list: self,
        }
    }

    /// Sorts the list in place with a stable merge sort.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        // SAFETY: the chain from `head` holds exactly `len` nodes owned by this list and `&mut
        // self` means nothing else references them.
        self.head = unsafe { merge_sort(self.head, self.len) };
        self.tail = self.last_node();
    }

    /// Returns a sorted copy of this list, leaving `self` unchanged.
    pub fn sorted(&self) -> Self
    where
        T: Ord + Clone,
    {
        let mut sorted = self.clone();
        sorted.sort();
        sorted
    }

    fn last_node(&self) -> Link<T> {
        let mut node = self.head?;
        // SAFETY: every link reachable from `head` is a live node owned by this list.
        while let Some(next) = unsafe { (*node.as_ptr()).next } {
            node = next;
        }
        Some(node)
    }
}

/// Splits off the first `len / 2` nodes of `head`, sorts both halves recursively and merges them.
/// The recursion is `O(lg len)` deep.
///
/// # Safety
///
/// `head` must start a chain of exactly `len` live nodes which nothing else references.
unsafe fn merge_sort<T: Ord>(head: Link<T>, len: usize) -> Link<T> {
    if len < 2 {
        return head;
    }
    let mid = len / 2;

    // SAFETY: the chain holds `len > mid` nodes, so the first `mid` links are all live.
    let back = unsafe {
        let mut last_front = head?;
        for _ in 1..mid {
            last_front = (*last_front.as_ptr()).next?;
        }
        (*last_front.as_ptr()).next.take()
    };

    // SAFETY: the chain is now cut into two disjoint chains of `mid` and `len - mid` nodes.
    unsafe {
        let front = merge_sort(head, mid);
        let back = merge_sort(back, len - mid);
        merge(front, back)
    }
}

/// Merges two sorted chains. Equal values keep `front` first.
///
/// # Safety
///
/// `front` and `back` must start disjoint, `None`-terminated chains of live nodes which nothing
/// else references.
unsafe fn merge<T: Ord>(mut front: Link<T>, mut back: Link<T>) -> Link<T> {
    let mut merged = None;
    let mut last: Link<T> = None;

    // SAFETY: every node touched here belongs to one of the two chains the caller handed over.
    unsafe {
        while let (Some(f), Some(b)) = (front, back) {
            let node = if (*b.as_ptr()).value < (*f.as_ptr()).value {
                back = (*b.as_ptr()).next;
                b
            } else {
                front = (*f.as_ptr()).next;
                f
            };
            match last {
                Some(last) => (*last.as_ptr()).next = Some(node),
                None => merged = Some(node),
            }
            last = Some(node);
        }

        let rest = front.or(back);
        match last {
            Some(last) => (*last.as_ptr()).next = rest,
            None => merged = rest,
        }
    }
    merged
}

impl<T: Clone> Clone for SingleList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SingleList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SingleList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SingleList<T> {}

impl<T> FromIterator<T> for SingleList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SingleList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// Borrowing iterator returned by [`SingleList::iter`].
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the list is borrowed for `'a`, so its nodes stay alive and unmodified.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutably borrowing iterator returned by [`SingleList::iter_mut`].
pub struct IterMut<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the list is mutably borrowed for `'a` and each node is yielded once, so the
            // returned references never alias.
            let node = unsafe { &mut *node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Owning iterator which pops values off the front of the list.
pub struct IntoIter<T>(SingleList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for SingleList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a SingleList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SingleList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A position in a [`SingleList`] that can insert values around itself. The cursor is either on a
/// value or past the end of the list.
pub struct CursorMut<'a, T> {
    // A node owned by `list`. `None` means "past the end".
    current: Link<T>,
    list: &'a mut SingleList<T>,
}

impl<T> CursorMut<'_, T> {
    /// The value under the cursor, or `None` past the end.
    pub fn current(&mut self) -> Option<&mut T> {
        // SAFETY: `current` is a live node of `self.list`, which is mutably borrowed for the
        // cursor's lifetime. The returned reference borrows `self` so it can't outlive a move.
        self.current.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Moves to the next value. Moving past the end stays past the end.
    pub fn move_next(&mut self) {
        // SAFETY: see `current`.
        self.current = self.current.and_then(|node| unsafe { (*node.as_ptr()).next });
    }

    /// Inserts `value` in front of the value under the cursor, leaving the cursor on `value`.
    /// Past the end this appends and the cursor stays past the end.
    ///
    /// The old value moves into a new node right after the current one, so the cursor does not
    /// need to know its predecessor.
    pub fn insert_before(&mut self, value: T) {
        let Some(node) = self.current else {
            self.list.push_back(value);
            return;
        };
        // SAFETY: see `current`.
        let old = unsafe { std::mem::replace(&mut (*node.as_ptr()).value, value) };
        self.link_after(node, old);
    }

    /// Inserts `value` after the value under the cursor without moving the cursor. Past the end
    /// this appends.
    pub fn insert_after(&mut self, value: T) {
        match self.current {
            Some(node) => self.link_after(node, value),
            None => self.list.push_back(value),
        }
    }

    fn link_after(&mut self, node: NonNull<Node<T>>, value: T) {
        // SAFETY: `node` is a live node of `self.list` (see `current`).
        unsafe {
            let next = (*node.as_ptr()).next;
            let new_node = Node::new_leaked(value, next);
            (*node.as_ptr()).next = Some(new_node);
            if next.is_none() {
                self.list.tail = Some(new_node);
            }
        }
        self.list.len += 1;
    }
}
