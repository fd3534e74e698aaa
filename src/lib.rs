//! This crate exposes a handful of classic in-memory data structures, mostly for educational
//! purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. The most important invariants of a BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have a
//!    value less than its own value.
//! 2. For every node in a BST, all the nodes in its right subtree have a
//!    value greater than its own value.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root to a leaf). Inserting values in ascending order into a plain BST turns it
//! into a chain, so [`tree::BinaryTree`] degrades to `O(N)`. [`tree::RedBlackTree`] recolors and
//! rotates nodes after every insert and remove to keep the height within `2 lg(N + 1)`.
//!
//! Both trees keep their nodes in one arena and link them with indices, including a link back to
//! each node's parent. That lets the [pre-order](tree::PreOrder), [in-order](tree::InOrder), and
//! [post-order](tree::PostOrder) iterators walk the tree without a stack.
//!
//! ## The rest
//!
//! - [`list::SingleList`]: a singly linked list with a stable merge sort.
//! - [`set::Set`]: a set over either tree with union, difference, and intersection.
//! - [`graph::AdjacencyList`]: an oriented or unoriented graph with sorted adjacency rows.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod graph;
pub mod list;
pub mod set;
pub mod tree;
