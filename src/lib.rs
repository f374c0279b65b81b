//! A height-balanced Binary Search Tree (BST) built from sorted input,
//! with explicit, on-demand rebalancing.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a content
//! value and sometimes has child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! This crate does not self-balance on every insert or delete. Instead, a
//! balanced shape comes from construction: sorting the input (see [`sort`])
//! and recursively picking the middle element as each subtree root gives a
//! tree of height `O(lg N)`. Plain inserts may then skew the tree, and
//! [`tree::Tree::rebalance`] rebuilds a fresh balanced tree on demand.
//!
//! BSTs naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree; [`tree::Tree::in_order`]
//! does exactly that, alongside level-order, pre-order, and post-order
//! traversals.

#![deny(missing_docs)]

pub mod sort;
pub mod tree;
