//! A persistent ordered set backed by a red black tree.

pub mod red_black_tree;
