//! Ordered containers built on a red-black tree, plus the small sequential containers that
//! accompany it.
//!
//! [`RedBlackTree`](tree/struct.RedBlackTree.html) is an ordered map that keeps its height
//! logarithmic in the number of entries by recoloring and rotating after every insertion.
//! [`List`](list/struct.List.html), [`Stack`](list/struct.Stack.html) and
//! [`Queue`](list/struct.Queue.html) are singly-linked sequences.
//!
//! None of the containers synchronize internally; share them across threads the way you
//! would share a `Vec`.

#![warn(missing_docs)]

mod node;

pub mod error;
pub mod list;
pub mod tree;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use error::Exhausted;
pub use list::{List, Queue, Stack};
pub use tree::RedBlackTree;
