//! An AVL tree mapping `i64` keys to `String` values.
//!
//! Every node caches its height, and the balance factor derived from it,
//! so insertion and removal can restore the height-balance invariant on the
//! way back up the search path with at most a couple of rotations per level.
//!
//! # Examples
//! ```
//! use equilibre::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in 1..=5 {
//!     tree.insert(key, key.to_string()).unwrap();
//! }
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.to_vec(), ["1", "2", "3", "4", "5"]);
//!
//! assert!(tree.remove(3));
//! assert!(!tree.remove(3));
//! assert_eq!(tree.get(4), Some("4"));
//! assert!(tree.verify().is_ok());
//! ```
mod check;
mod config;
mod error;
mod iter;
mod node;
mod tree;

pub use config::{Config, EmptyValues};
pub use error::{Error, Result, Violation};
pub use iter::{IntoIter, Iter, Keys, Values};

/// An owned, possibly empty, subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A single entry of the tree together with its local balance state.
///
/// Nodes own their children exclusively; there is no parent pointer.
#[derive(Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: i64,
    pub(crate) value: String,
    pub(crate) height: i32,
    pub(crate) balance_factor: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

/// An ordered map over `i64` keys, balanced as an AVL tree.
#[derive(Clone, PartialEq, Eq)]
pub struct AvlTree {
    root: Link,
    len: usize,
    config: Config,
}
