use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons an [`AvlTree::insert`](crate::AvlTree::insert) is refused.
///
/// A refused insert never touches the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("key {0} already exists")]
    DuplicateKey(i64),
}

/// A broken structural invariant, as reported by
/// [`AvlTree::verify`](crate::AvlTree::verify).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("key {key} is out of order below key {parent}")]
    Ordering { parent: i64, key: i64 },
    #[error("node {key} is unbalanced: left height {left}, right height {right}")]
    Unbalanced { key: i64, left: i32, right: i32 },
    #[error("node {key} caches height {cached}, actual height is {actual}")]
    Height { key: i64, cached: i32, actual: i32 },
    #[error("node {key} caches balance factor {cached}, actual factor is {actual}")]
    BalanceFactor { key: i64, cached: i32, actual: i32 },
    #[error("tree reports {reported} entries but holds {found}")]
    Size { reported: usize, found: usize },
}
