use std::{
    cmp::{Ordering::*, max},
    fmt::Debug,
    mem,
};

use tracing::{debug, trace};

use super::{Link, Node};

/// Height of a possibly empty subtree; the empty subtree is -1.
#[inline(always)]
pub(crate) fn height(link: &Link) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

// Public API.
impl Node {
    pub fn new(key: i64, value: String) -> Self {
        Node {
            key,
            value,
            height: 0,
            balance_factor: 0,
            left: None,
            right: None,
        }
    }

    #[inline(always)]
    pub fn key(&self) -> i64 {
        self.key
    }

    #[inline(always)]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Height of the subtree rooted here; a leaf is 0.
    #[inline(always)]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `height(right) - height(left)`, in `-1..=1` between public operations.
    #[inline(always)]
    pub fn balance_factor(&self) -> i32 {
        self.balance_factor
    }

    #[inline(always)]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    #[inline(always)]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// The node holding the smallest key of this subtree.
    pub fn min_node(&self) -> &Node {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    /// The node holding the largest key of this subtree.
    pub fn max_node(&self) -> &Node {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }
}

// Balancing.
impl Node {
    /// Recomputes the cached height and balance factor from the children.
    ///
    /// Must run after any change to either child and before the balance
    /// factor is read.
    #[inline(always)]
    pub(crate) fn update(&mut self) {
        let left = height(&self.left);
        let right = height(&self.right);
        self.height = 1 + max(left, right);
        self.balance_factor = right - left;
    }

    /// Restores `|balance_factor| <= 1` at this node, returning the new
    /// subtree root. Both children must already be balanced.
    pub(crate) fn balance(mut self: Box<Self>) -> Box<Self> {
        match self.balance_factor {
            -2 => {
                // Left-right case: straighten the left child first.
                if self.left.as_ref().is_some_and(|left| left.balance_factor > 0) {
                    self.left = self.left.take().map(Node::rotate_left);
                }
                self.rotate_right()
            }
            2 => {
                // Right-left case.
                if self.right.as_ref().is_some_and(|right| right.balance_factor < 0) {
                    self.right = self.right.take().map(Node::rotate_right);
                }
                self.rotate_left()
            }
            _ => self,
        }
    }

    /*
     *     n                r
     *    / \              / \
     *   a   r    -->     n   c
     *      / \          / \
     *     b   c        a   b
     */
    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = self.right.take() else {
            return self;
        };
        trace!(target: "equilibre::rotate", from = self.key, to = pivot.key, "rotate left");
        self.right = pivot.left.take();
        self.update();
        pivot.left = Some(self);
        pivot.update();
        pivot
    }

    /*
     *       n            l
     *      / \          / \
     *     l   c  -->   a   n
     *    / \              / \
     *   a   b            b   c
     */
    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = self.left.take() else {
            return self;
        };
        trace!(target: "equilibre::rotate", from = self.key, to = pivot.key, "rotate right");
        self.left = pivot.right.take();
        self.update();
        pivot.right = Some(self);
        pivot.update();
        pivot
    }
}

// Recursive insertion and removal. Both rebalance every node on the way back
// up the search path and hand the (possibly new) subtree root to the caller.
impl Node {
    /// Inserts `key` below `link`. The caller guarantees `key` is absent.
    pub(crate) fn insert(link: Link, key: i64, value: String) -> Box<Node> {
        let Some(mut node) = link else {
            return Box::new(Node::new(key, value));
        };
        match key.cmp(&node.key) {
            Less => node.left = Some(Node::insert(node.left.take(), key, value)),
            Greater => node.right = Some(Node::insert(node.right.take(), key, value)),
            // Duplicates are rejected before descending.
            Equal => return node,
        }
        node.update();
        node.balance()
    }

    /// Removes `key` from the subtree rooted at `node`, returning the new
    /// subtree and the removed value, if the key was there.
    pub(crate) fn remove(mut node: Box<Node>, key: i64) -> (Link, Option<String>) {
        let removed = match key.cmp(&node.key) {
            Less => {
                let Some(left) = node.left.take() else {
                    return (Some(node), None);
                };
                let (left, removed) = Node::remove(left, key);
                node.left = left;
                removed
            }
            Greater => {
                let Some(right) = node.right.take() else {
                    return (Some(node), None);
                };
                let (right, removed) = Node::remove(right, key);
                node.right = right;
                removed
            }
            Equal => match (node.left.take(), node.right.take()) {
                (None, right) => return (right, Some(node.value)),
                (left, None) => return (left, Some(node.value)),
                (Some(left), Some(right)) => Some(node.promote(left, right)),
            },
        };
        node.update();
        (Some(node.balance()), removed)
    }

    /// Replaces this node's entry with its predecessor or successor, taken
    /// from whichever child is taller (the right one on a tie), and returns
    /// the entry it held.
    fn promote(&mut self, left: Box<Node>, right: Box<Node>) -> String {
        let (key, value) = if left.height > right.height {
            let key = left.max_node().key;
            let (left, value) = Node::remove(left, key);
            self.left = left;
            self.right = Some(right);
            (key, value)
        } else {
            let key = right.min_node().key;
            let (right, value) = Node::remove(right, key);
            self.left = Some(left);
            self.right = right;
            (key, value)
        };
        debug!(removed = self.key, promoted = key, "promoted replacement into two-child node");
        self.key = key;
        mem::replace(&mut self.value, value.unwrap_or_default())
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}::({:?},{:?})",
            self.height, self.key, self.value
        ))
    }
}
