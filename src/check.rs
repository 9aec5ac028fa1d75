use crate::{AvlTree, Node, Violation};

impl AvlTree {
    /// Walks the whole tree and checks every structural invariant: strict key
    /// ordering, `|height(left) - height(right)| <= 1` at every node, cached
    /// heights and balance factors matching the children, and `len()`
    /// matching the number of reachable nodes.
    ///
    /// This is O(n); it exists for tests and debugging.
    pub fn verify(&self) -> Result<(), Violation> {
        let mut found = 0;
        check(self.root(), None, None, &mut found)?;
        if found != self.len() {
            return Err(Violation::Size {
                reported: self.len(),
                found,
            });
        }
        Ok(())
    }
}

/// Returns the actual height of the subtree at `node`, every key of which
/// must lie strictly between `lower` and `upper`.
fn check(
    node: Option<&Node>,
    lower: Option<i64>,
    upper: Option<i64>,
    found: &mut usize,
) -> Result<i32, Violation> {
    let Some(node) = node else {
        return Ok(-1);
    };
    *found += 1;
    for bound in [lower.filter(|b| node.key <= *b), upper.filter(|b| node.key >= *b)] {
        if let Some(parent) = bound {
            return Err(Violation::Ordering {
                parent,
                key: node.key,
            });
        }
    }

    let left = check(node.left(), lower, Some(node.key), found)?;
    let right = check(node.right(), Some(node.key), upper, found)?;
    let actual = 1 + left.max(right);
    if node.height != actual {
        return Err(Violation::Height {
            key: node.key,
            cached: node.height,
            actual,
        });
    }
    if node.balance_factor != right - left {
        return Err(Violation::BalanceFactor {
            key: node.key,
            cached: node.balance_factor,
            actual: right - left,
        });
    }
    if (right - left).abs() > 1 {
        return Err(Violation::Unbalanced {
            key: node.key,
            left,
            right,
        });
    }
    Ok(actual)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn leaf(key: i64) -> Box<Node> {
        Box::new(Node::new(key, key.to_string()))
    }

    fn tree_with(root: Box<Node>, len: usize) -> AvlTree {
        let mut tree = AvlTree::new();
        tree.root = Some(root);
        tree.len = len;
        tree
    }

    #[test]
    fn empty_tree_is_valid() {
        assert_eq!(Ok(()), AvlTree::new().verify());
    }

    #[test]
    fn detects_misordered_key() {
        let mut root = leaf(5);
        root.left = Some(leaf(7));
        root.update();
        assert_eq!(
            Err(Violation::Ordering { parent: 5, key: 7 }),
            tree_with(root, 2).verify()
        );

        // Valid against its parent, invalid against its grandparent.
        let mut left = leaf(2);
        left.right = Some(leaf(9));
        left.update();
        let mut root = leaf(5);
        root.left = Some(left);
        root.right = Some(leaf(6));
        root.update();
        assert_eq!(
            Err(Violation::Ordering { parent: 5, key: 9 }),
            tree_with(root, 4).verify()
        );
    }

    #[test]
    fn detects_duplicate_key() {
        let mut root = leaf(5);
        root.right = Some(leaf(5));
        root.update();
        assert_eq!(
            Err(Violation::Ordering { parent: 5, key: 5 }),
            tree_with(root, 2).verify()
        );
    }

    #[test]
    fn detects_stale_height() {
        let mut root = leaf(5);
        root.left = Some(leaf(1));
        assert_eq!(
            Err(Violation::Height {
                key: 5,
                cached: 0,
                actual: 1
            }),
            tree_with(root, 2).verify()
        );
    }

    #[test]
    fn detects_stale_balance_factor() {
        let mut root = leaf(5);
        root.left = Some(leaf(1));
        root.update();
        root.balance_factor = 0;
        assert_eq!(
            Err(Violation::BalanceFactor {
                key: 5,
                cached: 0,
                actual: -1
            }),
            tree_with(root, 2).verify()
        );
    }

    #[test]
    fn detects_imbalance() {
        let mut middle = leaf(2);
        middle.left = Some(leaf(1));
        middle.update();
        let mut root = leaf(3);
        root.left = Some(middle);
        root.update();
        assert_eq!(
            Err(Violation::Unbalanced {
                key: 3,
                left: 1,
                right: -1
            }),
            tree_with(root, 3).verify()
        );
    }

    #[test]
    fn detects_wrong_len() {
        assert_eq!(
            Err(Violation::Size {
                reported: 2,
                found: 1
            }),
            tree_with(leaf(1), 2).verify()
        );
    }
}
