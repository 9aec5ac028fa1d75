use std::{cmp::Ordering::*, fmt::Debug, ops::Index};

use tracing::debug;

use crate::{AvlTree, Config, Error, Node, Result, node};

impl Default for AvlTree {
    fn default() -> Self {
        Self::new()
    }
}

impl AvlTree {
    pub const fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub const fn with_config(config: Config) -> Self {
        AvlTree {
            root: None,
            len: 0,
            config,
        }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree: -1 when empty, 0 for a single entry.
    pub fn height(&self) -> i32 {
        node::height(&self.root)
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: i64) -> Option<&str> {
        let mut node = self.root.as_deref();
        while let Some(candidate) = node {
            match key.cmp(&candidate.key) {
                Equal => return Some(&candidate.value),
                Greater => node = candidate.right.as_deref(),
                Less => node = candidate.left.as_deref(),
            }
        }
        None
    }

    /// Inserts a new entry.
    ///
    /// Nothing is modified when this fails: an existing key is refused with
    /// [`Error::DuplicateKey`] rather than overwritten, and an empty value is
    /// refused with [`Error::InvalidInput`] unless the tree's [`Config`]
    /// accepts empty values.
    ///
    /// # Examples
    ///
    /// ```
    /// use equilibre::{AvlTree, Error};
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.insert(42, "forty two".to_string()), Ok(()));
    /// assert_eq!(tree.insert(42, "again".to_string()), Err(Error::DuplicateKey(42)));
    /// assert_eq!(tree.get(42), Some("forty two"));
    /// ```
    pub fn insert(&mut self, key: i64, value: String) -> Result<()> {
        if let Err(err) = self.config.check_value(&value) {
            debug!(key, %err, "rejected insert");
            return Err(err);
        }
        if self.contains_key(key) {
            debug!(key, "rejected duplicate key");
            return Err(Error::DuplicateKey(key));
        }
        self.root = Some(Node::insert(self.root.take(), key, value));
        self.len += 1;
        Ok(())
    }

    /// Removes `key`, returning whether it was present.
    pub fn remove(&mut self, key: i64) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key`, returning the value it held.
    pub fn take(&mut self, key: i64) -> Option<String> {
        if !self.contains_key(key) {
            return None;
        }
        let root = self.root.take()?;
        let (root, removed) = Node::remove(root, key);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn first_key_value(&self) -> Option<(i64, &str)> {
        let first = self.root.as_deref()?.min_node();
        Some((first.key, &first.value))
    }

    pub fn last_key_value(&self) -> Option<(i64, &str)> {
        let last = self.root.as_deref()?.max_node();
        Some((last.key, &last.value))
    }

    pub fn pop_first(&mut self) -> Option<(i64, String)> {
        let key = self.root.as_deref()?.min_node().key;
        self.take(key).map(|value| (key, value))
    }

    pub fn pop_last(&mut self) -> Option<(i64, String)> {
        let key = self.root.as_deref()?.max_node().key;
        self.take(key).map(|value| (key, value))
    }

    /// Copies the values out in key order.
    pub fn to_vec(&self) -> Vec<String> {
        fn walk(node: Option<&Node>, out: &mut Vec<String>) {
            if let Some(node) = node {
                walk(node.left(), out);
                out.push(node.value.clone());
                walk(node.right(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len);
        walk(self.root(), &mut out);
        out
    }
}

impl Index<i64> for AvlTree {
    type Output = str;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `AvlTree`.
    #[inline]
    fn index(&self, key: i64) -> &str {
        self.get(key).expect("no entry found for key")
    }
}

impl Debug for AvlTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
