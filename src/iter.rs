use std::iter::FusedIterator;

use crate::{AvlTree, Node};

impl AvlTree {
    /// Gets an iterator over the entries of the tree, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use equilibre::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(2, "b".to_string()).unwrap();
    /// tree.insert(1, "a".to_string()).unwrap();
    ///
    /// let entries: Vec<_> = tree.iter().collect();
    /// assert_eq!(entries, [(1, "a"), (2, "b")]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            front: Vec::new(),
            back: Vec::new(),
            len: self.len,
        };
        iter.descend_left(self.root());
        iter.descend_right(self.root());
        iter
    }

    /// Gets an iterator over the keys of the tree, in sorted order.
    pub fn keys(&self) -> Keys<'_> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the tree, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use equilibre::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(2, "goodbye".to_string()).unwrap();
    /// tree.insert(1, "hello".to_string()).unwrap();
    ///
    /// let values: Vec<&str> = tree.values().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_> {
        Values { inner: self.iter() }
    }
}

/// In-order iterator over borrowed entries.
///
/// Each end keeps its own stack of pending ancestors; `len` stops the two
/// ends from crossing.
pub struct Iter<'a> {
    front: Vec<&'a Node>,
    back: Vec<&'a Node>,
    len: usize,
}

impl<'a> Iter<'a> {
    fn descend_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.front.push(current);
            node = current.left();
        }
    }

    fn descend_right(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.back.push(current);
            node = current.right();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i64, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.front.pop()?;
        self.descend_left(node.right());
        self.len -= 1;
        Some((node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.back.pop()?;
        self.descend_right(node.left());
        self.len -= 1;
        Some((node.key, &node.value))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.len
    }
}

impl FusedIterator for Iter<'_> {}

impl Clone for Iter<'_> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
            len: self.len,
        }
    }
}

impl<'a> IntoIterator for &'a AvlTree {
    type Item = (i64, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// An iterator over the keys of an [`AvlTree`].
///
/// This `struct` is created by the [`keys`] method on [`AvlTree`].
///
/// [`keys`]: AvlTree::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Keys<'a> {
    inner: Iter<'a>,
}

impl Iterator for Keys<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<i64> {
        self.next_back()
    }

    fn min(mut self) -> Option<i64> {
        self.next()
    }

    fn max(mut self) -> Option<i64> {
        self.next_back()
    }
}

impl DoubleEndedIterator for Keys<'_> {
    fn next_back(&mut self) -> Option<i64> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl ExactSizeIterator for Keys<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Keys<'_> {}

/// An iterator over the values of an [`AvlTree`], in key order.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Values<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a str> {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Values<'a> {
    fn next_back(&mut self) -> Option<&'a str> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl ExactSizeIterator for Values<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Values<'_> {}

/// An owning iterator over the entries of an [`AvlTree`], sorted by key.
pub struct IntoIter(AvlTree);

impl IntoIterator for AvlTree {
    type Item = (i64, String);
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

impl Iterator for IntoIter {
    type Item = (i64, String);

    fn next(&mut self) -> Option<(i64, String)> {
        self.0.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }

    fn last(mut self) -> Option<(i64, String)> {
        self.next_back()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<(i64, String)> {
        self.0.pop_last()
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl FusedIterator for IntoIter {}
