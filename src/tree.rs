//! An ordered map based on a red-black tree.

use compare::{Compare, Natural};
use log::debug;
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::io;
use std::iter;
use std::ops;
use std::ptr;
use super::error::Exhausted;
use super::node::{self, Left, Right};

/// An ordered map based on a red-black tree.
///
/// Inserting never rejects or replaces: a key that compares equal to one already present is
/// stored in a new node placed in front of the existing ones, and lookups return whichever
/// equal entry the descent from the root reaches first.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct RedBlackTree<K, V, C = Natural<K>> where C: Compare<K> {
    root: node::Link<K, V>,
    len: usize,
    cmp: C,
}

impl<K, V> RedBlackTree<K, V> where K: Ord {
    /// Creates an empty tree ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { RedBlackTree::with_cmp(compare::natural()) }
}

impl<K, V, C> RedBlackTree<K, V, C> where C: Compare<K> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::with_cmp(natural().rev());
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.keys().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        RedBlackTree { root: None, len: 0, cmp: cmp }
    }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(2, "b");
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of entries in the tree, counting entries with equal keys separately.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2, "b");
    /// tree.insert(2, "bb");
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns the number of edges on the longest path from the root to a leaf.
    ///
    /// Both an empty tree and a tree with a single entry have height 0. After any sequence of
    /// insertions the height is at most `2 * log2(len + 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(1, ());
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Ascending inserts would degrade an unbalanced tree into a list.
    /// for key in 2..8 { tree.insert(key, ()); }
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize { node::height(&self.root).saturating_sub(1) }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    ///
    /// tree.clear();
    ///
    /// assert_eq!(tree.len(), 0);
    /// assert_eq!(tree.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Inserts an entry into the tree.
    ///
    /// The entry is always added, even if an equal key is already present. The new entry is
    /// ordered before the existing ones, which keep shadowing it in lookups that reach them
    /// first.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    ///
    /// tree.insert(1, "a");
    /// tree.insert(1, "b");
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.get(&1), Some(&"a"));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [(&1, &"b"), (&1, &"a")]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        node::insert(&mut self.root, &self.cmp, key, value);
        self.len += 1;
    }

    /// Checks if the tree contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    /// assert!(!tree.contains_key(&1));
    /// tree.insert(1, "a");
    /// assert!(tree.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    /// assert_eq!(tree.get(&1), None);
    /// tree.insert(1, "a");
    /// assert_eq!(tree.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::get(&self.root, &self.cmp, key).map(|node| node.value())
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    /// tree.insert(1, "a");
    ///
    /// if let Some(value) = tree.get_mut(&1) { *value = "b"; }
    ///
    /// assert_eq!(tree.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        node::get_mut(&mut self.root, &self.cmp, key)
    }

    /// Returns the entry with the greatest key, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.max(), Some((&3, &"c")));
    /// ```
    pub fn max(&self) -> Option<(&K, &V)> {
        node::extremum::<Right, _, _>(&self.root).map(|node| (node.key(), node.value()))
    }

    /// Returns the entry with the least key, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// assert_eq!(tree.min(), Some((&1, &"a")));
    /// ```
    pub fn min(&self) -> Option<(&K, &V)> {
        node::extremum::<Left, _, _>(&self.root).map(|node| (node.key(), node.value()))
    }

    /// Returns an iterator over the tree's entries in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// tree.insert(3, "c");
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<K, V> { Iter(node::Iter::new(&self.root, self.len)) }

    /// Returns a cursor over the tree's keys in non-decreasing order.
    ///
    /// The cursor borrows the tree, so the tree cannot be modified while the cursor is live.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{Exhausted, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    ///
    /// tree.insert("b", 2);
    /// tree.insert("a", 1);
    ///
    /// let mut keys = tree.keys();
    /// assert_eq!(keys.advance(), Ok(&"a"));
    /// assert!(keys.has_next());
    /// assert_eq!(keys.advance(), Ok(&"b"));
    /// assert!(!keys.has_next());
    /// assert_eq!(keys.advance(), Err(Exhausted));
    /// ```
    pub fn keys(&self) -> Keys<K, V> { Keys(node::Iter::new(&self.root, self.len)) }

    /// Writes the tree's entries to the `log` facade at debug level, one record per entry in
    /// key order, each tagged with its node's color.
    ///
    /// The format is meant for people and may change.
    pub fn print(&self) where K: Debug, V: Debug {
        for node in node::Iter::new(&self.root, self.len) { debug!("{:?}", node); }
    }

    /// Writes the lines `print` would log to `out`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    ///
    /// tree.insert(1, "a");
    /// tree.insert(2, "b");
    ///
    /// let mut out = Vec::new();
    /// tree.dump(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "1 => \"a\" (black)\n2 => \"b\" (red)\n");
    /// ```
    pub fn dump<W>(&self, out: &mut W) -> io::Result<()> where W: io::Write, K: Debug, V: Debug {
        for node in node::Iter::new(&self.root, self.len) { writeln!(out, "{:?}", node)?; }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &node::Link<K, V> { &self.root }

    #[cfg(test)]
    pub(crate) fn root_mut(&mut self) -> &mut node::Link<K, V> { &mut self.root }
}

impl<K, V, C> Clone for RedBlackTree<K, V, C> where K: Clone, V: Clone, C: Compare<K> + Clone {
    fn clone(&self) -> Self {
        RedBlackTree {
            root: node::clone_link(&self.root, ptr::null_mut()),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<K, V, C> Debug for RedBlackTree<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for RedBlackTree<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { RedBlackTree::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for RedBlackTree<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> iter::FromIterator<(K, V)> for RedBlackTree<K, V, C>
    where C: Compare<K> + Default {

    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut tree: RedBlackTree<K, V, C> = Default::default();
        tree.extend(it);
        tree
    }
}

impl<K, V, C> Hash for RedBlackTree<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<K, V, C, Q: ?Sized> ops::Index<&Q> for RedBlackTree<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a RedBlackTree<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

impl<K, V, C> IntoIterator for RedBlackTree<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Returns an iterator that consumes the tree, yielding its entries in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = redblack::RedBlackTree::new();
    ///
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    ///
    /// assert_eq!(tree.into_iter().collect::<Vec<_>>(), [(1, "a"), (2, "b")]);
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter(node::IntoIter::new(self.root.take(), self.len))
    }
}

impl<K, V, C> PartialEq for RedBlackTree<K, V, C>
    where K: PartialEq, V: PartialEq, C: Compare<K> {

    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, C> Eq for RedBlackTree<K, V, C> where K: Eq, V: Eq, C: Compare<K> {}

// Parent back-references are only followed through `&mut self`.
unsafe impl<K, V, C> Send for RedBlackTree<K, V, C> where K: Send, V: Send, C: Compare<K> + Send {}
unsafe impl<K, V, C> Sync for RedBlackTree<K, V, C> where K: Sync, V: Sync, C: Compare<K> + Sync {}

/// An iterator that consumes the tree.
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut tree = redblack::RedBlackTree::new();
///
/// tree.insert(2, "b");
/// tree.insert(1, "a");
///
/// for (key, value) in tree {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct IntoIter<K, V>(node::IntoIter<K, V>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An iterator over the tree's entries in key order.
///
/// Acquire through [`RedBlackTree::iter`](struct.RedBlackTree.html#method.iter) or the
/// `IntoIterator` trait.
pub struct Iter<'a, K: 'a, V: 'a>(node::Iter<'a, K, V>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.0.next().map(|node| (node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// A cursor over the tree's keys in non-decreasing order.
///
/// Besides implementing `Iterator`, the cursor offers `has_next` and `advance`; advancing an
/// exhausted cursor is an error rather than a sentinel.
///
/// Acquire through [`RedBlackTree::keys`](struct.RedBlackTree.html#method.keys).
pub struct Keys<'a, K: 'a, V: 'a>(node::Iter<'a, K, V>);

impl<'a, K, V> Keys<'a, K, V> {
    /// Checks if the cursor has keys left.
    pub fn has_next(&self) -> bool { self.0.has_next() }

    /// Returns the next key, or `Exhausted` if every key has been visited.
    pub fn advance(&mut self) -> Result<&'a K, Exhausted> { self.next().ok_or(Exhausted) }
}

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self { Keys(self.0.clone()) }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next().map(|node| node.key()) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}
