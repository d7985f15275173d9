use super::{Link, Node};

/// An in-order walk over borrowed nodes.
///
/// The stack holds the nodes whose left subtrees have been entered but which have not been
/// yielded yet; its top is always the next node in order.
pub struct Iter<'a, K: 'a, V: 'a> {
    stack: Vec<&'a Node<K, V>>,
    size: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub fn new(root: &'a Link<K, V>, size: usize) -> Self {
        let mut it = Iter { stack: Vec::new(), size: size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut link: &'a Link<K, V>) {
        while let Some(ref node) = *link {
            self.stack.push(&**node);
            link = &node.left;
        }
    }

    pub fn has_next(&self) -> bool { !self.stack.is_empty() }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self { Iter { stack: self.stack.clone(), size: self.size } }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<&'a Node<K, V>> {
        let node = self.stack.pop()?;
        self.descend(&node.right);
        self.size -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

unsafe impl<'a, K, V> Send for Iter<'a, K, V> where K: Sync, V: Sync {}
unsafe impl<'a, K, V> Sync for Iter<'a, K, V> where K: Sync, V: Sync {}

/// An in-order walk that takes ownership of the nodes, freeing each as it is yielded.
pub struct IntoIter<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    size: usize,
}

impl<K, V> IntoIter<K, V> {
    pub fn new(root: Link<K, V>, size: usize) -> Self {
        let mut it = IntoIter { stack: Vec::new(), size: size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let mut node = self.stack.pop()?;
        self.descend(node.right.take());
        self.size -= 1;
        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

// Back-references inside the detached nodes are never followed.
unsafe impl<K, V> Send for IntoIter<K, V> where K: Send, V: Send {}
unsafe impl<K, V> Sync for IntoIter<K, V> where K: Sync, V: Sync {}
