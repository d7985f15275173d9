mod balance;
mod iter;


use compare::Compare;
use std::cmp::{max, Ordering::*};
use std::fmt::{self, Debug};
use std::ptr;

pub use self::iter::{IntoIter, Iter};

pub type Link<K, V> = Option<Box<Node<K, V>>>;

pub trait LinkExt: Sized {
    type K;
    type V;
    fn as_node_ref(&self) -> Option<&Node<Self::K, Self::V>>;
    fn as_node_ptr(&mut self) -> *mut Node<Self::K, Self::V>;
}

impl<K, V> LinkExt for Link<K, V> {
    type K = K;
    type V = V;

    fn as_node_ref(&self) -> Option<&Node<K, V>> { self.as_deref() }

    fn as_node_ptr(&mut self) -> *mut Node<K, V> {
        self.as_deref_mut().map_or(ptr::null_mut(), |node| node as *mut _)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self { Color::Red => "red", Color::Black => "black" })
    }
}

pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    // Observer only: the owning edge runs from the parent (or the tree) down.
    // Null for the root.
    parent: *mut Node<K, V>,
    // Cache of which side of `parent` owns this node; rewritten on every relink.
    is_left: bool,
    color: Color,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: *mut Node<K, V>, is_left: bool, color: Color) -> Self {
        Node { left: None, right: None, parent: parent, is_left: is_left, color: color,
               key: key, value: value }
    }

    pub fn key(&self) -> &K { &self.key }

    pub fn value(&self) -> &V { &self.value }

    pub fn color(&self) -> Color { self.color }

    fn is_red(&self) -> bool { self.color == Color::Red }
}

impl<K, V> Debug for Node<K, V> where K: Debug, V: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} => {:?} ({})", self.key, self.value, self.color)
    }
}

/// Deep-copies a subtree, pointing the copy's back-references at the copy.
pub fn clone_link<K, V>(link: &Link<K, V>, parent: *mut Node<K, V>) -> Link<K, V>
    where K: Clone, V: Clone {

    link.as_ref().map(|node| {
        let mut copy = Box::new(Node::new(node.key.clone(), node.value.clone(), parent,
                                          node.is_left, node.color));
        let copy_ptr: *mut Node<K, V> = &mut *copy;
        copy.left = clone_link(&node.left, copy_ptr);
        copy.right = clone_link(&node.right, copy_ptr);
        copy
    })
}

/// Inserts a new entry below `root` and restores the red-black invariants.
///
/// Keys comparing equal to an existing key are routed left, so the new node is placed
/// in front of every node already holding that key.
pub fn insert<K, V, C>(root: &mut Link<K, V>, cmp: &C, key: K, value: V) where C: Compare<K> {
    let mut parent: *mut Node<K, V> = match *root {
        None => {
            *root = Some(Box::new(Node::new(key, value, ptr::null_mut(), false, Color::Black)));
            return;
        }
        Some(ref mut node) => &mut **node,
    };

    let leaf = loop {
        let is_left = !cmp.compares_gt(&key, unsafe { &(*parent).key });
        let link = unsafe { if is_left { &mut (*parent).left } else { &mut (*parent).right } };

        match *link {
            Some(ref mut child) => parent = &mut **child,
            None => {
                let mut node = Box::new(Node::new(key, value, parent, is_left, Color::Red));
                let node_ptr: *mut Node<K, V> = &mut *node;
                *link = Some(node);
                break node_ptr;
            }
        }
    };

    unsafe { balance::repair(root, leaf); }

    if let Some(ref mut node) = *root { node.color = Color::Black; }
}

pub fn get<'a, K, V, C, Q: ?Sized>(mut link: &'a Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

    while let Some(ref node) = *link {
        match cmp.compare(key, &node.key) {
            Equal => return Some(&**node),
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    None
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a mut V> where C: Compare<Q, K> {

    match *link {
        None => None,
        Some(ref mut node) => match cmp.compare(key, &node.key) {
            Equal => Some(&mut node.value),
            Less => get_mut(&mut node.left, cmp, key),
            Greater => get_mut(&mut node.right, cmp, key),
        },
    }
}

/// Returns the number of nodes on the longest downward path from `link`.
pub fn height<K, V>(link: &Link<K, V>) -> usize {
    match *link {
        None => 0,
        Some(ref node) => 1 + max(height(&node.left), height(&node.right)),
    }
}

pub fn extremum<D, K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> where D: Dir {
    let mut node = link.as_node_ref()?;
    while let Some(child) = D::forward(node).as_node_ref() { node = child; }
    Some(node)
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn left() -> bool;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V>;
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V>;
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn left() -> bool { true }

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn left() -> bool { false }

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.right }
}
