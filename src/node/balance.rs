//! Red-black repair after an insertion.
//!
//! Every function here works on raw node pointers obtained from the tree that owns `root`.
//! Callers must hold the only access to that tree for the duration of the call, and every
//! pointer passed in must refer to a node currently reachable from `root`.

use log::trace;
use super::{Color, Dir, Left, Link, LinkExt, Node, Right};

/// Walks from `node` to the root, resolving each red node with a red parent.
///
/// Recoloring can push redness up to the grandparent, so the walk always continues from the
/// node's parent as it stands after any restructuring. The root may be left red; the caller
/// blackens it.
pub unsafe fn repair<K, V>(root: &mut Link<K, V>, mut node: *mut Node<K, V>) {
    loop {
        let parent = (*node).parent;
        if parent.is_null() { return; }

        if (*node).is_red() && (*parent).is_red() { correct_tree(root, node); }

        node = (*node).parent;
        if node.is_null() { return; }
    }
}

/// Resolves a red `node` under a red parent, either by recoloring around a red uncle or by
/// rotating the grandparent.
unsafe fn correct_tree<K, V>(root: &mut Link<K, V>, node: *mut Node<K, V>) {
    let parent = (*node).parent;
    let grandparent = (*parent).parent;

    debug_assert!(!grandparent.is_null(), "red node under a red root");
    if grandparent.is_null() { return; }

    let uncle = if (*parent).is_left {
        (*grandparent).right.as_node_ptr()
    } else {
        (*grandparent).left.as_node_ptr()
    };

    if !uncle.is_null() && (*uncle).is_red() {
        trace!("red uncle: recoloring around the grandparent");
        (*parent).color = Color::Black;
        (*uncle).color = Color::Black;
        (*grandparent).color = Color::Red;
    } else {
        restructure(root, node, parent, grandparent);
    }
}

/// Rotates the node, its parent and its grandparent into a subtree whose top is black and
/// whose two children are red.
unsafe fn restructure<K, V>(root: &mut Link<K, V>, node: *mut Node<K, V>,
                            parent: *mut Node<K, V>, grandparent: *mut Node<K, V>) {

    let top = match ((*node).is_left, (*parent).is_left) {
        (true, true) => {
            trace!("left-left: rotating the grandparent right");
            rotate_right(root, grandparent);
            parent
        }
        (false, false) => {
            trace!("right-right: rotating the grandparent left");
            rotate_left(root, grandparent);
            parent
        }
        (true, false) => {
            trace!("right-left: double rotation");
            rotate_right_left(root, grandparent);
            node
        }
        (false, true) => {
            trace!("left-right: double rotation");
            rotate_left_right(root, grandparent);
            node
        }
    };

    for member in [node, parent, grandparent] { (*member).color = Color::Red; }
    (*top).color = Color::Black;
}

/// Returns the link that owns `node`: the tree's root link, or the parent's link on the
/// side recorded in the node's side flag.
unsafe fn owner<'a, K, V>(root: &'a mut Link<K, V>, node: *mut Node<K, V>) -> &'a mut Link<K, V> {
    let parent = (*node).parent;

    if parent.is_null() {
        root
    } else if (*node).is_left {
        &mut (*parent).left
    } else {
        &mut (*parent).right
    }
}

/// Rotates `pivot` down toward `D`, lifting its child on the opposite side into its place.
///
/// The lifted child's inner subtree moves across to `pivot`. Three owning edges and their
/// back-references are rewritten while the pivot is detached from its owner, so no node is
/// ever reachable from two owners.
unsafe fn rotate<D, K, V>(root: &mut Link<K, V>, pivot: *mut Node<K, V>) where D: Dir {
    let parent = (*pivot).parent;
    let is_left = (*pivot).is_left;
    let link = owner(root, pivot);

    let mut node = match link.take() {
        Some(node) => node,
        None => return,
    };

    let mut top = match D::Opposite::forward_mut(&mut *node).take() {
        Some(top) => top,
        None => {
            debug_assert!(false, "rotation pivot has no child to lift");
            *link = Some(node);
            return;
        }
    };

    let node_ptr: *mut Node<K, V> = &mut *node;
    let top_ptr: *mut Node<K, V> = &mut *top;

    *D::Opposite::forward_mut(&mut *node) = D::forward_mut(&mut *top).take();
    if let Some(ref mut inner) = *D::Opposite::forward_mut(&mut *node) {
        inner.parent = node_ptr;
        inner.is_left = <D::Opposite as Dir>::left();
    }

    top.parent = parent;
    top.is_left = is_left;
    node.parent = top_ptr;
    node.is_left = D::left();

    *D::forward_mut(&mut *top) = Some(node);
    *link = Some(top);
}

pub unsafe fn rotate_left<K, V>(root: &mut Link<K, V>, pivot: *mut Node<K, V>) {
    rotate::<Left, K, V>(root, pivot)
}

pub unsafe fn rotate_right<K, V>(root: &mut Link<K, V>, pivot: *mut Node<K, V>) {
    rotate::<Right, K, V>(root, pivot)
}

/// Lifts the right child of `grandparent`'s left child to the top of the subtree.
pub unsafe fn rotate_left_right<K, V>(root: &mut Link<K, V>, grandparent: *mut Node<K, V>) {
    let parent = (*grandparent).left.as_node_ptr();
    if !parent.is_null() { rotate_left(root, parent); }
    rotate_right(root, grandparent);
}

/// Lifts the left child of `grandparent`'s right child to the top of the subtree.
pub unsafe fn rotate_right_left<K, V>(root: &mut Link<K, V>, grandparent: *mut Node<K, V>) {
    let parent = (*grandparent).right.as_node_ptr();
    if !parent.is_null() { rotate_right(root, parent); }
    rotate_left(root, grandparent);
}
