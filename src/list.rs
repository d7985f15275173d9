//! A singly-linked list and the stack and queue built on it.

use std::fmt::{self, Debug};
use std::iter;
use std::ptr;
use super::error::Exhausted;

type Link<T> = Option<Box<ListNode<T>>>;

struct ListNode<T> {
    item: T,
    next: Link<T>,
}

/// A singly-linked list with constant-time access to both ends.
///
/// Removing from the back walks the list and takes linear time.
pub struct List<T> {
    head: Link<T>,
    // Observer only; null exactly when the list is empty.
    tail: *mut ListNode<T>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> Self { List { head: None, tail: ptr::null_mut(), len: 0 } }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool { self.head.is_none() }

    /// Returns the number of items in the list.
    pub fn len(&self) -> usize { self.len }

    /// Adds an item to the front of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = redblack::List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&1, &2]);
    /// ```
    pub fn push_front(&mut self, item: T) {
        let mut node = Box::new(ListNode { item: item, next: self.head.take() });
        if self.tail.is_null() { self.tail = &mut *node; }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds an item to the back of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = redblack::List::new();
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.iter().collect::<Vec<_>>(), [&1, &2]);
    /// ```
    pub fn push_back(&mut self, item: T) {
        let mut node = Box::new(ListNode { item: item, next: None });
        let node_ptr: *mut ListNode<T> = &mut *node;

        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            unsafe { (*self.tail).next = Some(node); }
        }

        self.tail = node_ptr;
        self.len += 1;
    }

    /// Removes and returns the item at the front of the list, or `None` if it is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = *self.head.take()?;
        self.head = node.next;
        if self.head.is_none() { self.tail = ptr::null_mut(); }
        self.len -= 1;
        Some(node.item)
    }

    /// Removes and returns the item at the back of the list, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut list = redblack::List::new();
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.peek_back(), Some(&1));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len <= 1 { return self.pop_front(); }

        let mut node = self.head.as_mut()?;
        while node.next.as_ref().map_or(false, |next| next.next.is_some()) {
            node = node.next.as_mut()?;
        }

        let last = node.next.take()?;
        self.tail = &mut **node;
        self.len -= 1;
        Some(last.item)
    }

    /// Returns a reference to the item at the front of the list, or `None` if it is empty.
    pub fn peek_front(&self) -> Option<&T> { self.head.as_ref().map(|node| &node.item) }

    /// Returns a reference to the item at the back of the list, or `None` if it is empty.
    pub fn peek_back(&self) -> Option<&T> {
        if self.tail.is_null() { None } else { unsafe { Some(&(*self.tail).item) } }
    }

    /// Removes all items from the list.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link { link = node.next.take(); }
        self.tail = ptr::null_mut();
        self.len = 0;
    }

    /// Checks if the list holds an item equal to the given one.
    pub fn contains(&self, item: &T) -> bool where T: PartialEq {
        self.iter().any(|x| x == item)
    }

    /// Returns a cursor over the list's items from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblack::{Exhausted, List};
    ///
    /// let mut list = List::new();
    /// list.push_back("a");
    ///
    /// let mut it = list.iter();
    /// assert!(it.has_next());
    /// assert_eq!(it.advance(), Ok(&"a"));
    /// assert_eq!(it.advance(), Err(Exhausted));
    /// ```
    pub fn iter(&self) -> Iter<T> { Iter { next: self.head.as_deref(), len: self.len } }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) { self.clear(); }
}

impl<T> Default for List<T> {
    fn default() -> Self { List::new() }
}

impl<T> Debug for List<T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.push_back(item); }
    }
}

impl<T> iter::FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut list = List::new();
        list.extend(it);
        list
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

unsafe impl<T> Send for List<T> where T: Send {}
unsafe impl<T> Sync for List<T> where T: Sync {}

/// A cursor over a list's items.
///
/// Acquire through [`List::iter`](struct.List.html#method.iter).
pub struct Iter<'a, T: 'a> {
    next: Option<&'a ListNode<T>>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Checks if the cursor has items left.
    pub fn has_next(&self) -> bool { self.next.is_some() }

    /// Returns the next item, or `Exhausted` if every item has been visited.
    pub fn advance(&mut self) -> Result<&'a T, Exhausted> { self.next().ok_or(Exhausted) }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter { next: self.next, len: self.len } }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.len -= 1;
            &node.item
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A last-in, first-out stack.
///
/// # Examples
///
/// ```
/// let mut stack = redblack::Stack::new();
///
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug)]
pub struct Stack<T> {
    list: List<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self { Stack { list: List::new() } }

    /// Pushes an item onto the top of the stack.
    pub fn push(&mut self, item: T) { self.list.push_front(item); }

    /// Removes and returns the top item, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> { self.list.pop_front() }

    /// Returns a reference to the top item, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<&T> { self.list.peek_front() }

    /// Checks if the stack is empty.
    pub fn is_empty(&self) -> bool { self.list.is_empty() }

    /// Returns the number of items on the stack.
    pub fn len(&self) -> usize { self.list.len() }

    /// Checks if the stack holds an item equal to the given one.
    pub fn contains(&self, item: &T) -> bool where T: PartialEq { self.list.contains(item) }

    /// Removes all items from the stack.
    pub fn clear(&mut self) { self.list.clear(); }

    /// Returns a cursor over the stack's items from top to bottom.
    pub fn iter(&self) -> Iter<T> { self.list.iter() }
}

impl<T> Default for Stack<T> {
    fn default() -> Self { Stack::new() }
}

/// A first-in, first-out queue.
///
/// # Examples
///
/// ```
/// let mut queue = redblack::Queue::new();
///
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug)]
pub struct Queue<T> {
    list: List<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self { Queue { list: List::new() } }

    /// Adds an item to the back of the queue.
    pub fn enqueue(&mut self, item: T) { self.list.push_back(item); }

    /// Removes and returns the item at the front of the queue, or `None` if it is empty.
    pub fn dequeue(&mut self) -> Option<T> { self.list.pop_front() }

    /// Returns a reference to the item at the front of the queue, or `None` if it is empty.
    pub fn peek(&self) -> Option<&T> { self.list.peek_front() }

    /// Checks if the queue is empty.
    pub fn is_empty(&self) -> bool { self.list.is_empty() }

    /// Returns the number of items in the queue.
    pub fn len(&self) -> usize { self.list.len() }

    /// Checks if the queue holds an item equal to the given one.
    pub fn contains(&self, item: &T) -> bool where T: PartialEq { self.list.contains(item) }

    /// Removes all items from the queue.
    pub fn clear(&mut self) { self.list.clear(); }

    /// Returns a cursor over the queue's items from front to back.
    pub fn iter(&self) -> Iter<T> { self.list.iter() }
}

impl<T> Default for Queue<T> {
    fn default() -> Self { Queue::new() }
}

#[cfg(test)]
mod tests {
    use super::{List, Queue, Stack};
    use crate::error::Exhausted;

    #[test]
    fn ends_track_pushes_and_pops() {
        let mut list = List::new();
        assert_eq!(list.peek_front(), None);
        assert_eq!(list.peek_back(), None);

        list.push_back(2);
        list.push_front(1);
        list.push_back(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.peek_front(), Some(&1));
        assert_eq!(list.peek_back(), Some(&3));

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.peek_back(), Some(&2));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.peek_front(), Some(&2));
        assert_eq!(list.peek_back(), Some(&2));

        assert_eq!(list.pop_front(), Some(2));
        assert!(list.is_empty());
        assert_eq!(list.peek_back(), None);

        // The tail must be usable again after draining.
        list.push_back(4);
        assert_eq!(list.peek_front(), Some(&4));
        assert_eq!(list.peek_back(), Some(&4));
    }

    #[test]
    fn pop_back_empties_single_item_list() {
        let mut list = List::new();
        list.push_front("a");
        assert_eq!(list.pop_back(), Some("a"));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
        assert_eq!(list.peek_back(), None);
    }

    #[test]
    fn contains_and_clear() {
        let mut list: List<i32> = (0..5).collect();
        assert!(list.contains(&4));
        assert!(!list.contains(&5));

        list.clear();
        assert!(list.is_empty());
        assert!(!list.contains(&4));

        list.push_back(7);
        assert_eq!(list.iter().collect::<Vec<_>>(), [&7]);
    }

    #[test]
    fn cursor_faults_when_exhausted() {
        let list: List<i32> = (0..2).collect();
        let mut it = list.iter();

        assert_eq!(it.len(), 2);
        assert_eq!(it.advance(), Ok(&0));
        assert_eq!(it.advance(), Ok(&1));
        assert!(!it.has_next());
        assert_eq!(it.advance(), Err(Exhausted));
        assert_eq!(it.advance(), Err(Exhausted));
    }

    #[test]
    fn long_list_drops_without_recursion() {
        let list: List<u32> = (0..1_000_000).collect();
        assert_eq!(list.len(), 1_000_000);
        drop(list);
    }

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        for i in 0..4 { stack.push(i); }

        assert_eq!(stack.len(), 4);
        assert!(stack.contains(&0));
        assert_eq!(stack.iter().cloned().collect::<Vec<_>>(), [3, 2, 1, 0]);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.peek(), Some(&2));

        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        for i in 0..4 { queue.enqueue(i); }

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.iter().cloned().collect::<Vec<_>>(), [0, 1, 2, 3]);
        assert_eq!(queue.dequeue(), Some(0));
        assert_eq!(queue.peek(), Some(&1));

        queue.enqueue(4);
        assert_eq!(queue.iter().cloned().collect::<Vec<_>>(), [1, 2, 3, 4]);

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        assert!(!queue.contains(&1));
    }
}
