//! A singly-linked chain of owned nodes.
//!
//! See the [`Chain`] type for details.
use crate::{error::Error, util::FmtList, Collection};
use core::{fmt, iter::FusedIterator};
use slab::Slab;

mod cursor;
pub use self::cursor::{Cursor, CursorMut};


/// A singly-linked chain.
///
/// A `Chain` stores its elements as a forward-only sequence of nodes, each of
/// which owns exactly one element and the link to its successor. Elements may
/// be added and removed at the front in *O*(1), and appended at the back in
/// *O*(1).
///
/// Insertion and removal anywhere else go through a [`CursorMut`]. A cursor
/// sits in the *gap* between two elements: once it has been moved forward to
/// the right position, inserting or removing the element just ahead of the gap
/// is *O*(1), with no predecessor scan.
///
/// # Ownership
///
/// Nodes are stored in an arena owned by the chain, and each link is the arena
/// key of the next node. A node is only ever reachable through the single
/// link that names it, so a chain is always a simple path: it cannot contain
/// cycles or shared nodes. Dropping or [clearing](Chain::clear) a chain frees
/// every node at once, without recursing down the links.
///
/// # Examples
///
/// ```
/// use hyphae::Chain;
///
/// let mut chain = Chain::new();
/// chain.push_back(2);
/// chain.push_back(3);
/// chain.push_front(1);
///
/// assert_eq!(chain.len(), 3);
/// assert_eq!(chain.to_string(), "[1, 2, 3]");
///
/// assert_eq!(chain.pop_front(), Ok(1));
/// assert_eq!(chain.front(), Ok(&2));
/// ```
///
/// Inserting and removing in the middle with a cursor:
///
/// ```
/// use hyphae::Chain;
///
/// let mut chain: Chain<i32> = [1, 2, 4, 5].into_iter().collect();
///
/// let mut cursor = chain.cursor_mut();
/// // move the gap to between 2 and 4
/// cursor.move_next().unwrap();
/// cursor.move_next().unwrap();
/// assert_eq!(cursor.peek_next(), Ok(&4));
///
/// cursor.insert_next(3);
/// assert_eq!(cursor.peek_next(), Ok(&3));
///
/// cursor.move_next().unwrap();
/// assert_eq!(cursor.remove_next(), Ok(4));
///
/// assert_eq!(chain.to_string(), "[1, 2, 3, 5]");
/// ```
pub struct Chain<T> {
    nodes: Slab<Node<T>>,
    head: Link,
    tail: Link,
}

/// An iterator over shared references to the elements of a [`Chain`], from
/// front to back.
///
/// This is returned by [`Chain::iter`].
pub struct Iter<'chain, T> {
    nodes: &'chain Slab<Node<T>>,
    next: Link,
    remaining: usize,
}

/// An owning iterator over the elements of a [`Chain`], from front to back.
///
/// This is returned by the [`IntoIterator`] implementation for [`Chain`].
pub struct IntoIter<T> {
    chain: Chain<T>,
}

/// The arena key of a node, or `None` past the end of the chain.
type Link = Option<usize>;

struct Node<T> {
    value: T,
    next: Link,
}

// === impl Chain ===

impl<T> Chain<T> {
    /// Returns a new empty `Chain`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns a new empty `Chain` with space for at least `capacity` nodes
    /// before it reallocates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of elements in the chain.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the chain contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `value` to the front of the chain.
    ///
    /// This is an *O*(1) operation.
    pub fn push_front(&mut self, value: T) {
        test_trace!(?self.head, ?self.tail, "Chain::push_front");
        self.splice(None, value);
    }

    /// Adds `value` to the back of the chain.
    ///
    /// This is an *O*(1) operation.
    pub fn push_back(&mut self, value: T) {
        test_trace!(?self.head, ?self.tail, "Chain::push_back");
        self.splice(self.tail, value);
    }

    /// Removes the first element of the chain and returns it.
    ///
    /// This is an *O*(1) operation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the chain is empty.
    pub fn pop_front(&mut self) -> Result<T, Error> {
        test_trace!(?self.head, ?self.tail, "Chain::pop_front");
        self.excise(None).ok_or(Error::EmptyCollection)
    }

    /// Borrows the first element of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the chain is empty.
    pub fn front(&self) -> Result<&T, Error> {
        let head = self.head.ok_or(Error::EmptyCollection)?;
        Ok(&self.nodes[head].value)
    }

    /// Mutably borrows the first element of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the chain is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        let head = self.head.ok_or(Error::EmptyCollection)?;
        Ok(&mut self.nodes[head].value)
    }

    /// Borrows the last element of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the chain is empty.
    pub fn back(&self) -> Result<&T, Error> {
        let tail = self.tail.ok_or(Error::EmptyCollection)?;
        Ok(&self.nodes[tail].value)
    }

    /// Mutably borrows the last element of the chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the chain is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        let tail = self.tail.ok_or(Error::EmptyCollection)?;
        Ok(&mut self.nodes[tail].value)
    }

    /// Removes every element from the chain.
    ///
    /// Clearing an empty chain does nothing.
    pub fn clear(&mut self) {
        test_trace!(len = self.len(), "Chain::clear");
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns `true` if the chain contains an element equal to `value`.
    ///
    /// This is an *O*(*n*) operation.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|elem| elem == value)
    }

    /// Returns an iterator over shared references to the elements of the
    /// chain, from front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.len(),
        }
    }

    /// Calls `visit` with a mutable reference to each element of the chain,
    /// from front to back.
    pub fn for_each_mut(&mut self, mut visit: impl FnMut(&mut T)) {
        let mut next = self.head;
        while let Some(key) = next {
            let node = &mut self.nodes[key];
            visit(&mut node.value);
            next = node.next;
        }
    }

    /// Returns a read-only [`Cursor`] at the gap before the first element.
    ///
    /// Any number of read-only cursors may exist at once, but none of them
    /// may outlive a mutation of the chain.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, None, 0)
    }

    /// Returns a read-only [`Cursor`] at the gap after the last element.
    ///
    /// This cursor has nothing ahead of it. It compares equal to any other
    /// cursor over this chain that has been advanced all the way to the end,
    /// so it can be used as the sentinel in a traversal loop.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail, self.len())
    }

    /// Returns a [`CursorMut`] at the gap before the first element.
    ///
    /// The cursor mutably borrows the chain, so nothing else can modify the
    /// chain while it exists.
    #[must_use]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, None)
    }

    /// Asserts that the chain's links are consistent with its arena.
    ///
    /// This checks that every stored node is reachable exactly once from the
    /// head, that the links end without a cycle, and that the tail is the
    /// last reachable node.
    ///
    /// # Panics
    ///
    /// If any of those conditions does not hold.
    #[track_caller]
    pub fn assert_valid(&self) {
        let mut reachable = 0;
        let mut last = None;
        let mut next = self.head;
        while let Some(key) = next {
            assert!(
                reachable < self.nodes.len(),
                "chain links more nodes than it stores; it must contain a cycle"
            );
            assert!(
                self.nodes.contains(key),
                "link {key} does not name a stored node"
            );
            reachable += 1;
            last = Some(key);
            next = self.nodes[key].next;
        }

        assert_eq!(
            reachable,
            self.nodes.len(),
            "every stored node must be reachable from the head"
        );
        assert_eq!(self.tail, last, "tail must be the last reachable node");
    }

    /// Returns the link that holds the element ahead of the gap after
    /// `behind` (or at the front, if `behind` is `None`).
    #[inline]
    fn ahead(&self, behind: Link) -> Link {
        match behind {
            Some(key) => self.nodes[key].next,
            None => self.head,
        }
    }

    #[inline]
    fn ahead_mut(&mut self, behind: Link) -> &mut Link {
        match behind {
            Some(key) => &mut self.nodes[key].next,
            None => &mut self.head,
        }
    }

    /// Links a new node holding `value` into the gap after `behind`, ahead
    /// of whatever was there before.
    fn splice(&mut self, behind: Link, value: T) -> usize {
        let next = self.ahead(behind);
        let key = self.nodes.insert(Node { value, next });
        *self.ahead_mut(behind) = Some(key);
        if next.is_none() {
            self.tail = Some(key);
        }
        test_trace!(?behind, key, ?next, "Chain::splice");
        key
    }

    /// Unlinks the node ahead of the gap after `behind` and returns its
    /// value.
    fn excise(&mut self, behind: Link) -> Option<T> {
        let key = self.ahead(behind)?;
        let Node { value, next } = self.nodes.remove(key);
        *self.ahead_mut(behind) = next;
        if next.is_none() {
            self.tail = behind;
        }
        test_trace!(?behind, key, ?next, "Chain::excise");
        Some(value)
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning a chain copies every element into new nodes. The clone shares
/// nothing with the original.
impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Formats the chain as `[a, b, c]`, or `[]` if it is empty.
impl<T: fmt::Display> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&FmtList::new(self.iter()), f)
    }
}

impl<T> Extend<T> for Chain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Chain<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut chain = Self::with_capacity(iter.size_hint().0);
        chain.extend(iter);
        chain
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { chain: self }
    }
}

impl<'chain, T> IntoIterator for &'chain Chain<T> {
    type Item = &'chain T;
    type IntoIter = Iter<'chain, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Collection<T> for Chain<T> {
    fn len(&self) -> usize {
        Chain::len(self)
    }

    fn for_each(&self, visit: &mut dyn FnMut(&T)) {
        self.iter().for_each(visit)
    }

    fn for_each_mut(&mut self, visit: &mut dyn FnMut(&mut T)) {
        Chain::for_each_mut(self, visit)
    }
}

// === impl Iter ===

impl<'chain, T> Iterator for Iter<'chain, T> {
    type Item = &'chain T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.next?];
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

// === impl IntoIter ===

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chain.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.chain.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.chain).finish()
    }
}
