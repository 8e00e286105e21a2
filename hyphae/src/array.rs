//! A contiguous, growable array.
//!
//! See the [`ArrayList`] type for details.
use crate::{error::Error, util::FmtList, Collection};
use alloc::vec::Vec;
use core::{fmt, slice};

/// A contiguous array of `T`s with an explicit capacity.
///
/// Elements are stored in a single allocation. Pushing onto a full list grows
/// its capacity to `2 * (len + 1)`, so appending is amortized *O*(1).
/// Inserting or removing at an index shifts every element after it.
///
/// Unlike the standard library's `Vec`, indexing operations on an `ArrayList`
/// never panic: an out-of-range index is reported as
/// [`Error::IndexOutOfRange`].
///
/// # Examples
///
/// ```
/// use hyphae::{ArrayList, Error};
///
/// let mut list = ArrayList::with_capacity(2);
/// list.push(1);
/// list.push(3);
/// list.insert(1, 2).unwrap();
///
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// assert_eq!(list.get(1), Ok(&2));
/// assert_eq!(list.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
///
/// assert_eq!(list.remove(0), Ok(1));
/// assert_eq!(list.pop(), Ok(3));
/// assert_eq!(list.as_slice(), &[2]);
/// ```
pub struct ArrayList<T> {
    elems: Vec<T>,
}

impl<T> ArrayList<T> {
    /// Returns a new empty `ArrayList`. It does not allocate until the first
    /// element is pushed.
    #[must_use]
    pub const fn new() -> Self {
        Self { elems: Vec::new() }
    }

    /// Returns a new empty `ArrayList` with space for at least `capacity`
    /// elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elems: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Returns the number of elements the list can hold before it grows.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elems.capacity()
    }

    /// Borrows the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let len = self.len();
        self.elems
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Mutably borrows the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len();
        self.elems
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Appends `value` to the end of the list.
    pub fn push(&mut self, value: T) {
        self.grow_if_full();
        self.elems.push(value);
    }

    /// Removes the last element of the list and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the list is empty.
    pub fn pop(&mut self) -> Result<T, Error> {
        self.elems.pop().ok_or(Error::EmptyCollection)
    }

    /// Inserts `value` at `index`, shifting every element after it one place
    /// to the right. Inserting at `len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len`. The list is not
    /// modified.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        self.grow_if_full();
        self.elems.insert(index, value);
        Ok(())
    }

    /// Removes the element at `index` and returns it, shifting every element
    /// after it one place to the left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`. The list is not
    /// modified.
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        Ok(self.elems.remove(index))
    }

    /// Removes every element from the list. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Returns an iterator over shared references to the elements.
    #[must_use]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elems.iter()
    }

    /// Returns an iterator over mutable references to the elements.
    #[must_use]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.elems.iter_mut()
    }

    /// Borrows the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    fn grow_if_full(&mut self) {
        let len = self.len();
        if len < self.capacity() {
            return;
        }
        let capacity = 2 * (len + 1);
        test_trace!(len, capacity, "ArrayList::grow");
        self.elems.reserve_exact(capacity - len);
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning a list allocates room for at least twice as many elements as it
/// holds.
impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut elems = Vec::with_capacity(self.capacity().max(2 * self.len()));
        elems.extend_from_slice(&self.elems);
        Self { elems }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elems == other.elems
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Formats the list as `[a, b, c]`, or `[]` if it is empty.
impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&FmtList::new(self.iter()), f)
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl<'list, T> IntoIterator for &'list ArrayList<T> {
    type Item = &'list T;
    type IntoIter = slice::Iter<'list, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Collection<T> for ArrayList<T> {
    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    fn for_each(&self, visit: &mut dyn FnMut(&T)) {
        self.iter().for_each(visit)
    }

    fn for_each_mut(&mut self, visit: &mut dyn FnMut(&mut T)) {
        self.iter_mut().for_each(visit)
    }
}
