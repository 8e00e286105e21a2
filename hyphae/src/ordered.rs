//! A [`Chain`] that keeps its elements sorted.
//!
//! See the [`OrderedChain`] type for details.
use crate::{
    chain::{self, Chain, Cursor},
    error::Error,
    Collection,
};
use core::fmt;

/// A singly-linked chain whose elements are always in sorted order.
///
/// The order is defined by a comparison function supplied when the
/// `OrderedChain` is created. `compare(a, b)` returns `true` if `a` must come
/// strictly before `b`. It must be a [strict weak ordering]: irreflexive,
/// asymmetric and transitive, with incomparability also transitive. The
/// `OrderedChain` does not check this; with an inconsistent `compare`, the
/// resulting order is unspecified (but no memory unsafety can result).
///
/// * If `T` implements [`Ord`], [`OrderedChain::ascending`] puts the
///   **smallest** elements first, and [`OrderedChain::descending`] puts the
///   **largest** elements first.
/// * Otherwise, or to sort by some specific metric, use
///   [`OrderedChain::new`] with a closure.
///
/// Inserting an element is an *O*(*n*) operation: a [`CursorMut`] walks the
/// chain to find the gap where the element belongs, and splices it in there.
/// If the new element is equal (neither before nor after) to elements already
/// in the chain, it is placed *after* them, so equal elements keep the order
/// they were inserted in.
///
/// Removing an element by value uses `==` rather than `compare`: it removes
/// the first element that is equal to the given value.
///
/// [strict weak ordering]: https://en.wikipedia.org/wiki/Weak_ordering#Strict_weak_orderings
/// [`CursorMut`]: crate::chain::CursorMut
///
/// # Examples
///
/// ```
/// use hyphae::OrderedChain;
///
/// let mut ordered = OrderedChain::new(|a: &i32, b: &i32| a < b);
/// for value in [7, 3, 9, 1, 5] {
///     ordered.insert(value);
/// }
/// assert_eq!(ordered.to_string(), "[1, 3, 5, 7, 9]");
///
/// assert!(ordered.remove(&3));
/// assert!(!ordered.remove(&3));
/// assert_eq!(ordered.to_string(), "[1, 5, 7, 9]");
/// ```
///
/// Sorting by a key, with equal keys kept in insertion order:
///
/// ```
/// use hyphae::OrderedChain;
///
/// let mut tasks = OrderedChain::new(|a: &(u8, &str), b: &(u8, &str)| a.0 < b.0);
/// tasks.insert((2, "write docs"));
/// tasks.insert((1, "fix bug"));
/// tasks.insert((2, "review"));
///
/// let names: Vec<_> = tasks.iter().map(|&(_, name)| name).collect();
/// assert_eq!(names, ["fix bug", "write docs", "review"]);
/// ```
pub struct OrderedChain<T, C = fn(&T, &T) -> bool> {
    storage: Chain<T>,
    compare: C,
}

#[inline]
fn less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

#[inline]
fn greater<T: Ord>(a: &T, b: &T) -> bool {
    // Inverted sort order!
    a > b
}

// === impl OrderedChain ===

impl<T: Ord> OrderedChain<T> {
    /// Returns a new empty `OrderedChain`, sorted **smallest first**.
    ///
    /// * Consider using [`OrderedChain::descending()`] if you want **largest**
    ///   elements sorted first.
    /// * Consider using [`OrderedChain::new()`] if you want to provide your
    ///   own ordering.
    #[must_use]
    pub fn ascending() -> Self {
        Self::new(less::<T>)
    }

    /// Returns a new empty `OrderedChain`, sorted **largest first**.
    ///
    /// * Consider using [`OrderedChain::ascending()`] if you want **smallest**
    ///   elements sorted first.
    /// * Consider using [`OrderedChain::new()`] if you want to provide your
    ///   own ordering.
    #[must_use]
    pub fn descending() -> Self {
        Self::new(greater::<T>)
    }
}

impl<T, C> OrderedChain<T, C> {
    /// Returns a new empty `OrderedChain` ordered by `compare`.
    ///
    /// `compare(a, b)` must return `true` if `a` belongs strictly before `b`.
    /// For example, to put the smallest `i32`s first:
    ///
    /// ```rust
    /// # use hyphae::OrderedChain;
    /// let ordered: OrderedChain<i32, _> = OrderedChain::new(|a, b| a < b);
    /// assert!(ordered.is_empty());
    /// ```
    #[must_use]
    pub fn new(compare: C) -> Self
    where
        C: Fn(&T, &T) -> bool,
    {
        Self {
            storage: Chain::new(),
            compare,
        }
    }

    /// Returns the number of elements in the chain.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the chain contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Borrows the first element in sorted order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the chain is empty.
    pub fn front(&self) -> Result<&T, Error> {
        self.storage.front()
    }

    /// Removes the first element in sorted order and returns it.
    ///
    /// Note that "first" here refers to the sorted ordering. If this chain was
    /// created with [`OrderedChain::ascending`], the SMALLEST element is
    /// popped. If it was created with [`OrderedChain::descending`], the
    /// LARGEST element is popped.
    ///
    /// This is an *O*(1) operation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if the chain is empty.
    pub fn pop_front(&mut self) -> Result<T, Error> {
        self.storage.pop_front()
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `true` if an element was removed, or `false` if no element in
    /// the chain is equal to `value`, in which case the chain is unchanged.
    ///
    /// This is an *O*(*n*) operation.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = self.storage.cursor_mut();
        // Stop at the gap just before the first match, which may be the front
        // gap. If nothing matches, the cursor ends up with nothing ahead of
        // it and there is nothing to remove.
        cursor.skip_while(|next| next != value);
        let removed = cursor.remove_next().is_ok();
        test_trace!(index = cursor.index(), removed, "OrderedChain::remove");
        removed
    }

    /// Returns `true` if the chain contains an element equal to `value`.
    ///
    /// This is an *O*(*n*) operation.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.storage.contains(value)
    }

    /// Removes every element from the chain.
    pub fn clear(&mut self) {
        self.storage.clear()
    }

    /// Returns an iterator over the elements of the chain, in sorted order.
    #[must_use]
    pub fn iter(&self) -> chain::Iter<'_, T> {
        self.storage.iter()
    }

    /// Returns a read-only [`Cursor`] at the gap before the first element.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, T> {
        self.storage.cursor()
    }

    /// Borrows the underlying [`Chain`].
    #[must_use]
    pub fn as_chain(&self) -> &Chain<T> {
        &self.storage
    }

    /// Consumes the `OrderedChain`, returning the underlying [`Chain`] with
    /// its elements in sorted order.
    #[must_use]
    pub fn into_chain(self) -> Chain<T> {
        self.storage
    }
}

impl<T, C> OrderedChain<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    /// Returns a new `OrderedChain` ordered by `compare`, containing every
    /// element of `chain`.
    ///
    /// Elements that are equal under `compare` keep the order they had in
    /// `chain`.
    #[must_use]
    pub fn from_chain(chain: Chain<T>, compare: C) -> Self {
        let mut ordered = Self::new(compare);
        ordered.extend(chain);
        ordered
    }

    /// Inserts `value` in its sorted position.
    ///
    /// If `value` is equal to elements already in the chain, it is placed
    /// after all of them.
    ///
    /// This is an *O*(*n*) operation.
    pub fn insert(&mut self, value: T) {
        let compare = &self.compare;
        let mut cursor = self.storage.cursor_mut();
        // Move past every element that `value` does not strictly precede. If
        // `value` belongs before the first element (or the chain is empty),
        // this doesn't move at all and `value` becomes the new first element.
        cursor.skip_while(|next| !compare(&value, next));
        test_trace!(index = cursor.index(), len = cursor.len(), "OrderedChain::insert");
        cursor.insert_next(value);
    }

    /// Asserts that the chain is structurally valid and sorted.
    ///
    /// # Panics
    ///
    /// If the underlying chain is inconsistent (see [`Chain::assert_valid`]),
    /// or if any element belongs strictly before the element preceding it.
    #[track_caller]
    pub fn assert_valid(&self) {
        self.storage.assert_valid();
        let mut iter = self.storage.iter();
        let Some(mut prev) = iter.next() else {
            return;
        };
        for (index, next) in iter.enumerate() {
            assert!(
                !(self.compare)(next, prev),
                "element {} belongs before element {}",
                index + 1,
                index
            );
            prev = next;
        }
    }
}

impl<T: Ord> Default for OrderedChain<T> {
    fn default() -> Self {
        Self::ascending()
    }
}

/// Cloning an ordered chain copies every element into new nodes, and clones
/// the comparison function.
impl<T: Clone, C: Clone> Clone for OrderedChain<T, C> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedChain<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedChain")
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

/// Formats the chain as `[a, b, c]` in sorted order, or `[]` if it is empty.
impl<T: fmt::Display, C> fmt::Display for OrderedChain<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.storage, f)
    }
}

impl<T, C> Extend<T> for OrderedChain<T, C>
where
    C: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ordered = Self::ascending();
        ordered.extend(iter);
        ordered
    }
}

impl<T, C> IntoIterator for OrderedChain<T, C> {
    type Item = T;
    type IntoIter = chain::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'chain, T, C> IntoIterator for &'chain OrderedChain<T, C> {
    type Item = &'chain T;
    type IntoIter = chain::Iter<'chain, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

/// Mutable traversal is provided so that an `OrderedChain` can be used
/// anywhere a [`Collection`] is expected. `visit` must not change elements in
/// a way that changes their relative order, or the chain will no longer be
/// sorted.
impl<T, C> Collection<T> for OrderedChain<T, C> {
    fn len(&self) -> usize {
        self.storage.len()
    }

    fn for_each(&self, visit: &mut dyn FnMut(&T)) {
        Collection::for_each(&self.storage, visit)
    }

    fn for_each_mut(&mut self, visit: &mut dyn FnMut(&mut T)) {
        Collection::for_each_mut(&mut self.storage, visit)
    }
}
