use super::{Chain, Link};
use crate::error::Error;
use core::{fmt, iter::FusedIterator, ptr};

/// A read-only cursor over a [`Chain`].
///
/// A cursor does not point *at* an element. Instead, it sits in the gap
/// between two elements: the element *behind* the gap (returned by
/// [`current`](Self::current)) and the element *ahead* of it (returned by
/// [`peek_next`](Self::peek_next)). A cursor returned by [`Chain::cursor`]
/// starts at the gap before the first element, where there is nothing behind
/// it; [`move_next`](Self::move_next) moves the gap forward by one element.
///
/// Two cursors over the same chain are equal when they have the same element
/// ahead of them (or both have nothing ahead). In particular, a cursor that
/// has been moved past the last element is equal to [`Chain::end`].
///
/// `Cursor` also implements [`Iterator`]: each call to `next` moves the gap
/// forward and returns the element that is now behind it.
pub struct Cursor<'chain, T> {
    chain: &'chain Chain<T>,
    behind: Link,
    index: usize,
}

/// A cursor over a [`Chain`] that can insert and remove elements.
///
/// Like a [`Cursor`], a `CursorMut` sits in the gap between two elements and
/// only moves forward. In addition, it can [insert](Self::insert_next) a new
/// element ahead of the gap, or [remove](Self::remove_next) the element ahead
/// of the gap. Both are *O*(1) regardless of where the gap is, and neither
/// moves the gap.
///
/// A `CursorMut` mutably borrows its chain, so the chain cannot be modified
/// through any other handle while the cursor is live.
pub struct CursorMut<'chain, T> {
    chain: &'chain mut Chain<T>,
    behind: Link,
    index: usize,
}

// === impl Cursor ===

impl<'chain, T> Cursor<'chain, T> {
    pub(super) fn new(chain: &'chain Chain<T>, behind: Link, index: usize) -> Self {
        Self {
            chain,
            behind,
            index,
        }
    }

    /// Returns `true` if there is an element ahead of the cursor.
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.ahead().is_some()
    }

    /// Borrows the element ahead of the cursor, without moving it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] if the cursor is at the end of the
    /// chain.
    pub fn peek_next(&self) -> Result<&'chain T, Error> {
        let chain = self.chain;
        let key = self.ahead().ok_or(Error::NoSuchElement)?;
        Ok(&chain.nodes[key].value)
    }

    /// Borrows the element behind the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] if the cursor is at the front of the
    /// chain, where there is nothing behind it.
    pub fn current(&self) -> Result<&'chain T, Error> {
        let chain = self.chain;
        let key = self.behind.ok_or(Error::NoSuchElement)?;
        Ok(&chain.nodes[key].value)
    }

    /// Moves the cursor forward by one element. The element that was ahead of
    /// the cursor is now behind it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] if the cursor is at the end of the
    /// chain. The cursor does not move.
    pub fn move_next(&mut self) -> Result<(), Error> {
        let key = self.ahead().ok_or(Error::NoSuchElement)?;
        self.behind = Some(key);
        self.index += 1;
        Ok(())
    }

    /// Returns the number of elements behind the cursor.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the length of the [`Chain`] this cursor is over.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the [`Chain`] this cursor is over is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    #[inline]
    fn ahead(&self) -> Link {
        self.chain.ahead(self.behind)
    }
}

impl<'chain, T> Iterator for Cursor<'chain, T> {
    type Item = &'chain T;

    fn next(&mut self) -> Option<Self::Item> {
        self.move_next().ok()?;
        self.current().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> FusedIterator for Cursor<'_, T> {}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.chain, other.chain) && self.ahead() == other.ahead()
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current().ok())
            .field("next", &self.peek_next().ok())
            .field("index", &self.index)
            .finish()
    }
}

// === impl CursorMut ===

impl<'chain, T> CursorMut<'chain, T> {
    pub(super) fn new(chain: &'chain mut Chain<T>, behind: Link) -> Self {
        Self {
            chain,
            behind,
            index: 0,
        }
    }

    /// Returns `true` if there is an element ahead of the cursor.
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.ahead().is_some()
    }

    /// Borrows the element ahead of the cursor, without moving it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] if the cursor is at the end of the
    /// chain.
    pub fn peek_next(&self) -> Result<&T, Error> {
        let key = self.ahead().ok_or(Error::NoSuchElement)?;
        Ok(&self.chain.nodes[key].value)
    }

    /// Mutably borrows the element ahead of the cursor, without moving it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] if the cursor is at the end of the
    /// chain.
    pub fn peek_next_mut(&mut self) -> Result<&mut T, Error> {
        let key = self.ahead().ok_or(Error::NoSuchElement)?;
        Ok(&mut self.chain.nodes[key].value)
    }

    /// Borrows the element behind the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] if the cursor is at the front of the
    /// chain, where there is nothing behind it.
    pub fn current(&self) -> Result<&T, Error> {
        let key = self.behind.ok_or(Error::NoSuchElement)?;
        Ok(&self.chain.nodes[key].value)
    }

    /// Mutably borrows the element behind the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] if the cursor is at the front of the
    /// chain, where there is nothing behind it.
    pub fn current_mut(&mut self) -> Result<&mut T, Error> {
        let key = self.behind.ok_or(Error::NoSuchElement)?;
        Ok(&mut self.chain.nodes[key].value)
    }

    /// Moves the cursor forward by one element. The element that was ahead of
    /// the cursor is now behind it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] if the cursor is at the end of the
    /// chain. The cursor does not move.
    pub fn move_next(&mut self) -> Result<(), Error> {
        let key = self.ahead().ok_or(Error::NoSuchElement)?;
        self.behind = Some(key);
        self.index += 1;
        Ok(())
    }

    /// Moves the cursor forward for as long as the element ahead of it
    /// matches `predicate`, returning the number of elements moved past.
    ///
    /// When this returns, either the cursor is at the end of the chain, or
    /// the element ahead of it is the first one (from the cursor's starting
    /// position) for which `predicate` returned `false`.
    pub fn skip_while(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let mut skipped = 0;
        while let Some(key) = self.ahead() {
            if !predicate(&self.chain.nodes[key].value) {
                break;
            }
            self.behind = Some(key);
            self.index += 1;
            skipped += 1;
        }
        test_trace!(skipped, index = self.index, "CursorMut::skip_while");
        skipped
    }

    /// Inserts `value` into the chain, ahead of the cursor.
    ///
    /// The cursor does not move: `value` becomes the element ahead of it, and
    /// the element that was ahead of it (if any) now follows `value`. At the
    /// end of the chain (including when the chain is empty), this appends
    /// `value`.
    ///
    /// This is an *O*(1) operation.
    pub fn insert_next(&mut self, value: T) {
        test_trace!(?self.behind, index = self.index, "CursorMut::insert_next");
        self.chain.splice(self.behind, value);
    }

    /// Removes the element ahead of the cursor and returns it.
    ///
    /// The cursor does not move: the element that followed the removed one
    /// (if any) is now ahead of it.
    ///
    /// This is an *O*(1) operation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchElement`] if the cursor is at the end of the
    /// chain.
    pub fn remove_next(&mut self) -> Result<T, Error> {
        test_trace!(?self.behind, index = self.index, "CursorMut::remove_next");
        self.chain
            .excise(self.behind)
            .ok_or(Error::NoSuchElement)
    }

    /// Returns the number of elements behind the cursor.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the length of the [`Chain`] this cursor is over.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the [`Chain`] this cursor is over is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns a read-only [`Cursor`] at the same position as this one.
    ///
    /// The returned cursor borrows this one, so it cannot be used after this
    /// cursor next modifies the chain.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.chain, self.behind, self.index)
    }

    #[inline]
    fn ahead(&self) -> Link {
        self.chain.ahead(self.behind)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("current", &self.current().ok())
            .field("next", &self.peek_next().ok())
            .field("index", &self.index)
            .finish()
    }
}
