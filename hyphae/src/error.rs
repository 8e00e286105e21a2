//! Errors returned by collection operations.
//!
//! Every fallible operation in this crate returns [`Error`] when it is
//! called in a state where it has nothing to act on. These are usage errors:
//! none of the containers recover from them internally, and an operation that
//! fails leaves its container unchanged.
//!
//! Looking for a value that isn't there is *not* an error. Operations like
//! [`OrderedChain::remove`](crate::OrderedChain::remove) report absence with
//! a `bool`.

/// An error returned by a collection or cursor operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The operation needs at least one element, but the collection is
    /// empty.
    #[error("the collection is empty")]
    EmptyCollection,

    /// A cursor operation needs an element on one side of the cursor's gap,
    /// but there is none.
    ///
    /// This is returned when peeking, advancing, or removing ahead of a
    /// cursor at the end of a chain, or when reading the element behind a
    /// cursor at the front of a chain.
    #[error("no element at the cursor's position")]
    NoSuchElement,

    /// An index was outside the valid range of an [`ArrayList`](crate::ArrayList).
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the collection when it was requested.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::EmptyCollection.to_string(), "the collection is empty");
        assert_eq!(
            Error::NoSuchElement.to_string(),
            "no element at the cursor's position"
        );
        assert_eq!(
            Error::IndexOutOfRange { index: 4, len: 3 }.to_string(),
            "index 4 out of range for length 3"
        );
    }

    #[test]
    fn is_core_error() {
        fn assert_error<E: core::error::Error + Send + Sync + 'static>() {}
        assert_error::<Error>();
    }
}
