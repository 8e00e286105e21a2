#![cfg_attr(docsrs, doc = include_str!("../README.md"))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]
#![cfg_attr(docsrs, deny(missing_docs))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;
#[cfg(test)]
extern crate std;

#[macro_use]
pub(crate) mod util;

pub mod array;
pub mod chain;
pub mod error;
pub mod ordered;

#[doc(inline)]
pub use array::ArrayList;
#[doc(inline)]
pub use chain::Chain;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use ordered::OrderedChain;

/// A finite sequence of `T`s that can be measured and traversed.
///
/// This is the capability shared by every container in this crate. Code that
/// only needs to count or visit elements should take a `&dyn Collection<T>`
/// (or be generic over `C: Collection<T>`) rather than naming a concrete
/// container.
///
/// Both traversals visit exactly [`len`](Self::len) elements, in the same
/// order.
///
/// # Examples
///
/// ```
/// use hyphae::{ArrayList, Chain, Collection};
///
/// fn sum(values: &dyn Collection<f64>) -> f64 {
///     let mut sum = 0.0;
///     values.for_each(&mut |value| sum += *value);
///     sum
/// }
///
/// let array: ArrayList<f64> = [1.0, 2.0, 3.5].into_iter().collect();
/// let chain: Chain<f64> = [1.0, 2.0, 3.5].into_iter().collect();
///
/// assert_eq!(sum(&array), 6.5);
/// assert_eq!(sum(&chain), 6.5);
/// ```
pub trait Collection<T> {
    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `visit` with a shared reference to each element, in order.
    fn for_each(&self, visit: &mut dyn FnMut(&T));

    /// Calls `visit` with a mutable reference to each element, in order.
    fn for_each_mut(&mut self, visit: &mut dyn FnMut(&mut T));
}
