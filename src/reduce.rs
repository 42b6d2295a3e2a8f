//! Reduction - folding a sequence into a single value.
//!
//! This module provides the [`Reducible`] trait, implemented for every
//! [`Sequence`], with a single strict left fold.
//!
//! # Examples
//!
//! ```rust
//! use seqops::reduce::Reducible;
//!
//! let total = vec![1, 2, 3].reduce(0, |sum, n| sum + n);
//! assert_eq!(total, 6);
//!
//! let joined = vec!["a", "b", "c"].reduce(String::new(), |mut acc, s| {
//!     acc.push_str(s);
//!     acc
//! });
//! assert_eq!(joined, "abc");
//! ```

use crate::container::Sequence;

/// Left-associative accumulation over an ordered sequence.
pub trait Reducible: Sequence {
    /// Folds the sequence from the left, combining the running accumulator
    /// with each element in input order.
    ///
    /// Returns `initial` unchanged for the empty sequence. The combining
    /// function is invoked exactly once per element, strictly left-to-right,
    /// in a single pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::reduce::Reducible;
    ///
    /// let reversed = vec![1, 2, 3].reduce(Vec::new(), |mut acc, n| {
    ///     acc.insert(0, n);
    ///     acc
    /// });
    /// assert_eq!(reversed, vec![3, 2, 1]);
    /// ```
    fn reduce<B, F>(self, initial: B, mut combine: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut accumulator = initial;
        for element in self {
            accumulator = combine(accumulator, element);
        }
        accumulator
    }
}

impl<S: Sequence> Reducible for S {}
