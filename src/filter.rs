//! Filtering operations - selecting elements that satisfy a predicate.
//!
//! This module provides the [`Filterable`] trait, implemented for every
//! [`Sequence`], with two operations:
//!
//! - [`filter_where`](Filterable::filter_where): keeps every matching
//!   element, in order
//! - [`first_where`](Filterable::first_where): returns the first matching
//!   element, short-circuiting the rest of the sequence
//!
//! # Laws
//!
//! ## Order preservation
//!
//! The output of `filter_where` is a subsequence of the input: matching
//! elements appear in their original relative order.
//!
//! ## Exactly-once evaluation
//!
//! `filter_where` invokes the predicate exactly once per element, strictly
//! left-to-right. `first_where` stops invoking it after the first match.
//!
//! # Examples
//!
//! ```rust
//! use seqops::filter::Filterable;
//!
//! let evens = vec![1, 2, 3, 4, 5].filter_where(|n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let first_even = vec![1, 3, 4, 6].first_where(|n| n % 2 == 0);
//! assert_eq!(first_even, Some(4));
//! ```

use crate::container::Sequence;

/// Predicate-based selection over an ordered sequence.
///
/// Both operations consume the sequence; callers who need the original
/// afterwards clone it first. The predicate receives a shared reference so
/// matching elements can be moved into the result.
pub trait Filterable: Sequence {
    /// Returns a sequence of the same container type containing, in order,
    /// the elements that satisfy the predicate.
    ///
    /// The predicate is invoked exactly once per element, in input order.
    /// The result is empty when the input is empty or nothing matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::filter::Filterable;
    ///
    /// let short = vec!["ok", "too long"].filter_where(|s| s.len() <= 2);
    /// assert_eq!(short, vec!["ok"]);
    ///
    /// let none: Vec<i32> = vec![1, 3, 5].filter_where(|n| n % 2 == 0);
    /// assert!(none.is_empty());
    /// ```
    fn filter_where<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut retained = Self::empty();
        for element in self {
            if predicate(&element) {
                retained.push(element);
            }
        }
        retained
    }

    /// Returns the first element that satisfies the predicate, or `None`
    /// when nothing matches (including the empty input).
    ///
    /// Short-circuits: the predicate is not evaluated on elements after the
    /// first match. `None` is an unambiguous absence signal, so a genuinely
    /// present default-valued element is distinguishable from a miss.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::filter::Filterable;
    ///
    /// assert_eq!(vec![1, 3, 4, 6].first_where(|n| n % 2 == 0), Some(4));
    /// assert_eq!(vec![1, 3, 5].first_where(|n| *n > 5), None);
    /// ```
    fn first_where<P>(self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        for element in self {
            if predicate(&element) {
                return Some(element);
            }
        }
        None
    }
}

impl<S: Sequence> Filterable for S {}
