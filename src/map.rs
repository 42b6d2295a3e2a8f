//! The map family - transforming every element of a sequence.
//!
//! This module provides the [`Mappable`] trait, implemented for every
//! [`Sequence`], with four variants that differ only in how the transform
//! can decline to produce a value:
//!
//! - [`map_each`](Mappable::map_each): total transform, same length out
//! - [`try_map_each`](Mappable::try_map_each): fallible transform,
//!   fail-fast on the first failure
//! - [`collect_map_each`](Mappable::collect_map_each): fallible transform,
//!   best-effort, every failure collected
//! - [`compact_map_each`](Mappable::compact_map_each): optional transform,
//!   absent results dropped
//!
//! # Laws
//!
//! ## Order preservation
//!
//! Every variant appends outputs (and, for `collect_map_each`, failures) in
//! input-element order.
//!
//! ## Composition
//!
//! For the total variant:
//!
//! ```text
//! sequence.map_each(f).map_each(g) == sequence.map_each(|x| g(f(x)))
//! ```
//!
//! ## Length accounting
//!
//! ```text
//! map_each:          output.length() == input.length()
//! collect_map_each:  successes.length() + failures.length() == input.length()
//! compact_map_each:  output.length() <= input.length()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use seqops::map::Mappable;
//!
//! let doubled = vec![1, 2, 3].map_each(|n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let parsed = vec!["4", "x", "6"].collect_map_each(|s| s.parse::<i32>());
//! assert_eq!(parsed.0, vec![4, 6]);
//! assert_eq!(parsed.1.len(), 1);
//! ```

use crate::container::Sequence;
use crate::error::TryMapError;

/// Element-wise transformation over an ordered sequence.
///
/// Each variant consumes the sequence, evaluates the transform strictly
/// left-to-right, and builds a fresh output in the same container family
/// (the [`Sequence::WithItem`] re-binding), pre-sized to the input length.
pub trait Mappable: Sequence {
    /// Returns a sequence containing the results of applying the transform
    /// to every element, in order.
    ///
    /// The output has exactly the input's length. The transform cannot
    /// signal failure in this variant; see
    /// [`try_map_each`](Self::try_map_each) for the fallible counterpart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::map::Mappable;
    ///
    /// let rendered = vec![1, 2, 3].map_each(|n| n.to_string());
    /// assert_eq!(rendered, vec!["1", "2", "3"]);
    /// ```
    fn map_each<B, F>(self, mut transform: F) -> Self::WithItem<B>
    where
        F: FnMut(Self::Item) -> B,
    {
        let capacity = self.length();
        let mut mapped = <Self::WithItem<B>>::with_capacity(capacity);
        for element in self {
            mapped.push(transform(element));
        }
        mapped
    }

    /// Applies a fallible transform to each element, aborting on the first
    /// failure.
    ///
    /// On success for every element, returns the fully built output. On the
    /// first `Err`, the partial output is discarded, elements after the
    /// failing one are never evaluated, and the failure is returned wrapped
    /// in a [`TryMapError`] identifying the operation. At most one failure
    /// is surfaced.
    ///
    /// # Errors
    ///
    /// Returns [`TryMapError`] wrapping the first failure the transform
    /// produces; the original cause stays inspectable through
    /// [`TryMapError::cause`] and `Error::source`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::map::Mappable;
    ///
    /// let parsed = vec!["4", "5"].try_map_each(|s| s.parse::<i32>());
    /// assert_eq!(parsed.unwrap(), vec![4, 5]);
    ///
    /// let failed = vec!["4", "x", "6"].try_map_each(|s| s.parse::<i32>());
    /// assert!(failed.is_err());
    /// ```
    fn try_map_each<B, E, F>(self, mut transform: F) -> Result<Self::WithItem<B>, TryMapError<E>>
    where
        F: FnMut(Self::Item) -> Result<B, E>,
    {
        let capacity = self.length();
        let mut mapped = <Self::WithItem<B>>::with_capacity(capacity);
        for element in self {
            match transform(element) {
                Ok(value) => mapped.push(value),
                Err(cause) => return Err(TryMapError::new(cause)),
            }
        }
        Ok(mapped)
    }

    /// Applies a fallible transform to every element, collecting successes
    /// and failures separately.
    ///
    /// Unlike [`try_map_each`](Self::try_map_each), no failure aborts the
    /// pass: every element is evaluated exactly once. Successes and failures
    /// each preserve encounter order, and their lengths always sum to the
    /// input length. Failures land in the same container family as the
    /// successes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::map::Mappable;
    ///
    /// let (squares, failures) = vec![1, 2, 3].collect_map_each(|n| {
    ///     if n == 2 { Err("even") } else { Ok(n * n) }
    /// });
    /// assert_eq!(squares, vec![1, 9]);
    /// assert_eq!(failures, vec!["even"]);
    /// ```
    fn collect_map_each<B, E, F>(self, mut transform: F) -> (Self::WithItem<B>, Self::WithItem<E>)
    where
        F: FnMut(Self::Item) -> Result<B, E>,
    {
        let capacity = self.length();
        let mut successes = <Self::WithItem<B>>::with_capacity(capacity);
        let mut failures = <Self::WithItem<E>>::with_capacity(capacity);
        for element in self {
            match transform(element) {
                Ok(value) => successes.push(value),
                Err(cause) => failures.push(cause),
            }
        }
        (successes, failures)
    }

    /// Returns a sequence containing the present results of applying the
    /// optional-valued transform to each element.
    ///
    /// Elements whose transform yields `None` are skipped; there is no
    /// failure path. The transform is invoked exactly once per element
    /// regardless of outcome, and present values keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::map::Mappable;
    ///
    /// let present = vec![Some(1), Some(2), None, Some(3)].compact_map_each(|n| n);
    /// assert_eq!(present, vec![1, 2, 3]);
    /// ```
    fn compact_map_each<B, F>(self, mut transform: F) -> Self::WithItem<B>
    where
        F: FnMut(Self::Item) -> Option<B>,
    {
        let capacity = self.length();
        let mut compacted = <Self::WithItem<B>>::with_capacity(capacity);
        for element in self {
            if let Some(value) = transform(element) {
                compacted.push(value);
            }
        }
        compacted
    }
}

impl<S: Sequence> Mappable for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn map_each_doubles_every_element() {
        assert_eq!(vec![1, 2, 3].map_each(|n| n * 2), vec![2, 4, 6]);
    }

    #[rstest]
    fn map_each_on_empty_input_is_empty() {
        let mapped: Vec<String> = Vec::<i32>::new().map_each(|n| n.to_string());
        assert!(mapped.is_empty());
    }

    #[rstest]
    fn try_map_each_wraps_the_first_failure() {
        let result: Result<Vec<i32>, _> = vec![1, 2, 3].try_map_each(|n| {
            if n == 2 { Err("test error") } else { Ok(n) }
        });
        let error = result.expect_err("second element must fail the batch");
        assert_eq!(*error.cause(), "test error");
    }

    #[rstest]
    fn try_map_each_never_evaluates_past_the_failure() {
        let mut calls = 0;
        let result: Result<Vec<i32>, _> = vec![1, 2, 3].try_map_each(|n| {
            calls += 1;
            if n == 2 { Err("test error") } else { Ok(n) }
        });
        assert!(result.is_err());
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn collect_map_each_splits_successes_and_failures() {
        let (successes, failures) = vec![1, 2, 3].collect_map_each(|n| {
            if n == 2 { Err("test error") } else { Ok(n * n) }
        });
        assert_eq!(successes, vec![1, 9]);
        assert_eq!(failures, vec!["test error"]);
    }

    #[rstest]
    fn compact_map_each_drops_absent_values() {
        let compacted = vec![Some(1), Some(2), None, Some(3)].compact_map_each(|n| n);
        assert_eq!(compacted, vec![1, 2, 3]);
    }

    #[rstest]
    fn compact_map_each_evaluates_every_element() {
        let mut calls = 0;
        vec![1, 2, 3, 4].compact_map_each(|n| {
            calls += 1;
            (n % 2 == 0).then_some(n)
        });
        assert_eq!(calls, 4);
    }
}
