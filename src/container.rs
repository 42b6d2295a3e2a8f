//! The ordered-sequence container abstraction.
//!
//! This module provides the [`Sequence`] trait, the contract every operation
//! in this crate is generic over: a finite, ordered, single-element-type
//! container that can be constructed empty and appended to at the back.
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types, so a map from a
//! container of `A` to the *same* container of `B` cannot be expressed
//! directly. This module uses a Generic Associated Type, [`Sequence::WithItem`],
//! to re-bind the container to a different element type, which is what lets
//! `map_each` on a `VecDeque<i32>` return a `VecDeque<String>` rather than
//! collapsing everything into `Vec`.
//!
//! # Example
//!
//! ```rust
//! use seqops::container::Sequence;
//!
//! fn lengths<S>(sequence: S) -> S::WithItem<usize>
//! where
//!     S: Sequence<Item = String>,
//! {
//!     let mut out = <S::WithItem<usize>>::with_capacity(sequence.length());
//!     for element in sequence {
//!         out.push(element.len());
//!     }
//!     out
//! }
//!
//! let words = vec!["one".to_string(), "three".to_string()];
//! assert_eq!(lengths(words), vec![3, 5]);
//! ```

use std::collections::VecDeque;

#[cfg(feature = "smallvec")]
use smallvec::SmallVec;

/// A finite, ordered, appendable container of elements of a single type.
///
/// Iteration (via the `IntoIterator` supertrait) is strictly left-to-right
/// in element order and consumes the container. `Item` is the supertrait's
/// associated type; a bound of the form `S: Sequence<Item = T>` constrains it.
///
/// # Laws
///
/// For any implementation:
///
/// 1. **Empty**: `Self::empty().length() == 0`.
/// 2. **Append**: after `sequence.push(element)`, `length()` has grown by
///    exactly one and iteration yields `element` last.
/// 3. **Order**: iteration yields elements in the order they were pushed.
/// 4. **Capacity**: `with_capacity(n)` is observationally identical to
///    `empty()`; the capacity is a pre-sizing hint only.
///
/// # Examples
///
/// ```rust
/// use seqops::container::Sequence;
///
/// let mut sequence: Vec<i32> = Sequence::empty();
/// sequence.push(1);
/// sequence.push(2);
/// assert_eq!(sequence.length(), 2);
/// assert_eq!(sequence, vec![1, 2]);
/// ```
pub trait Sequence: Sized + IntoIterator {
    /// The same container family holding elements of type `B`.
    ///
    /// For example, for `VecDeque<i32>`, `WithItem<String>` is
    /// `VecDeque<String>`.
    type WithItem<B>: Sequence<Item = B>;

    /// Creates an empty sequence.
    fn empty() -> Self;

    /// Creates an empty sequence pre-sized for `capacity` elements.
    ///
    /// Implementations not tracking capacity may ignore the hint.
    fn with_capacity(capacity: usize) -> Self;

    /// Appends an element at the back of the sequence.
    fn push(&mut self, item: Self::Item);

    /// Returns the number of elements in the sequence.
    fn length(&self) -> usize;

    /// Returns `true` if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

// =============================================================================
// Standard Library Container Implementations
// =============================================================================

impl<T> Sequence for Vec<T> {
    type WithItem<B> = Vec<B>;

    fn empty() -> Self {
        Self::new()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn push(&mut self, item: T) {
        Self::push(self, item);
    }

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Sequence for VecDeque<T> {
    type WithItem<B> = VecDeque<B>;

    fn empty() -> Self {
        Self::new()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "smallvec")]
impl<T, const N: usize> Sequence for SmallVec<[T; N]> {
    type WithItem<B> = SmallVec<[B; N]>;

    fn empty() -> Self {
        Self::new()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    fn push(&mut self, item: T) {
        Self::push(self, item);
    }

    fn length(&self) -> usize {
        self.len()
    }
}

static_assertions::assert_impl_all!(Vec<i32>: Sequence);
static_assertions::assert_impl_all!(VecDeque<i32>: Sequence);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_vec_has_zero_length() {
        let sequence: Vec<i32> = Sequence::empty();
        assert_eq!(sequence.length(), 0);
        assert!(Sequence::is_empty(&sequence));
    }

    #[rstest]
    fn push_preserves_insertion_order() {
        let mut sequence: Vec<i32> = Sequence::empty();
        Sequence::push(&mut sequence, 3);
        Sequence::push(&mut sequence, 1);
        Sequence::push(&mut sequence, 2);
        assert_eq!(sequence, vec![3, 1, 2]);
    }

    #[rstest]
    fn with_capacity_is_observationally_empty() {
        let sequence: Vec<i32> = Sequence::with_capacity(16);
        assert_eq!(sequence.length(), 0);
    }

    #[rstest]
    fn deque_push_appends_at_back() {
        let mut sequence: VecDeque<i32> = Sequence::empty();
        Sequence::push(&mut sequence, 1);
        Sequence::push(&mut sequence, 2);
        assert_eq!(sequence.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    /// Verifies that the GAT re-binds the container family, not just Vec.
    #[test]
    fn with_item_preserves_container_family() {
        fn assert_family<S: Sequence<Item = i32, WithItem<String> = VecDeque<String>>>() {}
        assert_family::<VecDeque<i32>>();
    }
}
