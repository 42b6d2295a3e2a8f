//! # seqops
//!
//! Eager, order-preserving transformation operations over ordered,
//! homogeneous sequence containers.
//!
//! ## Overview
//!
//! This library provides the higher-order operations callers otherwise
//! hand-write as loops, generic over any ordered container implementing
//! the [`Sequence`](container::Sequence) abstraction:
//!
//! - **Filter / First**: keep matching elements, or find the first match
//! - **Map family**: total map, fail-fast fallible map, best-effort
//!   collecting map, and compacting (optional-valued) map
//! - **Reduce**: strict left fold into a single accumulator
//!
//! Every operation is a stateless pure function: it consumes its input,
//! evaluates caller-supplied functions strictly left-to-right, allocates a
//! fresh output that never aliases the input, and preserves the relative
//! order of the input elements that produced its entries. There is no
//! laziness, no internal concurrency, and no shared state between calls.
//!
//! ## Error handling
//!
//! The fail-fast variant ([`Mappable::try_map_each`](map::Mappable::try_map_each))
//! wraps the first failure in a [`TryMapError`](error::TryMapError) that keeps
//! the original cause inspectable through `cause()` and `Error::source()`.
//! The best-effort variant ([`Mappable::collect_map_each`](map::Mappable::collect_map_each))
//! never aborts and hands every failure back to the caller in encounter
//! order. Failures are never logged, retried, or swallowed.
//!
//! ## Feature Flags
//!
//! - `smallvec`: implements [`Sequence`](container::Sequence) for
//!   `SmallVec<[T; N]>`
//!
//! ## Example
//!
//! ```rust
//! use seqops::prelude::*;
//!
//! let evens = vec![1, 2, 3, 4, 5].filter_where(|n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let doubled = vec![1, 2, 3].map_each(|n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let total = vec![1, 2, 3].reduce(0, |sum, n| sum + n);
//! assert_eq!(total, 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container abstraction, the operation traits, and the
/// fail-fast error type.
///
/// # Usage
///
/// ```rust
/// use seqops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::Sequence;
    pub use crate::error::TryMapError;
    pub use crate::filter::Filterable;
    pub use crate::map::Mappable;
    pub use crate::reduce::Reducible;
}

pub mod container;
pub mod error;
pub mod filter;
pub mod map;
pub mod reduce;
