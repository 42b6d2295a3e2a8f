//! Error types for the fallible map operations.
//!
//! This module provides [`TryMapError`], the wrapping failure returned by
//! the fail-fast [`try_map_each`](crate::map::Mappable::try_map_each)
//! operation. The best-effort
//! [`collect_map_each`](crate::map::Mappable::collect_map_each) operation
//! needs no wrapper: it hands the caller's failures back unmodified.

use std::error::Error;
use std::fmt;

/// The first failure produced by a fail-fast map, annotated with the
/// operation that surfaced it.
///
/// The original failure is never stringified away: it stays inspectable
/// through [`cause`](Self::cause), recoverable through
/// [`into_cause`](Self::into_cause), and — when the cause is itself an
/// error — reachable through [`Error::source`] for `downcast_ref` checks.
///
/// # Examples
///
/// ```rust
/// use seqops::error::TryMapError;
///
/// let error = TryMapError::new("parse failure");
/// assert_eq!(format!("{error}"), "try_map_each failed: parse failure");
/// assert_eq!(*error.cause(), "parse failure");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryMapError<E> {
    cause: E,
}

impl<E> TryMapError<E> {
    /// Wraps the underlying failure.
    pub const fn new(cause: E) -> Self {
        Self { cause }
    }

    /// Borrows the underlying failure.
    pub const fn cause(&self) -> &E {
        &self.cause
    }

    /// Consumes the wrapper, returning the underlying failure.
    pub fn into_cause(self) -> E {
        self.cause
    }
}

impl<E: fmt::Display> fmt::Display for TryMapError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "try_map_each failed: {}", self.cause)
    }
}

impl<E: Error + 'static> Error for TryMapError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}
