//! Error types for feiertage-rs.
//!
//! All fallible operations across the workspace return the single
//! `thiserror`-derived [`Error`] enum defined here, via the [`Result`]
//! alias.  The `ensure!` and `fail!` macros cover the common
//! validate-and-bail pattern at API boundaries.

use thiserror::Error;

/// The top-level error type used throughout feiertage-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date-related error (out-of-range year, invalid month/day pair,
    /// unparsable date string).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument supplied to a public API.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The requested operation is not implemented.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

/// Shorthand `Result` type used throughout feiertage-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fk_core::{ensure, errors::Error};
/// fn positive(x: i32) -> fk_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use fk_core::{fail, errors::Error};
/// fn always_err() -> fk_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
