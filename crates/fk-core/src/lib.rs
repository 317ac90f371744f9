//! # fk-core
//!
//! Error definitions and shared macros for feiertage-rs.
//!
//! Every other crate in the workspace depends on this one for its
//! [`Error`] type, the [`Result`] alias, and the `ensure!` / `fail!`
//! macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
