//! # feiertage
//!
//! German public-holiday calculation (Easter via Spencer's algorithm,
//! fixed and Easter-offset holidays, federal-state filtering) plus a small
//! fluent text helper.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `fk-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! feiertage = "0.1"
//! ```
//!
//! ```rust
//! use feiertage::holidays::{FederalState, HolidayCalculator};
//! use feiertage::time::DateFormat;
//!
//! let cal = HolidayCalculator::new(2024).unwrap();
//! let whit_monday = cal.whit_monday(DateFormat::Iso);
//! assert_eq!(whit_monday.as_text(), Some("2024-05-20"));
//!
//! // Regional holidays are `None` outside their observing states
//! assert!(cal.epiphany(FederalState::Bremen, DateFormat::Iso).is_none());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and shared macros.
pub use fk_core as core;

/// Date, weekday, Easter-Sunday, and date-formatting types.
pub use fk_time as time;

/// Federal states, holiday keys, and the per-year calculator.
pub use fk_holidays as holidays;

/// Fluent string-buffer helper.
pub use fk_text as text;
