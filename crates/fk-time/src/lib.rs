//! # fk-time
//!
//! Date, weekday, Easter-Sunday, and date-formatting types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Easter Sunday computation (Spencer's algorithm).
pub mod easter;

/// Date output formats and parsing.
pub mod format;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::easter_sunday;
pub use format::{DateFormat, FormattedDate};
pub use month::Month;
pub use weekday::Weekday;
