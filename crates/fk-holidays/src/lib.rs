//! # fk-holidays
//!
//! German public-holiday calculation: federal states, holiday keys, and the
//! per-year [`HolidayCalculator`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalculator` — all holidays of one year.
pub mod calculator;

/// `FederalState` — the 16 German federal states.
pub mod federal_state;

/// `Holiday` — holiday keys and regional allow-lists.
pub mod holiday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::HolidayCalculator;
pub use federal_state::FederalState;
pub use holiday::Holiday;
