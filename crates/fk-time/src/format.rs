//! Date output formats and the German-format parser.

use crate::date::Date;
use fk_core::errors::{Error, Result};

/// Output representation selector for a [`Date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateFormat {
    /// German numeric format, `DD.MM.YYYY`.  The default.
    #[default]
    German,
    /// ISO 8601 format, `YYYY-MM-DD`.
    Iso,
    /// US numeric format, `MM/DD/YYYY`.
    Us,
    /// Structured zero-padded day/month/year strings (German field order).
    Parts,
}

/// A formatted date: either a single rendered string or the structured
/// day/month/year triple.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormattedDate {
    /// A rendered date string (`German`, `Iso`, or `Us` format).
    Text(String),
    /// Zero-padded components in German order: day, month, year.
    Parts {
        /// Two-digit day of the month, `"01"`–`"31"`.
        day: String,
        /// Two-digit month, `"01"`–`"12"`.
        month: String,
        /// Four-digit year.
        year: String,
    },
}

impl FormattedDate {
    /// Return the rendered string, or `None` for the `Parts` variant.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormattedDate::Text(s) => Some(s),
            FormattedDate::Parts { .. } => None,
        }
    }
}

impl std::fmt::Display for FormattedDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormattedDate::Text(s) => write!(f, "{s}"),
            FormattedDate::Parts { day, month, year } => {
                write!(f, "{day}.{month}.{year}")
            }
        }
    }
}

impl Date {
    /// Render this date in the given output format.
    pub fn format(self, format: DateFormat) -> FormattedDate {
        let (y, m, d) = self.ymd();
        match format {
            DateFormat::German => FormattedDate::Text(format!("{d:02}.{m:02}.{y:04}")),
            DateFormat::Iso => FormattedDate::Text(format!("{y:04}-{m:02}-{d:02}")),
            DateFormat::Us => FormattedDate::Text(format!("{m:02}/{d:02}/{y:04}")),
            DateFormat::Parts => FormattedDate::Parts {
                day: format!("{d:02}"),
                month: format!("{m:02}"),
                year: format!("{y:04}"),
            },
        }
    }

    /// Parse a date in German numeric format (`DD.MM.YYYY`).
    ///
    /// The inverse of [`Date::format`] with [`DateFormat::German`].
    pub fn parse_german(text: &str) -> Result<Self> {
        let mut parts = text.split('.');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::Date(format!("expected DD.MM.YYYY, got {text:?}")));
        };
        let day: u8 = day
            .parse()
            .map_err(|_| Error::Date(format!("invalid day {day:?} in {text:?}")))?;
        let month: u8 = month
            .parse()
            .map_err(|_| Error::Date(format!("invalid month {month:?} in {text:?}")))?;
        let year: u16 = year
            .parse()
            .map_err(|_| Error::Date(format!("invalid year {year:?} in {text:?}")))?;
        Date::from_ymd(year, month, day)
    }
}
