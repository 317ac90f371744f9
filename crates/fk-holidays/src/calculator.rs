//! `HolidayCalculator` — all German public holidays of a single year.

use std::collections::BTreeMap;

use crate::federal_state::FederalState;
use crate::holiday::Holiday;
use fk_core::errors::Result;
use fk_time::{easter_sunday, Date, DateFormat, FormattedDate};

/// Computes the German public-holiday dates of one calendar year.
///
/// Easter Sunday is computed exactly once at construction; every movable
/// holiday is a fixed day offset from that cached date.  The instance is
/// immutable after construction, so all queries are pure reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayCalculator {
    year: u16,
    easter: Date,
}

impl HolidayCalculator {
    /// Create a calculator for `year`.
    ///
    /// Returns an error if `year` is outside the supported [`Date`] range
    /// (1583–4099).
    pub fn new(year: u16) -> Result<Self> {
        let easter = easter_sunday(year)?;
        Ok(Self { year, easter })
    }

    /// Return the year this calculator was built for.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the cached Easter Sunday date.
    pub fn easter(&self) -> Date {
        self.easter
    }

    // ── Core date rules ───────────────────────────────────────────────────────

    /// A fixed-date holiday of the calculator's year.
    fn fixed(&self, month: u8, day: u8) -> Date {
        Date::from_ymd(self.year, month, day).expect("year validated at construction")
    }

    /// The date of `holiday`, ignoring regional gating.
    fn date_for(&self, holiday: Holiday) -> Date {
        match holiday {
            Holiday::NewYear => self.fixed(1, 1),
            Holiday::Epiphany => self.fixed(1, 6),
            Holiday::GoodFriday => self.easter - 2,
            Holiday::EasterSunday => self.easter,
            Holiday::EasterMonday => self.easter + 1,
            Holiday::MayDay => self.fixed(5, 1),
            Holiday::AscensionDay => self.easter + 39,
            Holiday::WhitSunday => self.easter + 49,
            Holiday::WhitMonday => self.easter + 50,
            Holiday::CorpusChristi => self.easter + 60,
            Holiday::AssumptionOfMary => self.fixed(8, 15),
            Holiday::GermanUnityDay => self.fixed(10, 3),
            Holiday::ReformationDay => self.fixed(10, 31),
            Holiday::AllHallowsDay => self.fixed(11, 1),
            Holiday::RepentanceDay => self.first_advent_sunday() - 11,
            Holiday::ChristmasDay => self.fixed(12, 25),
            Holiday::BoxingDay => self.fixed(12, 26),
        }
    }

    /// The date of `holiday` as observed in `state`, or `None` when the
    /// state is not in the holiday's allow-list.
    pub fn date_of(&self, holiday: Holiday, state: FederalState) -> Option<Date> {
        holiday
            .is_observed_in(state)
            .then(|| self.date_for(holiday))
    }

    /// The first Advent Sunday: the Sunday strictly after November 26.
    ///
    /// When November 26 is itself a Sunday the result advances a full week;
    /// the fourth Sunday before Christmas always falls between November 27
    /// and December 3.
    pub fn first_advent_sunday(&self) -> Date {
        let nov26 = self.fixed(11, 26);
        let w = i32::from(nov26.weekday().ordinal() % 7); // Sunday = 0
        nov26 + (7 - w)
    }

    // ── Bulk query ────────────────────────────────────────────────────────────

    /// Return every holiday of the year, formatted with `format`, keyed in
    /// calendar order.
    ///
    /// Every key is always present; `None` marks a holiday not observed in
    /// `state`.  Pass `Default::default()` for the conventional defaults
    /// (Baden-Württemberg, German format).
    pub fn all_holidays(
        &self,
        state: FederalState,
        format: DateFormat,
    ) -> BTreeMap<Holiday, Option<FormattedDate>> {
        Holiday::ALL
            .iter()
            .map(|&h| (h, self.date_of(h, state).map(|d| d.format(format))))
            .collect()
    }

    // ── Per-holiday accessors (nationwide) ────────────────────────────────────

    /// Neujahr, January 1.
    pub fn new_year(&self, format: DateFormat) -> FormattedDate {
        self.date_for(Holiday::NewYear).format(format)
    }

    /// Karfreitag, Easter − 2 days.
    pub fn good_friday(&self, format: DateFormat) -> FormattedDate {
        self.date_for(Holiday::GoodFriday).format(format)
    }

    /// Ostersonntag.
    pub fn easter_sunday(&self, format: DateFormat) -> FormattedDate {
        self.date_for(Holiday::EasterSunday).format(format)
    }

    /// Ostermontag, Easter + 1 day.
    pub fn easter_monday(&self, format: DateFormat) -> FormattedDate {
        self.date_for(Holiday::EasterMonday).format(format)
    }

    /// Tag der Arbeit, May 1.
    pub fn may_day(&self, format: DateFormat) -> FormattedDate {
        self.date_for(Holiday::MayDay).format(format)
    }

    /// Christi Himmelfahrt, Easter + 39 days.
    pub fn ascension_day(&self, format: DateFormat) -> FormattedDate {
        self.date_for(Holiday::AscensionDay).format(format)
    }

    /// Pfingstsonntag, Easter + 49 days.
    pub fn whit_sunday(&self, format: DateFormat) -> FormattedDate {
        self.date_for(Holiday::WhitSunday).format(format)
    }

    /// Pfingstmontag, Easter + 50 days.
    pub fn whit_monday(&self, format: DateFormat) -> FormattedDate {
        self.date_for(Holiday::WhitMonday).format(format)
    }

    /// Tag der Deutschen Einheit, October 3.
    pub fn german_unity_day(&self, format: DateFormat) -> FormattedDate {
        self.date_for(Holiday::GermanUnityDay).format(format)
    }

    /// 1. Weihnachtstag, December 25.
    pub fn christmas_day(&self, format: DateFormat) -> FormattedDate {
        self.date_for(Holiday::ChristmasDay).format(format)
    }

    /// 2. Weihnachtstag, December 26.
    pub fn boxing_day(&self, format: DateFormat) -> FormattedDate {
        self.date_for(Holiday::BoxingDay).format(format)
    }

    // ── Per-holiday accessors (regional) ──────────────────────────────────────

    /// Heilige Drei Könige, January 6; BW, BY, ST only.
    pub fn epiphany(&self, state: FederalState, format: DateFormat) -> Option<FormattedDate> {
        self.date_of(Holiday::Epiphany, state).map(|d| d.format(format))
    }

    /// Fronleichnam, Easter + 60 days; BW, BY, HE, NW, RP, SL, SN, TH only.
    pub fn corpus_christi(&self, state: FederalState, format: DateFormat) -> Option<FormattedDate> {
        self.date_of(Holiday::CorpusChristi, state)
            .map(|d| d.format(format))
    }

    /// Mariä Himmelfahrt, August 15; BY and SL only.
    pub fn assumption_of_mary(
        &self,
        state: FederalState,
        format: DateFormat,
    ) -> Option<FormattedDate> {
        self.date_of(Holiday::AssumptionOfMary, state)
            .map(|d| d.format(format))
    }

    /// Reformationstag, October 31; BB, MV, SN, ST, TH only.
    pub fn reformation_day(
        &self,
        state: FederalState,
        format: DateFormat,
    ) -> Option<FormattedDate> {
        self.date_of(Holiday::ReformationDay, state)
            .map(|d| d.format(format))
    }

    /// Allerheiligen, November 1; BW, BY, NW, RP, SL only.
    pub fn all_hallows_day(
        &self,
        state: FederalState,
        format: DateFormat,
    ) -> Option<FormattedDate> {
        self.date_of(Holiday::AllHallowsDay, state)
            .map(|d| d.format(format))
    }

    /// Buß- und Bettag, 11 days before the first Advent Sunday; SN only.
    pub fn repentance_day(
        &self,
        state: FederalState,
        format: DateFormat,
    ) -> Option<FormattedDate> {
        self.date_of(Holiday::RepentanceDay, state)
            .map(|d| d.format(format))
    }
}
