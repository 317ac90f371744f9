//! `Holiday` — the German public-holiday keys and their regional allow-lists.

use crate::federal_state::FederalState;

/// States observing Epiphany (Heilige Drei Könige).
const EPIPHANY: [FederalState; 3] = [
    FederalState::BadenWuerttemberg,
    FederalState::Bavaria,
    FederalState::SaxonyAnhalt,
];

/// States observing Corpus Christi (Fronleichnam).
const CORPUS_CHRISTI: [FederalState; 8] = [
    FederalState::BadenWuerttemberg,
    FederalState::Bavaria,
    FederalState::Hesse,
    FederalState::NorthRhineWestphalia,
    FederalState::RhinelandPalatinate,
    FederalState::Saarland,
    FederalState::Saxony,
    FederalState::Thuringia,
];

/// States observing the Assumption of Mary (Mariä Himmelfahrt).
const ASSUMPTION_OF_MARY: [FederalState; 2] = [FederalState::Bavaria, FederalState::Saarland];

/// States observing Reformation Day (Reformationstag).
const REFORMATION_DAY: [FederalState; 5] = [
    FederalState::Brandenburg,
    FederalState::MecklenburgVorpommern,
    FederalState::Saxony,
    FederalState::SaxonyAnhalt,
    FederalState::Thuringia,
];

/// States observing All Hallows Day (Allerheiligen).
const ALL_HALLOWS_DAY: [FederalState; 5] = [
    FederalState::BadenWuerttemberg,
    FederalState::Bavaria,
    FederalState::NorthRhineWestphalia,
    FederalState::RhinelandPalatinate,
    FederalState::Saarland,
];

/// States observing Repentance Day (Buß- und Bettag).
const REPENTANCE_DAY: [FederalState; 1] = [FederalState::Saxony];

/// A German public holiday, identified by a fixed kebab-case key.
///
/// Variants are declared in calendar order, so ordered collections keyed by
/// `Holiday` iterate through the year chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holiday {
    /// Neujahr, fixed January 1.
    NewYear,
    /// Heilige Drei Könige, fixed January 6 (regional).
    Epiphany,
    /// Karfreitag, Easter − 2 days.
    GoodFriday,
    /// Ostersonntag, the Easter reference date itself.
    EasterSunday,
    /// Ostermontag, Easter + 1 day.
    EasterMonday,
    /// Tag der Arbeit, fixed May 1.
    MayDay,
    /// Christi Himmelfahrt, Easter + 39 days.
    AscensionDay,
    /// Pfingstsonntag, Easter + 49 days.
    WhitSunday,
    /// Pfingstmontag, Easter + 50 days.
    WhitMonday,
    /// Fronleichnam, Easter + 60 days (regional).
    CorpusChristi,
    /// Mariä Himmelfahrt, fixed August 15 (regional).
    AssumptionOfMary,
    /// Tag der Deutschen Einheit, fixed October 3.
    GermanUnityDay,
    /// Reformationstag, fixed October 31 (regional).
    ReformationDay,
    /// Allerheiligen, fixed November 1 (regional).
    AllHallowsDay,
    /// Buß- und Bettag, 11 days before the first Advent Sunday (Saxony only).
    RepentanceDay,
    /// 1. Weihnachtstag, fixed December 25.
    ChristmasDay,
    /// 2. Weihnachtstag, fixed December 26.
    BoxingDay,
}

impl Holiday {
    /// All 17 holidays, in calendar order.
    pub const ALL: [Holiday; 17] = [
        Holiday::NewYear,
        Holiday::Epiphany,
        Holiday::GoodFriday,
        Holiday::EasterSunday,
        Holiday::EasterMonday,
        Holiday::MayDay,
        Holiday::AscensionDay,
        Holiday::WhitSunday,
        Holiday::WhitMonday,
        Holiday::CorpusChristi,
        Holiday::AssumptionOfMary,
        Holiday::GermanUnityDay,
        Holiday::ReformationDay,
        Holiday::AllHallowsDay,
        Holiday::RepentanceDay,
        Holiday::ChristmasDay,
        Holiday::BoxingDay,
    ];

    /// Return the fixed kebab-case key (`"new-year"`, `"good-friday"`, …).
    pub fn key(&self) -> &'static str {
        match self {
            Holiday::NewYear => "new-year",
            Holiday::Epiphany => "epiphany",
            Holiday::GoodFriday => "good-friday",
            Holiday::EasterSunday => "easter-sunday",
            Holiday::EasterMonday => "easter-monday",
            Holiday::MayDay => "may-day",
            Holiday::AscensionDay => "ascension-day",
            Holiday::WhitSunday => "whit-sunday",
            Holiday::WhitMonday => "whit-monday",
            Holiday::CorpusChristi => "corpus-christi",
            Holiday::AssumptionOfMary => "assumption-of-mary",
            Holiday::GermanUnityDay => "german-unity-day",
            Holiday::ReformationDay => "reformation-day",
            Holiday::AllHallowsDay => "all-hallows-day",
            Holiday::RepentanceDay => "repentance-day",
            Holiday::ChristmasDay => "christmas-day",
            Holiday::BoxingDay => "boxing-day",
        }
    }

    /// Look up a holiday by its kebab-case key.
    ///
    /// Returns `None` for unrecognized keys.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|h| h.key() == key)
    }

    /// Return the allow-list of states observing this holiday, or `None`
    /// for nationwide holidays.
    pub fn observing_states(&self) -> Option<&'static [FederalState]> {
        match self {
            Holiday::Epiphany => Some(&EPIPHANY),
            Holiday::CorpusChristi => Some(&CORPUS_CHRISTI),
            Holiday::AssumptionOfMary => Some(&ASSUMPTION_OF_MARY),
            Holiday::ReformationDay => Some(&REFORMATION_DAY),
            Holiday::AllHallowsDay => Some(&ALL_HALLOWS_DAY),
            Holiday::RepentanceDay => Some(&REPENTANCE_DAY),
            _ => None,
        }
    }

    /// Return `true` if this holiday is observed in `state`.
    ///
    /// Nationwide holidays are observed everywhere.
    pub fn is_observed_in(&self, state: FederalState) -> bool {
        match self.observing_states() {
            None => true,
            Some(states) => states.contains(&state),
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_roundtrip() {
        for holiday in Holiday::ALL {
            assert_eq!(Holiday::from_key(holiday.key()), Some(holiday));
        }
        assert_eq!(Holiday::from_key("mardi-gras"), None);
    }

    #[test]
    fn nationwide_observed_everywhere() {
        for state in FederalState::ALL {
            assert!(Holiday::NewYear.is_observed_in(state));
            assert!(Holiday::WhitMonday.is_observed_in(state));
            assert!(Holiday::BoxingDay.is_observed_in(state));
        }
    }

    #[test]
    fn regional_gating() {
        assert!(Holiday::Epiphany.is_observed_in(FederalState::Bavaria));
        assert!(!Holiday::Epiphany.is_observed_in(FederalState::Bremen));
        assert!(Holiday::RepentanceDay.is_observed_in(FederalState::Saxony));
        assert!(!Holiday::RepentanceDay.is_observed_in(FederalState::Bavaria));
        assert!(Holiday::CorpusChristi.is_observed_in(FederalState::Hesse));
        assert!(!Holiday::CorpusChristi.is_observed_in(FederalState::Berlin));
    }

    #[test]
    fn calendar_order() {
        let mut sorted = Holiday::ALL;
        sorted.sort_unstable();
        assert_eq!(sorted, Holiday::ALL);
    }
}
