//! `FederalState` — the 16 German federal states (Bundesländer).

use fk_core::errors::Error;

/// A German federal state, identified by its two-letter code.
///
/// Used to decide which regionally-observed holidays apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FederalState {
    /// Baden-Württemberg (BW).  The default.
    #[default]
    BadenWuerttemberg,
    /// Bayern (BY).
    Bavaria,
    /// Berlin (BE).
    Berlin,
    /// Brandenburg (BB).
    Brandenburg,
    /// Bremen (HB).
    Bremen,
    /// Hamburg (HH).
    Hamburg,
    /// Hessen (HE).
    Hesse,
    /// Mecklenburg-Vorpommern (MV).
    MecklenburgVorpommern,
    /// Niedersachsen (NI).
    LowerSaxony,
    /// Nordrhein-Westfalen (NW).
    NorthRhineWestphalia,
    /// Rheinland-Pfalz (RP).
    RhinelandPalatinate,
    /// Saarland (SL).
    Saarland,
    /// Sachsen (SN).
    Saxony,
    /// Sachsen-Anhalt (ST).
    SaxonyAnhalt,
    /// Schleswig-Holstein (SH).
    SchleswigHolstein,
    /// Thüringen (TH).
    Thuringia,
}

impl FederalState {
    /// All 16 federal states.
    pub const ALL: [FederalState; 16] = [
        FederalState::BadenWuerttemberg,
        FederalState::Bavaria,
        FederalState::Berlin,
        FederalState::Brandenburg,
        FederalState::Bremen,
        FederalState::Hamburg,
        FederalState::Hesse,
        FederalState::MecklenburgVorpommern,
        FederalState::LowerSaxony,
        FederalState::NorthRhineWestphalia,
        FederalState::RhinelandPalatinate,
        FederalState::Saarland,
        FederalState::Saxony,
        FederalState::SaxonyAnhalt,
        FederalState::SchleswigHolstein,
        FederalState::Thuringia,
    ];

    /// Look up a state by its two-letter code, case-insensitively.
    ///
    /// Returns `None` for unrecognized codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.code().eq_ignore_ascii_case(code))
    }

    /// Return the official two-letter code (`"BW"`, `"BY"`, …).
    pub fn code(&self) -> &'static str {
        match self {
            FederalState::BadenWuerttemberg => "BW",
            FederalState::Bavaria => "BY",
            FederalState::Berlin => "BE",
            FederalState::Brandenburg => "BB",
            FederalState::Bremen => "HB",
            FederalState::Hamburg => "HH",
            FederalState::Hesse => "HE",
            FederalState::MecklenburgVorpommern => "MV",
            FederalState::LowerSaxony => "NI",
            FederalState::NorthRhineWestphalia => "NW",
            FederalState::RhinelandPalatinate => "RP",
            FederalState::Saarland => "SL",
            FederalState::Saxony => "SN",
            FederalState::SaxonyAnhalt => "ST",
            FederalState::SchleswigHolstein => "SH",
            FederalState::Thuringia => "TH",
        }
    }

    /// Return the German name of the state.
    pub fn name(&self) -> &'static str {
        match self {
            FederalState::BadenWuerttemberg => "Baden-Württemberg",
            FederalState::Bavaria => "Bayern",
            FederalState::Berlin => "Berlin",
            FederalState::Brandenburg => "Brandenburg",
            FederalState::Bremen => "Bremen",
            FederalState::Hamburg => "Hamburg",
            FederalState::Hesse => "Hessen",
            FederalState::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            FederalState::LowerSaxony => "Niedersachsen",
            FederalState::NorthRhineWestphalia => "Nordrhein-Westfalen",
            FederalState::RhinelandPalatinate => "Rheinland-Pfalz",
            FederalState::Saarland => "Saarland",
            FederalState::Saxony => "Sachsen",
            FederalState::SaxonyAnhalt => "Sachsen-Anhalt",
            FederalState::SchleswigHolstein => "Schleswig-Holstein",
            FederalState::Thuringia => "Thüringen",
        }
    }
}

impl std::fmt::Display for FederalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for FederalState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown federal state code {s:?}")))
    }
}
