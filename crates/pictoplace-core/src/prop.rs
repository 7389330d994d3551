//! Props and their size classes.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::warn;
use serde::{Deserialize, Serialize};

/// Size class of a handheld prop.
///
/// Bulkier props need a larger nudge when two of them would be drawn on the
/// same grid point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropCategory {
    Small,
    #[default]
    Medium,
    Large,
}

/// The handheld object being drawn for a track.
///
/// Unknown names decode to [`PropType::Staff`] with a warning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "&'static str")]
pub enum PropType {
    Hand,
    Minihoop,
    Triquetra,
    #[default]
    Staff,
    Club,
    Fan,
    Buugeng,
    Triad,
    Sword,
    Doublestar,
    Bigstaff,
    Bighoop,
    Bigfan,
    Bigbuugeng,
    Guitar,
    Ukulele,
}

impl PropType {
    /// Returns the size class of this prop.
    pub fn category(self) -> PropCategory {
        match self {
            Self::Hand | Self::Minihoop | Self::Triquetra => PropCategory::Small,
            Self::Staff
            | Self::Club
            | Self::Fan
            | Self::Buugeng
            | Self::Triad
            | Self::Sword
            | Self::Doublestar => PropCategory::Medium,
            Self::Bigstaff
            | Self::Bighoop
            | Self::Bigfan
            | Self::Bigbuugeng
            | Self::Guitar
            | Self::Ukulele => PropCategory::Large,
        }
    }

    /// Parses a prop type, degrading to [`PropType::Staff`] on unknown input.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: String| {
            warn!(input = s, error = err; "Unknown prop type, using default");
            Self::default()
        })
    }
}

impl FromStr for PropType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hand" => Ok(Self::Hand),
            "minihoop" => Ok(Self::Minihoop),
            "triquetra" => Ok(Self::Triquetra),
            "staff" => Ok(Self::Staff),
            "club" => Ok(Self::Club),
            "fan" => Ok(Self::Fan),
            "buugeng" => Ok(Self::Buugeng),
            "triad" => Ok(Self::Triad),
            "sword" => Ok(Self::Sword),
            "doublestar" => Ok(Self::Doublestar),
            "bigstaff" => Ok(Self::Bigstaff),
            "bighoop" => Ok(Self::Bighoop),
            "bigfan" => Ok(Self::Bigfan),
            "bigbuugeng" => Ok(Self::Bigbuugeng),
            "guitar" => Ok(Self::Guitar),
            "ukulele" => Ok(Self::Ukulele),
            _ => Err(format!("invalid prop type `{s}`")),
        }
    }
}

impl From<String> for PropType {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl From<PropType> for &'static str {
    fn from(val: PropType) -> Self {
        match val {
            PropType::Hand => "hand",
            PropType::Minihoop => "minihoop",
            PropType::Triquetra => "triquetra",
            PropType::Staff => "staff",
            PropType::Club => "club",
            PropType::Fan => "fan",
            PropType::Buugeng => "buugeng",
            PropType::Triad => "triad",
            PropType::Sword => "sword",
            PropType::Doublestar => "doublestar",
            PropType::Bigstaff => "bigstaff",
            PropType::Bighoop => "bighoop",
            PropType::Bigfan => "bigfan",
            PropType::Bigbuugeng => "bigbuugeng",
            PropType::Guitar => "guitar",
            PropType::Ukulele => "ukulele",
        }
    }
}

impl Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
