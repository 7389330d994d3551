//! Symbolic grid locations.
//!
//! A pictograph grid has eight named points arranged like a compass rose.
//! [`Location`] enumerates them in clockwise order starting at north, so the
//! discriminant doubles as an octant index (`0..8`, 45° per step).

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::warn;
use serde::{Deserialize, Serialize};

/// One of the eight compass points of the grid.
///
/// Deserialization is lenient: any name [`FromStr`] accepts decodes to its
/// location, anything else decodes to [`Location::N`] with a warning.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize,
)]
#[serde(from = "String", into = "&'static str")]
pub enum Location {
    #[default]
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Location {
    /// All locations in clockwise order starting at north.
    pub const ALL: [Location; 8] = [
        Location::N,
        Location::NE,
        Location::E,
        Location::SE,
        Location::S,
        Location::SW,
        Location::W,
        Location::NW,
    ];

    /// Returns the octant index of this location (`N = 0`, clockwise).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the location with the given octant index, wrapping modulo 8.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(8) as usize]
    }

    /// Returns the location `steps` octants away, clockwise for positive steps.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pictoplace_core::location::Location;
    /// assert_eq!(Location::N.rotated(2), Location::E);
    /// assert_eq!(Location::N.rotated(-1), Location::NW);
    /// ```
    pub fn rotated(self, steps: i32) -> Self {
        Self::from_index(self.index() as i32 + steps)
    }

    /// Returns the diametrically opposite location.
    pub fn opposite(self) -> Self {
        self.rotated(4)
    }

    /// Returns `true` for N, E, S and W.
    pub fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    /// Returns the compass bearing of this location in degrees.
    pub fn angle(self) -> f32 {
        self.index() as f32 * 45.0
    }

    /// Returns the quadrant (`0..4`) this location belongs to.
    ///
    /// Quadrants pair each cardinal with the intercardinal clockwise of it:
    /// `{N, NE} = 0`, `{E, SE} = 1`, `{S, SW} = 2`, `{W, NW} = 3`.
    pub fn quadrant(self) -> i32 {
        (self.index() / 2) as i32
    }

    /// Returns the signed octant distance from `self` to `other`, in `-3..=4`.
    pub fn steps_to(self, other: Location) -> i32 {
        let diff = (other.index() as i32 - self.index() as i32).rem_euclid(8);
        if diff > 4 { diff - 8 } else { diff }
    }

    /// Parses a location, degrading to [`Location::N`] on unknown input.
    ///
    /// Intended for data arriving from untrusted sources where a bad value
    /// must not abort positioning.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: String| {
            warn!(input = s, error = err; "Unknown location, using default");
            Self::default()
        })
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Self::N),
            "ne" | "northeast" => Ok(Self::NE),
            "e" | "east" => Ok(Self::E),
            "se" | "southeast" => Ok(Self::SE),
            "s" | "south" => Ok(Self::S),
            "sw" | "southwest" => Ok(Self::SW),
            "w" | "west" => Ok(Self::W),
            "nw" | "northwest" => Ok(Self::NW),
            _ => Err(format!("invalid location `{s}`")),
        }
    }
}

impl From<String> for Location {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl From<Location> for &'static str {
    fn from(val: Location) -> Self {
        match val {
            Location::N => "n",
            Location::NE => "ne",
            Location::E => "e",
            Location::SE => "se",
            Location::S => "s",
            Location::SW => "sw",
            Location::W => "w",
            Location::NW => "nw",
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotated_wraps() {
        assert_eq!(Location::NW.rotated(1), Location::N);
        assert_eq!(Location::N.rotated(-2), Location::W);
        assert_eq!(Location::SE.rotated(8), Location::SE);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Location::N.opposite(), Location::S);
        assert_eq!(Location::NE.opposite(), Location::SW);
        assert_eq!(Location::W.opposite(), Location::E);
    }

    #[test]
    fn test_quadrant_pairs() {
        assert_eq!(Location::N.quadrant(), 0);
        assert_eq!(Location::NE.quadrant(), 0);
        assert_eq!(Location::E.quadrant(), 1);
        assert_eq!(Location::SE.quadrant(), 1);
        assert_eq!(Location::SW.quadrant(), 2);
        assert_eq!(Location::NW.quadrant(), 3);
    }

    #[test]
    fn test_steps_to() {
        assert_eq!(Location::N.steps_to(Location::E), 2);
        assert_eq!(Location::N.steps_to(Location::W), -2);
        assert_eq!(Location::N.steps_to(Location::S), 4);
        assert_eq!(Location::NW.steps_to(Location::NE), 2);
    }

    #[test]
    fn test_from_str_accepts_short_and_long_names() {
        assert_eq!("ne".parse::<Location>(), Ok(Location::NE));
        assert_eq!("South".parse::<Location>(), Ok(Location::S));
        assert!("up".parse::<Location>().is_err());
    }

    #[test]
    fn test_parse_or_default_degrades_to_north() {
        assert_eq!(Location::parse_or_default("sideways"), Location::N);
        assert_eq!(Location::parse_or_default("w"), Location::W);
    }

    #[test]
    fn test_display_roundtrip() {
        for location in Location::ALL {
            assert_eq!(location.to_string().parse::<Location>(), Ok(location));
        }
    }
}
