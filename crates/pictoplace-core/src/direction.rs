//! Separation directions used to pull coincident props apart.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{geometry::Point, location::Location};

/// A compass direction for a separation nudge, or no nudge at all.
///
/// Every direction except [`SeparationDirection::None`] has exactly one
/// opposite, and [`SeparationDirection::opposite`] is an involution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparationDirection {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    #[default]
    None,
}

impl SeparationDirection {
    /// All directions, `None` included.
    pub const ALL: [SeparationDirection; 9] = [
        SeparationDirection::Up,
        SeparationDirection::UpRight,
        SeparationDirection::Right,
        SeparationDirection::DownRight,
        SeparationDirection::Down,
        SeparationDirection::DownLeft,
        SeparationDirection::Left,
        SeparationDirection::UpLeft,
        SeparationDirection::None,
    ];

    /// Returns the direction pointing the other way; `None` maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::UpRight => Self::DownLeft,
            Self::Right => Self::Left,
            Self::DownRight => Self::UpLeft,
            Self::Down => Self::Up,
            Self::DownLeft => Self::UpRight,
            Self::Left => Self::Right,
            Self::UpLeft => Self::DownRight,
            Self::None => Self::None,
        }
    }

    /// Returns the direction that points from the grid center toward `location`.
    pub fn toward(location: Location) -> Self {
        match location {
            Location::N => Self::Up,
            Location::NE => Self::UpRight,
            Location::E => Self::Right,
            Location::SE => Self::DownRight,
            Location::S => Self::Down,
            Location::SW => Self::DownLeft,
            Location::W => Self::Left,
            Location::NW => Self::UpLeft,
        }
    }

    /// Returns the unit vector for this direction in canvas space.
    ///
    /// Diagonals are normalized; `None` is the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pictoplace_core::direction::SeparationDirection;
    /// # use pictoplace_core::geometry::Point;
    /// assert_eq!(SeparationDirection::Up.unit_vector(), Point::new(0.0, -1.0));
    /// assert!(SeparationDirection::None.unit_vector().is_zero());
    /// ```
    pub fn unit_vector(self) -> Point {
        let d = std::f32::consts::FRAC_1_SQRT_2;
        match self {
            Self::Up => Point::new(0.0, -1.0),
            Self::UpRight => Point::new(d, -d),
            Self::Right => Point::new(1.0, 0.0),
            Self::DownRight => Point::new(d, d),
            Self::Down => Point::new(0.0, 1.0),
            Self::DownLeft => Point::new(-d, d),
            Self::Left => Point::new(-1.0, 0.0),
            Self::UpLeft => Point::new(-d, -d),
            Self::None => Point::ZERO,
        }
    }
}

impl From<SeparationDirection> for &'static str {
    fn from(val: SeparationDirection) -> Self {
        match val {
            SeparationDirection::Up => "up",
            SeparationDirection::UpRight => "upright",
            SeparationDirection::Right => "right",
            SeparationDirection::DownRight => "downright",
            SeparationDirection::Down => "down",
            SeparationDirection::DownLeft => "downleft",
            SeparationDirection::Left => "left",
            SeparationDirection::UpLeft => "upleft",
            SeparationDirection::None => "none",
        }
    }
}

impl Display for SeparationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for direction in SeparationDirection::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_only_none_is_self_opposite() {
        for direction in SeparationDirection::ALL {
            let fixed = direction.opposite() == direction;
            assert_eq!(fixed, direction == SeparationDirection::None);
        }
    }

    #[test]
    fn test_unit_vectors_have_unit_length() {
        for direction in SeparationDirection::ALL {
            let expected = if direction == SeparationDirection::None {
                0.0
            } else {
                1.0
            };
            let length = direction.unit_vector().hypot();
            assert_approx_eq!(f32, length, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_opposites_cancel() {
        for direction in SeparationDirection::ALL {
            let sum = direction
                .unit_vector()
                .add_point(direction.opposite().unit_vector());
            assert_approx_eq!(f32, sum.hypot(), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_toward_follows_location_rotation() {
        assert_eq!(
            SeparationDirection::toward(Location::N),
            SeparationDirection::Up
        );
        assert_eq!(
            SeparationDirection::toward(Location::N.opposite()),
            SeparationDirection::Up.opposite()
        );
    }
}
