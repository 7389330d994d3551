//! Motion attributes for a single track.
//!
//! A [`MotionData`] describes how one hand travels during a pictograph: where
//! it starts and ends on the grid, how the prop is oriented at both ends, which
//! way it spins and how many turns it makes.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::location::Location;

// =============================================================================
// Orientation
// =============================================================================

/// Orientation of a prop relative to the grid center.
///
/// `In` and `Out` are *radial* (the prop lies along the radius), `Clock` and
/// `Counter` are *nonradial* (the prop lies across it).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Orientation {
    #[default]
    In,
    Out,
    Clock,
    Counter,
}

impl Orientation {
    /// Returns `true` for `In` and `Out`.
    pub fn is_radial(self) -> bool {
        matches!(self, Self::In | Self::Out)
    }

    /// Returns `true` for `Clock` and `Counter`.
    pub fn is_nonradial(self) -> bool {
        !self.is_radial()
    }

    /// Parses an orientation, degrading to [`Orientation::In`] on unknown input.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: String| {
            warn!(input = s, error = err; "Unknown orientation, using default");
            Self::default()
        })
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "clock" => Ok(Self::Clock),
            "counter" => Ok(Self::Counter),
            _ => Err(format!("invalid orientation `{s}`")),
        }
    }
}

impl From<String> for Orientation {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl From<Orientation> for &'static str {
    fn from(val: Orientation) -> Self {
        match val {
            Orientation::In => "in",
            Orientation::Out => "out",
            Orientation::Clock => "clock",
            Orientation::Counter => "counter",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

// =============================================================================
// MotionType
// =============================================================================

/// The kind of movement a hand performs.
///
/// `Pro`, `Anti` and `Float` are *shift* motions that travel to an adjacent
/// grid point; `Dash` crosses the grid through the center; `Static` stays put.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "&'static str")]
pub enum MotionType {
    #[default]
    Static,
    Pro,
    Anti,
    Float,
    Dash,
}

impl MotionType {
    /// All motion types.
    pub const ALL: [MotionType; 5] = [
        MotionType::Static,
        MotionType::Pro,
        MotionType::Anti,
        MotionType::Float,
        MotionType::Dash,
    ];

    /// Returns `true` for the shift family (`Pro`, `Anti`, `Float`).
    pub fn is_shift(self) -> bool {
        matches!(self, Self::Pro | Self::Anti | Self::Float)
    }

    /// Parses a motion type, degrading to [`MotionType::Static`] on unknown input.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: String| {
            warn!(input = s, error = err; "Unknown motion type, using default");
            Self::default()
        })
    }
}

impl FromStr for MotionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "pro" => Ok(Self::Pro),
            "anti" => Ok(Self::Anti),
            "float" => Ok(Self::Float),
            "dash" => Ok(Self::Dash),
            _ => Err(format!("invalid motion type `{s}`")),
        }
    }
}

impl From<String> for MotionType {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl From<MotionType> for &'static str {
    fn from(val: MotionType) -> Self {
        match val {
            MotionType::Static => "static",
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Float => "float",
            MotionType::Dash => "dash",
        }
    }
}

impl Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

// =============================================================================
// RotationDirection
// =============================================================================

/// Spin direction of the prop during the motion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "&'static str")]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
    #[default]
    None,
}

impl RotationDirection {
    /// Returns the reversed spin; `None` stays `None`.
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
            Self::None => Self::None,
        }
    }

    /// Parses a rotation direction, degrading to [`RotationDirection::None`].
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: String| {
            warn!(input = s, error = err; "Unknown rotation direction, using default");
            Self::default()
        })
    }
}

impl FromStr for RotationDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cw" | "clockwise" => Ok(Self::Clockwise),
            "ccw" | "counter_clockwise" | "counterclockwise" => Ok(Self::CounterClockwise),
            "none" | "no_rot" => Ok(Self::None),
            _ => Err(format!("invalid rotation direction `{s}`")),
        }
    }
}

impl From<String> for RotationDirection {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl From<RotationDirection> for &'static str {
    fn from(val: RotationDirection) -> Self {
        match val {
            RotationDirection::Clockwise => "cw",
            RotationDirection::CounterClockwise => "ccw",
            RotationDirection::None => "no_rot",
        }
    }
}

impl Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

// =============================================================================
// Turns
// =============================================================================

/// Number of prop turns performed during a motion.
///
/// Turns are non-negative and may be fractional (half turns are common).
/// [`Turns::Float`] marks a motion whose prop does not rotate relative to the
/// hand at all.
///
/// Decodes from a number or the string `"fl"`. Negative numbers and unknown
/// strings decode to zero turns with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(from = "TurnsRepr", into = "TurnsRepr")]
pub enum Turns {
    Value(f32),
    Float,
}

impl Turns {
    /// Creates a turn count, clamping negative or non-finite input to zero.
    pub fn new(value: f32) -> Self {
        if value.is_finite() && value > 0.0 {
            Self::Value(value)
        } else {
            Self::Value(0.0)
        }
    }

    /// Returns `true` if this is a numeric zero.
    pub fn is_zero(self) -> bool {
        matches!(self, Self::Value(v) if v == 0.0)
    }

    /// Renders the turn count the way lookup tables spell it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pictoplace_core::motion::Turns;
    /// assert_eq!(Turns::new(1.0).to_key(), "1");
    /// assert_eq!(Turns::new(0.5).to_key(), "0.5");
    /// assert_eq!(Turns::Float.to_key(), "fl");
    /// ```
    pub fn to_key(self) -> String {
        match self {
            Self::Float => "fl".to_string(),
            Self::Value(v) if v.fract() == 0.0 => format!("{}", v as i64),
            Self::Value(v) => format!("{v}"),
        }
    }
}

impl Default for Turns {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_key())
    }
}

/// Wire form of [`Turns`]: a number, or the string `"fl"`.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum TurnsRepr {
    Number(f32),
    Text(String),
}

impl From<TurnsRepr> for Turns {
    fn from(repr: TurnsRepr) -> Self {
        match repr {
            TurnsRepr::Number(value) if value.is_finite() && value >= 0.0 => Self::Value(value),
            TurnsRepr::Text(text) if text == "fl" => Self::Float,
            TurnsRepr::Number(value) => {
                warn!(input = value; "Invalid turn count, using zero");
                Self::default()
            }
            TurnsRepr::Text(text) => {
                warn!(input = text.as_str(); "Invalid turn count, using zero");
                Self::default()
            }
        }
    }
}

impl From<Turns> for TurnsRepr {
    fn from(turns: Turns) -> Self {
        match turns {
            Turns::Value(value) => Self::Number(value),
            Turns::Float => Self::Text("fl".to_string()),
        }
    }
}

// =============================================================================
// MotionData
// =============================================================================

/// The complete description of one track's movement.
///
/// Constructed by the data layer and handed to the positioning engine by
/// reference; the engine never mutates it.
///
/// # Examples
///
/// ```
/// # use pictoplace_core::{location::Location, motion::{MotionData, MotionType, RotationDirection}};
/// let motion = MotionData::new(MotionType::Pro, Location::N, Location::E)
///     .with_rotation_direction(RotationDirection::Clockwise);
/// assert!(motion.motion_type().is_shift());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MotionData {
    motion_type: MotionType,
    start_location: Location,
    end_location: Location,
    #[serde(default)]
    start_orientation: Orientation,
    #[serde(default)]
    end_orientation: Orientation,
    #[serde(default)]
    rotation_direction: RotationDirection,
    #[serde(default)]
    turns: Turns,
}

impl MotionData {
    /// Creates a motion with `In` orientations, no rotation and zero turns.
    pub fn new(motion_type: MotionType, start_location: Location, end_location: Location) -> Self {
        Self {
            motion_type,
            start_location,
            end_location,
            start_orientation: Orientation::In,
            end_orientation: Orientation::In,
            rotation_direction: RotationDirection::None,
            turns: Turns::default(),
        }
    }

    /// Sets both orientations (builder style).
    pub fn with_orientations(mut self, start: Orientation, end: Orientation) -> Self {
        self.start_orientation = start;
        self.end_orientation = end;
        self
    }

    /// Sets the rotation direction (builder style).
    pub fn with_rotation_direction(mut self, rotation_direction: RotationDirection) -> Self {
        self.rotation_direction = rotation_direction;
        self
    }

    /// Sets the number of turns (builder style).
    pub fn with_turns(mut self, turns: Turns) -> Self {
        self.turns = turns;
        self
    }

    pub fn motion_type(&self) -> MotionType {
        self.motion_type
    }

    pub fn start_location(&self) -> Location {
        self.start_location
    }

    pub fn end_location(&self) -> Location {
        self.end_location
    }

    pub fn start_orientation(&self) -> Orientation {
        self.start_orientation
    }

    pub fn end_orientation(&self) -> Orientation {
        self.end_orientation
    }

    pub fn rotation_direction(&self) -> RotationDirection {
        self.rotation_direction
    }

    pub fn turns(&self) -> Turns {
        self.turns
    }

    /// Returns `true` when the hand path runs clockwise around the grid.
    ///
    /// Only meaningful for shift motions, whose end lies one or two octants
    /// away from the start.
    pub fn has_clockwise_hand_path(&self) -> bool {
        self.start_location.steps_to(self.end_location) > 0
    }
}
