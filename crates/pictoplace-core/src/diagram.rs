//! Pictograph model: tracks, color slots and the diagram itself.
//!
//! A [`Diagram`] carries a letter, a grid mode and up to two [`Track`]s, one
//! per [`Color`] slot. Diagrams are produced by the data layer and passed to
//! the positioning engine by reference.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{letter::Letter, motion::MotionData, prop::PropType};

// =============================================================================
// Color
// =============================================================================

/// One of the two fixed track slots of a pictograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
}

impl Color {
    /// Both slots, blue first.
    pub const ALL: [Color; 2] = [Color::Blue, Color::Red];

    /// Returns the other slot.
    pub fn other(self) -> Self {
        match self {
            Self::Blue => Self::Red,
            Self::Red => Self::Blue,
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" => Ok(Self::Blue),
            "red" => Ok(Self::Red),
            _ => Err(format!("invalid color `{s}`")),
        }
    }
}

impl From<Color> for &'static str {
    fn from(val: Color) -> Self {
        match val {
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

// =============================================================================
// LeadState
// =============================================================================

/// Role of a track in letters where one hand leads the other around the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadState {
    Leading,
    Trailing,
}

impl From<LeadState> for &'static str {
    fn from(val: LeadState) -> Self {
        match val {
            LeadState::Leading => "leading",
            LeadState::Trailing => "trailing",
        }
    }
}

impl Display for LeadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

// =============================================================================
// GridMode
// =============================================================================

/// Orientation of the grid the pictograph is drawn on.
///
/// In `Diamond` mode hands rest on the cardinal points; in `Box` mode they
/// rest on the intercardinals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "&'static str")]
pub enum GridMode {
    #[default]
    Diamond,
    Box,
}

impl GridMode {
    /// Parses a grid mode, degrading to [`GridMode::Diamond`] on unknown input.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: String| {
            warn!(input = s, error = err; "Unknown grid mode, using default");
            Self::default()
        })
    }
}

impl FromStr for GridMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "diamond" => Ok(Self::Diamond),
            "box" => Ok(Self::Box),
            _ => Err(format!("invalid grid mode `{s}`")),
        }
    }
}

impl From<String> for GridMode {
    fn from(s: String) -> Self {
        Self::parse_or_default(&s)
    }
}

impl From<GridMode> for &'static str {
    fn from(val: GridMode) -> Self {
        match val {
            GridMode::Diamond => "diamond",
            GridMode::Box => "box",
        }
    }
}

impl Display for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

// =============================================================================
// Track
// =============================================================================

/// An arrow and prop pair owned by one color slot.
///
/// The motion is optional so that partially authored pictographs can be
/// represented; positioning such a track is a validation error.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Track {
    color: Color,
    motion: Option<MotionData>,
    #[serde(default)]
    prop_type: PropType,
    #[serde(default)]
    lead_state: Option<LeadState>,
}

impl Track {
    /// Creates a track with a motion and the default prop.
    pub fn new(color: Color, motion: MotionData) -> Self {
        Self {
            color,
            motion: Some(motion),
            prop_type: PropType::default(),
            lead_state: None,
        }
    }

    /// Creates a track whose motion has not been authored yet.
    pub fn without_motion(color: Color) -> Self {
        Self {
            color,
            motion: None,
            prop_type: PropType::default(),
            lead_state: None,
        }
    }

    /// Sets the prop (builder style).
    pub fn with_prop_type(mut self, prop_type: PropType) -> Self {
        self.prop_type = prop_type;
        self
    }

    /// Sets the lead/trail role (builder style).
    pub fn with_lead_state(mut self, lead_state: LeadState) -> Self {
        self.lead_state = Some(lead_state);
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn motion(&self) -> Option<&MotionData> {
        self.motion.as_ref()
    }

    pub fn prop_type(&self) -> PropType {
        self.prop_type
    }

    pub fn lead_state(&self) -> Option<LeadState> {
        self.lead_state
    }
}

// =============================================================================
// Diagram
// =============================================================================

/// A pictograph: letter, grid mode and up to two tracks.
///
/// # Examples
///
/// ```
/// # use pictoplace_core::{
/// #     diagram::{Color, Diagram, GridMode, Track},
/// #     letter::Letter,
/// #     location::Location,
/// #     motion::{MotionData, MotionType},
/// # };
/// let diagram = Diagram::new(Letter::A, GridMode::Diamond)
///     .with_track(Track::new(
///         Color::Blue,
///         MotionData::new(MotionType::Pro, Location::N, Location::E),
///     ));
///
/// assert!(diagram.track(Color::Blue).is_some());
/// assert!(diagram.track(Color::Red).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Diagram {
    letter: Option<Letter>,
    #[serde(default)]
    grid_mode: GridMode,
    #[serde(default)]
    blue: Option<Track>,
    #[serde(default)]
    red: Option<Track>,
}

impl Diagram {
    /// Creates an empty diagram with a letter and grid mode.
    pub fn new(letter: Letter, grid_mode: GridMode) -> Self {
        Self {
            letter: Some(letter),
            grid_mode,
            blue: None,
            red: None,
        }
    }

    /// Creates a diagram that has no letter assigned yet.
    pub fn unlettered(grid_mode: GridMode) -> Self {
        Self {
            letter: None,
            grid_mode,
            blue: None,
            red: None,
        }
    }

    /// Places a track into the slot matching its color (builder style).
    ///
    /// A track already occupying that slot is replaced.
    pub fn with_track(mut self, track: Track) -> Self {
        match track.color() {
            Color::Blue => self.blue = Some(track),
            Color::Red => self.red = Some(track),
        }
        self
    }

    pub fn letter(&self) -> Option<Letter> {
        self.letter
    }

    pub fn grid_mode(&self) -> GridMode {
        self.grid_mode
    }

    /// Returns the track in the given slot.
    pub fn track(&self, color: Color) -> Option<&Track> {
        match color {
            Color::Blue => self.blue.as_ref(),
            Color::Red => self.red.as_ref(),
        }
    }

    /// Returns the motion of the track in the given slot.
    pub fn motion(&self, color: Color) -> Option<&MotionData> {
        self.track(color).and_then(Track::motion)
    }

    /// Iterates over the occupied slots, blue first.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.blue.iter().chain(self.red.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        location::Location,
        motion::{MotionData, MotionType},
    };

    fn static_motion(location: Location) -> MotionData {
        MotionData::new(MotionType::Static, location, location)
    }

    #[test]
    fn test_color_other() {
        assert_eq!(Color::Blue.other(), Color::Red);
        assert_eq!(Color::Red.other(), Color::Blue);
    }

    #[test]
    fn test_with_track_replaces_slot() {
        let diagram = Diagram::new(Letter::Alpha, GridMode::Diamond)
            .with_track(Track::new(Color::Red, static_motion(Location::N)))
            .with_track(Track::new(Color::Red, static_motion(Location::S)));

        assert_eq!(
            diagram.motion(Color::Red).map(MotionData::start_location),
            Some(Location::S)
        );
        assert_eq!(diagram.tracks().count(), 1);
    }

    #[test]
    fn test_tracks_iterates_blue_first() {
        let diagram = Diagram::new(Letter::Alpha, GridMode::Box)
            .with_track(Track::new(Color::Red, static_motion(Location::NE)))
            .with_track(Track::new(Color::Blue, static_motion(Location::SW)));

        let colors: Vec<_> = diagram.tracks().map(Track::color).collect();
        assert_eq!(colors, vec![Color::Blue, Color::Red]);
    }

    #[test]
    fn test_track_without_motion() {
        let diagram = Diagram::unlettered(GridMode::Diamond)
            .with_track(Track::without_motion(Color::Blue));
        assert!(diagram.track(Color::Blue).is_some());
        assert!(diagram.motion(Color::Blue).is_none());
        assert!(diagram.letter().is_none());
    }

    #[test]
    fn test_diagram_deserialize_degrades_unknown_values() {
        let diagram: Diagram = serde_json::from_str(
            r#"{
                "letter": "G",
                "grid_mode": "hexagon",
                "blue": {
                    "color": "blue",
                    "motion": {
                        "motion_type": "static",
                        "start_location": "sideways",
                        "end_location": "s"
                    },
                    "prop_type": "chicken"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(diagram.letter(), Some(Letter::G));
        assert_eq!(diagram.grid_mode(), GridMode::Diamond);
        let blue = diagram.track(Color::Blue).unwrap();
        assert_eq!(blue.prop_type(), PropType::Staff);
        let motion = blue.motion().unwrap();
        assert_eq!(motion.start_location(), Location::N);
        assert_eq!(motion.end_location(), Location::S);
        assert!(diagram.track(Color::Red).is_none());
    }

    #[test]
    fn test_diagram_serde_round_trip() {
        let red = Track::new(Color::Red, static_motion(Location::NE))
            .with_prop_type(PropType::Bigfan);
        let diagram = Diagram::new(Letter::Alpha, GridMode::Box).with_track(red);

        let json = serde_json::to_string(&diagram).unwrap();
        assert!(json.contains(r#""grid_mode":"box""#));
        assert!(json.contains(r#""prop_type":"bigfan""#));
        assert_eq!(serde_json::from_str::<Diagram>(&json).unwrap(), diagram);
    }

    #[test]
    fn test_grid_mode_parse_or_default() {
        assert_eq!(GridMode::parse_or_default("box"), GridMode::Box);
        assert_eq!(GridMode::parse_or_default("hexagon"), GridMode::Diamond);
    }
}
