use std::fmt::{self, Display};

use log::trace;

use pictoplace_core::{diagram::Color, location::Location, motion::MotionData};

use crate::{context::TrackContext, placement::DefaultPlacements};

/// How the two hands relate at the end of a pictograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndPosition {
    /// Hands end on opposite points.
    Alpha,
    /// Hands end on the same point.
    Beta,
    /// Hands end a quarter or an eighth turn apart.
    Gamma,
}

impl From<EndPosition> for &'static str {
    fn from(val: EndPosition) -> Self {
        match val {
            EndPosition::Alpha => "alpha",
            EndPosition::Beta => "beta",
            EndPosition::Gamma => "gamma",
        }
    }
}

impl Display for EndPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Classifies the end locations of both tracks, if both are present.
pub fn end_position(blue_end: Option<Location>, red_end: Option<Location>) -> Option<EndPosition> {
    let (blue, red) = (blue_end?, red_end?);
    Some(if blue == red {
        EndPosition::Beta
    } else if blue.opposite() == red {
        EndPosition::Alpha
    } else {
        EndPosition::Gamma
    })
}

/// Picks the default-table row for a motion.
///
/// Candidates are tried from most to least specific:
///
/// 1. `<motion>_to_<layer>_<end position>`
/// 2. `<motion>_to_<layer>`
/// 3. `<motion>`
///
/// where the layer follows the end orientation (`layer1` radial, `layer2`
/// nonradial). The first candidate with a row in `defaults` for the
/// diagram's grid mode wins; with no match the bare motion type is returned.
pub fn placement_key(
    context: TrackContext<'_>,
    motion: &MotionData,
    defaults: &DefaultPlacements,
) -> String {
    let motion_type = motion.motion_type();
    let layer = if motion.end_orientation().is_radial() {
        "layer1"
    } else {
        "layer2"
    };
    let diagram = context.diagram();
    let position = end_position(
        diagram.motion(Color::Blue).map(MotionData::end_location),
        diagram.motion(Color::Red).map(MotionData::end_location),
    );

    let mut candidates = Vec::with_capacity(3);
    if let Some(position) = position {
        candidates.push(format!("{motion_type}_to_{layer}_{position}"));
    }
    candidates.push(format!("{motion_type}_to_{layer}"));
    candidates.push(motion_type.to_string());

    let rows = defaults.rows(diagram.grid_mode(), motion_type);
    let chosen = candidates
        .into_iter()
        .find(|candidate| rows.is_some_and(|rows| rows.contains_key(candidate)));

    match chosen {
        Some(key) => {
            trace!(key = key.as_str(), color:% = context.color(); "Placement key resolved");
            key
        }
        None => motion_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pictoplace_core::{
        diagram::{Diagram, GridMode, Track},
        geometry::Point,
        letter::Letter,
        motion::{MotionType, Orientation},
    };

    use super::*;
    use crate::context::DiagramContext;

    fn diagram(blue_end: Location, red_end: Location, orientation: Orientation) -> Diagram {
        let pro = |end: Location| {
            MotionData::new(MotionType::Pro, end.rotated(-2), end)
                .with_orientations(orientation, orientation)
        };
        Diagram::new(Letter::A, GridMode::Diamond)
            .with_track(Track::new(Color::Blue, pro(blue_end)))
            .with_track(Track::new(Color::Red, pro(red_end)))
    }

    fn key(diagram: &Diagram, defaults: &DefaultPlacements) -> String {
        let context = TrackContext::new(DiagramContext::new(diagram), Color::Blue);
        let motion = diagram.motion(Color::Blue).unwrap();
        placement_key(context, motion, defaults)
    }

    fn rows(keys: &[&str]) -> DefaultPlacements {
        keys.iter().fold(DefaultPlacements::new(), |defaults, key| {
            defaults.with(GridMode::Diamond, MotionType::Pro, *key, Point::ZERO)
        })
    }

    #[test]
    fn test_end_position() {
        let from_east = |red| end_position(Some(Location::E), red);
        assert_eq!(from_east(Some(Location::E)), Some(EndPosition::Beta));
        assert_eq!(from_east(Some(Location::W)), Some(EndPosition::Alpha));
        assert_eq!(from_east(Some(Location::S)), Some(EndPosition::Gamma));
        assert_eq!(from_east(None), None);
    }

    #[test]
    fn test_most_specific_candidate_wins() {
        let defaults = rows(&["pro", "pro_to_layer1", "pro_to_layer1_alpha"]);
        let d = diagram(Location::E, Location::W, Orientation::In);
        assert_eq!(key(&d, &defaults), "pro_to_layer1_alpha");
    }

    #[test]
    fn test_falls_back_to_layer_key() {
        let defaults = rows(&["pro", "pro_to_layer2"]);
        let d = diagram(Location::E, Location::E, Orientation::Clock);
        assert_eq!(key(&d, &defaults), "pro_to_layer2");
    }

    #[test]
    fn test_falls_back_to_motion_type() {
        let defaults = rows(&["pro_to_layer2"]);
        let d = diagram(Location::E, Location::S, Orientation::Out);
        assert_eq!(key(&d, &defaults), "pro");
        assert_eq!(key(&d, &DefaultPlacements::new()), "pro");
    }

    #[test]
    fn test_rows_are_scoped_to_grid_mode() {
        let defaults = DefaultPlacements::new().with(
            GridMode::Box,
            MotionType::Pro,
            "pro_to_layer1",
            Point::ZERO,
        );
        let d = diagram(Location::E, Location::S, Orientation::In);
        assert_eq!(key(&d, &defaults), "pro");
    }
}
