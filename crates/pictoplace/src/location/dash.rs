//! Dash arrow location.
//!
//! A dash crosses the grid through its center, so its arrow cannot sit on the
//! path itself. It is drawn beside the path, on one of the two points
//! perpendicular to the start/end axis.

use log::{debug, trace};

use pictoplace_core::{
    location::Location,
    motion::{MotionData, RotationDirection},
};

use crate::{context::TrackContext, location::shift_location};

/// Resolves the arrow location of a dash motion.
///
/// In a shift/dash pictograph the dash arrow goes on the side of its path
/// away from the shift arrow. Otherwise the side follows the rotation
/// direction, with zero-turn and non-rotating dashes taking the clockwise
/// side.
pub(super) fn dash_location(motion: &MotionData, context: TrackContext<'_>) -> Location {
    let shift_sibling = context
        .sibling_motion()
        .filter(|sibling| sibling.motion_type().is_shift());

    if let Some(sibling) = shift_sibling.filter(|_| context.diagram().is_type3()) {
        let shift = shift_location(sibling);
        if let Some(location) = away_from_shift(motion, shift) {
            trace!(shift_location:% = shift, location:%; "Dash placed opposite shift arrow");
            return location;
        }
        debug!(
            shift_location:% = shift,
            start_location:% = motion.start_location();
            "Shift arrow lies on the dash axis, using default dash location"
        );
    }

    let start = motion.start_location();
    if motion.turns().is_zero() {
        return start.rotated(2);
    }
    match motion.rotation_direction() {
        RotationDirection::Clockwise | RotationDirection::None => start.rotated(2),
        RotationDirection::CounterClockwise => start.rotated(-2),
    }
}

/// Picks the perpendicular point farther from `shift`, or `None` on a tie.
fn away_from_shift(motion: &MotionData, shift: Location) -> Option<Location> {
    let start = motion.start_location();
    let clockwise_side = start.rotated(2);
    let counter_side = start.rotated(-2);

    let to_clockwise = clockwise_side.steps_to(shift).abs();
    let to_counter = counter_side.steps_to(shift).abs();

    match to_clockwise.cmp(&to_counter) {
        std::cmp::Ordering::Greater => Some(clockwise_side),
        std::cmp::Ordering::Less => Some(counter_side),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use pictoplace_core::{
        diagram::{Color, Diagram, GridMode, Track},
        letter::Letter,
        motion::{MotionType, Turns},
    };

    use super::*;
    use crate::{context::DiagramContext, location::calculate_location};

    fn dash(start: Location, end: Location) -> MotionData {
        MotionData::new(MotionType::Dash, start, end)
    }

    fn locate(diagram: &Diagram, color: Color) -> Location {
        let motion = diagram.motion(color).unwrap();
        calculate_location(
            motion,
            Some(TrackContext::new(DiagramContext::new(diagram), color)),
        )
    }

    #[test]
    fn test_zero_turn_dash_sits_clockwise_of_start() {
        let diagram = Diagram::new(Letter::PhiDash, GridMode::Diamond)
            .with_track(Track::new(Color::Blue, dash(Location::N, Location::S)))
            .with_track(Track::new(Color::Red, dash(Location::S, Location::N)));

        assert_eq!(locate(&diagram, Color::Blue), Location::E);
        assert_eq!(locate(&diagram, Color::Red), Location::W);
    }

    #[test]
    fn test_turning_dash_follows_rotation_direction() {
        let cw = dash(Location::N, Location::S)
            .with_turns(Turns::new(1.0))
            .with_rotation_direction(RotationDirection::Clockwise);
        let ccw = dash(Location::N, Location::S)
            .with_turns(Turns::new(1.0))
            .with_rotation_direction(RotationDirection::CounterClockwise);

        let diagram = Diagram::new(Letter::Lambda, GridMode::Diamond)
            .with_track(Track::new(Color::Blue, cw))
            .with_track(Track::new(Color::Red, ccw));

        assert_eq!(locate(&diagram, Color::Blue), Location::E);
        assert_eq!(locate(&diagram, Color::Red), Location::W);
    }

    #[test]
    fn test_type3_dash_avoids_shift_arrow() {
        // Shift N -> E sits at NE, so the N -> S dash moves to the west side.
        let diagram = Diagram::new(Letter::WDash, GridMode::Diamond)
            .with_track(Track::new(
                Color::Blue,
                MotionData::new(MotionType::Pro, Location::N, Location::E),
            ))
            .with_track(Track::new(Color::Red, dash(Location::N, Location::S)));

        assert_eq!(locate(&diagram, Color::Red), Location::W);
    }

    #[test]
    fn test_type3_dash_in_box_mode() {
        // Shift NE -> NW sits at N; the NE -> SW dash goes to the SE side.
        let diagram = Diagram::new(Letter::YDash, GridMode::Box)
            .with_track(Track::new(
                Color::Blue,
                MotionData::new(MotionType::Anti, Location::NE, Location::NW),
            ))
            .with_track(Track::new(Color::Red, dash(Location::NE, Location::SW)));

        assert_eq!(locate(&diagram, Color::Red), Location::SE);
    }

    #[test]
    fn test_type3_tie_falls_back_to_default() {
        // Shift N -> E lands on NE, which is on the NE -> SW dash axis.
        let diagram = Diagram::new(Letter::XDash, GridMode::Box)
            .with_track(Track::new(
                Color::Blue,
                MotionData::new(MotionType::Pro, Location::N, Location::E),
            ))
            .with_track(Track::new(Color::Red, dash(Location::NE, Location::SW)));

        assert_eq!(locate(&diagram, Color::Red), Location::SE);
    }
}
