//! Separation of overlapping props.
//!
//! Each prop is pushed toward one [`Side`] of the point it rests on. The side
//! follows the prop's spin, reversed for `Anti` motions and again for props
//! ending `Out` or `Counter`:
//!
//! | Spin | `In`/`Clock` | `Out`/`Counter` |
//! |------|--------------|-----------------|
//! | clockwise (non-anti) | clockwise | counter |
//! | counter (non-anti) | counter | clockwise |
//! | clockwise (anti) | counter | clockwise |
//! | counter (anti) | clockwise | counter |
//!
//! A motion that does not rotate spins with its hand path (shifts) or
//! clockwise (static and dash).
//!
//! Radial props lie along the radius, so they are nudged across it; nonradial
//! props lie across it and are nudged along it, outward for the clockwise side
//! and inward for the counter side.

use log::debug;

use pictoplace_core::{
    diagram::{Color, Diagram},
    direction::SeparationDirection,
    geometry::Point,
    letter::Letter,
    motion::{MotionData, MotionType, Orientation, RotationDirection},
};

use crate::{beta::detect_overlap, config::BetaConfig};

/// The side of its rest point a prop is nudged toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Clockwise,
    CounterClockwise,
}

impl Side {
    fn flipped(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// Looks up the separation side of a motion's prop.
pub fn side(motion: &MotionData) -> Side {
    let spin = match motion.rotation_direction() {
        RotationDirection::Clockwise => Side::Clockwise,
        RotationDirection::CounterClockwise => Side::CounterClockwise,
        RotationDirection::None => {
            if motion.motion_type().is_shift() && !motion.has_clockwise_hand_path() {
                Side::CounterClockwise
            } else {
                Side::Clockwise
            }
        }
    };

    let anti = motion.motion_type() == MotionType::Anti;
    let outer = matches!(
        motion.end_orientation(),
        Orientation::Out | Orientation::Counter
    );
    if anti != outer { spin.flipped() } else { spin }
}

fn direction(motion: &MotionData) -> SeparationDirection {
    let end = motion.end_location();
    let side = side(motion);

    if motion.end_orientation().is_radial() {
        let steps = match side {
            Side::Clockwise => 2,
            Side::CounterClockwise => -2,
        };
        SeparationDirection::toward(end.rotated(steps))
    } else {
        match side {
            Side::Clockwise => SeparationDirection::toward(end),
            Side::CounterClockwise => SeparationDirection::toward(end.opposite()),
        }
    }
}

/// Resolves the separation direction of each track, blue first.
///
/// The two directions are always exact opposites. Normally blue keeps its own
/// direction and red takes the opposite. For letter I the `Pro` track leads
/// instead, and blue leads when both or neither are `Pro`.
///
/// Returns `None` when the diagram has fewer than two motions.
pub fn separation_directions(
    diagram: &Diagram,
) -> Option<(SeparationDirection, SeparationDirection)> {
    let blue = diagram.motion(Color::Blue)?;
    let red = diagram.motion(Color::Red)?;

    let red_leads = diagram.letter() == Some(Letter::I)
        && red.motion_type() == MotionType::Pro
        && blue.motion_type() != MotionType::Pro;

    let directions = if red_leads {
        let lead = direction(red);
        (lead.opposite(), lead)
    } else {
        let lead = direction(blue);
        (lead, lead.opposite())
    };
    Some(directions)
}

/// Calculates the offsets pulling overlapping props apart, blue first.
///
/// Each offset is the track's separation direction scaled by the magnitude
/// for its prop size class. Diagrams whose props do not overlap get a pair
/// of zero offsets.
pub fn calculate_separation_offsets(diagram: &Diagram, config: &BetaConfig) -> (Point, Point) {
    if !detect_overlap(diagram) {
        return (Point::ZERO, Point::ZERO);
    }
    let Some((blue_direction, red_direction)) = separation_directions(diagram) else {
        return (Point::ZERO, Point::ZERO);
    };

    let offset = |color: Color, direction: SeparationDirection| {
        let magnitude = diagram
            .track(color)
            .map(|track| config.magnitude(track.prop_type().category()))
            .unwrap_or(0.0);
        direction.unit_vector().scale(magnitude)
    };

    debug!(
        blue_direction:% = blue_direction,
        red_direction:% = red_direction;
        "Separating overlapping props"
    );
    (
        offset(Color::Blue, blue_direction),
        offset(Color::Red, red_direction),
    )
}
