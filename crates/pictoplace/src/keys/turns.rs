use pictoplace_core::{
    diagram::Color,
    motion::{MotionData, RotationDirection},
};

use crate::context::DiagramContext;

/// Builds the turns tuple key of a diagram, blue first.
///
/// When both tracks rotate, the tuple is prefixed with `s` if they spin the
/// same way and `o` if they spin opposite ways. Otherwise only the turn
/// counts appear.
///
/// # Examples
///
/// ```
/// # use pictoplace::{context::DiagramContext, keys::turns_tuple};
/// # use pictoplace_core::{
/// #     diagram::{Color, Diagram, GridMode, Track},
/// #     letter::Letter,
/// #     location::Location,
/// #     motion::{MotionData, MotionType, RotationDirection, Turns},
/// # };
/// let spin = |turns| {
///     MotionData::new(MotionType::Pro, Location::N, Location::E)
///         .with_rotation_direction(RotationDirection::Clockwise)
///         .with_turns(Turns::new(turns))
/// };
/// let diagram = Diagram::new(Letter::A, GridMode::Diamond)
///     .with_track(Track::new(Color::Blue, spin(1.0)))
///     .with_track(Track::new(Color::Red, spin(0.5)));
///
/// assert_eq!(turns_tuple(DiagramContext::new(&diagram)), "(s, 1, 0.5)");
/// ```
pub fn turns_tuple(context: DiagramContext<'_>) -> String {
    let blue = context.motion(Color::Blue);
    let red = context.motion(Color::Red);

    let counts: Vec<String> = blue
        .iter()
        .chain(red.iter())
        .map(|motion| motion.turns().to_key())
        .collect();

    match (blue, red) {
        (Some(blue), Some(red)) if rotates(blue) && rotates(red) => {
            let flag = if blue.rotation_direction() == red.rotation_direction() {
                "s"
            } else {
                "o"
            };
            format!("({flag}, {})", counts.join(", "))
        }
        _ => format!("({})", counts.join(", ")),
    }
}

fn rotates(motion: &MotionData) -> bool {
    motion.rotation_direction() != RotationDirection::None
}

#[cfg(test)]
mod tests {
    use pictoplace_core::{
        diagram::{Diagram, GridMode, Track},
        letter::Letter,
        location::Location,
        motion::{MotionType, Turns},
    };

    use super::*;

    fn motion(rotation_direction: RotationDirection, turns: Turns) -> MotionData {
        MotionData::new(MotionType::Anti, Location::S, Location::W)
            .with_rotation_direction(rotation_direction)
            .with_turns(turns)
    }

    fn tuple(blue: MotionData, red: MotionData) -> String {
        let diagram = Diagram::new(Letter::B, GridMode::Diamond)
            .with_track(Track::new(Color::Blue, blue))
            .with_track(Track::new(Color::Red, red));
        turns_tuple(DiagramContext::new(&diagram))
    }

    #[test]
    fn test_opposite_spin_flag() {
        let key = tuple(
            motion(RotationDirection::Clockwise, Turns::new(2.0)),
            motion(RotationDirection::CounterClockwise, Turns::new(1.5)),
        );
        assert_eq!(key, "(o, 2, 1.5)");
    }

    #[test]
    fn test_no_flag_when_a_track_does_not_rotate() {
        let key = tuple(
            motion(RotationDirection::Clockwise, Turns::new(1.0)),
            motion(RotationDirection::None, Turns::new(0.0)),
        );
        assert_eq!(key, "(1, 0)");
    }

    #[test]
    fn test_float_turns() {
        let key = tuple(
            motion(RotationDirection::None, Turns::Float),
            motion(RotationDirection::None, Turns::new(0.5)),
        );
        assert_eq!(key, "(fl, 0.5)");
    }

    #[test]
    fn test_single_track() {
        let diagram = Diagram::new(Letter::Alpha, GridMode::Box).with_track(Track::new(
            Color::Red,
            motion(RotationDirection::Clockwise, Turns::new(3.0)),
        ));
        assert_eq!(turns_tuple(DiagramContext::new(&diagram)), "(3)");
    }
}
