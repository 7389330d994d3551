//! Quadrant mapping of table adjustments.
//!
//! Table offsets are authored once, for an arrow in the north quadrant
//! turning the unmirrored way. Arrows elsewhere get the same offset mirrored
//! and rotated into their own frame.

use pictoplace_core::{
    geometry::Point,
    location::Location,
    motion::{MotionData, MotionType, RotationDirection},
};

/// Returns `true` if the arrow is drawn as the mirror image of its table entry.
pub fn is_mirrored(motion: &MotionData) -> bool {
    let rotation_direction = motion.rotation_direction();
    match motion.motion_type() {
        MotionType::Pro | MotionType::Static | MotionType::Dash => {
            rotation_direction == RotationDirection::CounterClockwise
        }
        MotionType::Anti => rotation_direction == RotationDirection::Clockwise,
        MotionType::Float => !motion.has_clockwise_hand_path(),
    }
}

/// Maps a table offset into the frame of an arrow drawn at `location`.
///
/// # Examples
///
/// ```
/// # use pictoplace::adjustment::directional_adjustment;
/// # use pictoplace_core::{geometry::Point, location::Location, motion::{MotionData, MotionType}};
/// let motion = MotionData::new(MotionType::Static, Location::E, Location::E);
/// let offset = directional_adjustment(Point::new(10.0, -20.0), &motion, Location::E);
/// assert_eq!(offset, Point::new(20.0, 10.0));
/// ```
pub fn directional_adjustment(offset: Point, motion: &MotionData, location: Location) -> Point {
    let offset = if is_mirrored(motion) {
        offset.mirror_x()
    } else {
        offset
    };
    offset.rotate_quarter_turns(location.quadrant())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion(motion_type: MotionType, rotation_direction: RotationDirection) -> MotionData {
        MotionData::new(motion_type, Location::N, Location::E)
            .with_rotation_direction(rotation_direction)
    }

    #[test]
    fn test_mirrored_senses() {
        use MotionType::*;
        use RotationDirection::*;

        assert!(is_mirrored(&motion(Pro, CounterClockwise)));
        assert!(!is_mirrored(&motion(Pro, Clockwise)));
        assert!(is_mirrored(&motion(Anti, Clockwise)));
        assert!(!is_mirrored(&motion(Anti, CounterClockwise)));
        assert!(is_mirrored(&motion(Static, CounterClockwise)));
        assert!(is_mirrored(&motion(Dash, CounterClockwise)));
        assert!(!is_mirrored(&motion(Dash, None)));

        // N -> E runs clockwise.
        assert!(!is_mirrored(&motion(Float, None)));
        let backwards = MotionData::new(Float, Location::E, Location::N);
        assert!(is_mirrored(&backwards));
    }

    #[test]
    fn test_north_quadrant_keeps_offset() {
        let m = motion(MotionType::Pro, RotationDirection::Clockwise);
        let offset = Point::new(7.0, -3.0);
        assert_eq!(directional_adjustment(offset, &m, Location::N), offset);
        assert_eq!(directional_adjustment(offset, &m, Location::NE), offset);
    }

    #[test]
    fn test_rotation_per_quadrant() {
        let m = motion(MotionType::Pro, RotationDirection::Clockwise);
        let offset = Point::new(10.0, -20.0);
        let cases = [
            (Location::SE, Point::new(20.0, 10.0)),
            (Location::S, Point::new(-10.0, 20.0)),
            (Location::NW, Point::new(-20.0, -10.0)),
        ];
        for (location, expected) in cases {
            assert_eq!(directional_adjustment(offset, &m, location), expected);
        }
    }

    #[test]
    fn test_mirror_applies_before_rotation() {
        let m = motion(MotionType::Pro, RotationDirection::CounterClockwise);
        let offset = Point::new(10.0, -20.0);
        // Mirrored to (-10, -20), then a quarter turn clockwise.
        assert_eq!(
            directional_adjustment(offset, &m, Location::E),
            Point::new(20.0, -10.0)
        );
    }
}
