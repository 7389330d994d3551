//! Rotation angles for arrow and prop glyphs.
//!
//! Angles are in degrees, `0°` pointing north and increasing clockwise, and
//! are always normalized into `[0, 360)`.
//!
//! Shift arrows read from two base tables, one per motion type. A
//! counter-clockwise spin swaps them: `Pro` spinning counter-clockwise reads
//! the `Anti` table and vice versa. `RotationDirection::None` reads the motion
//! type's own table unchanged.

use pictoplace_core::{
    location::Location,
    motion::{MotionData, MotionType, Orientation, RotationDirection},
};

/// Clockwise `Pro` angles, indexed by [`Location::index`].
const PRO_CLOCKWISE: [f32; 8] = [315.0, 0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0];

/// Clockwise `Anti` angles, indexed by [`Location::index`].
const ANTI_CLOCKWISE: [f32; 8] = [225.0, 270.0, 315.0, 0.0, 45.0, 90.0, 135.0, 180.0];

/// Calculates the arrow rotation for a motion drawn at `location`.
///
/// # Examples
///
/// ```
/// # use pictoplace::rotation::calculate_rotation;
/// # use pictoplace_core::{location::Location, motion::{MotionData, MotionType, RotationDirection}};
/// let motion = MotionData::new(MotionType::Pro, Location::N, Location::E)
///     .with_rotation_direction(RotationDirection::Clockwise);
/// assert_eq!(calculate_rotation(&motion, Location::NE), 0.0);
/// ```
pub fn calculate_rotation(motion: &MotionData, location: Location) -> f32 {
    let rotation_direction = motion.rotation_direction();
    let angle = match motion.motion_type() {
        MotionType::Pro | MotionType::Anti => {
            shift_table(motion.motion_type(), rotation_direction)[location.index()]
        }
        MotionType::Float => {
            let table = if motion.has_clockwise_hand_path() {
                &PRO_CLOCKWISE
            } else {
                &ANTI_CLOCKWISE
            };
            table[location.index()]
        }
        MotionType::Static => mirror_if_counter(location.angle(), rotation_direction),
        MotionType::Dash => mirror_if_counter(motion.end_location().angle(), rotation_direction),
    };
    normalize(angle)
}

/// Calculates the prop rotation for a prop resting at `location`.
///
/// Radial props point along the radius (`Out` away from the center, `In`
/// toward it); nonradial props lie across it.
pub fn calculate_prop_rotation(orientation: Orientation, location: Location) -> f32 {
    let offset = match orientation {
        Orientation::Out => 0.0,
        Orientation::Clock => 90.0,
        Orientation::In => 180.0,
        Orientation::Counter => 270.0,
    };
    normalize(location.angle() + offset)
}

fn shift_table(
    motion_type: MotionType,
    rotation_direction: RotationDirection,
) -> &'static [f32; 8] {
    let anti = motion_type == MotionType::Anti;
    let swapped = rotation_direction == RotationDirection::CounterClockwise;
    if anti != swapped {
        &ANTI_CLOCKWISE
    } else {
        &PRO_CLOCKWISE
    }
}

fn mirror_if_counter(angle: f32, rotation_direction: RotationDirection) -> f32 {
    match rotation_direction {
        RotationDirection::CounterClockwise => 360.0 - angle,
        RotationDirection::Clockwise | RotationDirection::None => angle,
    }
}

fn normalize(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}
