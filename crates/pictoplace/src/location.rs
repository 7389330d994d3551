//! Arrow location calculation.
//!
//! Resolves the grid point an arrow is drawn at from its motion attributes:
//!
//! - `Static` arrows sit at the start location.
//! - Shift arrows (`Pro`, `Anti`, `Float`) sit halfway between start and end.
//! - `Dash` arrows sit beside their path and may need the sibling track.

mod dash;

pub use pictoplace_core::location::Location;

use log::{trace, warn};

use pictoplace_core::motion::{MotionData, MotionType};

use crate::context::TrackContext;

/// Adjacent start/end pairs and the location halfway between them.
///
/// Lookups are unordered: `(a, b)` and `(b, a)` resolve alike.
const SHIFT_LOCATIONS: [((Location, Location), Location); 8] = [
    ((Location::N, Location::E), Location::NE),
    ((Location::E, Location::S), Location::SE),
    ((Location::S, Location::W), Location::SW),
    ((Location::W, Location::N), Location::NW),
    ((Location::NE, Location::NW), Location::N),
    ((Location::NE, Location::SE), Location::E),
    ((Location::SW, Location::SE), Location::S),
    ((Location::NW, Location::SW), Location::W),
];

/// Calculates the arrow location for a motion.
///
/// `context` is only consulted for dash motions. Without it a dash falls back
/// to its start location and a warning is logged.
///
/// # Examples
///
/// ```
/// # use pictoplace::location::calculate_location;
/// # use pictoplace_core::{location::Location, motion::{MotionData, MotionType}};
/// let motion = MotionData::new(MotionType::Pro, Location::N, Location::E);
/// assert_eq!(calculate_location(&motion, None), Location::NE);
/// ```
pub fn calculate_location(motion: &MotionData, context: Option<TrackContext<'_>>) -> Location {
    let location = match motion.motion_type() {
        MotionType::Static => motion.start_location(),
        MotionType::Pro | MotionType::Anti | MotionType::Float => shift_location(motion),
        MotionType::Dash => match context {
            Some(context) => dash::dash_location(motion, context),
            None => {
                warn!(
                    start_location:% = motion.start_location();
                    "Dash location requested without diagram context, using start location"
                );
                motion.start_location()
            }
        },
    };

    trace!(
        motion_type:% = motion.motion_type(),
        location:%;
        "Calculated arrow location"
    );
    location
}

/// Resolves the location between the start and end of a shift motion.
///
/// Pairs that are not adjacent on the grid fall back to the start location.
pub fn shift_location(motion: &MotionData) -> Location {
    let (start, end) = (motion.start_location(), motion.end_location());
    SHIFT_LOCATIONS
        .iter()
        .find(|((a, b), _)| (*a == start && *b == end) || (*a == end && *b == start))
        .map(|(_, location)| *location)
        .unwrap_or(start)
}
