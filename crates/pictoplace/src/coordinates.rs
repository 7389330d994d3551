//! Coordinate system: grid locations to canvas points.
//!
//! Two fixed point layers are laid over the canvas:
//!
//! ```text
//!        layer 2 (corners)         layer 1 (hand points)
//!
//!     NW ·      N      · NE                 N
//!                                      NW ·   · NE
//!     W         +         E          W    +    E
//!                                      SW ·   · SE
//!     SW ·      S      · SE                 S
//! ```
//!
//! - **Layer 1** holds the hand points: every location at [`HAND_RADIUS`]
//!   from the center. Cardinals are axis aligned.
//! - **Layer 2** is layer 1 scaled out by √2: every location sits
//!   `HAND_RADIUS * √2` from the center. Intercardinals land [`HAND_RADIUS`]
//!   out on *both* axes; cardinals stay on their axis, beyond the hand point.
//!
//! Static and dash arrows (and all props) start from layer 1, shift arrows
//! from layer 2. Everything else the engine computes is an offset on top.

use pictoplace_core::{
    geometry::{CANVAS_CENTER, Point},
    location::Location,
    motion::MotionData,
};

/// Distance of a hand point from the canvas center.
pub const HAND_RADIUS: f32 = 143.1;

const DIAGONAL: f32 = HAND_RADIUS * std::f32::consts::FRAC_1_SQRT_2;
const CORNER: f32 = HAND_RADIUS * std::f32::consts::SQRT_2;

const CX: f32 = CANVAS_CENTER.x();
const CY: f32 = CANVAS_CENTER.y();

/// Layer 1 points, indexed by [`Location::index`].
const LAYER1_POINTS: [Point; 8] = [
    Point::new(CX, CY - HAND_RADIUS),
    Point::new(CX + DIAGONAL, CY - DIAGONAL),
    Point::new(CX + HAND_RADIUS, CY),
    Point::new(CX + DIAGONAL, CY + DIAGONAL),
    Point::new(CX, CY + HAND_RADIUS),
    Point::new(CX - DIAGONAL, CY + DIAGONAL),
    Point::new(CX - HAND_RADIUS, CY),
    Point::new(CX - DIAGONAL, CY - DIAGONAL),
];

/// Layer 2 points, indexed by [`Location::index`].
const LAYER2_POINTS: [Point; 8] = [
    Point::new(CX, CY - CORNER),
    Point::new(CX + HAND_RADIUS, CY - HAND_RADIUS),
    Point::new(CX + CORNER, CY),
    Point::new(CX + HAND_RADIUS, CY + HAND_RADIUS),
    Point::new(CX, CY + CORNER),
    Point::new(CX - HAND_RADIUS, CY + HAND_RADIUS),
    Point::new(CX - CORNER, CY),
    Point::new(CX - HAND_RADIUS, CY - HAND_RADIUS),
];

/// Returns the layer 1 (hand) point of a location.
pub fn layer1_point(location: Location) -> Point {
    LAYER1_POINTS[location.index()]
}

/// Returns the layer 2 point of a location.
pub fn layer2_point(location: Location) -> Point {
    LAYER2_POINTS[location.index()]
}

/// Returns the base canvas point for an arrow before any adjustment.
///
/// # Examples
///
/// ```
/// # use pictoplace::coordinates::initial_position;
/// # use pictoplace_core::{location::Location, motion::{MotionData, MotionType}};
/// let motion = MotionData::new(MotionType::Static, Location::N, Location::N);
/// let point = initial_position(&motion, Location::N);
/// assert_eq!(point.x(), 475.0);
/// assert!((point.y() - 331.9).abs() < 1e-3);
/// ```
pub fn initial_position(motion: &MotionData, location: Location) -> Point {
    if motion.motion_type().is_shift() {
        layer2_point(location)
    } else {
        layer1_point(location)
    }
}
