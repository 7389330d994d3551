use log::trace;

use pictoplace_core::diagram::{Color, Diagram};

/// Returns `true` if both props would be drawn on top of each other.
///
/// Props rest at their end locations; they overlap when both tracks end on
/// the same point and both end orientations are radial, or both nonradial.
/// A diagram with fewer than two motions never overlaps.
pub fn detect_overlap(diagram: &Diagram) -> bool {
    let (Some(blue), Some(red)) = (diagram.motion(Color::Blue), diagram.motion(Color::Red)) else {
        return false;
    };

    let same_location = blue.end_location() == red.end_location();
    let same_category = blue.end_orientation().is_radial() == red.end_orientation().is_radial();
    let overlap = same_location && same_category;

    trace!(
        blue_end:% = blue.end_location(),
        red_end:% = red.end_location(),
        overlap;
        "Checked prop overlap"
    );
    overlap
}
