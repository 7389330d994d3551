//! Beta positioning.
//!
//! When both hands finish on the same grid point their props would be drawn
//! on top of each other. Letters that end this way ("beta" endings) have
//! their props pulled apart by a pair of opposite separation offsets.

mod overlap;
mod separation;

pub use overlap::detect_overlap;
pub use separation::{Side, calculate_separation_offsets, separation_directions, side};

use pictoplace_core::{diagram::Diagram, letter::Letter};

/// Letters whose pictographs end with both hands on the same point.
pub const BETA_ENDING_LETTERS: [Letter; 13] = [
    Letter::G,
    Letter::H,
    Letter::I,
    Letter::J,
    Letter::K,
    Letter::L,
    Letter::Y,
    Letter::Z,
    Letter::YDash,
    Letter::ZDash,
    Letter::Psi,
    Letter::PsiDash,
    Letter::Beta,
];

/// Returns `true` if the diagram's letter has a beta ending.
pub fn should_apply_beta_positioning(diagram: &Diagram) -> bool {
    diagram
        .letter()
        .is_some_and(|letter| BETA_ENDING_LETTERS.contains(&letter))
}
