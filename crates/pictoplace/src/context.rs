//! Read-only diagram context handed to every calculator.
//!
//! Several calculations for one track depend on the other track (dash
//! placement, orientation keys, turns tuples). Instead of tracks pointing back
//! at each other, calculators receive a [`DiagramContext`] borrowed from the
//! diagram being positioned.

use pictoplace_core::{
    diagram::{Color, Diagram, GridMode, Track},
    letter::{Letter, LetterType},
    motion::{MotionData, MotionType},
};

/// Borrowed view of a diagram used during positioning.
#[derive(Debug, Clone, Copy)]
pub struct DiagramContext<'a> {
    diagram: &'a Diagram,
}

impl<'a> DiagramContext<'a> {
    /// Wraps a diagram.
    pub fn new(diagram: &'a Diagram) -> Self {
        Self { diagram }
    }

    /// Returns the underlying diagram.
    pub fn diagram(&self) -> &'a Diagram {
        self.diagram
    }

    pub fn letter(&self) -> Option<Letter> {
        self.diagram.letter()
    }

    pub fn grid_mode(&self) -> GridMode {
        self.diagram.grid_mode()
    }

    pub fn track(&self, color: Color) -> Option<&'a Track> {
        self.diagram.track(color)
    }

    pub fn motion(&self, color: Color) -> Option<&'a MotionData> {
        self.diagram.motion(color)
    }

    /// Returns the motion of the track in the other color slot.
    pub fn sibling_motion(&self, color: Color) -> Option<&'a MotionData> {
        self.diagram.motion(color.other())
    }

    /// Returns `true` when the two tracks have different motion types.
    ///
    /// A diagram with fewer than two motions is never hybrid.
    pub fn has_hybrid_motions(&self) -> bool {
        match (self.motion(Color::Blue), self.motion(Color::Red)) {
            (Some(blue), Some(red)) => blue.motion_type() != red.motion_type(),
            _ => false,
        }
    }

    /// Returns `true` when one track starts radial and the other nonradial.
    pub fn has_mixed_start_orientation(&self) -> bool {
        match (self.motion(Color::Blue), self.motion(Color::Red)) {
            (Some(blue), Some(red)) => {
                blue.start_orientation().is_radial() != red.start_orientation().is_radial()
            }
            _ => false,
        }
    }

    /// Returns `true` for a shift/dash pairing.
    ///
    /// The letter's type decides when a letter is assigned; otherwise the
    /// motion types of both tracks are inspected.
    pub fn is_type3(&self) -> bool {
        if let Some(letter) = self.letter() {
            return letter.letter_type() == LetterType::Type3;
        }
        match (self.motion(Color::Blue), self.motion(Color::Red)) {
            (Some(blue), Some(red)) => {
                let (a, b) = (blue.motion_type(), red.motion_type());
                (a == MotionType::Dash && b.is_shift()) || (b == MotionType::Dash && a.is_shift())
            }
            _ => false,
        }
    }
}

/// A [`DiagramContext`] focused on one track.
#[derive(Debug, Clone, Copy)]
pub struct TrackContext<'a> {
    diagram: DiagramContext<'a>,
    color: Color,
}

impl<'a> TrackContext<'a> {
    pub fn new(diagram: DiagramContext<'a>, color: Color) -> Self {
        Self { diagram, color }
    }

    pub fn diagram(&self) -> DiagramContext<'a> {
        self.diagram
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the motion of the other track, if any.
    pub fn sibling_motion(&self) -> Option<&'a MotionData> {
        self.diagram.sibling_motion(self.color)
    }
}
