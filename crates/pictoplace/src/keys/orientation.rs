use std::fmt::{self, Display};

use pictoplace_core::{diagram::Color, motion::MotionData};

use crate::context::DiagramContext;

/// Partition of the special placement table, chosen by start orientations.
///
/// Radial props start on layer 1, nonradial ones on layer 2. When the two
/// tracks disagree the diagram is *mixed* and lands on layer 3, split by
/// which color holds which layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrientationKey {
    Layer1,
    Layer2,
    Layer3Blue1Red2,
    Layer3Blue2Red1,
}

impl OrientationKey {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns `true` for the two layer 3 partitions.
    pub fn is_mixed(self) -> bool {
        matches!(self, Self::Layer3Blue1Red2 | Self::Layer3Blue2Red1)
    }
}

impl From<OrientationKey> for &'static str {
    fn from(val: OrientationKey) -> Self {
        match val {
            OrientationKey::Layer1 => "from_layer1",
            OrientationKey::Layer2 => "from_layer2",
            OrientationKey::Layer3Blue1Red2 => "from_layer3_blue1_red2",
            OrientationKey::Layer3Blue2Red1 => "from_layer3_blue2_red1",
        }
    }
}

impl Display for OrientationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a diagram by the start orientations of its tracks.
///
/// A single-track diagram uses the layer of the track it has; an empty one
/// falls back to layer 1.
pub fn orientation_key(context: DiagramContext<'_>) -> OrientationKey {
    let radial = |motion: &MotionData| motion.start_orientation().is_radial();

    match (
        context.motion(Color::Blue).map(radial),
        context.motion(Color::Red).map(radial),
    ) {
        (Some(true), Some(true)) => OrientationKey::Layer1,
        (Some(false), Some(false)) => OrientationKey::Layer2,
        (Some(true), Some(false)) => OrientationKey::Layer3Blue1Red2,
        (Some(false), Some(true)) => OrientationKey::Layer3Blue2Red1,
        (Some(false), None) | (None, Some(false)) => OrientationKey::Layer2,
        (Some(true), None) | (None, Some(true)) | (None, None) => OrientationKey::Layer1,
    }
}
