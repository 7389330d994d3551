//! Attribute key resolution.
//!
//! The attribute key picks the column of the special placement table for one
//! track. It is resolved by an ordered list of rules; the first rule whose
//! predicate holds produces the key, and the motion type is used when none
//! does.
//!
//! | # | Rule | Applies when | Key |
//! |---|------|--------------|-----|
//! | 1 | `lead_state` | mixed start orientations, letter S T U V | lead state, else color |
//! | 2 | `hybrid` | tracks have different motion types | `<motion>_from_layer1` / `<motion>_from_layer2` |
//! | 3 | `non_hybrid_letter` | letter Φ- Ψ- Λ- α β Γ | color |
//! | - | fallback | always | motion type |

use std::fmt;

use log::trace;

use pictoplace_core::{letter::Letter, motion::MotionData};

use crate::{context::TrackContext, keys::orientation_key};

/// Letters whose tracks are told apart by leading/trailing role.
pub const LEAD_STATE_LETTERS: [Letter; 4] = [Letter::S, Letter::T, Letter::U, Letter::V];

/// Letters whose two tracks share a motion type and are told apart by color.
pub const NON_HYBRID_LETTERS: [Letter; 6] = [
    Letter::PhiDash,
    Letter::PsiDash,
    Letter::LambdaDash,
    Letter::Alpha,
    Letter::Beta,
    Letter::Gamma,
];

/// One step of the attribute key cascade.
#[derive(Clone, Copy)]
pub struct AttributeRule {
    name: &'static str,
    applies: fn(TrackContext<'_>, &MotionData) -> bool,
    key: fn(TrackContext<'_>, &MotionData) -> String,
}

impl AttributeRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this rule decides the key for the track.
    pub fn applies(&self, context: TrackContext<'_>, motion: &MotionData) -> bool {
        (self.applies)(context, motion)
    }

    /// Produces the key. Only meaningful when [`AttributeRule::applies`] holds.
    pub fn key(&self, context: TrackContext<'_>, motion: &MotionData) -> String {
        (self.key)(context, motion)
    }
}

impl fmt::Debug for AttributeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeRule")
            .field("name", &self.name)
            .finish()
    }
}

const RULES: [AttributeRule; 3] = [
    AttributeRule {
        name: "lead_state",
        applies: is_mixed_lead_state_letter,
        key: lead_state_or_color,
    },
    AttributeRule {
        name: "hybrid",
        applies: has_hybrid_motions,
        key: motion_from_layer,
    },
    AttributeRule {
        name: "non_hybrid_letter",
        applies: is_non_hybrid_letter,
        key: color,
    },
];

/// Returns the attribute key rules in evaluation order.
pub fn rules() -> &'static [AttributeRule] {
    &RULES
}

/// Resolves the attribute key for one track.
pub fn attribute_key(context: TrackContext<'_>, motion: &MotionData) -> String {
    match RULES.iter().find(|rule| rule.applies(context, motion)) {
        Some(rule) => {
            let key = rule.key(context, motion);
            trace!(
                rule = rule.name(),
                color:% = context.color(),
                key = key.as_str();
                "Attribute key rule matched"
            );
            key
        }
        None => motion.motion_type().to_string(),
    }
}

fn letter_in(context: TrackContext<'_>, letters: &[Letter]) -> bool {
    context
        .diagram()
        .letter()
        .is_some_and(|letter| letters.contains(&letter))
}

fn is_mixed_lead_state_letter(context: TrackContext<'_>, _motion: &MotionData) -> bool {
    orientation_key(context.diagram()).is_mixed() && letter_in(context, &LEAD_STATE_LETTERS)
}

fn lead_state_or_color(context: TrackContext<'_>, _motion: &MotionData) -> String {
    context
        .diagram()
        .track(context.color())
        .and_then(|track| track.lead_state())
        .map(|state| state.to_string())
        .unwrap_or_else(|| context.color().to_string())
}

fn has_hybrid_motions(context: TrackContext<'_>, _motion: &MotionData) -> bool {
    context.diagram().has_hybrid_motions()
}

fn motion_from_layer(_context: TrackContext<'_>, motion: &MotionData) -> String {
    let layer = if motion.start_orientation().is_radial() {
        "layer1"
    } else {
        "layer2"
    };
    format!("{}_from_{layer}", motion.motion_type())
}

fn is_non_hybrid_letter(context: TrackContext<'_>, _motion: &MotionData) -> bool {
    letter_in(context, &NON_HYBRID_LETTERS)
}

fn color(context: TrackContext<'_>, _motion: &MotionData) -> String {
    context.color().to_string()
}
