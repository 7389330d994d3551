//! Lookup key generators.
//!
//! Every generator is a pure function of the diagram being positioned and
//! produces a string key for one level of the placement tables:
//!
//! - [`orientation_key`] selects the partition of the special table.
//! - [`turns_tuple`] selects the row for the turn counts of both tracks.
//! - [`attribute_key`] selects the column for one track.
//! - [`placement_key`] selects the default-table row for one motion.

mod attribute;
mod orientation;
mod placement;
mod turns;

pub use attribute::{AttributeRule, LEAD_STATE_LETTERS, NON_HYBRID_LETTERS, attribute_key, rules};
pub use orientation::{OrientationKey, orientation_key};
pub use placement::{EndPosition, end_position, placement_key};
pub use turns::turns_tuple;
