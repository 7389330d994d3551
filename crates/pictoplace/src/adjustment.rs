//! Adjustment lookup.
//!
//! An arrow's final position is its layer point plus an adjustment offset.
//! The offset comes from the special placement table when a curated entry
//! exists for the diagram, and from the default table otherwise. A miss in
//! both degrades to a zero offset.

mod directional;

pub use directional::{directional_adjustment, is_mirrored};

use log::{debug, trace, warn};

use pictoplace_core::{
    diagram::{Color, Diagram},
    geometry::Point,
    letter::Letter,
    motion::MotionData,
};

use crate::{
    context::{DiagramContext, TrackContext},
    error::ValidationError,
    keys::{attribute_key, orientation_key, placement_key, turns_tuple},
    placement::{DefaultPlacements, PlacementTables},
};

/// Returns the table offset for one track's arrow.
///
/// The result is the raw table value; see [`directional_adjustment`] for the
/// mapping into the arrow's quadrant.
///
/// # Errors
///
/// Returns [`ValidationError::MissingMotion`] if `motion` is `None` and
/// [`ValidationError::MissingLetter`] if `letter` is `None`.
pub fn get_base_adjustment(
    diagram: &Diagram,
    motion: Option<&MotionData>,
    letter: Option<Letter>,
    color: Color,
    tables: &PlacementTables,
) -> Result<Point, ValidationError> {
    let motion = motion.ok_or(ValidationError::MissingMotion(color))?;
    let letter = letter.ok_or(ValidationError::MissingLetter)?;

    let context = TrackContext::new(DiagramContext::new(diagram), color);
    let grid_mode = diagram.grid_mode();
    let orientation_key = orientation_key(context.diagram());
    let turns_tuple = turns_tuple(context.diagram());
    let attribute_key = attribute_key(context, motion);

    if let Some(offset) = tables.special().get(
        grid_mode,
        orientation_key.as_str(),
        letter,
        &turns_tuple,
        &attribute_key,
    ) {
        trace!(
            letter:% = letter,
            color:% = color,
            x = offset.x(),
            y = offset.y();
            "Using special placement"
        );
        return Ok(offset);
    }

    debug!(
        grid_mode:% = grid_mode,
        orientation_key:% = orientation_key,
        letter:% = letter,
        turns_tuple = turns_tuple.as_str(),
        attribute_key = attribute_key.as_str();
        "No special placement, using default"
    );
    Ok(default_adjustment(context, motion, tables.defaults()))
}

fn default_adjustment(
    context: TrackContext<'_>,
    motion: &MotionData,
    defaults: &DefaultPlacements,
) -> Point {
    let grid_mode = context.diagram().grid_mode();
    let key = placement_key(context, motion, defaults);

    defaults
        .get(grid_mode, motion.motion_type(), &key)
        .unwrap_or_else(|| {
            warn!(
                grid_mode:% = grid_mode,
                motion_type:% = motion.motion_type(),
                placement_key = key.as_str();
                "No default placement, using zero offset"
            );
            Point::ZERO
        })
}
