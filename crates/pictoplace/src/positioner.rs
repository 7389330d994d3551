//! The positioning entry point.
//!
//! [`PictographPositioner`] ties the calculators together. For each track it
//! produces an arrow [`Placement`] (location, layer point plus adjustment,
//! rotation) and a prop [`Placement`] (end location, hand point plus beta
//! separation, rotation).

use std::sync::Arc;

use log::{debug, trace};

use pictoplace_core::{
    diagram::{Color, Diagram, Track},
    geometry::Point,
    location::Location,
    motion::MotionData,
};

use crate::{
    adjustment::{self, directional_adjustment},
    beta::{calculate_separation_offsets, detect_overlap, should_apply_beta_positioning},
    config::EngineConfig,
    context::{DiagramContext, TrackContext},
    coordinates::{initial_position, layer1_point},
    error::{PositioningError, ValidationError},
    location::calculate_location,
    placement::{PlacementTables, TableStore},
    rotation::{calculate_prop_rotation, calculate_rotation},
};

// =============================================================================
// Results
// =============================================================================

/// Where and how one glyph is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    location: Location,
    position: Point,
    rotation: f32,
}

impl Placement {
    pub fn new(location: Location, position: Point, rotation: f32) -> Self {
        Self {
            location,
            position,
            rotation,
        }
    }

    /// Returns the grid location the glyph is attached to.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Returns the canvas point of the glyph's center.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the rotation in degrees, in `[0, 360)`.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}

/// Arrow and prop placements of one track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPlacement {
    arrow: Placement,
    prop: Placement,
}

impl TrackPlacement {
    pub fn new(arrow: Placement, prop: Placement) -> Self {
        Self { arrow, prop }
    }

    pub fn arrow(&self) -> Placement {
        self.arrow
    }

    pub fn prop(&self) -> Placement {
        self.prop
    }
}

/// Placements for every track of a pictograph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PictographPlacement {
    blue: Option<TrackPlacement>,
    red: Option<TrackPlacement>,
}

impl PictographPlacement {
    /// Returns the placement of the track in the given slot, if it has one.
    pub fn track(&self, color: Color) -> Option<&TrackPlacement> {
        match color {
            Color::Blue => self.blue.as_ref(),
            Color::Red => self.red.as_ref(),
        }
    }

    /// Iterates over the placed tracks, blue first.
    pub fn tracks(&self) -> impl Iterator<Item = (Color, &TrackPlacement)> {
        Color::ALL
            .into_iter()
            .filter_map(|color| Some((color, self.track(color)?)))
    }

    fn set(&mut self, color: Color, placement: TrackPlacement) {
        match color {
            Color::Blue => self.blue = Some(placement),
            Color::Red => self.red = Some(placement),
        }
    }
}

// =============================================================================
// PictographPositioner
// =============================================================================

/// Positions arrows and props of pictographs.
///
/// The positioner owns the engine configuration and the current placement
/// tables. It is `Send + Sync`; share it by reference or `Arc` to position
/// many diagrams in parallel. Each call works on one snapshot of the tables,
/// so a concurrent [`reload_tables`](Self::reload_tables) never affects a
/// call already in flight.
///
/// # Examples
///
/// ```
/// # use pictoplace::positioner::PictographPositioner;
/// # use pictoplace_core::{
/// #     diagram::{Color, Diagram, GridMode, Track},
/// #     letter::Letter,
/// #     location::Location,
/// #     motion::{MotionData, MotionType},
/// # };
/// let positioner = PictographPositioner::default();
/// let diagram = Diagram::new(Letter::A, GridMode::Diamond)
///     .with_track(Track::new(
///         Color::Blue,
///         MotionData::new(MotionType::Pro, Location::N, Location::E),
///     ));
///
/// let placement = positioner.position(&diagram).unwrap();
/// let arrow = placement.track(Color::Blue).unwrap().arrow();
/// assert_eq!(arrow.location(), Location::NE);
/// ```
#[derive(Debug, Default)]
pub struct PictographPositioner {
    config: EngineConfig,
    tables: TableStore,
}

impl PictographPositioner {
    pub fn new(config: EngineConfig, tables: PlacementTables) -> Self {
        Self {
            config,
            tables: TableStore::new(tables),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns a snapshot of the current placement tables.
    pub fn tables(&self) -> Arc<PlacementTables> {
        self.tables.snapshot()
    }

    /// Swaps in new placement tables, returning the previous ones.
    pub fn reload_tables(&self, tables: PlacementTables) -> Arc<PlacementTables> {
        self.tables.reload(tables)
    }

    /// Positions every track of a diagram.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingLetter`] if the diagram has no
    /// letter and [`ValidationError::MissingMotion`] if a present track has
    /// no motion.
    pub fn position(&self, diagram: &Diagram) -> Result<PictographPlacement, PositioningError> {
        if diagram.letter().is_none() {
            return Err(ValidationError::MissingLetter.into());
        }
        debug!(
            letter:? = diagram.letter(),
            grid_mode:% = diagram.grid_mode();
            "Positioning pictograph"
        );

        let tables = self.tables.snapshot();
        let separation = self.separation_offsets(diagram);
        let mut placement = PictographPlacement::default();

        for track in diagram.tracks() {
            let color = track.color();
            let motion = required_motion(track)?;
            let arrow = self.arrow_placement(diagram, motion, color, &tables)?;
            let prop = prop_placement(motion, separation.for_color(color));
            placement.set(color, TrackPlacement::new(arrow, prop));
        }

        Ok(placement)
    }

    /// Positions the arrow of one track.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the track is absent, has no motion,
    /// or the diagram has no letter.
    pub fn position_arrow(
        &self,
        diagram: &Diagram,
        color: Color,
    ) -> Result<Placement, PositioningError> {
        let motion = required_motion(required_track(diagram, color)?)?;
        let tables = self.tables.snapshot();
        self.arrow_placement(diagram, motion, color, &tables)
    }

    /// Positions the prop of one track, including any beta separation.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the track is absent or has no motion.
    pub fn position_prop(
        &self,
        diagram: &Diagram,
        color: Color,
    ) -> Result<Placement, PositioningError> {
        let motion = required_motion(required_track(diagram, color)?)?;
        let separation = self.separation_offsets(diagram);
        Ok(prop_placement(motion, separation.for_color(color)))
    }

    /// Returns the raw table adjustment for one track's arrow.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the track is absent, has no motion,
    /// or the diagram has no letter.
    pub fn get_base_adjustment(
        &self,
        diagram: &Diagram,
        color: Color,
    ) -> Result<Point, PositioningError> {
        let track = required_track(diagram, color)?;
        let tables = self.tables.snapshot();
        Ok(adjustment::get_base_adjustment(
            diagram,
            track.motion(),
            diagram.letter(),
            color,
            &tables,
        )?)
    }

    fn arrow_placement(
        &self,
        diagram: &Diagram,
        motion: &MotionData,
        color: Color,
        tables: &PlacementTables,
    ) -> Result<Placement, PositioningError> {
        let context = TrackContext::new(DiagramContext::new(diagram), color);
        let location = calculate_location(motion, Some(context));

        let base = adjustment::get_base_adjustment(
            diagram,
            Some(motion),
            diagram.letter(),
            color,
            tables,
        )?;
        let offset = if self.config.adjustment().directional() {
            directional_adjustment(base, motion, location)
        } else {
            base
        };

        let position = initial_position(motion, location).add_point(offset);
        let rotation = calculate_rotation(motion, location);
        trace!(
            color:% = color,
            location:% = location,
            x = position.x(),
            y = position.y(),
            rotation;
            "Positioned arrow"
        );
        Ok(Placement::new(location, position, rotation))
    }

    fn separation_offsets(&self, diagram: &Diagram) -> Separation {
        if should_apply_beta_positioning(diagram) && detect_overlap(diagram) {
            let (blue, red) = calculate_separation_offsets(diagram, self.config.beta());
            Separation { blue, red }
        } else {
            Separation::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Separation {
    blue: Point,
    red: Point,
}

impl Separation {
    fn for_color(self, color: Color) -> Point {
        match color {
            Color::Blue => self.blue,
            Color::Red => self.red,
        }
    }
}

fn prop_placement(motion: &MotionData, separation: Point) -> Placement {
    let location = motion.end_location();
    let position = layer1_point(location).add_point(separation);
    let rotation = calculate_prop_rotation(motion.end_orientation(), location);
    Placement::new(location, position, rotation)
}

fn required_track(diagram: &Diagram, color: Color) -> Result<&Track, ValidationError> {
    diagram
        .track(color)
        .ok_or(ValidationError::MissingTrack(color))
}

fn required_motion(track: &Track) -> Result<&MotionData, ValidationError> {
    track
        .motion()
        .ok_or(ValidationError::MissingMotion(track.color()))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use pictoplace_core::{
        diagram::GridMode,
        letter::Letter,
        motion::{MotionType, Orientation, RotationDirection},
    };

    use super::*;
    use crate::{
        config::AdjustmentConfig,
        placement::{DefaultPlacements, SpecialPlacements},
    };

    fn assert_send_sync<T: Send + Sync>() {}

    fn static_diagram(letter: Letter) -> Diagram {
        let still = MotionData::new(MotionType::Static, Location::E, Location::E);
        Diagram::new(letter, GridMode::Diamond)
            .with_track(Track::new(Color::Blue, still))
    }

    fn offset_tables(offset: Point) -> PlacementTables {
        let mut defaults = DefaultPlacements::new();
        defaults.insert(GridMode::Diamond, MotionType::Static, "static", offset);
        PlacementTables::new(SpecialPlacements::new(), defaults)
    }

    fn validation<T>(result: Result<T, PositioningError>) -> Option<ValidationError> {
        match result {
            Err(PositioningError::Validation(err)) => Some(err),
            _ => None,
        }
    }

    #[test]
    fn test_positioner_is_send_sync() {
        assert_send_sync::<PictographPositioner>();
        assert_send_sync::<PictographPlacement>();
    }

    #[test]
    fn test_directional_adjustment_is_applied() {
        let tables = offset_tables(Point::new(10.0, -20.0));
        let positioner = PictographPositioner::new(EngineConfig::default(), tables);
        let arrow = positioner
            .position_arrow(&static_diagram(Letter::Alpha), Color::Blue)
            .unwrap();

        let shift = arrow.position().sub_point(layer1_point(Location::E));
        assert_approx_eq!(f32, shift.x(), 20.0, epsilon = 1e-3);
        assert_approx_eq!(f32, shift.y(), 10.0, epsilon = 1e-3);
    }

    #[test]
    fn test_directional_adjustment_can_be_disabled() {
        let config = EngineConfig::new(Default::default(), AdjustmentConfig::new(false));
        let tables = offset_tables(Point::new(10.0, -20.0));
        let positioner = PictographPositioner::new(config, tables);
        let arrow = positioner
            .position_arrow(&static_diagram(Letter::Alpha), Color::Blue)
            .unwrap();

        let shift = arrow.position().sub_point(layer1_point(Location::E));
        assert_approx_eq!(f32, shift.x(), 10.0, epsilon = 1e-3);
        assert_approx_eq!(f32, shift.y(), -20.0, epsilon = 1e-3);
    }

    #[test]
    fn test_prop_sits_on_end_hand_point() {
        let motion = MotionData::new(MotionType::Pro, Location::S, Location::W)
            .with_orientations(Orientation::In, Orientation::Out)
            .with_rotation_direction(RotationDirection::Clockwise);
        let diagram = Diagram::new(Letter::A, GridMode::Diamond)
            .with_track(Track::new(Color::Red, motion));
        let prop = PictographPositioner::default()
            .position_prop(&diagram, Color::Red)
            .unwrap();

        assert_eq!(prop.location(), Location::W);
        assert_eq!(prop.position(), layer1_point(Location::W));
        assert_eq!(prop.rotation(), 270.0);
    }

    #[test]
    fn test_missing_track_and_motion() {
        let positioner = PictographPositioner::default();
        let unauthored = Track::without_motion(Color::Red);
        let diagram = static_diagram(Letter::Alpha).with_track(unauthored);

        assert_eq!(
            validation(positioner.position_arrow(&diagram, Color::Red)),
            Some(ValidationError::MissingMotion(Color::Red))
        );
        assert_eq!(
            validation(positioner.position(&diagram)),
            Some(ValidationError::MissingMotion(Color::Red))
        );

        let blue_only = static_diagram(Letter::Alpha);
        assert_eq!(
            validation(positioner.position_prop(&blue_only, Color::Red)),
            Some(ValidationError::MissingTrack(Color::Red))
        );
    }

    #[test]
    fn test_unlettered_diagram_is_rejected() {
        let still = MotionData::new(MotionType::Static, Location::NE, Location::NE);
        let diagram = Diagram::unlettered(GridMode::Box)
            .with_track(Track::new(Color::Blue, still));
        let positioner = PictographPositioner::default();

        assert_eq!(
            validation(positioner.position(&diagram)),
            Some(ValidationError::MissingLetter)
        );
        // Props do not depend on the letter.
        assert!(positioner.position_prop(&diagram, Color::Blue).is_ok());
    }

    #[test]
    fn test_placement_tracks_iterates_blue_first() {
        let still = MotionData::new(MotionType::Static, Location::W, Location::W);
        let red = Track::new(Color::Red, still);
        let diagram = static_diagram(Letter::Alpha).with_track(red);
        let placement = PictographPositioner::default().position(&diagram).unwrap();
        let colors: Vec<_> = placement.tracks().map(|(color, _)| color).collect();
        assert_eq!(colors, vec![Color::Blue, Color::Red]);
    }
}
