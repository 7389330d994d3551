use indexmap::IndexMap;

use pictoplace_core::{diagram::GridMode, geometry::Point, letter::Letter, motion::MotionType};

/// Placement key to offset, for one grid mode and motion type.
pub type PlacementRows = IndexMap<String, Point>;

type AttributeRows = IndexMap<String, Point>;
type TurnsRows = IndexMap<String, AttributeRows>;
type LetterRows = IndexMap<Letter, TurnsRows>;
type OrientationRows = IndexMap<String, LetterRows>;

// =============================================================================
// SpecialPlacements
// =============================================================================

/// Curated per-letter overrides.
///
/// Keyed by grid mode, orientation key, letter, turns tuple and attribute
/// key, in that order. Insertion order is kept at every level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecialPlacements {
    grids: IndexMap<GridMode, OrientationRows>,
}

impl SpecialPlacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one override.
    pub fn insert(
        &mut self,
        grid_mode: GridMode,
        orientation_key: impl Into<String>,
        letter: Letter,
        turns_tuple: impl Into<String>,
        attribute_key: impl Into<String>,
        offset: Point,
    ) {
        self.grids
            .entry(grid_mode)
            .or_default()
            .entry(orientation_key.into())
            .or_default()
            .entry(letter)
            .or_default()
            .entry(turns_tuple.into())
            .or_default()
            .insert(attribute_key.into(), offset);
    }

    /// Adds an override (builder style).
    pub fn with(
        mut self,
        grid_mode: GridMode,
        orientation_key: impl Into<String>,
        letter: Letter,
        turns_tuple: impl Into<String>,
        attribute_key: impl Into<String>,
        offset: Point,
    ) -> Self {
        self.insert(
            grid_mode,
            orientation_key,
            letter,
            turns_tuple,
            attribute_key,
            offset,
        );
        self
    }

    /// Looks up one override.
    pub fn get(
        &self,
        grid_mode: GridMode,
        orientation_key: &str,
        letter: Letter,
        turns_tuple: &str,
        attribute_key: &str,
    ) -> Option<Point> {
        self.grids
            .get(&grid_mode)?
            .get(orientation_key)?
            .get(&letter)?
            .get(turns_tuple)?
            .get(attribute_key)
            .copied()
    }

    /// Returns the number of overrides.
    pub fn len(&self) -> usize {
        self.grids
            .values()
            .flat_map(IndexMap::values)
            .flat_map(IndexMap::values)
            .flat_map(IndexMap::values)
            .map(IndexMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// DefaultPlacements
// =============================================================================

/// Generic offsets per grid mode, motion type and placement key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultPlacements {
    grids: IndexMap<GridMode, IndexMap<MotionType, PlacementRows>>,
}

impl DefaultPlacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one default offset.
    pub fn insert(
        &mut self,
        grid_mode: GridMode,
        motion_type: MotionType,
        placement_key: impl Into<String>,
        offset: Point,
    ) {
        self.grids
            .entry(grid_mode)
            .or_default()
            .entry(motion_type)
            .or_default()
            .insert(placement_key.into(), offset);
    }

    /// Adds a default offset (builder style).
    pub fn with(
        mut self,
        grid_mode: GridMode,
        motion_type: MotionType,
        placement_key: impl Into<String>,
        offset: Point,
    ) -> Self {
        self.insert(grid_mode, motion_type, placement_key, offset);
        self
    }

    /// Returns every row for a grid mode and motion type.
    pub fn rows(&self, grid_mode: GridMode, motion_type: MotionType) -> Option<&PlacementRows> {
        self.grids.get(&grid_mode)?.get(&motion_type)
    }

    /// Looks up one default offset.
    pub fn get(
        &self,
        grid_mode: GridMode,
        motion_type: MotionType,
        placement_key: &str,
    ) -> Option<Point> {
        self.rows(grid_mode, motion_type)?
            .get(placement_key)
            .copied()
    }

    /// Returns the number of offsets.
    pub fn len(&self) -> usize {
        self.grids
            .values()
            .flat_map(IndexMap::values)
            .map(IndexMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// PlacementTables
// =============================================================================

/// The special and default tables, immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementTables {
    special: SpecialPlacements,
    defaults: DefaultPlacements,
}

impl PlacementTables {
    pub fn new(special: SpecialPlacements, defaults: DefaultPlacements) -> Self {
        Self { special, defaults }
    }

    pub fn special(&self) -> &SpecialPlacements {
        &self.special
    }

    pub fn defaults(&self) -> &DefaultPlacements {
        &self.defaults
    }
}
