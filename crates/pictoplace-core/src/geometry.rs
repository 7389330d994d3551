//! Geometric primitives for glyph placement.
//!
//! This module provides the point type used throughout pictoplace to describe
//! canvas coordinates and the additive offsets layered on top of them.
//!
//! # Coordinate System
//!
//! Pictographs are drawn on a fixed square canvas whose axes follow SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │      (475, 475) center
//!     │
//!     ▼
//!    +Y                (950, 950)
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Rotation angles are measured in degrees with `0°` pointing north and
//! increasing clockwise, which is what an SVG `rotate()` transform expects.

/// Width and height of the pictograph canvas.
pub const CANVAS_SIZE: f32 = 950.0;

/// Center of the pictograph canvas.
pub const CANVAS_CENTER: Point = Point::new(CANVAS_SIZE / 2.0, CANVAS_SIZE / 2.0);

/// A 2D point in canvas coordinate space.
///
/// The same type doubles as an offset vector: table adjustments and
/// separation nudges are points that get added to a base position.
///
/// # Examples
///
/// ```
/// # use pictoplace_core::geometry::Point;
/// let base = Point::new(475.0, 330.0);
/// let offset = Point::new(10.0, -5.0);
///
/// let moved = base.add_point(offset);
/// assert_eq!(moved.x(), 485.0);
/// assert_eq!(moved.y(), 325.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// The zero offset.
    pub const ZERO: Point = Point::new(0.0, 0.0);

    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub const fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub const fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the Euclidean length of the point treated as a vector
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pictoplace_core::geometry::Point;
    /// let unit = Point::new(0.0, -1.0);
    /// let nudge = unit.scale(25.0);
    /// assert_eq!(nudge.y(), -25.0);
    /// ```
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the vector negated on both axes.
    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Reflects the vector across the vertical axis (negates x).
    pub fn mirror_x(self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }

    /// Rotates the vector by `quarter_turns × 90°` clockwise on screen.
    ///
    /// With y pointing down, a clockwise quarter turn maps `(x, y)` to
    /// `(-y, x)`. Negative turn counts rotate counter-clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pictoplace_core::geometry::Point;
    /// let east = Point::new(1.0, 0.0);
    /// assert_eq!(east.rotate_quarter_turns(1), Point::new(0.0, 1.0));
    /// assert_eq!(east.rotate_quarter_turns(-1), Point::new(0.0, -1.0));
    /// ```
    pub fn rotate_quarter_turns(self, quarter_turns: i32) -> Self {
        match quarter_turns.rem_euclid(4) {
            0 => self,
            1 => Self::new(-self.y, self.x),
            2 => Self::new(-self.x, -self.y),
            _ => Self::new(self.y, -self.x),
        }
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default_is_zero() {
        let point = Point::default();
        assert!(point.is_zero());
        assert_eq!(point, Point::ZERO);
    }

    #[test]
    fn test_canvas_center() {
        assert_eq!(CANVAS_CENTER.x(), 475.0);
        assert_eq!(CANVAS_CENTER.y(), 475.0);
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_point_hypot() {
        assert_eq!(Point::new(3.0, 4.0).hypot(), 5.0);
        assert_eq!(Point::ZERO.hypot(), 0.0);
    }

    #[test]
    fn test_point_negate_and_mirror() {
        let p = Point::new(2.0, -3.0);
        assert_eq!(p.negate(), Point::new(-2.0, 3.0));
        assert_eq!(p.mirror_x(), Point::new(-2.0, -3.0));
    }

    #[test]
    fn test_rotate_quarter_turns_cycle() {
        let p = Point::new(3.0, 1.0);
        assert_eq!(p.rotate_quarter_turns(1), Point::new(-1.0, 3.0));
        assert_eq!(p.rotate_quarter_turns(2), Point::new(-3.0, -1.0));
        assert_eq!(p.rotate_quarter_turns(3), Point::new(1.0, -3.0));
        assert_eq!(p.rotate_quarter_turns(4), p);
        assert_eq!(p.rotate_quarter_turns(-3), p.rotate_quarter_turns(1));
    }

    #[test]
    fn test_from_array() {
        let p: Point = [12.5, -4.0].into();
        assert_eq!(p, Point::new(12.5, -4.0));
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    proptest! {
        #[test]
        fn quarter_turns_preserve_length(p in point_strategy(), turns in -8i32..8) {
            let rotated = p.rotate_quarter_turns(turns);
            prop_assert!(approx_eq!(f32, rotated.hypot(), p.hypot(), ulps = 4));
        }

        #[test]
        fn four_quarter_turns_is_identity(p in point_strategy()) {
            prop_assert_eq!(p.rotate_quarter_turns(4), p);
        }

        #[test]
        fn add_then_sub_roundtrips(p1 in point_strategy(), p2 in point_strategy()) {
            let result = p1.add_point(p2).sub_point(p2);
            prop_assert!(approx_eq!(f32, result.x(), p1.x(), epsilon = 0.001));
            prop_assert!(approx_eq!(f32, result.y(), p1.y(), epsilon = 0.001));
        }
    }
}
