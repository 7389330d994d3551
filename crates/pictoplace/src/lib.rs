//! Pictoplace - Arrow and prop positioning for motion pictographs.
//!
//! Given a [`Diagram`](diagram::Diagram), the engine decides where each
//! track's arrow and prop glyph are drawn on the 950×950 canvas and how far
//! they are rotated. The calculation runs in stages:
//!
//! 1. [`location`] derives the grid location of the arrow from its motion.
//! 2. [`coordinates`] maps the location to a base canvas point.
//! 3. [`adjustment`] looks up a curated or default offset in the
//!    [`placement`] tables, using the keys built by [`keys`].
//! 4. [`rotation`] computes the glyph angles.
//! 5. [`beta`] separates props that would be drawn on the same point.
//!
//! [`PictographPositioner`] runs all stages and is the usual entry point.
//!
//! ```
//! use pictoplace::{
//!     PictographPositioner,
//!     diagram::{Color, Diagram, GridMode, Track},
//!     letter::Letter,
//!     location::Location,
//!     motion::{MotionData, MotionType},
//! };
//!
//! let diagram = Diagram::new(Letter::Alpha, GridMode::Diamond)
//!     .with_track(Track::new(
//!         Color::Blue,
//!         MotionData::new(MotionType::Static, Location::N, Location::N),
//!     ));
//!
//! let placement = PictographPositioner::default().position(&diagram)?;
//! let arrow = placement.track(Color::Blue).map(|track| track.arrow());
//! assert_eq!(arrow.map(|a| a.location()), Some(Location::N));
//! # Ok::<(), pictoplace::PositioningError>(())
//! ```

pub mod adjustment;
pub mod beta;
pub mod config;
pub mod context;
pub mod coordinates;
pub mod error;
pub mod keys;
pub mod location;
pub mod placement;
pub mod positioner;
pub mod rotation;

pub use pictoplace_core::{diagram, direction, geometry, letter, motion, prop};

pub use error::{ConfigurationError, PositioningError, ValidationError};
pub use positioner::{PictographPlacement, PictographPositioner, Placement, TrackPlacement};
