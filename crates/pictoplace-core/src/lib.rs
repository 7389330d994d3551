//! Pictoplace Core Types and Definitions
//!
//! This crate provides the data model consumed by the pictoplace positioning
//! engine. It includes:
//!
//! - **Geometry**: canvas points and offsets ([`geometry::Point`])
//! - **Locations**: the eight grid points ([`location::Location`])
//! - **Motions**: per-track movement attributes ([`motion::MotionData`])
//! - **Props**: prop types and size classes ([`prop::PropType`])
//! - **Directions**: separation nudges ([`direction::SeparationDirection`])
//! - **Letters**: pictograph letters and types ([`letter::Letter`])
//! - **Diagrams**: tracks and pictographs ([`diagram::Diagram`])

pub mod diagram;
pub mod direction;
pub mod geometry;
pub mod letter;
pub mod location;
pub mod motion;
pub mod prop;
