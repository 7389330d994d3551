//! Placement tables.
//!
//! Curated adjustment offsets come in two tables:
//!
//! - [`SpecialPlacements`] hold exact overrides for a letter, turns tuple and
//!   track attribute.
//! - [`DefaultPlacements`] hold the generic offset per motion type.
//!
//! Both are wrapped together in an immutable [`PlacementTables`] value. Tables
//! are built in code or loaded from JSON ([`load_tables`]) and shared between
//! threads through a [`TableStore`], which swaps the whole value on reload.

mod loader;
mod store;
mod table;

pub use loader::load_tables;
pub use store::TableStore;
pub use table::{DefaultPlacements, PlacementRows, PlacementTables, SpecialPlacements};
