//! Example: Positioning the glyphs of a pictograph
//!
//! Builds a letter G pictograph (both hands end on the same point), positions
//! it and prints every arrow and prop placement.
//!
//! Placement tables can be supplied as two JSON files:
//!
//! ```text
//! cargo run --example position_letter -- special.json default.json
//! ```
//!
//! Set `RUST_LOG=debug` to see the lookup decisions.

use std::env;

use log::{LevelFilter, info};

use pictoplace::{
    PictographPositioner,
    config::EngineConfig,
    diagram::{Color, Diagram, GridMode, Track},
    geometry::Point,
    letter::Letter,
    location::Location,
    motion::{MotionData, MotionType, Orientation, RotationDirection, Turns},
    placement::{DefaultPlacements, PlacementTables, SpecialPlacements, load_tables},
    prop::PropType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let tables = match args.as_slice() {
        [special, defaults] => load_tables(special, defaults)?,
        _ => builtin_tables(),
    };

    let positioner = PictographPositioner::new(EngineConfig::default(), tables);

    // Blue travels N -> E, red S -> E; both props finish on E.
    let blue = MotionData::new(MotionType::Pro, Location::N, Location::E)
        .with_orientations(Orientation::In, Orientation::In)
        .with_rotation_direction(RotationDirection::Clockwise)
        .with_turns(Turns::new(1.0));
    let red = MotionData::new(MotionType::Pro, Location::S, Location::E)
        .with_orientations(Orientation::In, Orientation::In)
        .with_rotation_direction(RotationDirection::Clockwise)
        .with_turns(Turns::new(1.0));

    let staff = Track::new(Color::Blue, blue).with_prop_type(PropType::Staff);
    let hoop = Track::new(Color::Red, red).with_prop_type(PropType::Bighoop);
    let diagram = Diagram::new(Letter::G, GridMode::Diamond)
        .with_track(staff)
        .with_track(hoop);

    let placement = positioner.position(&diagram)?;
    info!(letter:% = Letter::G; "Positioned pictograph");

    for (color, track) in placement.tracks() {
        let arrow = track.arrow();
        let prop = track.prop();
        println!(
            "{color} arrow at {} ({:7.2}, {:7.2}) rotated {:5.1}°",
            arrow.location(),
            arrow.position().x(),
            arrow.position().y(),
            arrow.rotation()
        );
        println!(
            "{color} prop  at {} ({:7.2}, {:7.2}) rotated {:5.1}°",
            prop.location(),
            prop.position().x(),
            prop.position().y(),
            prop.rotation()
        );
    }

    Ok(())
}

fn builtin_tables() -> PlacementTables {
    PlacementTables::new(
        SpecialPlacements::new().with(
            GridMode::Diamond,
            "from_layer1",
            Letter::G,
            "(s, 1, 1)",
            "pro",
            Point::new(-10.0, 25.0),
        ),
        DefaultPlacements::new()
            .with(
                GridMode::Diamond,
                MotionType::Pro,
                "pro",
                Point::new(0.0, 10.0),
            )
            .with(
                GridMode::Diamond,
                MotionType::Static,
                "static",
                Point::new(0.0, -20.0),
            ),
    )
}
