//! JSON loading of placement tables.
//!
//! Both tables are nested JSON objects with `[x, y]` arrays at the leaves:
//!
//! ```json
//! { "diamond": { "from_layer1": { "G": { "(s, 1, 1)": { "blue": [10, -15] } } } } }
//! ```
//!
//! ```json
//! { "diamond": { "pro": { "pro_to_layer1": [0, -20], "pro": [0, 0] } } }
//! ```
//!
//! Object order is kept, so tables iterate in file order.

use std::{fs, path::Path};

use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;

use pictoplace_core::{diagram::GridMode, geometry::Point, letter::Letter, motion::MotionType};

use crate::{
    error::ConfigurationError,
    placement::table::{DefaultPlacements, PlacementTables, SpecialPlacements},
};

/// A parsed JSON node: an object, or any other value treated as a leaf.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNode {
    Branch(IndexMap<String, RawNode>),
    Leaf(serde_json::Value),
}

impl PlacementTables {
    /// Parses both tables from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Json`] for malformed JSON and
    /// [`ConfigurationError::InvalidEntry`] for unknown grid modes, motion
    /// types or letters, and for leaves that are not `[x, y]` pairs.
    pub fn from_json_str(special: &str, defaults: &str) -> Result<Self, ConfigurationError> {
        let special = parse_special(&serde_json::from_str(special)?)?;
        let defaults = parse_defaults(&serde_json::from_str(defaults)?)?;
        Ok(Self::new(special, defaults))
    }
}

/// Loads both placement tables from JSON files.
///
/// # Errors
///
/// Returns error if:
/// - Either file doesn't exist or cannot be read
/// - Either file is not valid JSON
/// - An entry has an unknown key or a malformed leaf
pub fn load_tables(
    special_path: impl AsRef<Path>,
    defaults_path: impl AsRef<Path>,
) -> Result<PlacementTables, ConfigurationError> {
    let special_path = special_path.as_ref();
    let defaults_path = defaults_path.as_ref();

    let special = read_file(special_path)?;
    let defaults = read_file(defaults_path)?;
    let tables = PlacementTables::from_json_str(&special, &defaults)?;

    info!(
        special_path = special_path.display().to_string(),
        defaults_path = defaults_path.display().to_string(),
        special_entries = tables.special().len(),
        default_entries = tables.defaults().len();
        "Loaded placement tables"
    );
    Ok(tables)
}

fn read_file(path: &Path) -> Result<String, ConfigurationError> {
    if !path.exists() {
        return Err(ConfigurationError::MissingFile(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_special(root: &RawNode) -> Result<SpecialPlacements, ConfigurationError> {
    let mut special = SpecialPlacements::new();

    for (grid_key, orientations) in branch(root, "")? {
        let grid_mode = parse_key::<GridMode>(grid_key, grid_key)?;
        for (orientation_key, letters) in branch(orientations, grid_key)? {
            let path = format!("{grid_key}.{orientation_key}");
            for (letter_key, turns) in branch(letters, &path)? {
                let path = format!("{path}.{letter_key}");
                let letter = parse_key::<Letter>(letter_key, &path)?;
                for (turns_tuple, attributes) in branch(turns, &path)? {
                    let path = format!("{path}.{turns_tuple}");
                    for (attribute_key, leaf) in branch(attributes, &path)? {
                        let path = format!("{path}.{attribute_key}");
                        special.insert(
                            grid_mode,
                            orientation_key.as_str(),
                            letter,
                            turns_tuple.as_str(),
                            attribute_key.as_str(),
                            point(leaf, &path)?,
                        );
                    }
                }
            }
        }
    }

    debug!(entries = special.len(); "Parsed special placements");
    Ok(special)
}

fn parse_defaults(root: &RawNode) -> Result<DefaultPlacements, ConfigurationError> {
    let mut defaults = DefaultPlacements::new();

    for (grid_key, motions) in branch(root, "")? {
        let grid_mode = parse_key::<GridMode>(grid_key, grid_key)?;
        for (motion_key, rows) in branch(motions, grid_key)? {
            let path = format!("{grid_key}.{motion_key}");
            let motion_type = parse_key::<MotionType>(motion_key, &path)?;
            for (placement_key, leaf) in branch(rows, &path)? {
                let path = format!("{path}.{placement_key}");
                defaults.insert(
                    grid_mode,
                    motion_type,
                    placement_key.as_str(),
                    point(leaf, &path)?,
                );
            }
        }
    }

    debug!(entries = defaults.len(); "Parsed default placements");
    Ok(defaults)
}

fn branch<'a>(
    node: &'a RawNode,
    path: &str,
) -> Result<&'a IndexMap<String, RawNode>, ConfigurationError> {
    match node {
        RawNode::Branch(children) => Ok(children),
        RawNode::Leaf(_) => Err(ConfigurationError::invalid_entry(path, "not an object")),
    }
}

fn parse_key<T>(key: &str, path: &str) -> Result<T, ConfigurationError>
where
    T: std::str::FromStr<Err = String>,
{
    key.parse()
        .map_err(|reason: String| ConfigurationError::invalid_entry(path, reason))
}

fn point(node: &RawNode, path: &str) -> Result<Point, ConfigurationError> {
    let invalid = || ConfigurationError::invalid_entry(path, "expected an [x, y] pair");

    let RawNode::Leaf(serde_json::Value::Array(items)) = node else {
        return Err(invalid());
    };
    match items.as_slice() {
        [x, y] => {
            let x = x.as_f64().ok_or_else(invalid)?;
            let y = y.as_f64().ok_or_else(invalid)?;
            Ok(Point::new(x as f32, y as f32))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SPECIAL: &str = r#"{
        "diamond": {
            "from_layer1": {
                "G": { "(s, 1, 1)": { "blue": [10, -15], "red": [-10, 15.5] } }
            }
        },
        "box": {
            "from_layer3_blue1_red2": {
                "T": { "(0, 1)": { "leading": [4, 4] } }
            }
        }
    }"#;

    const DEFAULTS: &str = r#"{
        "diamond": {
            "pro": { "pro_to_layer1_alpha": [0, -20], "pro": [0, 0] },
            "static": { "static": [-5, 0] }
        }
    }"#;

    #[test]
    fn test_from_json_str() {
        let tables = PlacementTables::from_json_str(SPECIAL, DEFAULTS).unwrap();

        assert_eq!(tables.special().len(), 3);
        assert_eq!(
            tables.special().get(
                GridMode::Diamond,
                "from_layer1",
                Letter::G,
                "(s, 1, 1)",
                "red"
            ),
            Some(Point::new(-10.0, 15.5))
        );
        assert_eq!(
            tables
                .defaults()
                .get(GridMode::Diamond, MotionType::Static, "static"),
            Some(Point::new(-5.0, 0.0))
        );
    }

    #[test]
    fn test_file_order_is_kept() {
        let tables = PlacementTables::from_json_str("{}", DEFAULTS).unwrap();
        let keys: Vec<_> = tables
            .defaults()
            .rows(GridMode::Diamond, MotionType::Pro)
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, vec!["pro_to_layer1_alpha", "pro"]);
    }

    #[test]
    fn test_unknown_grid_mode() {
        let err = PlacementTables::from_json_str("{}", r#"{"hexagon": {}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidEntry { ref path, .. } if path == "hexagon"
        ));
    }

    #[test]
    fn test_unknown_motion_type() {
        let err = PlacementTables::from_json_str("{}", r#"{"diamond": {"spin": {}}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidEntry { ref path, .. } if path == "diamond.spin"
        ));
    }

    #[test]
    fn test_unknown_letter() {
        let json = r#"{"diamond": {"from_layer1": {"Q-": {}}}}"#;
        let err = PlacementTables::from_json_str(json, "{}").unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::InvalidEntry { ref path, .. } if path == "diamond.from_layer1.Q-"
        ));
    }

    #[test]
    fn test_malformed_leaf() {
        for leaf in ["[1]", "[1, 2, 3]", r#"["a", 2]"#, "7", "{}"] {
            let json = format!(r#"{{"box": {{"anti": {{"anti": {leaf}}}}}}}"#);
            let err = PlacementTables::from_json_str("{}", &json).unwrap_err();
            let under_anti = matches!(
                &err,
                ConfigurationError::InvalidEntry { path, .. } if path.starts_with("box.anti")
            );
            assert!(under_anti, "leaf {leaf} gave {err:?}");
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = PlacementTables::from_json_str("{", "{}").unwrap_err();
        assert!(matches!(err, ConfigurationError::Json(_)));
    }

    #[test]
    fn test_load_tables_from_files() {
        let mut special = tempfile::NamedTempFile::new().unwrap();
        let mut defaults = tempfile::NamedTempFile::new().unwrap();
        write!(special, "{SPECIAL}").unwrap();
        write!(defaults, "{DEFAULTS}").unwrap();

        let tables = load_tables(special.path(), defaults.path()).unwrap();
        assert_eq!(tables.special().len(), 3);
        assert_eq!(tables.defaults().len(), 3);
    }

    #[test]
    fn test_load_tables_missing_file() {
        let defaults = tempfile::NamedTempFile::new().unwrap();
        let result = load_tables("/nonexistent/special.json", defaults.path());
        assert!(matches!(result, Err(ConfigurationError::MissingFile(_))));
    }
}
