//! Pattern file persistence.
//!
//! One JSON file per pattern:
//!
//! ```json
//! {
//!   "name": "Glider",
//!   "pattern": {
//!     "width": 3,
//!     "height": 3,
//!     "cells": [[false, true, false], ...]
//!   }
//! }
//! ```
//!
//! The `width`/`height` fields are redundant with `cells` and are
//! validated against it on load.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::{EngineError, Pattern};

#[derive(Serialize, Deserialize)]
struct PatternFile {
    name: String,
    pattern: PatternMatrix,
}

#[derive(Serialize, Deserialize)]
struct PatternMatrix {
    width: usize,
    height: usize,
    cells: Vec<Vec<bool>>,
}

/// Parse a pattern from its JSON representation.
/// Syntax errors, ragged or empty matrices, and width/height fields that
/// disagree with the matrix all surface as `MalformedPattern`.
pub fn load_pattern(json: &str) -> Result<Pattern, EngineError> {
    let file: PatternFile =
        serde_json::from_str(json).map_err(|err| EngineError::MalformedPattern(err.to_string()))?;

    if file.pattern.cells.len() != file.pattern.height
        || file.pattern.cells.iter().any(|row| row.len() != file.pattern.width)
    {
        return Err(EngineError::MalformedPattern(format!(
            "declared size {}x{} does not match the cell matrix",
            file.pattern.height, file.pattern.width,
        )));
    }

    Pattern::from_rows(file.name, file.pattern.cells)
}

/// Serialize a pattern to its JSON file representation
pub fn serialize_pattern(pattern: &Pattern) -> String {
    let file = PatternFile {
        name: pattern.name().to_owned(),
        pattern: PatternMatrix {
            width: pattern.width(),
            height: pattern.height(),
            cells: pattern.rows().to_vec(),
        },
    };
    serde_json::to_string_pretty(&file).expect("pattern serialization cannot fail")
}

/// Load a single pattern file
pub fn load_pattern_from_file(path: impl AsRef<Path>) -> Result<Pattern, EngineError> {
    let json = fs::read_to_string(path)?;
    load_pattern(&json)
}

/// Write a pattern to a file, overwriting any existing one
pub fn save_pattern_to_file(pattern: &Pattern, path: impl AsRef<Path>) -> Result<(), EngineError> {
    fs::write(path, serialize_pattern(pattern))?;
    Ok(())
}

/// Load every pattern file in a directory, sorted by file name.
/// Unreadable or malformed files are logged and skipped so one bad file
/// does not hide the rest of the library.
pub fn load_patterns_from_dir(dir: impl AsRef<Path>) -> Result<Vec<Pattern>, EngineError> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut patterns = Vec::with_capacity(paths.len());
    for path in paths {
        match load_pattern_from_file(&path) {
            Ok(pattern) => patterns.push(pattern),
            Err(err) => warn!("skipping pattern file {}: {}", path.display(), err),
        }
    }
    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_round_trip() {
        for pattern in presets::all_patterns() {
            let json = serialize_pattern(&pattern);
            let loaded = load_pattern(&json).unwrap();
            assert_eq!(loaded, pattern);
            // A second serialization reproduces the source text exactly
            assert_eq!(serialize_pattern(&loaded), json);
        }
    }

    #[test]
    fn test_load_rejects_bad_json() {
        assert!(matches!(
            load_pattern("not json"),
            Err(EngineError::MalformedPattern(_))
        ));
    }

    #[test]
    fn test_load_rejects_inconsistent_size() {
        let json = r#"{
            "name": "Bad",
            "pattern": {"width": 3, "height": 1, "cells": [[true, false]]}
        }"#;
        assert!(matches!(
            load_pattern(json),
            Err(EngineError::MalformedPattern(_))
        ));
    }

    #[test]
    fn test_load_rejects_ragged_cells() {
        let json = r#"{
            "name": "Bad",
            "pattern": {"width": 2, "height": 2, "cells": [[true, false], [true]]}
        }"#;
        assert!(matches!(
            load_pattern(json),
            Err(EngineError::MalformedPattern(_))
        ));
    }

    #[test]
    fn test_load_rejects_empty_matrix() {
        let json = r#"{
            "name": "Bad",
            "pattern": {"width": 0, "height": 0, "cells": []}
        }"#;
        assert!(matches!(
            load_pattern(json),
            Err(EngineError::MalformedPattern(_))
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = std::env::temp_dir().join("life_sandbox_pattern_tests");
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("glider.json");
        let pattern = presets::glider();
        save_pattern_to_file(&pattern, &path).unwrap();
        assert_eq!(load_pattern_from_file(&path).unwrap(), pattern);

        // A junk file in the directory is skipped, not fatal
        std::fs::write(dir.join("junk.json"), "{").unwrap();
        let patterns = load_patterns_from_dir(&dir).unwrap();
        assert!(patterns.contains(&pattern));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
