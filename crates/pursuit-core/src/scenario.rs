use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{Point, PursuitRequest};

/// A named pursuit request, as stored in a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(flatten)]
    pub request: PursuitRequest,
}

/// A collection of scenarios stored as JSON.
///
/// ```json
/// {
///   "scenarios": [
///     {
///       "name": "north-east",
///       "hunter_position": [0.0, 0.0],
///       "hunter_speed": 15.0,
///       "target_position": [100.0, 0.0],
///       "target_speed": 8.0,
///       "target_heading": 45.0
///     }
///   ]
/// }
/// ```
///
/// Fields missing from a scenario take their value from [`PursuitRequest::default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub scenarios: Vec<Scenario>,
}

impl ScenarioFile {
    /// Load a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let file: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse scenario file {}", path.display()))?;
        log::debug!(
            "Loaded {} scenarios from {}",
            file.scenarios.len(),
            path.display()
        );
        Ok(file)
    }

    /// Store the scenarios in the given file, replacing its contents.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write scenario file {}", path.display()))?;
        log::debug!(
            "Stored {} scenarios in {}",
            self.scenarios.len(),
            path.display()
        );
        Ok(())
    }

    /// A small set of scenarios showing a catchable and an uncatchable target.
    pub fn example() -> Self {
        Self {
            scenarios: vec![
                Scenario {
                    name: "north-east".to_string(),
                    request: PursuitRequest::default(),
                },
                Scenario {
                    name: "runaway".to_string(),
                    request: PursuitRequest {
                        hunter_position: Point::new(0.0, 0.0),
                        hunter_speed: 5.0,
                        target_position: Point::new(100.0, 0.0),
                        target_speed: 20.0,
                        target_heading: 90.0,
                    },
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_store_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenarios.json");

        let file = ScenarioFile::example();
        file.store(&path).unwrap();
        let loaded = ScenarioFile::load(&path).unwrap();
        assert_eq!(loaded, file);
    }

    #[test]
    fn test_example_outcomes() {
        let file = ScenarioFile::example();
        assert!(file.scenarios[0].request.solve().is_found());
        assert!(!file.scenarios[1].request.solve().is_found());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(
            &path,
            r#"{ "scenarios": [ { "name": "slow", "hunter_speed": 2.5 } ] }"#,
        )
        .unwrap();

        let loaded = ScenarioFile::load(&path).unwrap();
        let scenario = &loaded.scenarios[0];
        assert_eq!(scenario.name, "slow");
        assert_eq!(scenario.request.hunter_speed, 2.5);
        assert_eq!(
            scenario.request.target_position,
            PursuitRequest::default().target_position
        );
        assert_eq!(scenario.request.target_heading, 45.0);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        let err = ScenarioFile::load(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read scenario file"));

        let invalid = dir.path().join("invalid.json");
        fs::write(&invalid, "{ not json").unwrap();
        let err = ScenarioFile::load(&invalid).unwrap_err();
        assert!(err.to_string().contains("Failed to parse scenario file"));
    }
}
