use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One entry from the remote exercise catalog. Used only for display during
/// selection; not persisted past the prompt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseInfo {
    pub slug: String,
    pub difficulty: Difficulty,
    pub blurb: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Remote identifiers for a downloaded exercise, read from
/// `<exercise-dir>/.praxis/metadata.json` after the tool materializes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseMetadata {
    pub track: String,
    pub exercise: String,
    pub id: String,
    pub url: String,
}

/// File roles for a downloaded exercise, read from
/// `<exercise-dir>/.praxis/config.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseManifest {
    /// Role ("solution", "test", ...) to ordered relative paths.
    #[serde(default)]
    pub files: BTreeMap<String, Vec<String>>,
}

impl ExerciseManifest {
    pub fn role_files(&self, role: &str) -> &[String] {
        self.files.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn solution_files(&self) -> &[String] {
        self.role_files("solution")
    }

    pub fn test_files(&self) -> &[String] {
        self.role_files("test")
    }

    /// First solution file; an exercise with no solution entry is a
    /// reportable precondition failure, not a crash.
    pub fn first_solution_file(&self) -> Result<&str> {
        self.solution_files()
            .first()
            .map(String::as_str)
            .ok_or_else(|| Error::Precondition("exercise manifest lists no solution files".into()))
    }

    pub fn first_test_file(&self) -> Result<&str> {
        self.test_files()
            .first()
            .map(String::as_str)
            .ok_or_else(|| Error::Precondition("exercise manifest lists no test files".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_roles_default_to_empty() {
        let manifest = ExerciseManifest::default();
        assert!(manifest.solution_files().is_empty());
        assert!(manifest.first_solution_file().is_err());
    }

    #[test]
    fn manifest_parses_role_map() {
        let manifest: ExerciseManifest = serde_json::from_str(
            r#"{"files":{"solution":["two_fer.rs"],"test":["two_fer_test.rs"]}}"#,
        )
        .unwrap();
        assert_eq!(manifest.first_solution_file().unwrap(), "two_fer.rs");
        assert_eq!(manifest.test_files(), ["two_fer_test.rs"]);
    }

    #[test]
    fn difficulty_parses_lowercase() {
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
    }
}
