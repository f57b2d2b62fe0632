//! Course handbook: course code to prerequisite text

use crate::error::{PrereqError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Read-only mapping from course code to raw condition text
///
/// Serialized as a flat JSON object: `{"COMP1521": "Prerequisite: COMP1511"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handbook {
    conditions: HashMap<String, String>,
}

impl Handbook {
    pub fn new(conditions: HashMap<String, String>) -> Self {
        Self { conditions }
    }

    /// Load a handbook from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a handbook from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let handbook = Self::from_json_str(&json)?;
        log::debug!("loaded {} courses from {}", handbook.len(), path.display());
        Ok(handbook)
    }

    /// Raw condition text for a course
    pub fn condition_text(&self, course: &str) -> Result<&str> {
        self.conditions
            .get(course)
            .map(String::as_str)
            .ok_or_else(|| PrereqError::CourseNotFound(course.to_string()))
    }

    pub fn contains(&self, course: &str) -> bool {
        self.conditions.contains_key(course)
    }

    /// Course codes in unspecified order
    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.conditions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl FromIterator<(String, String)> for Handbook {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
