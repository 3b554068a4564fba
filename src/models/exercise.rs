//! Exercise Catalog Model
//!
//! The list of coding exercises the user can pick from, each with an id,
//! a title, and (usually) a starter-code template. The catalog is bundled
//! with the application; test cases live server-side and are never shipped
//! to the client.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Catalog bundled into the binary at build time
const BUNDLED_CATALOG: &str = include_str!("../../assets/problems.json");

/// A single coding exercise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Identifier shared with the evaluation server
    pub id: i64,

    /// Human-readable title shown in the selector
    pub title: String,

    /// Starter-code template loaded into the editor on selection.
    /// May be absent for exercises authored without one.
    #[serde(default)]
    pub template: Option<String>,
}

/// The fixed, externally supplied list of exercises
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
    /// Parse a catalog from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        let exercises: Vec<Exercise> =
            serde_json::from_str(json).map_err(|e| Error::CatalogParseFailed {
                reason: e.to_string(),
            })?;
        debug!("Loaded exercise catalog with {} entries", exercises.len());
        Ok(Self { exercises })
    }

    /// Load the catalog bundled with the application
    pub fn load_bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// All exercises, in catalog order
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Look up an exercise by id
    pub fn get(&self, id: i64) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// The first exercise in the catalog, if any
    pub fn first(&self) -> Option<&Exercise> {
        self.exercises.first()
    }

    /// Starter template for an exercise, if it has one
    pub fn template(&self, id: i64) -> Result<&str> {
        let exercise = self.get(id).ok_or(Error::ExerciseNotFound { id })?;
        exercise
            .template
            .as_deref()
            .ok_or(Error::TemplateMissing { id })
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
