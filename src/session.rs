//! Session context
//!
//! One `Session` value owns the exercise catalog, the current selection,
//! and the chat transcript, and is passed explicitly to the handlers that
//! need it. Nothing in the application is reachable through globals.

use tracing::info;

use crate::error::Result;
use crate::models::{ExerciseCatalog, Transcript};

/// Everything that lives for the duration of one application run
#[derive(Debug)]
pub struct Session {
    catalog: ExerciseCatalog,
    selected: Option<i64>,
    /// Append-only chat log
    pub transcript: Transcript,
}

impl Session {
    /// Start a session over a catalog, selecting its first exercise
    pub fn new(catalog: ExerciseCatalog) -> Self {
        let selected = catalog.first().map(|e| e.id);
        Self {
            catalog,
            selected,
            transcript: Transcript::new(),
        }
    }

    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    /// Currently selected exercise id, if the catalog is non-empty
    pub fn selected_id(&self) -> Option<i64> {
        self.selected
    }

    /// Title of the selected exercise (selector display)
    pub fn selected_title(&self) -> &str {
        self.selected
            .and_then(|id| self.catalog.get(id))
            .map_or("(no exercise)", |e| e.title.as_str())
    }

    /// Switch to another exercise and return its starter template.
    ///
    /// The selection changes even when the template lookup fails; the
    /// caller decides what to do with the editor in that case (the
    /// intended behavior is to keep its current contents and warn).
    pub fn select(&mut self, id: i64) -> Result<&str> {
        info!("Selecting exercise {}", id);
        self.selected = Some(id);
        self.catalog.template(id)
    }
}
