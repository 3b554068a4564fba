//! Editor pane
//!
//! Wraps egui's multiline text editing surface behind the small contract
//! the rest of the application needs: synchronous get/set of the full
//! text, plus per-frame focus and selection snapshots so copy and paste
//! events can be attributed to the editor.

use eframe::egui;
use tracing::debug;

use crate::config::{EditorConfig, UiConfig};

/// The code editing surface
#[derive(Debug)]
pub struct EditorPane {
    text: String,
    language: String,
    tab_width: u8,
    font_size: f32,
    /// Whether the editor widget had focus last frame
    focused: bool,
    /// Selected text snapshot from last frame
    selection: String,
}

impl EditorPane {
    /// Create the editor showing the configured placeholder text
    pub fn new(editor: &EditorConfig, ui: &UiConfig) -> Self {
        Self {
            text: editor.placeholder.clone(),
            language: editor.language.clone(),
            tab_width: editor.tab_width,
            font_size: ui.font_size,
            focused: false,
            selection: String::new(),
        }
    }

    /// Current contents
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the contents wholesale. Template load is a fresh start,
    /// so dropping the undo history here is fine. Tabs are expanded to
    /// spaces per the configured tab width.
    pub fn set_text(&mut self, text: &str) {
        let spaces = " ".repeat(self.tab_width as usize);
        self.text = text.replace('\t', &spaces);
        self.selection.clear();
        debug!("Editor contents replaced ({} chars)", self.text.len());
    }

    /// Whether the editor widget had focus last frame
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Selected text snapshot from last frame
    pub fn selection(&self) -> &str {
        &self.selection
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Render the editor, filling the available space
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let output = egui::TextEdit::multiline(&mut self.text)
            .code_editor()
            .font(egui::FontId::monospace(self.font_size))
            .desired_width(f32::INFINITY)
            .desired_rows(24)
            .lock_focus(true)
            .show(ui);

        self.focused = output.response.has_focus();

        self.selection.clear();
        if let Some(range) = output.state.cursor.char_range() {
            let (start, end) = (
                range.primary.index.min(range.secondary.index),
                range.primary.index.max(range.secondary.index),
            );
            if start < end {
                self.selection = self.text.chars().skip(start).take(end - start).collect();
            }
        }
    }
}
