//! Clipboard Event Model
//!
//! Wire type for the `/record_clipboard_event` exchange. Events are emitted
//! and forgotten; nothing is stored client-side.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user did with the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardAction {
    Copy,
    Paste,
}

impl fmt::Display for ClipboardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardAction::Copy => write!(f, "copy"),
            ClipboardAction::Paste => write!(f, "paste"),
        }
    }
}

/// Body of a `POST /record_clipboard_event` request
#[derive(Debug, Clone, Serialize)]
pub struct ClipboardEvent {
    pub action: ClipboardAction,

    /// The copied or pasted text, untrimmed
    pub content: String,

    /// Selected exercise id at capture time
    pub question_id: i64,

    /// RFC 3339 capture timestamp
    pub timestamp: String,
}

impl ClipboardEvent {
    /// Capture an event, timestamped now. Returns `None` when the content
    /// is empty after trimming; such events are never reported.
    pub fn capture(action: ClipboardAction, content: &str, question_id: i64) -> Option<Self> {
        if content.trim().is_empty() {
            return None;
        }
        Some(Self {
            action,
            content: content.to_string(),
            question_id,
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
