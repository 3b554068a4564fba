//! UI components and rendering
//!
//! Panels for the editor, the test-run output, and the chat transcript.

pub mod chat;
pub mod editor;
pub mod output;

// Re-exports for convenience
pub use chat::ChatPanel;
pub use editor::EditorPane;
pub use output::OutputPanel;
