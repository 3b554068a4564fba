//! Data structures for DrillPad
//!
//! Core domain entities: the exercise catalog, evaluation verdicts,
//! chat transcript entries, and clipboard events.

pub mod chat;
pub mod clipboard;
pub mod exercise;
pub mod verdict;

// Re-exports for convenience
pub use chat::{ChatRequest, ChatResponse, Speaker, Transcript, TranscriptEntry};
pub use clipboard::{ClipboardAction, ClipboardEvent};
pub use exercise::{Exercise, ExerciseCatalog};
pub use verdict::{EvaluationRequest, EvaluationResponse, TestCaseResult, Verdict};
