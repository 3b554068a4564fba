//! DrillPad - A desktop client for a coding-exercise platform
//!
//! This library provides the core functionality for DrillPad: an
//! egui-based front end that loads exercise templates into a code
//! editor, submits code to a server for test-case evaluation, relays
//! chat messages to an assistant backend, and reports clipboard events
//! for academic-integrity monitoring.
//!
//! ## Module Organization
//!
//! ### Core Functionality
//!
//! - [`config`] - TOML configuration loading with a lookup chain
//! - [`models`] - Wire types and domain entities (exercises, verdicts,
//!   transcript, clipboard events)
//! - [`api`] - HTTP client for the platform's three endpoints
//! - [`session`] - Per-run context (catalog, selection, transcript)
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### UI Components
//!
//! - [`app`] - Application struct, panel layout, background network loop
//! - [`ui`] - Editor, output, and chat panels
//! - [`format`] - Code-fence formatting of assistant responses
//! - [`clipboard`] - Copy/paste event reporting
//!
//! ## Architecture
//!
//! DrillPad runs the `egui` loop on the main thread and one background
//! tokio runtime thread for HTTP. Every user interaction issues at most
//! one request; each request carries a snapshot of the editor taken at
//! send time, so later edits never affect an in-flight exchange.
//! Requests are never cancelled or retried; every failure path ends in
//! a rendered message, never a frozen interface.

pub mod api;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod session;
pub mod ui;

// Re-exports for core functionality
pub use api::ApiClient;
pub use app::DrillPadApp;
pub use config::Config;
pub use error::{Error, Result};
pub use session::Session;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
