//! Clipboard monitoring
//!
//! Reports copy and paste actions inside the exercise surfaces to the
//! platform's logging endpoint, one fire-and-forget request per event.
//! Nothing is batched or retried, and failures never reach the user; the
//! network worker logs them and moves on.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::AsyncRequest;
use crate::models::{ClipboardAction, ClipboardEvent};

/// Forwards clipboard events to the background network worker
#[derive(Debug)]
pub struct ClipboardMonitor {
    tx: mpsc::UnboundedSender<AsyncRequest>,
}

impl ClipboardMonitor {
    pub fn new(tx: mpsc::UnboundedSender<AsyncRequest>) -> Self {
        Self { tx }
    }

    /// Report one clipboard action. Content that is empty after trimming
    /// is dropped without a request. Returns whether a request was issued.
    pub fn record(&self, action: ClipboardAction, content: &str, question_id: i64) -> bool {
        let Some(event) = ClipboardEvent::capture(action, content, question_id) else {
            debug!("Ignoring {} of empty content", action);
            return false;
        };

        debug!(
            "Reporting {} of {} chars for question {}",
            event.action,
            event.content.len(),
            question_id
        );
        if self.tx.send(AsyncRequest::RecordClipboard(event)).is_err() {
            warn!("Network worker is gone, dropping clipboard event");
            return false;
        }
        true
    }
}
