//! Async Operations
//!
//! Background network processing. The UI thread sends requests over an
//! unbounded channel; this loop runs on a dedicated tokio runtime thread
//! and performs one HTTP exchange per request, so the interface never
//! blocks on the server.
//!
//! ```text
//! ┌──────────────────┐          ┌──────────────────┐
//! │    UI Thread     │          │  Network Worker  │
//! │  (DrillPadApp)   │          │ (async_ops loop) │
//! │                  │          │                  │
//! │  async_tx ─────────────────▶│  request_rx      │
//! │                  │          │                  │
//! │  async_rx ◀─────────────────│  result_tx       │
//! └──────────────────┘          └──────────────────┘
//! ```
//!
//! Each request is spawned as its own task: a slow chat exchange must not
//! hold up an evaluation or a clipboard report. Nothing is cancellable or
//! retried; a request runs to completion or failure exactly once.
//! Clipboard reports are fire-and-forget: their outcome is logged here
//! and never sent back to the UI.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::ApiClient;

use super::{AsyncRequest, AsyncResult};

/// Run the network operation processing loop.
///
/// Lives for the whole application run; ends when the UI side drops its
/// sender.
pub async fn async_operation_loop(
    mut request_rx: mpsc::UnboundedReceiver<AsyncRequest>,
    result_tx: mpsc::UnboundedSender<AsyncResult>,
    client: ApiClient,
) {
    info!("Starting network operation loop against {}", client.base_url());

    while let Some(request) = request_rx.recv().await {
        let client = client.clone();
        let result_tx = result_tx.clone();

        tokio::spawn(async move {
            match request {
                AsyncRequest::Evaluate(request) => {
                    info!("Evaluating code for problem {}", request.problem_id);
                    match client.run_code(&request).await {
                        Ok(response) => {
                            let _ = result_tx.send(AsyncResult::EvaluationCompleted(response));
                        }
                        Err(e) => {
                            warn!("Evaluation request failed: {}", e);
                            let _ = result_tx.send(AsyncResult::EvaluationFailed(e.to_string()));
                        }
                    }
                }
                AsyncRequest::Chat { seq, request } => {
                    info!("Sending chat message #{}", seq);
                    match client.chat(&request).await {
                        Ok(response) => {
                            let _ = result_tx.send(AsyncResult::ChatCompleted {
                                seq,
                                response: response.response,
                            });
                        }
                        Err(e) => {
                            warn!("Chat request #{} failed: {}", seq, e);
                            let _ = result_tx.send(AsyncResult::ChatFailed {
                                seq,
                                error: e.to_string(),
                            });
                        }
                    }
                }
                AsyncRequest::RecordClipboard(event) => {
                    // Fire-and-forget: log the reply, swallow failures
                    match client.record_clipboard_event(&event).await {
                        Ok(reply) => debug!("Clipboard event recorded: {}", reply),
                        Err(e) => warn!("Failed to record clipboard event: {}", e),
                    }
                }
            }
        });
    }

    info!("Network operation loop ended");
}
