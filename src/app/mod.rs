//! Main application structure
//!
//! `DrillPadApp` implements `eframe::App` and wires the four interaction
//! surfaces together:
//!
//! - **Exercise selector + Run** in the top bar
//! - **Editor** in the central panel
//! - **Chat** in the right side panel
//! - **Output** in the bottom panel
//!
//! Every user interaction triggers at most one outbound request, handed
//! to the background network worker over a channel; results are drained
//! back into the UI at the start of each frame. Handlers are independent
//! of one another; there is no shared pipeline.
//!
//! ## Module Organization
//!
//! - `mod.rs` - Application struct, eframe::App impl, panel layout,
//!   clipboard event capture
//! - `async_ops.rs` - Background network loop (evaluation, chat,
//!   clipboard reporting)

mod async_ops;

pub use async_ops::async_operation_loop;

use eframe::egui;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::api::ApiClient;
use crate::clipboard::ClipboardMonitor;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{
    ChatRequest, ClipboardAction, ClipboardEvent, EvaluationRequest, EvaluationResponse,
    ExerciseCatalog,
};
use crate::session::Session;
use crate::ui::{ChatPanel, EditorPane, OutputPanel};

/// Request sent from the UI thread to the network worker
#[derive(Debug)]
pub enum AsyncRequest {
    /// Submit editor code for evaluation
    Evaluate(EvaluationRequest),
    /// Relay a chat message; `seq` links the response to its reserved
    /// transcript slot
    Chat { seq: u64, request: ChatRequest },
    /// Report a clipboard event (fire-and-forget, no result comes back)
    RecordClipboard(ClipboardEvent),
}

/// Result sent from the network worker back to the UI thread
#[derive(Debug)]
pub enum AsyncResult {
    EvaluationCompleted(EvaluationResponse),
    EvaluationFailed(String),
    ChatCompleted { seq: u64, response: String },
    ChatFailed { seq: u64, error: String },
}

/// The DrillPad application
pub struct DrillPadApp {
    session: Session,
    editor: EditorPane,
    chat: ChatPanel,
    output: OutputPanel,
    clipboard_monitor: ClipboardMonitor,

    async_tx: mpsc::UnboundedSender<AsyncRequest>,
    async_rx: mpsc::UnboundedReceiver<AsyncResult>,

    /// True while an evaluation is outstanding (Run button disabled)
    evaluating: bool,
    /// Number of chat exchanges still waiting for a response
    chats_pending: usize,
    /// A copy happened outside the editor last frame; the copied text
    /// lands in the system clipboard after that frame ends, so it is
    /// read back one frame later
    probe_copy: bool,
    system_clipboard: Option<arboard::Clipboard>,
}

impl DrillPadApp {
    /// Build the application and start its network worker thread
    pub fn new(config: Config) -> Result<Self> {
        let catalog = ExerciseCatalog::load_bundled()?;
        let mut session = Session::new(catalog);

        let mut editor = EditorPane::new(&config.editor, &config.ui);
        // Load the initial selection's template; a catalog entry without
        // one keeps the placeholder and logs instead of blanking
        if let Some(id) = session.selected_id() {
            match session.select(id) {
                Ok(template) => {
                    let template = template.to_string();
                    editor.set_text(&template);
                }
                Err(e) => warn!("Keeping placeholder contents: {}", e),
            }
        }

        let (async_tx, request_rx) = mpsc::unbounded_channel();
        let (result_tx, async_rx) = mpsc::unbounded_channel();

        let client = ApiClient::new(&config.server.base_url);
        std::thread::Builder::new()
            .name("drillpad-net".to_string())
            .spawn(move || match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => {
                    runtime.block_on(async_operation_loop(request_rx, result_tx, client));
                }
                Err(e) => error!("Failed to build network runtime: {}", e),
            })
            .map_err(|e| Error::WorkerStartFailed {
                reason: e.to_string(),
            })?;

        let system_clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                warn!("System clipboard unavailable: {}", e);
                None
            }
        };

        info!("DrillPad application created");
        Ok(Self {
            session,
            editor,
            chat: ChatPanel::new(),
            output: OutputPanel::new(),
            clipboard_monitor: ClipboardMonitor::new(async_tx.clone()),
            async_tx,
            async_rx,
            evaluating: false,
            chats_pending: 0,
            probe_copy: false,
            system_clipboard,
        })
    }

    /// Drain results from the network worker into the UI state
    fn poll_async_results(&mut self) {
        while let Ok(result) = self.async_rx.try_recv() {
            match result {
                AsyncResult::EvaluationCompleted(response) => {
                    self.evaluating = false;
                    match response.into_verdict() {
                        Ok(verdict) => self.output.set_verdict(&verdict),
                        Err(e) => self.output.set_error(&e.to_string()),
                    }
                }
                AsyncResult::EvaluationFailed(description) => {
                    self.evaluating = false;
                    self.output.set_error(&description);
                }
                AsyncResult::ChatCompleted { seq, response } => {
                    self.chats_pending = self.chats_pending.saturating_sub(1);
                    self.session.transcript.resolve(seq, &response);
                }
                AsyncResult::ChatFailed { seq, error } => {
                    self.chats_pending = self.chats_pending.saturating_sub(1);
                    self.session.transcript.resolve_error(seq, &error);
                }
            }
        }
    }

    /// Snapshot the editor and submit it for evaluation
    fn run_current_code(&mut self) {
        let Some(problem_id) = self.session.selected_id() else {
            warn!("Run requested with no exercise selected");
            return;
        };
        let request = EvaluationRequest {
            code: self.editor.text().to_string(),
            problem_id,
        };
        self.output.set_running();
        self.evaluating = true;
        if self.async_tx.send(AsyncRequest::Evaluate(request)).is_err() {
            self.evaluating = false;
            self.output.set_error("network worker unavailable");
        }
    }

    /// Optimistically log the user's message, then relay it with an
    /// editor snapshot as context. A whitespace-only message is not a
    /// message: nothing is logged and nothing is sent.
    fn send_chat(&mut self, message: String) {
        if message.trim().is_empty() {
            debug!("Dropping empty chat message");
            return;
        }
        let Some(question_id) = self.session.selected_id() else {
            warn!("Chat send with no exercise selected");
            return;
        };
        let seq = self.session.transcript.begin_exchange(&message);
        let request = ChatRequest {
            message,
            context: self.editor.text().to_string(),
            question_id,
        };
        self.chats_pending += 1;
        if self
            .async_tx
            .send(AsyncRequest::Chat { seq, request })
            .is_err()
        {
            self.chats_pending -= 1;
            self.session
                .transcript
                .resolve_error(seq, "network worker unavailable");
        }
    }

    /// Switch exercises and load the new template. An exercise without a
    /// template leaves the current editor contents in place.
    fn select_exercise(&mut self, id: i64) {
        match self.session.select(id) {
            Ok(template) => {
                let template = template.to_string();
                self.editor.set_text(&template);
            }
            Err(e) => warn!("Keeping current editor contents: {}", e),
        }
    }

    /// Capture copy and paste actions from this frame's raw input
    fn handle_clipboard_events(&mut self, ctx: &egui::Context) {
        let question_id = match self.session.selected_id() {
            Some(id) => id,
            None => return,
        };

        // A copy outside the editor was flagged last frame; the text is
        // in the system clipboard now
        if self.probe_copy {
            self.probe_copy = false;
            if let Some(clipboard) = self.system_clipboard.as_mut() {
                match clipboard.get_text() {
                    Ok(text) => {
                        self.clipboard_monitor
                            .record(ClipboardAction::Copy, &text, question_id);
                    }
                    Err(e) => debug!("Could not read system clipboard: {}", e),
                }
            }
        }

        let events = ctx.input(|i| i.events.clone());
        let mut copied = false;
        for event in &events {
            match event {
                egui::Event::Paste(text) => {
                    if self.editor.is_focused() {
                        self.clipboard_monitor
                            .record(ClipboardAction::Paste, text, question_id);
                    }
                }
                egui::Event::Copy | egui::Event::Cut => copied = true,
                _ => {}
            }
        }

        if copied {
            if self.editor.is_focused() {
                // Editor selection is already snapshotted; no need to
                // wait for the clipboard round-trip
                self.clipboard_monitor.record(
                    ClipboardAction::Copy,
                    self.editor.selection(),
                    question_id,
                );
            } else {
                self.probe_copy = true;
            }
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("exercise_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Problem:");

                let mut picked: Option<i64> = None;
                let selected = self.session.selected_id();
                egui::ComboBox::from_id_salt("exercise_select")
                    .selected_text(self.session.selected_title().to_string())
                    .show_ui(ui, |ui| {
                        for exercise in self.session.catalog().exercises() {
                            let checked = selected == Some(exercise.id);
                            if ui.selectable_label(checked, &exercise.title).clicked()
                                && !checked
                            {
                                picked = Some(exercise.id);
                            }
                        }
                    });
                if let Some(id) = picked {
                    self.select_exercise(id);
                }

                ui.label(
                    egui::RichText::new(self.editor.language().to_string())
                        .weak()
                        .small(),
                );

                if ui
                    .add_enabled(!self.evaluating, egui::Button::new("▶ Run"))
                    .clicked()
                {
                    self.run_current_code();
                }
            });
        });
    }
}

impl eframe::App for DrillPadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_async_results();
        self.handle_clipboard_events(ctx);

        self.show_top_bar(ctx);

        egui::SidePanel::right("chat_panel")
            .default_width(320.0)
            .show(ctx, |ui| {
                if let Some(message) = self.chat.show(ui, &self.session.transcript) {
                    self.send_chat(message);
                }
            });

        egui::TopBottomPanel::bottom("output_panel")
            .default_height(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.output.show(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("editor_scroll")
                .show(ui, |ui| {
                    self.editor.show(ui);
                });
        });

        // Keep polling while responses are outstanding
        if self.evaluating || self.chats_pending > 0 || self.probe_copy {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EditorConfig, UiConfig};

    /// An app wired to a test channel instead of the network worker
    fn test_app() -> (DrillPadApp, mpsc::UnboundedReceiver<AsyncRequest>) {
        let (async_tx, request_rx) = mpsc::unbounded_channel();
        let (_result_tx, async_rx) = mpsc::unbounded_channel::<AsyncResult>();
        let catalog = ExerciseCatalog::load_bundled().expect("bundled catalog parses");
        let app = DrillPadApp {
            session: Session::new(catalog),
            editor: EditorPane::new(&EditorConfig::default(), &UiConfig::default()),
            chat: ChatPanel::new(),
            output: OutputPanel::new(),
            clipboard_monitor: ClipboardMonitor::new(async_tx.clone()),
            async_tx,
            async_rx,
            evaluating: false,
            chats_pending: 0,
            probe_copy: false,
            system_clipboard: None,
        };
        (app, request_rx)
    }

    #[test]
    fn test_whitespace_chat_send_is_dropped() {
        let (mut app, mut request_rx) = test_app();

        for message in ["", "   ", "\n\t "] {
            app.send_chat(message.to_string());
        }

        assert!(app.session.transcript.is_empty(), "no transcript entry");
        assert_eq!(app.chats_pending, 0);
        assert!(request_rx.try_recv().is_err(), "no request queued");
    }

    #[test]
    fn test_chat_send_reserves_slot_and_queues_request() {
        let (mut app, mut request_rx) = test_app();

        app.send_chat("why is my loop infinite?".to_string());

        assert_eq!(app.session.transcript.len(), 2, "user entry plus pending slot");
        assert_eq!(app.chats_pending, 1);
        match request_rx.try_recv().expect("request queued") {
            AsyncRequest::Chat { request, .. } => {
                assert_eq!(request.message, "why is my loop infinite?");
            }
            other => panic!("expected Chat, got {:?}", other),
        }
    }
}
