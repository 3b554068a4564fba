//! Test-run output panel
//!
//! Renders evaluation verdicts: one formatted block per test case in
//! server order, followed by the summary line, or a bare error message
//! when the server (or the transport) produced one.

use eframe::egui;

use crate::models::{TestCaseResult, Verdict};

/// Visual state of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Idle,
    Running,
    Success,
    Error,
}

/// The output panel below the editor
#[derive(Debug)]
pub struct OutputPanel {
    output: String,
    status: String,
    kind: StatusKind,
}

impl Default for OutputPanel {
    fn default() -> Self {
        Self {
            output: String::new(),
            status: String::new(),
            kind: StatusKind::Idle,
        }
    }
}

impl OutputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show that a run is in flight
    pub fn set_running(&mut self) {
        self.output.clear();
        self.status = "Running test cases...".to_string();
        self.kind = StatusKind::Running;
    }

    /// Render a shape-discriminated verdict
    pub fn set_verdict(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Cases { cases, message, correct } => {
                self.output = render_cases(cases);
                self.status = message.clone();
                self.kind = if *correct {
                    StatusKind::Success
                } else {
                    StatusKind::Error
                };
            }
            Verdict::Message { message } => {
                // Error shape: the message is both output and status
                self.output = message.clone();
                self.status = message.clone();
                self.kind = StatusKind::Error;
            }
        }
    }

    /// Render a transport-level failure
    pub fn set_error(&mut self, description: &str) {
        self.output = format!("Error: {}", description);
        self.status = self.output.clone();
        self.kind = StatusKind::Error;
    }

    pub fn output_text(&self) -> &str {
        &self.output
    }

    pub fn status_text(&self) -> &str {
        &self.status
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Output");
            if self.kind == StatusKind::Running {
                ui.spinner();
            }
        });

        let status_color = match self.kind {
            StatusKind::Success => egui::Color32::from_rgb(80, 200, 120),
            StatusKind::Error => egui::Color32::from_rgb(230, 90, 90),
            _ => ui.visuals().text_color(),
        };
        if !self.status.is_empty() {
            ui.colored_label(status_color, &self.status);
        }

        egui::ScrollArea::vertical()
            .id_salt("run_output")
            .max_height(ui.available_height())
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(egui::RichText::new(&self.output).monospace())
                        .wrap(),
                );
            });
    }
}

/// Format per-test-case records into display blocks, preserving server
/// order. Mirrors the platform's canonical presentation.
pub fn render_cases(cases: &[TestCaseResult]) -> String {
    let mut output = String::new();
    for case in cases {
        let args = serde_json::to_string(&case.args).unwrap_or_else(|_| "[]".to_string());
        output.push_str(&format!("Test case (args: {})\n", args));
        output.push_str(&format!("Expected Output: {}\n", case.expected_output));
        output.push_str(&format!("Your Output: {}\n", case.user_output));
        output.push_str(&format!(
            "Result: {}\n\n",
            if case.is_correct { "Correct" } else { "Incorrect" }
        ));
    }
    output
}
