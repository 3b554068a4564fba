//! Chat panel
//!
//! Renders the assistant transcript and the message input row. The
//! transcript sticks to its newest entry; assistant and error text is
//! already fence-formatted into segments by the time it lands here.

use eframe::egui;

use crate::format::Segment;
use crate::models::{Speaker, Transcript, TranscriptEntry};

/// The assistant chat side panel
#[derive(Debug, Default)]
pub struct ChatPanel {
    input: String,
    /// Transcript revision rendered last frame; a change forces a
    /// scroll to the newest entry
    last_revision: u64,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently sitting in the input row
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input row contents
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Take the input as a submitted message. Empty or whitespace-only
    /// input is not a message: it stays in the row and `None` comes back.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.input))
    }

    /// Render the panel. Returns the submitted message when the user
    /// pressed Send (or Enter) with a non-empty message; empty or
    /// whitespace-only input is left in place and nothing is returned.
    pub fn show(&mut self, ui: &mut egui::Ui, transcript: &Transcript) -> Option<String> {
        ui.heading("Assistant");
        ui.separator();

        let input_height = 32.0;
        egui::ScrollArea::vertical()
            .id_salt("chat_transcript")
            .stick_to_bottom(true)
            .max_height((ui.available_height() - input_height).max(0.0))
            .show(ui, |ui| {
                for entry in transcript.entries() {
                    ui.push_id(&entry.id, |ui| render_entry(ui, entry));
                    ui.add_space(6.0);
                }
                // Any append or resolve scrolls to the newest entry,
                // even if the user had scrolled up
                if transcript.revision() != self.last_revision {
                    self.last_revision = transcript.revision();
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                }
            });

        ui.separator();
        let mut submitted = false;
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.input)
                    .desired_width(ui.available_width() - 60.0)
                    .hint_text("Ask the assistant..."),
            );
            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Send").clicked() || enter_pressed {
                submitted = true;
            }
        });

        if submitted {
            return self.take_submission();
        }
        None
    }
}

fn render_entry(ui: &mut egui::Ui, entry: &TranscriptEntry) {
    let (label, color) = match entry.speaker {
        Speaker::User => ("User:", egui::Color32::from_rgb(120, 170, 255)),
        Speaker::Assistant => ("Assistant:", egui::Color32::from_rgb(160, 210, 160)),
        Speaker::Error => ("Error:", egui::Color32::from_rgb(230, 90, 90)),
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong().color(color));
        if entry.pending {
            ui.spinner();
        }
    });

    // Plain and inline segments flow together; block segments get their
    // own framed monospace region.
    let mut run: Vec<&Segment> = Vec::new();
    for segment in &entry.segments {
        match segment {
            Segment::Block(code) => {
                flush_run(ui, &mut run);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new(code.trim_matches('\n')).monospace())
                            .wrap(),
                    );
                });
            }
            other => run.push(other),
        }
    }
    flush_run(ui, &mut run);
}

fn flush_run(ui: &mut egui::Ui, run: &mut Vec<&Segment>) {
    if run.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for segment in run.iter() {
            match segment {
                Segment::Plain(text) => {
                    ui.label(text.as_str());
                }
                Segment::Inline(code) => {
                    ui.code(code.as_str());
                }
                Segment::Block(_) => {}
            }
        }
    });
    run.clear();
}
