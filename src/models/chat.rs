//! Chat Transcript Model
//!
//! Wire types for the `/chat` exchange and the append-only transcript shown
//! in the chat panel. Sends are tagged with a monotonically increasing
//! sequence number and a pending assistant slot is reserved at send time,
//! so responses that complete out of order can never interleave the
//! rendered transcript.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::format::{format_code_segments, Segment};

/// Body of a `POST /chat` request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The user's message
    pub message: String,
    /// Editor contents snapshot taken at send time
    pub context: String,
    /// Selected exercise id
    pub question_id: i64,
}

/// `/chat` response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: String,
}

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
    /// A failed exchange, rendered in the error style
    Error,
}

/// One rendered line of the conversation
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    /// Unique identifier for the entry (egui widget ids, logging)
    pub id: String,

    pub speaker: Speaker,

    /// Render-ready segments; assistant/error text has code fences
    /// converted before it lands here
    pub segments: Vec<Segment>,

    /// Send-order tag linking a user entry to its response slot
    pub seq: u64,

    /// True while the assistant slot is still waiting for its response
    pub pending: bool,
}

impl TranscriptEntry {
    fn new(speaker: Speaker, segments: Vec<Segment>, seq: u64, pending: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            speaker,
            segments,
            seq,
            pending,
        }
    }

    /// Concatenated text of all segments (tests, logging)
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}

/// Append-only ordered conversation log
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    next_seq: u64,
    /// Bumped on every append so the UI knows to scroll to the bottom
    revision: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the user's message and reserve the assistant slot that its
    /// response will fill. Returns the sequence tag for the exchange.
    pub fn begin_exchange(&mut self, message: &str) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(TranscriptEntry::new(
            Speaker::User,
            vec![Segment::Plain(message.to_string())],
            seq,
            false,
        ));
        self.entries
            .push(TranscriptEntry::new(Speaker::Assistant, Vec::new(), seq, true));
        self.revision += 1;
        seq
    }

    /// Fill the pending slot for `seq` with the assistant's formatted
    /// response. Out-of-order completions land in their reserved slot,
    /// not at the tail.
    pub fn resolve(&mut self, seq: u64, response: &str) {
        self.fill_slot(seq, Speaker::Assistant, format_code_segments(response));
    }

    /// Fill the pending slot for `seq` with an error description
    pub fn resolve_error(&mut self, seq: u64, description: &str) {
        self.fill_slot(
            seq,
            Speaker::Error,
            vec![Segment::Plain(description.to_string())],
        );
    }

    fn fill_slot(&mut self, seq: u64, speaker: Speaker, segments: Vec<Segment>) {
        if let Some(slot) = self
            .entries
            .iter_mut()
            .find(|e| e.pending && e.seq == seq)
        {
            slot.speaker = speaker;
            slot.segments = segments;
            slot.pending = false;
            self.revision += 1;
        }
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Changes whenever an entry is appended or resolved
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
