//! Assistant response formatting
//!
//! Converts the code-fence conventions the assistant backend emits into
//! render-ready segments. This is deliberately a pure text substitution,
//! not a Markdown parser: only triple-backtick blocks and single-backtick
//! inline spans are special-cased, matching the server's output style.

use once_cell::sync::Lazy;
use regex::Regex;

/// Triple-backtick fenced blocks, possibly spanning newlines
static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(.*?)```").expect("fence regex is valid"));

/// Single-backtick inline spans: non-empty, no newline inside
static INLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`\n]+)`").expect("inline regex is valid"));

/// A piece of an assistant (or error) message, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Ordinary prose
    Plain(String),
    /// Inline code span (single backticks removed)
    Inline(String),
    /// Block code region (fence markers removed)
    Block(String),
}

impl Segment {
    /// The raw text carried by this segment
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Inline(s) | Segment::Block(s) => s,
        }
    }
}

/// Split assistant text into plain/inline/block segments.
///
/// Fenced regions win over inline spans: backticks inside a fenced block
/// are left untouched. Empty plain gaps between constructs are dropped.
pub fn format_code_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in FENCE_RE.captures_iter(text) {
        let whole = caps.get(0).expect("match 0 always present");
        if whole.start() > cursor {
            push_inline_segments(&text[cursor..whole.start()], &mut segments);
        }
        let body = caps.get(1).map_or("", |m| m.as_str());
        segments.push(Segment::Block(body.to_string()));
        cursor = whole.end();
    }

    if cursor < text.len() {
        push_inline_segments(&text[cursor..], &mut segments);
    }

    segments
}

/// Split a fence-free stretch of text on inline code spans
fn push_inline_segments(text: &str, segments: &mut Vec<Segment>) {
    let mut cursor = 0;

    for caps in INLINE_RE.captures_iter(text) {
        let whole = caps.get(0).expect("match 0 always present");
        if whole.start() > cursor {
            segments.push(Segment::Plain(text[cursor..whole.start()].to_string()));
        }
        let body = caps.get(1).expect("inline body group").as_str();
        segments.push(Segment::Inline(body.to_string()));
        cursor = whole.end();
    }

    if cursor < text.len() {
        segments.push(Segment::Plain(text[cursor..].to_string()));
    }
}
