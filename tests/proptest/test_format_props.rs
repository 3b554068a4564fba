//! Property-based tests for assistant response formatting

use proptest::prelude::*;

use drillpad::format::{format_code_segments, Segment};

/// Re-wrap segments with their original markers
fn reassemble(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Plain(text) => out.push_str(text),
            Segment::Inline(code) => {
                out.push('`');
                out.push_str(code);
                out.push('`');
            }
            Segment::Block(code) => {
                out.push_str("```");
                out.push_str(code);
                out.push_str("```");
            }
        }
    }
    out
}

proptest! {
    /// Formatting only removes fence markers; re-inserting them
    /// reconstructs the input exactly
    #[test]
    fn prop_reassembly_round_trips(input in "[a-zA-Z0-9 `\\n=;(){}]{0,300}") {
        let segments = format_code_segments(&input);
        prop_assert_eq!(reassemble(&segments), input);
    }

    /// Backtick-free text passes through as at most one plain segment
    #[test]
    fn prop_backtick_free_text_is_plain(input in "[^`]{0,200}") {
        let segments = format_code_segments(&input);
        if input.is_empty() {
            prop_assert!(segments.is_empty());
        } else {
            prop_assert_eq!(segments.len(), 1);
            prop_assert_eq!(&segments[0], &Segment::Plain(input.clone()));
        }
    }

    /// No segment ever carries a fence marker, and inline segments are
    /// single-line and non-empty
    #[test]
    fn prop_segment_invariants(input in "[a-zA-Z0-9 `\\n=;(){}]{0,300}") {
        for segment in format_code_segments(&input) {
            match segment {
                Segment::Block(code) => prop_assert!(!code.contains("```")),
                Segment::Inline(code) => {
                    prop_assert!(!code.is_empty());
                    prop_assert!(!code.contains('\n'));
                    prop_assert!(!code.contains('`'));
                }
                Segment::Plain(_) => {}
            }
        }
    }
}
