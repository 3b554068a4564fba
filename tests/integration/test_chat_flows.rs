//! Integration tests for chat, template loading, and clipboard reporting
//!
//! Covers the interaction-level behavior that does not need a window:
//! transcript bookkeeping, fence formatting, template switching, and
//! the one-request-per-clipboard-event rule.

use tokio::sync::mpsc;

use drillpad::app::AsyncRequest;
use drillpad::clipboard::ClipboardMonitor;
use drillpad::config::{EditorConfig, UiConfig};
use drillpad::format::{format_code_segments, Segment};
use drillpad::models::{ClipboardAction, ExerciseCatalog, Speaker};
use drillpad::session::Session;
use drillpad::ui::{ChatPanel, EditorPane};

fn catalog() -> ExerciseCatalog {
    ExerciseCatalog::from_json(
        r#"[
            {"id": 1, "title": "First", "template": "template one"},
            {"id": 2, "title": "Second", "template": "public class Main {\n    // solve\n}\n"},
            {"id": 3, "title": "Untemplated"}
        ]"#,
    )
    .expect("catalog parses")
}

#[test]
fn test_empty_message_is_a_no_op() {
    let mut session = Session::new(catalog());
    let mut panel = ChatPanel::new();

    // The transcript only ever sees messages the panel actually
    // submits; whitespace never makes it out of the input row
    for message in ["", "   ", "\n\t "] {
        panel.set_input(message);
        if let Some(submitted) = panel.take_submission() {
            session.transcript.begin_exchange(&submitted);
        }
        assert_eq!(panel.input(), message, "refused input stays in the row");
    }
    assert!(session.transcript.is_empty());
}

#[test]
fn test_user_entry_appears_before_any_response() {
    let mut session = Session::new(catalog());
    let seq = session.transcript.begin_exchange("why is my loop infinite?");

    let entries = session.transcript.entries();
    assert_eq!(entries[0].speaker, Speaker::User);
    assert_eq!(entries[0].text(), "why is my loop infinite?");
    assert!(entries[1].pending, "assistant slot reserved, not filled");

    session.transcript.resolve(seq, "check the loop bound");
    assert_eq!(session.transcript.entries()[1].text(), "check the loop bound");
}

#[test]
fn test_assistant_fences_become_code_segments() {
    let segments = format_code_segments("Use `x=1` then:\n```\nreturn x\n```");

    let inline: Vec<&Segment> = segments
        .iter()
        .filter(|s| matches!(s, Segment::Inline(_)))
        .collect();
    let blocks: Vec<&Segment> = segments
        .iter()
        .filter(|s| matches!(s, Segment::Block(_)))
        .collect();

    assert_eq!(inline.len(), 1);
    assert_eq!(inline[0].text(), "x=1");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text().trim(), "return x");
    assert!(!blocks[0].text().contains("```"));
}

#[test]
fn test_interleaved_responses_render_in_send_order() {
    let mut session = Session::new(catalog());
    let a = session.transcript.begin_exchange("question A");
    let b = session.transcript.begin_exchange("question B");

    session.transcript.resolve(b, "answer B");
    session.transcript.resolve(a, "answer A");

    let texts: Vec<String> = session
        .transcript
        .entries()
        .iter()
        .map(|e| e.text())
        .collect();
    assert_eq!(texts, vec!["question A", "answer A", "question B", "answer B"]);
}

#[test]
fn test_selecting_exercise_loads_template_verbatim() {
    let mut session = Session::new(catalog());
    let mut editor = EditorPane::new(&EditorConfig::default(), &UiConfig::default());
    session.transcript.begin_exchange("unrelated chat");
    let transcript_len = session.transcript.len();

    let template = session.select(2).expect("template exists").to_string();
    editor.set_text(&template);

    assert_eq!(editor.text(), "public class Main {\n    // solve\n}\n");
    assert_eq!(session.transcript.len(), transcript_len, "transcript untouched");
}

#[test]
fn test_selecting_untemplated_exercise_keeps_editor_contents() {
    let mut session = Session::new(catalog());
    let mut editor = EditorPane::new(&EditorConfig::default(), &UiConfig::default());
    let template = session.select(1).expect("template exists").to_string();
    editor.set_text(&template);

    // Selection switches, the template lookup fails, the editor keeps
    // its prior contents
    assert!(session.select(3).is_err());
    assert_eq!(session.selected_id(), Some(3));
    assert_eq!(editor.text(), "template one");
}

#[test]
fn test_copy_and_paste_each_produce_one_logging_request() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let monitor = ClipboardMonitor::new(tx);

    assert!(monitor.record(ClipboardAction::Copy, "copied region", 2));
    assert!(monitor.record(ClipboardAction::Paste, "pasted code", 2));

    for expected in [
        (ClipboardAction::Copy, "copied region"),
        (ClipboardAction::Paste, "pasted code"),
    ] {
        match rx.try_recv().expect("request queued") {
            AsyncRequest::RecordClipboard(event) => {
                assert_eq!(event.action, expected.0);
                assert_eq!(event.content, expected.1);
                assert_eq!(event.question_id, 2);
                assert!(
                    chrono::DateTime::parse_from_rfc3339(&event.timestamp).is_ok(),
                    "timestamp is RFC 3339"
                );
            }
            other => panic!("expected RecordClipboard, got {:?}", other),
        }
    }
    assert!(rx.try_recv().is_err(), "no extra requests");
}

#[test]
fn test_whitespace_copy_produces_no_request() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let monitor = ClipboardMonitor::new(tx);

    assert!(!monitor.record(ClipboardAction::Copy, "   \n", 1));
    assert!(rx.try_recv().is_err());
}
