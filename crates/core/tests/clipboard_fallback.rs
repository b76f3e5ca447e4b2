use std::cell::Cell;

use async_trait::async_trait;
use conteranto_core::{copy_with_fallback, ClipboardError, ClipboardWriter, CopyOutcome};
use futures::executor::block_on;

struct Rejecting;

#[async_trait(?Send)]
impl ClipboardWriter for Rejecting {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Rejected("NotAllowedError".to_string()))
    }
}

struct Missing;

#[async_trait(?Send)]
impl ClipboardWriter for Missing {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

#[test]
fn test_rejected_write_runs_fallback_once() {
    let calls = Cell::new(0);
    let outcome = block_on(copy_with_fallback(&Rejecting, "team@conteranto.com", || {
        calls.set(calls.get() + 1);
    }));

    assert_eq!(calls.get(), 1);
    assert_eq!(
        outcome,
        CopyOutcome::FellBack(ClipboardError::Rejected("NotAllowedError".to_string()))
    );
}

#[test]
fn test_missing_api_runs_fallback_once() {
    let calls = Cell::new(0);
    let writer: &dyn ClipboardWriter = &Missing;
    let outcome = block_on(copy_with_fallback(writer, "team@conteranto.com", || {
        calls.set(calls.get() + 1);
    }));

    assert_eq!(calls.get(), 1);
    assert!(matches!(outcome, CopyOutcome::FellBack(ClipboardError::Unavailable)));
}
