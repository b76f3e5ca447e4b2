//! Copy-to-clipboard policy for email links
//!
//! The browser clipboard sits behind [`ClipboardWriter`] so the fallback
//! rule can be exercised without a browser.

use async_trait::async_trait;

use crate::fade::FadeSequencer;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Something that can put text on the system clipboard
#[async_trait(?Send)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Write failed and the fallback ran
    FellBack(ClipboardError),
}

/// Write `text`; on any failure run `fallback` once instead.
///
/// Never returns an error: the caller only learns which path was taken.
pub async fn copy_with_fallback<C, F>(clipboard: &C, text: &str, fallback: F) -> CopyOutcome
where
    C: ClipboardWriter + ?Sized,
    F: FnOnce(),
{
    match clipboard.write_text(text).await {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            fallback();
            CopyOutcome::FellBack(e)
        }
    }
}

/// An email link's own text and inline color, captured before any
/// confirmation replaced them
#[derive(Debug)]
pub struct CopyFeedback {
    text: String,
    color: String,
    sequencer: FadeSequencer,
}

impl CopyFeedback {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
            sequencer: FadeSequencer::new(),
        }
    }

    /// Address to put on the clipboard
    pub fn email(&self) -> &str {
        self.text.trim()
    }

    /// Start showing the confirmation; the ticket goes to the restore timer
    pub fn show(&self) -> u64 {
        self.sequencer.begin()
    }

    /// Text and color to put back when the timer for `ticket` fires.
    /// `None` while a later confirmation still owns the link.
    pub fn restore(&self, ticket: u64) -> Option<(&str, &str)> {
        self.sequencer
            .is_current(ticket)
            .then(|| (self.text.as_str(), self.color.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        written: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ClipboardWriter for Recorder {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_success_skips_fallback() {
        let clipboard = Recorder::default();
        let mut fallback_calls = 0;
        let outcome = block_on(copy_with_fallback(&clipboard, "hello@conteranto.com", || {
            fallback_calls += 1;
        }));
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(fallback_calls, 0);
        assert_eq!(*clipboard.written.borrow(), vec!["hello@conteranto.com"]);
    }

    #[test]
    fn test_feedback_email_is_trimmed() {
        let feedback = CopyFeedback::new("  hello@conteranto.com\n", "");
        assert_eq!(feedback.email(), "hello@conteranto.com");
    }

    #[test]
    fn test_only_latest_restore_runs() {
        let feedback = CopyFeedback::new("hello@conteranto.com", "");

        // second click lands while the first confirmation is still showing
        let first = feedback.show();
        let second = feedback.show();

        assert_eq!(feedback.restore(first), None);
        assert_eq!(feedback.restore(second), Some(("hello@conteranto.com", "")));
    }

    #[test]
    fn test_restore_keeps_bound_color() {
        let feedback = CopyFeedback::new("team@conteranto.com", "rgb(37, 99, 235)");
        let ticket = feedback.show();
        assert_eq!(
            feedback.restore(ticket),
            Some(("team@conteranto.com", "rgb(37, 99, 235)"))
        );
    }
}
