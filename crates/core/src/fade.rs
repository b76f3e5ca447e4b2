//! Ordering for delayed display writes
//!
//! The tone demo dims its output, then writes the new sentence from a timer.
//! Several timers can be pending while a slider is dragged; only the newest
//! one should touch the display.

use std::cell::Cell;

/// Hands out tickets; only the most recent ticket is current
#[derive(Debug, Default)]
pub struct FadeSequencer {
    latest: Cell<u64>,
}

impl FadeSequencer {
    pub const fn new() -> Self {
        Self {
            latest: Cell::new(0),
        }
    }

    /// Start a new transition, superseding any in flight
    pub fn begin(&self) -> u64 {
        let ticket = self.latest.get().wrapping_add(1);
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let seq = FadeSequencer::new();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_fresh_sequencer_has_no_current_ticket() {
        let seq = FadeSequencer::default();
        assert!(!seq.is_current(1));
    }
}
