//! Tone selector
//!
//! Maps two slider readings (politeness, directness) onto one of nine
//! example sentences. Both axes share the same bucketing thresholds.

use std::fmt;

/// Lower bound of the Medium bucket (inclusive)
pub const MEDIUM_THRESHOLD: i64 = 35;
/// Lower bound of the High bucket (inclusive)
pub const HIGH_THRESHOLD: i64 = 70;

/// Bucket derived from a raw slider value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Bucket a raw value. Out-of-range input is not clamped: negatives land
    /// in `Low`, anything above 100 in `High`.
    pub const fn from_value(value: i64) -> Self {
        if value < MEDIUM_THRESHOLD {
            Self::Low
        } else if value < HIGH_THRESHOLD {
            Self::Medium
        } else {
            Self::High
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{s}")
    }
}

/// A reading of both sliders, taken on every `input` event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderChange {
    pub politeness: i64,
    pub directness: i64,
}

impl SliderChange {
    pub const fn new(politeness: i64, directness: i64) -> Self {
        Self {
            politeness,
            directness,
        }
    }

    /// Buckets as `(politeness, directness)`
    pub const fn levels(self) -> (Level, Level) {
        (
            Level::from_value(self.politeness),
            Level::from_value(self.directness),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToneError {
    #[error("no mapping for combination politeness={politeness}, directness={directness}")]
    NoMapping { politeness: Level, directness: Level },
}

/// Fixed table indexed by `[politeness][directness]`
#[derive(Debug, Clone, Copy)]
pub struct ToneMatrix {
    entries: [[&'static str; 3]; 3],
}

/// The sentences shown on the site
pub static STANDARD: ToneMatrix = ToneMatrix::from_entries([
    [
        "Maybe you could send the report sometime?",
        "Would you be able to send the report?",
        "Send the report.",
    ],
    [
        "I was wondering if you might send the report?",
        "Could you please send the report?",
        "Please send the report.",
    ],
    [
        "Would you possibly have time to send that report?",
        "Could you please send that report when you have a moment?",
        "I would appreciate it if you could send the report.",
    ],
]);

impl ToneMatrix {
    /// Rows are politeness Low/Medium/High, columns directness Low/Medium/High
    pub const fn from_entries(entries: [[&'static str; 3]; 3]) -> Self {
        Self { entries }
    }

    pub fn standard() -> &'static Self {
        &STANDARD
    }

    pub fn lookup(&self, politeness: Level, directness: Level) -> Result<&'static str, ToneError> {
        let entry = self.entries[politeness.index()][directness.index()];
        if entry.is_empty() {
            return Err(ToneError::NoMapping {
                politeness,
                directness,
            });
        }
        Ok(entry)
    }

    pub fn select(&self, change: SliderChange) -> Result<&'static str, ToneError> {
        let (politeness, directness) = change.levels();
        self.lookup(politeness, directness)
    }

    /// Check that every combination has a sentence
    pub fn validate(&self) -> Result<(), ToneError> {
        for politeness in Level::ALL {
            for directness in Level::ALL {
                self.lookup(politeness, directness)?;
            }
        }
        Ok(())
    }
}

/// Sentence for raw slider values against the standard table
pub fn select(politeness: i64, directness: i64) -> Result<&'static str, ToneError> {
    STANDARD.select(SliderChange::new(politeness, directness))
}
