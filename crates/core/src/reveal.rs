//! Inline styles for reveal-on-scroll

use crate::config::RevealConfig;

/// A set of inline style properties to apply to one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSet {
    pub opacity: &'static str,
    pub transform: String,
}

/// Style an element starts with before it scrolls into view
pub fn hidden_style(cfg: &RevealConfig) -> StyleSet {
    StyleSet {
        opacity: "0",
        transform: format!("translateY({}px)", cfg.offset_px),
    }
}

pub fn visible_style() -> StyleSet {
    StyleSet {
        opacity: "1",
        transform: "translateY(0)".to_string(),
    }
}

/// `transition` value for the element at `index`, delayed in steps of
/// `stagger_ms` so cards cascade in
pub fn transition_for(cfg: &RevealConfig, index: usize) -> String {
    let delay = u64::try_from(index)
        .unwrap_or(u64::MAX)
        .saturating_mul(cfg.stagger_ms);
    format!(
        "opacity {d}ms ease {delay}ms, transform {d}ms ease {delay}ms",
        d = cfg.duration_ms,
    )
}
