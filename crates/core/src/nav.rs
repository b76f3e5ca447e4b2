//! Navigation geometry
//!
//! Which section the reader is looking at, where an anchor click should
//! scroll to, and when the navbar counts as scrolled.

/// Vertical extent of a page section, in document pixels
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open: the bottom edge belongs to the next section
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Section containing `scroll_y + lookahead`.
///
/// Sections are expected in document order. If several overlap the
/// position the last one wins; `None` means no section matched and the
/// current highlight should stay as it is.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> Option<&str> {
    let position = scroll_y + lookahead;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(position))
        .map(|s| s.id.as_str())
}

/// Target id of a same-page anchor, or `None` for `#`, empty and
/// non-fragment hrefs
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether a nav link `href` points at `section_id`
pub fn links_to(href: &str, section_id: &str) -> bool {
    anchor_target(href) == Some(section_id)
}

/// Scroll offset that puts a section just below the fixed header
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}
