//! Configuration for the site scripts
//!
//! Read from an inline `<script type="application/json" id="site-config">`
//! block. Every field is optional; missing ones fall back to the values the
//! site markup was built against.

use serde::Deserialize;

/// Id of the inline script element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tone demo elements and fade timing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub politeness_id: String,
    pub directness_id: String,
    pub output_id: String,
    pub fade_ms: i32,
    pub dimmed_opacity: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            politeness_id: "politenessSlider".to_string(),
            directness_id: "directnessSlider".to_string(),
            output_id: "translationOutput".to_string(),
            fade_ms: 150,
            dimmed_opacity: "0.5".to_string(),
        }
    }
}

/// Navbar, section highlighting and anchor scrolling
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub navbar_id: String,
    pub link_selector: String,
    pub section_selector: String,
    pub anchor_selector: String,
    pub active_class: String,
    pub scrolled_class: String,
    pub lookahead_px: f64,
    pub scrolled_threshold_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            navbar_id: "navbar".to_string(),
            link_selector: ".nav-link".to_string(),
            section_selector: "section[id]".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            active_class: "active".to_string(),
            scrolled_class: "scrolled".to_string(),
            lookahead_px: 100.0,
            scrolled_threshold_px: 50.0,
        }
    }
}

/// Reveal-on-scroll targets and animation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
    pub root_margin: String,
    /// Stop observing an element after its first reveal
    pub once: bool,
    pub offset_px: u32,
    pub duration_ms: u64,
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: [
                ".feature-card",
                ".example-card",
                ".outcome-card",
                ".team-card",
                ".contact-card",
                ".feature-highlight",
                ".philosophy-link",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            once: false,
            offset_px: 30,
            duration_ms: 600,
            stagger_ms: 100,
        }
    }
}

impl RevealConfig {
    /// All selectors joined for a single `querySelectorAll`
    pub fn selector_list(&self) -> String {
        self.selectors.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LazyConfig {
    pub selector: String,
    pub source_attribute: String,
}

impl Default for LazyConfig {
    fn default() -> Self {
        Self {
            selector: "img[data-src]".to_string(),
            source_attribute: "data-src".to_string(),
        }
    }
}

/// Email copy feedback
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub selector: String,
    pub feedback_text: String,
    pub feedback_color: String,
    pub feedback_ms: i32,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            selector: "a[href^=\"mailto:\"]".to_string(),
            feedback_text: "✓ Copied!".to_string(),
            feedback_color: "#10b981".to_string(),
            feedback_ms: 2000,
        }
    }
}

/// Full site configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub demo: DemoConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub lazy: LazyConfig,
    pub clipboard: ClipboardConfig,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the contents of the config element, if there was one.
    /// Blank content means defaults.
    pub fn from_optional_json(json: Option<&str>) -> Result<Self, ConfigError> {
        match json.map(str::trim) {
            Some(s) if !s.is_empty() => Self::from_json(s),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.demo.politeness_id, "politenessSlider");
        assert_eq!(config.demo.fade_ms, 150);
        assert!((config.nav.lookahead_px - 100.0).abs() < f64::EPSILON);
        assert_eq!(config.clipboard.feedback_ms, 2000);
        assert!(!config.reveal.once);
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(
            r#"{ "nav": { "lookahead_px": 64 }, "reveal": { "once": true } }"#,
        )
        .unwrap();
        assert!((config.nav.lookahead_px - 64.0).abs() < f64::EPSILON);
        assert_eq!(config.nav.navbar_id, "navbar");
        assert!(config.reveal.once);
        assert_eq!(config.reveal.selectors.len(), 7);
    }

    #[test]
    fn test_missing_or_blank_is_default() {
        assert_eq!(SiteConfig::from_optional_json(None).unwrap(), SiteConfig::default());
        assert_eq!(
            SiteConfig::from_optional_json(Some("  \n")).unwrap(),
            SiteConfig::default()
        );
    }

    #[test]
    fn test_bad_json_is_error() {
        let err = SiteConfig::from_optional_json(Some("{ nav: }")).unwrap_err();
        assert!(err.to_string().starts_with("invalid site config"));
    }

    #[test]
    fn test_selector_list() {
        let reveal = RevealConfig {
            selectors: vec![".a".into(), ".b".into()],
            ..RevealConfig::default()
        };
        assert_eq!(reveal.selector_list(), ".a, .b");
    }
}
