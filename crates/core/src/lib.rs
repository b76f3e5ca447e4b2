//! Shared logic for the Conteranto site
//!
//! Everything here is free of DOM access so it can be tested natively.
//! The `conteranto-ui` crate reads the page, builds these types and
//! applies the results.

pub mod clipboard;
pub mod config;
pub mod fade;
pub mod nav;
pub mod reveal;
pub mod tone;

pub use clipboard::{
    copy_with_fallback, ClipboardError, ClipboardWriter, CopyFeedback, CopyOutcome,
};
pub use config::{ConfigError, SiteConfig};
pub use fade::FadeSequencer;
pub use tone::{select, Level, SliderChange, ToneError, ToneMatrix};
