use conteranto_core::config::CONFIG_ELEMENT_ID;
use conteranto_core::SiteConfig;
use web_sys::Document;

/// Read the inline JSON config block, falling back to defaults
pub fn load(doc: &Document) -> SiteConfig {
    let raw = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());

    match SiteConfig::from_optional_json(raw.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Using default site config");
            SiteConfig::default()
        }
    }
}
