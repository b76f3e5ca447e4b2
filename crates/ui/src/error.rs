use conteranto_core::ToneError;
use wasm_bindgen::JsValue;

/// Why a site feature could not be set up or run
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("no global `{0}` available")]
    NoGlobal(&'static str),
    #[error("JS error: {0}")]
    Js(String),
    #[error(transparent)]
    Tone(#[from] ToneError),
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// Best-effort text for a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_message(&value))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        Self::from_str(&err.to_string())
    }
}
