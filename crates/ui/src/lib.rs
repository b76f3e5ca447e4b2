//! Browser entry point for the Conteranto site
//!
//! Each feature is wired independently from the same config; a feature
//! whose markup is missing logs a warning and the rest still start.

mod animations;
mod clipboard;
mod config;
mod dom;
mod error;
mod navigation;
mod tone_demo;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Window};

pub use error::SiteError;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let win = window().ok_or(SiteError::NoGlobal("window"))?;
    let doc = win.document().ok_or(SiteError::NoGlobal("document"))?;

    if doc.ready_state() == "loading" {
        let doc_cb = doc.clone();
        let on_ready = Closure::once(Box::new(move || {
            start(&win, &doc_cb);
        }) as Box<dyn FnOnce()>);
        doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        start(&win, &doc);
    }

    Ok(())
}

fn report(feature: &str, result: error::Result<()>) {
    if let Err(e) = result {
        tracing::warn!(feature, error = %e, "Feature disabled");
    }
}

/// Wire every feature against the current document
pub fn start(win: &Window, doc: &Document) {
    let config = config::load(doc);

    report("navigation", navigation::init(win, doc, &config.nav));
    report("smooth-scroll", navigation::init_smooth_scroll(win, doc, &config.nav));
    report("tone-demo", tone_demo::init(win, doc, &config.demo));
    report("clipboard", clipboard::init(win, doc, &config.clipboard));
    report("reveal", animations::init_reveal(win, doc, &config.reveal));
    report("lazy-images", animations::init_lazy_images(doc, &config.lazy));

    tracing::info!("Site scripts loaded");
}
