//! Visibility-driven effects: reveal-on-scroll and lazy images

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use conteranto_core::config::{LazyConfig, RevealConfig};
use conteranto_core::reveal::{hidden_style, transition_for, visible_style};

use crate::dom::{apply_style, prefers_reduced_motion, query_all, query_all_html};
use crate::error::Result;

/// Entries from an observer batch that just became visible
fn intersecting(entries: &js_sys::Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(IntersectionObserverEntry::is_intersecting)
}

pub fn init_reveal(win: &Window, doc: &Document, cfg: &RevealConfig) -> Result<()> {
    if prefers_reduced_motion(win) {
        tracing::info!("Animations disabled (user prefers reduced motion)");
        return Ok(());
    }

    let elements = query_all_html(doc, &cfg.selector_list())?;
    let once = cfg.once;
    let visible = visible_style();

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in intersecting(&entries) {
            let target = entry.target();
            if let Some(el) = target.dyn_ref::<HtmlElement>() {
                if let Err(e) = apply_style(el, &visible) {
                    tracing::warn!(error = %e, "Could not reveal element");
                }
            }
            if once {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(cfg.threshold));
    options.set_root_margin(&cfg.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let hidden = hidden_style(cfg);
    for (index, el) in elements.iter().enumerate() {
        apply_style(el, &hidden)?;
        el.style()
            .set_property("transition", &transition_for(cfg, index))?;
        observer.observe(el);
    }

    tracing::info!(elements = elements.len(), "Scroll animations initialized");
    Ok(())
}

pub fn init_lazy_images(doc: &Document, cfg: &LazyConfig) -> Result<()> {
    let images = query_all(doc, &cfg.selector)?;
    if images.is_empty() {
        return Ok(());
    }

    let attr = cfg.source_attribute.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in intersecting(&entries) {
            let img = entry.target();
            if let Some(src) = img.get_attribute(&attr) {
                let _ = img.set_attribute("src", &src);
                let _ = img.remove_attribute(&attr);
            }
            observer.unobserve(&img);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for img in &images {
        observer.observe(img);
    }

    tracing::info!(images = images.len(), "Lazy loading initialized");
    Ok(())
}
