use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{Result, SiteError};
use conteranto_core::reveal::StyleSet;

/// Look up an element by id, failing softly if the markup lacks it
pub fn html_element_by_id(doc: &Document, id: &str) -> Result<HtmlElement> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| SiteError::MissingElement(format!("#{id}")))
}

/// Look up an element by id and cast it to a concrete element type
pub fn typed_element_by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| SiteError::MissingElement(format!("#{id}")))
}

/// All elements matching `selector`, in document order
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Like [`query_all`] but only keeps styleable HTML elements
pub fn query_all_html(doc: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    Ok(query_all(doc, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn apply_style(el: &HtmlElement, style: &StyleSet) -> Result<()> {
    let css = el.style();
    css.set_property("opacity", style.opacity)?;
    css.set_property("transform", &style.transform)?;
    Ok(())
}

/// Run `f` once after `ms` milliseconds
pub fn set_timeout(win: &Window, ms: i32, f: impl FnOnce() + 'static) -> Result<i32> {
    let callback = Closure::once(Box::new(f) as Box<dyn FnOnce()>);
    let handle = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        ms,
    )?;
    callback.forget();
    Ok(handle)
}

pub fn prefers_reduced_motion(win: &Window) -> bool {
    win.match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}
