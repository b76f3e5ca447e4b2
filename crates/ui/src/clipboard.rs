//! Click-to-copy for email links

use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Event, HtmlElement, Navigator, Window};

use conteranto_core::config::ClipboardConfig;
use conteranto_core::{
    copy_with_fallback, ClipboardError, ClipboardWriter, CopyFeedback, CopyOutcome,
};

use crate::dom::{query_all_html, set_timeout};
use crate::error::{js_message, Result};

/// `navigator.clipboard`, which is missing outside secure contexts
struct NavigatorClipboard {
    navigator: Navigator,
}

impl NavigatorClipboard {
    fn available(&self) -> bool {
        js_sys::Reflect::get(&self.navigator, &"clipboard".into())
            .is_ok_and(|v| !v.is_undefined() && !v.is_null())
    }
}

#[async_trait(?Send)]
impl ClipboardWriter for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> std::result::Result<(), ClipboardError> {
        if !self.available() {
            return Err(ClipboardError::Unavailable);
        }
        JsFuture::from(self.navigator.clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(js_message(&e)))
    }
}

/// Swap the link text for a confirmation, then put it back
fn show_copied(
    win: &Window,
    link: &HtmlElement,
    feedback: Rc<CopyFeedback>,
    cfg: &ClipboardConfig,
) -> Result<()> {
    let ticket = feedback.show();
    link.set_text_content(Some(&cfg.feedback_text));
    link.style().set_property("color", &cfg.feedback_color)?;

    let link = link.clone();
    set_timeout(win, cfg.feedback_ms, move || {
        let Some((text, color)) = feedback.restore(ticket) else {
            return;
        };
        link.set_text_content(Some(text));
        let _ = link.style().set_property("color", color);
    })?;
    Ok(())
}

fn open_href(win: &Window, href: Option<&str>) {
    let Some(href) = href else {
        return;
    };
    if let Err(e) = win.location().set_href(href) {
        tracing::error!(error = %js_message(&e), "mailto fallback failed");
    }
}

async fn copy_link(
    win: Window,
    link: HtmlElement,
    feedback: Rc<CopyFeedback>,
    clipboard: Rc<NavigatorClipboard>,
    cfg: Rc<ClipboardConfig>,
) {
    let href = link.get_attribute("href");

    let outcome = copy_with_fallback(clipboard.as_ref(), feedback.email(), || {
        open_href(&win, href.as_deref());
    })
    .await;

    match outcome {
        CopyOutcome::Copied => {
            if let Err(e) = show_copied(&win, &link, feedback, &cfg) {
                tracing::warn!(error = %e, "Copy feedback failed");
            }
        }
        CopyOutcome::FellBack(e) => {
            tracing::warn!(error = %e, "Clipboard API not available, using mailto fallback");
        }
    }
}

pub fn init(win: &Window, doc: &Document, cfg: &ClipboardConfig) -> Result<()> {
    let links = query_all_html(doc, &cfg.selector)?;
    let clipboard = Rc::new(NavigatorClipboard {
        navigator: win.navigator(),
    });
    let cfg = Rc::new(cfg.clone());

    for link in &links {
        // Captured up front so a click during the feedback window still
        // copies the address and restores the link's own color
        let feedback = Rc::new(CopyFeedback::new(
            link.text_content().unwrap_or_default(),
            link.style().get_property_value("color").unwrap_or_default(),
        ));
        let link_cb = link.clone();
        let win_cb = win.clone();
        let clipboard = Rc::clone(&clipboard);
        let cfg = Rc::clone(&cfg);
        let on_click = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            spawn_local(copy_link(
                win_cb.clone(),
                link_cb.clone(),
                Rc::clone(&feedback),
                Rc::clone(&clipboard),
                Rc::clone(&cfg),
            ));
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    tracing::info!(links = links.len(), "Copy to clipboard initialized");
    Ok(())
}
