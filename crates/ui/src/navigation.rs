//! Navbar state, active section highlighting and smooth anchor scrolling

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use conteranto_core::config::NavConfig;
use conteranto_core::nav::{
    active_section, anchor_target, is_scrolled, links_to, scroll_target, SectionBounds,
};

use crate::dom::{query_all, query_all_html};
use crate::error::Result;

fn section_bounds(section: &HtmlElement) -> SectionBounds {
    SectionBounds::new(
        section.id(),
        f64::from(section.offset_top()),
        f64::from(section.offset_height()),
    )
}

/// Mark the link pointing at `section_id` active and clear the rest
fn highlight(links: &[Element], section_id: &str, active_class: &str) {
    for link in links {
        let href = link.get_attribute("href").unwrap_or_default();
        let _ = link
            .class_list()
            .toggle_with_force(active_class, links_to(&href, section_id));
    }
}

pub fn init(win: &Window, doc: &Document, cfg: &NavConfig) -> Result<()> {
    let navbar = doc.get_element_by_id(&cfg.navbar_id);
    if navbar.is_none() {
        tracing::warn!(id = %cfg.navbar_id, "Navbar not found, scroll styling disabled");
    }
    let links = query_all(doc, &cfg.link_selector)?;
    let sections = query_all_html(doc, &cfg.section_selector)?;
    let link_count = links.len();
    let section_count = sections.len();

    let cfg = cfg.clone();
    let win_cb = win.clone();
    let on_scroll = Closure::wrap(Box::new(move |_e: Event| {
        let scroll_y = win_cb.scroll_y().unwrap_or(0.0);

        if let Some(nav) = &navbar {
            let _ = nav.class_list().toggle_with_force(
                &cfg.scrolled_class,
                is_scrolled(scroll_y, cfg.scrolled_threshold_px),
            );
        }

        // Layout can shift after load, so measure on every scroll
        let bounds: Vec<SectionBounds> = sections.iter().map(section_bounds).collect();
        if let Some(id) = active_section(&bounds, scroll_y, cfg.lookahead_px) {
            highlight(&links, id, &cfg.active_class);
        }
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    tracing::info!(links = link_count, sections = section_count, "Navigation initialized");
    Ok(())
}

fn header_height(doc: &Document, navbar_id: &str) -> f64 {
    doc.get_element_by_id(navbar_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |nav| f64::from(nav.offset_height()))
}

fn scroll_to_section(win: &Window, doc: &Document, navbar_id: &str, target_id: &str) {
    let Some(section) = doc
        .get_element_by_id(target_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        tracing::debug!(target_id, "Anchor target not found");
        return;
    };

    let opts = ScrollToOptions::new();
    opts.set_top(scroll_target(
        f64::from(section.offset_top()),
        header_height(doc, navbar_id),
    ));
    opts.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}

pub fn init_smooth_scroll(win: &Window, doc: &Document, cfg: &NavConfig) -> Result<()> {
    let anchors = query_all(doc, &cfg.anchor_selector)?;

    for link in &anchors {
        let link_cb = link.clone();
        let win_cb = win.clone();
        let doc_cb = doc.clone();
        let navbar_id = cfg.navbar_id.clone();
        let on_click = Closure::wrap(Box::new(move |e: Event| {
            let href = link_cb.get_attribute("href").unwrap_or_default();
            let Some(target_id) = anchor_target(&href) else {
                return;
            };
            e.prevent_default();
            scroll_to_section(&win_cb, &doc_cb, &navbar_id, target_id);
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    tracing::info!(anchors = anchors.len(), "Smooth scroll initialized");
    Ok(())
}
