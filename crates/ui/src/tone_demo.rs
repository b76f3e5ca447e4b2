//! Politeness/directness slider demo
//!
//! Both sliders feed one output paragraph. The sentence is picked
//! synchronously from the current slider values; only the fade is delayed.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, Window};

use conteranto_core::config::DemoConfig;
use conteranto_core::{FadeSequencer, SliderChange, ToneMatrix};

use crate::dom::{html_element_by_id, set_timeout, typed_element_by_id};
use crate::error::Result;

/// Integer slider reading, truncated like `parseInt`. `None` for NaN.
#[allow(clippy::cast_possible_truncation)]
pub fn slider_reading(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

pub struct ToneDemo {
    politeness: HtmlInputElement,
    directness: HtmlInputElement,
    output: HtmlElement,
    sequencer: FadeSequencer,
    cfg: DemoConfig,
}

impl ToneDemo {
    pub fn bind(doc: &Document, cfg: DemoConfig) -> Result<Rc<Self>> {
        Ok(Rc::new(Self {
            politeness: typed_element_by_id(doc, &cfg.politeness_id)?,
            directness: typed_element_by_id(doc, &cfg.directness_id)?,
            output: html_element_by_id(doc, &cfg.output_id)?,
            sequencer: FadeSequencer::new(),
            cfg,
        }))
    }

    fn reading(&self) -> Option<SliderChange> {
        Some(SliderChange::new(
            slider_reading(self.politeness.value_as_number())?,
            slider_reading(self.directness.value_as_number())?,
        ))
    }

    /// Pick the sentence for the current sliders and fade it in
    pub fn update(self: &Rc<Self>, win: &Window) -> Result<()> {
        let Some(change) = self.reading() else {
            tracing::warn!("Slider value is not a number, skipping update");
            return Ok(());
        };
        let text = ToneMatrix::standard().select(change)?;

        let ticket = self.sequencer.begin();
        self.output
            .style()
            .set_property("opacity", &self.cfg.dimmed_opacity)?;

        let demo = Rc::clone(self);
        set_timeout(win, self.cfg.fade_ms, move || {
            // A newer update owns the display now
            if !demo.sequencer.is_current(ticket) {
                return;
            }
            demo.output.set_text_content(Some(text));
            let _ = demo.output.style().set_property("opacity", "1");
        })?;
        Ok(())
    }
}

pub fn init(win: &Window, doc: &Document, cfg: &DemoConfig) -> Result<()> {
    let demo = ToneDemo::bind(doc, cfg.clone())?;
    // Listeners only go on once the first sentence rendered
    demo.update(win)?;

    for slider in [&demo.politeness, &demo.directness] {
        let demo_cb = Rc::clone(&demo);
        let win_cb = win.clone();
        let on_input = Closure::wrap(Box::new(move |_e: Event| {
            if let Err(e) = demo_cb.update(&win_cb) {
                tracing::error!(error = %e, "Tone demo update failed");
            }
        }) as Box<dyn FnMut(_)>);
        slider.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
    }

    tracing::info!("Translation demo initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_reading_truncates() {
        assert_eq!(slider_reading(42.0), Some(42));
        assert_eq!(slider_reading(69.9), Some(69));
        assert_eq!(slider_reading(-3.5), Some(-3));
    }

    #[test]
    fn test_slider_reading_rejects_nan() {
        assert_eq!(slider_reading(f64::NAN), None);
        assert_eq!(slider_reading(f64::INFINITY), None);
    }
}
