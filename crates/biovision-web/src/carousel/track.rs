//! Slide track over DOM elements

use biovision_core::carousel::{parse_duration_ms, parse_px};
use biovision_core::{CarouselError, SlideTrack};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, Window};

use crate::dom::js_error;

/// Slide element class
pub const SLIDE_SELECTOR: &str = ".carousel-item";

/// Marker class for the `current-item` layout
pub const CURRENT_CLASS: &str = "current";

fn dom(error: JsValue) -> CarouselError {
    CarouselError::Dom(js_error(&error))
}

/// The `.carousel-container` of one carousel and its slides
pub struct DomTrack {
    window: Window,
    container: HtmlElement,
    count: usize,
}

impl DomTrack {
    /// Wrap a slide container
    ///
    /// Slides without `data-index` get their position at construction, so
    /// thumbnails can find them after reordering.
    pub fn new(window: Window, container: HtmlElement) -> Result<Self, CarouselError> {
        let track = Self {
            window,
            container,
            count: 0,
        };
        let slides = track.slides()?;
        for (index, slide) in slides.iter().enumerate() {
            if !slide.has_attribute("data-index") {
                slide
                    .set_attribute("data-index", &index.to_string())
                    .map_err(dom)?;
            }
        }
        Ok(Self {
            count: slides.len(),
            ..track
        })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Slides in document order
    pub fn slides(&self) -> Result<Vec<HtmlElement>, CarouselError> {
        let list = self
            .container
            .query_selector_all(SLIDE_SELECTOR)
            .map_err(dom)?;
        Ok((0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }

    fn first(&self) -> Result<HtmlElement, CarouselError> {
        self.slides()?
            .into_iter()
            .next()
            .ok_or(CarouselError::EmptyTrack)
    }

    fn last(&self) -> Result<HtmlElement, CarouselError> {
        self.slides()?
            .into_iter()
            .last()
            .ok_or(CarouselError::EmptyTrack)
    }

    /// Width of a slide plus its right margin
    fn measure(&self, slide: &HtmlElement) -> Result<f64, CarouselError> {
        let margin = self
            .window
            .get_computed_style(slide)
            .map_err(dom)?
            .map(|style| style.get_property_value("margin-right").unwrap_or_default())
            .map(|value| parse_px(&value))
            .unwrap_or(0.0);
        Ok(f64::from(slide.offset_width()) + margin)
    }

    fn set_margin(slide: &HtmlElement, margin: f64) -> Result<(), CarouselError> {
        slide
            .style()
            .set_property("margin-left", &format!("{}px", margin))
            .map_err(dom)
    }

    /// Run `change` on `slide` with its transition disabled
    fn without_transition<F>(slide: &HtmlElement, change: F) -> Result<(), CarouselError>
    where
        F: FnOnce() -> Result<(), CarouselError>,
    {
        let style = slide.style();
        style.set_property("transition-duration", "0s").map_err(dom)?;
        let result = change();
        // flush styles so the zero duration applies to this change only
        let _ = slide.offset_width();
        style.remove_property("transition-duration").map_err(dom)?;
        result
    }

    /// Insert `slide` first with a hiding margin, skipping the transition
    fn prepend_hidden(&self, slide: &HtmlElement) -> Result<(), CarouselError> {
        let width = self.measure(slide)?;
        Self::without_transition(slide, || {
            Self::set_margin(slide, -width)?;
            let first: Option<Element> = self.container.first_element_child();
            self.container
                .insert_before(slide, first.as_deref())
                .map(|_| ())
                .map_err(dom)
        })
    }
}

impl SlideTrack for DomTrack {
    fn len(&self) -> usize {
        self.count
    }

    fn container_width(&self) -> f64 {
        f64::from(self.container.offset_width())
    }

    fn slide_width(&self) -> Result<f64, CarouselError> {
        self.measure(&self.first()?)
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn transition_ms(&self) -> f64 {
        self.first()
            .ok()
            .and_then(|slide| self.window.get_computed_style(&slide).ok().flatten())
            .and_then(|style| style.get_property_value("transition-duration").ok())
            .map(|value| parse_duration_ms(&value))
            .unwrap_or(0.0)
    }

    fn mark_current(&mut self, position: usize) -> Result<(), CarouselError> {
        let slides = self.slides()?;
        let target = slides.get(position).ok_or(CarouselError::SlideOutOfRange {
            index: position,
            count: slides.len(),
        })?;
        for slide in &slides {
            slide.class_list().remove_1(CURRENT_CLASS).map_err(dom)?;
        }
        target.class_list().add_1(CURRENT_CLASS).map_err(dom)
    }

    fn set_leading_margin(&mut self, margin: f64) -> Result<(), CarouselError> {
        Self::set_margin(&self.first()?, margin)
    }

    fn clear_leading_margin(&mut self) -> Result<(), CarouselError> {
        self.first()?
            .style()
            .remove_property("margin-left")
            .map(|_| ())
            .map_err(dom)
    }

    fn move_leading_to_end(&mut self) -> Result<(), CarouselError> {
        let first = self.first()?;
        Self::without_transition(&first, || {
            self.container.append_child(&first).map_err(dom)?;
            first
                .style()
                .remove_property("margin-left")
                .map(|_| ())
                .map_err(dom)
        })
    }

    fn splice_trailing_to_front(&mut self) -> Result<(), CarouselError> {
        let last = self.last()?;
        self.prepend_hidden(&last)
    }

    fn splice_to_front(&mut self, slide: usize) -> Result<(), CarouselError> {
        let selector = format!("{}[data-index=\"{}\"]", SLIDE_SELECTOR, slide);
        let element = self
            .container
            .query_selector(&selector)
            .map_err(dom)?
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or(CarouselError::SlideOutOfRange {
                index: slide,
                count: self.count,
            })?;
        self.prepend_hidden(&element)
    }
}
