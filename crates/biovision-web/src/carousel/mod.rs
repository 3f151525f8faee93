//! Carousel component
//!
//! Binds every `.js-biovision-carousel` container to a [`Slider`] over a
//! [`DomTrack`]. Markup:
//!
//! ```html
//! <div class="js-biovision-carousel" data-type="offset-cycle" data-timeout="5000">
//!   <div class="carousel-container">
//!     <div class="carousel-item">...</div>
//!   </div>
//!   <button class="prev"></button>
//!   <button class="next"></button>
//!   <div class="thumbnails"><button data-index="0"></button></div>
//! </div>
//! ```

mod track;

pub use track::{DomTrack, CURRENT_CLASS, SLIDE_SELECTOR};

use std::cell::RefCell;
use std::rc::Rc;

use biovision_core::carousel::Cleanup;
use biovision_core::{
    AppContext, CarouselError, CarouselOptions, Component, ComponentError, Slider, Step,
    TouchPoint,
};
use tracing::{debug, trace, warn};
use web_sys::{Element, Event, HtmlElement, TouchEvent, TransitionEvent};

use crate::dom;

/// Container selector
pub const SELECTOR: &str = ".js-biovision-carousel";

/// A slider shared between its event listeners
pub type SharedSlider = Rc<RefCell<Slider<DomTrack>>>;

/// All carousels on the page
#[derive(Default)]
pub struct Carousel {
    sliders: Vec<SharedSlider>,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sliders(&self) -> &[SharedSlider] {
        &self.sliders
    }
}

impl Component for Carousel {
    fn initialize(&mut self, _ctx: &AppContext) -> Result<(), ComponentError> {
        let document = dom::document()?;
        let roots: Vec<Element> = dom::query_all(&document, SELECTOR)?;
        if roots.is_empty() {
            return Err(ComponentError::Skipped);
        }

        for root in roots {
            match bind(&root) {
                Ok(slider) => self.sliders.push(slider),
                Err(error) => warn!(%error, id = %root.id(), "carousel skipped"),
            }
        }
        debug!(count = self.sliders.len(), "carousels bound");
        Ok(())
    }
}

fn as_carousel_error(error: ComponentError) -> CarouselError {
    match error {
        ComponentError::MissingElement(what) => CarouselError::MissingElement(what),
        other => CarouselError::Dom(other.to_string()),
    }
}

/// Build the slider for one container and attach its listeners
pub fn bind(root: &Element) -> Result<SharedSlider, CarouselError> {
    let options = CarouselOptions::from_attributes(&dom::data_attributes(root))?;
    let window = dom::window().map_err(as_carousel_error)?;
    let container: HtmlElement = dom::query_in(root, ".carousel-container", "carousel container")
        .map_err(as_carousel_error)?;

    let track = DomTrack::new(window.clone(), container.clone())?;
    let slider = Rc::new(RefCell::new(Slider::new(track, options, dom::now())?));

    attach(root, &window, &container, &slider).map_err(as_carousel_error)?;
    Ok(slider)
}

fn attach(
    root: &Element,
    window: &web_sys::Window,
    container: &HtmlElement,
    slider: &SharedSlider,
) -> Result<(), ComponentError> {
    if let Ok(button) = dom::query_in::<Element>(root, "button.prev", "prev button") {
        let slider = slider.clone();
        dom::listen(&button, "click", move |_: Event| {
            run(&slider, |s| s.previous(dom::now()));
        })?;
    }
    if let Ok(button) = dom::query_in::<Element>(root, "button.next", "next button") {
        let slider = slider.clone();
        dom::listen(&button, "click", move |_: Event| {
            run(&slider, |s| s.next(dom::now()));
        })?;
    }

    for button in dom::query_all_in::<Element>(root, ".thumbnails button")? {
        let index = button
            .get_attribute("data-index")
            .and_then(|value| value.trim().parse::<usize>().ok());
        let Some(index) = index else {
            warn!("thumbnail without a valid data-index");
            continue;
        };
        let slider = slider.clone();
        dom::listen(&button, "click", move |_: Event| {
            run(&slider, |s| s.jump_to(index));
        })?;
    }

    {
        let slider = slider.clone();
        dom::listen(root, "touchstart", move |event: TouchEvent| {
            if let Some(point) = touch_point(&event) {
                slider.borrow_mut().touch_start(point);
            }
        })?;
    }
    {
        let slider = slider.clone();
        dom::listen(root, "touchend", move |event: TouchEvent| {
            if let Some(point) = touch_point(&event) {
                run(&slider, |s| s.touch_end(point, dom::now()));
            }
        })?;
    }

    {
        let slider = slider.clone();
        dom::listen(container, "transitionend", move |event: TransitionEvent| {
            if event.property_name() == "margin-left" {
                complete(&slider, Trigger::TransitionEnd);
            }
        })?;
    }

    {
        let slider = slider.clone();
        dom::listen(window, "resize", move |_: Event| {
            run(&slider, |s| s.relayout());
        })?;
    }

    let autoplay = slider.borrow().options().autoplay;
    if let Some(autoplay) = autoplay {
        let slider = slider.clone();
        dom::set_interval(autoplay.interval_ms(), move || {
            run(&slider, |s| s.auto_tick(dom::now()));
        })?;
    }
    Ok(())
}

fn touch_point(event: &TouchEvent) -> Option<TouchPoint> {
    let touch = event.changed_touches().get(0)?;
    Some(TouchPoint::new(
        f64::from(touch.page_x()),
        f64::from(touch.page_y()),
    ))
}

/// Apply a slider operation and schedule the cleanup it asks for
fn run<F>(slider: &SharedSlider, op: F)
where
    F: FnOnce(&mut Slider<DomTrack>) -> Result<Step, CarouselError>,
{
    let result = {
        let mut guard = slider.borrow_mut();
        op(&mut *guard)
    };
    match result {
        Ok(Step::Pending(cleanup)) => {
            let transition = slider.borrow().transitions();
            schedule(slider, cleanup, transition);
        }
        Ok(Step::Busy) => trace!("transition in progress, request dropped"),
        Ok(_) => {}
        Err(error) => warn!(%error, "carousel step failed"),
    }
}

fn schedule(slider: &SharedSlider, cleanup: Cleanup, transition: u64) {
    let fallback = slider.clone();
    let timer = move || complete(&fallback, Trigger::Timer(transition));
    if let Err(error) = dom::set_timeout(cleanup.delay_ms, timer) {
        warn!(%error, "could not schedule cleanup, completing now");
        complete(slider, Trigger::Timer(transition));
    }
}

/// What asks for the pending cleanup to run
#[derive(Debug, Clone, Copy)]
enum Trigger {
    /// A slide finished animating its margin
    TransitionEnd,
    /// The fallback timer for the given transition fired
    Timer(u64),
}

/// Finish the pending transition
///
/// `transitionend` only completes cleanups that wait for one; a timer only
/// completes the transition it was scheduled for.
fn complete(slider: &SharedSlider, trigger: Trigger) {
    let mut slider = slider.borrow_mut();
    let Some(pending) = slider.pending() else {
        return;
    };
    let applies = match trigger {
        Trigger::TransitionEnd => pending.awaits_transition_end(),
        Trigger::Timer(transition) => transition == slider.transitions(),
    };
    if !applies {
        return;
    }
    if let Err(error) = slider.complete_transition() {
        warn!(%error, "carousel cleanup failed");
    }
}
