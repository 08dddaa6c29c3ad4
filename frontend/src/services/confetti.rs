//! Browser side of the confetti burst.
//!
//! [`ConfettiContainer`] implements the core host trait on top of the
//! `#confetti-container` element and [`TimeoutScheduler`] runs delayed tasks
//! on the event loop with `gloo-timers`.

use gloo_timers::callback::Timeout;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use upload_portal::config::{CONFETTI_CLASS, CONFETTI_CONTAINER_ID};
use upload_portal::{
    schedule_launch, ConfettiError, ConfettiHost, ConfettiPiece, ConfettiResult, Particle,
    Scheduler,
};

/// Schedules the confetti burst for this page view.
///
/// The container is looked up when the launch timer fires, so pages without
/// one do nothing.
pub fn init_confetti() {
    schedule_launch(TimeoutScheduler, StdRng::from_entropy(), ConfettiContainer::find);
}

// =============================================================================
// Scheduler
// =============================================================================

/// One-shot timers on the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // Nothing cancels these, so the handle is released.
        Timeout::new(delay_ms, task).forget();
    }
}

// =============================================================================
// Container
// =============================================================================

/// The `#confetti-container` element of the current page.
pub struct ConfettiContainer {
    document: Document,
    container: Element,
}

impl ConfettiContainer {
    /// Looks up the container; `None` when the page has none.
    pub fn find() -> Option<Self> {
        let document = gloo_utils::document();
        let container = document.get_element_by_id(CONFETTI_CONTAINER_ID)?;
        Some(Self { document, container })
    }

    fn append_particle(&self, particle: &Particle) -> Result<HtmlElement, JsValue> {
        let element = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("Created element is not an HtmlElement"))?;
        element.set_class_name(CONFETTI_CLASS);

        let style = element.style();
        style.set_property("background", &particle.color)?;
        style.set_property("left", &particle.left_css())?;
        style.set_property("animation-delay", &particle.delay_css())?;

        self.container.append_child(&element)?;
        Ok(element)
    }
}

impl ConfettiHost for ConfettiContainer {
    type Piece = ConfettiNode;

    fn insert(&self, particle: &Particle) -> ConfettiResult<ConfettiNode> {
        self.append_particle(particle)
            .map(ConfettiNode)
            .map_err(|e| ConfettiError::Insert(format!("{:?}", e)))
    }
}

/// A particle element inside the container.
pub struct ConfettiNode(HtmlElement);

impl ConfettiPiece for ConfettiNode {
    fn detach(self) {
        // `remove` does nothing once the node or its container left the page.
        self.0.remove();
    }
}
