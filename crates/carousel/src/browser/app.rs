//! WASM entry point: binds a carousel to the page and runs its effects.
//!
//! Frames go through `requestAnimationFrame`, step ticks through
//! `setTimeout` and auto-play through `setInterval`. Every callback funnels
//! into a single dispatch that applies the message and executes the
//! returned effect after the carousel borrow is released.

use super::dom::{DomIndicators, DomViewport};
use super::error::MountError;
use super::logger;
use super::selectors::DomSelectors;
use super::style::parse_index;
use carousel_core::{
    AutoplayState, Carousel, CarouselConfig, CarouselMessage, Effect, ExtendedStrip,
};
use js_sys::Function;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

type DomCarousel = Carousel<DomViewport, DomIndicators>;

struct Runtime {
    window: Window,
    carousel: RefCell<DomCarousel>,
    interval: Cell<Option<i32>>,
    autoplay_callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

fn dispatch(runtime: &Rc<Runtime>, msg: CarouselMessage) {
    let effect = runtime.carousel.borrow_mut().update(msg);
    execute(runtime, effect);
}

fn execute(runtime: &Rc<Runtime>, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::RequestFrame => {
            let rt = Rc::clone(runtime);
            let callback = Closure::once_into_js(move || dispatch(&rt, CarouselMessage::Frame));
            if let Err(err) = runtime
                .window
                .request_animation_frame(callback.unchecked_ref::<Function>())
            {
                log::error!("requestAnimationFrame failed: {err:?}");
            }
        }
        Effect::ScheduleTick { delay_ms } => {
            let Some(delay) = timer_delay(delay_ms) else {
                return;
            };
            let rt = Rc::clone(runtime);
            let callback = Closure::once_into_js(move || dispatch(&rt, CarouselMessage::Tick));
            if let Err(err) = runtime
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    delay,
                )
            {
                log::error!("setTimeout failed: {err:?}");
            }
        }
        Effect::StartAutoplay { period_ms } => {
            cancel_autoplay(runtime);
            let Some(period) = timer_delay(period_ms) else {
                return;
            };
            let callback = runtime.autoplay_callback.borrow();
            let Some(callback) = callback.as_ref() else {
                return;
            };
            match runtime
                .window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    period,
                ) {
                Ok(handle) => runtime.interval.set(Some(handle)),
                Err(err) => log::error!("setInterval failed: {err:?}"),
            }
        }
        Effect::CancelAutoplay => cancel_autoplay(runtime),
    }
}

/// Millisecond delay as the signed count browser timers take.
fn timer_delay(ms: u32) -> Option<i32> {
    match i32::try_from(ms) {
        Ok(delay) => Some(delay),
        Err(_) => {
            log::error!("timer delay {ms}ms exceeds the browser limit");
            None
        }
    }
}

fn cancel_autoplay(runtime: &Runtime) {
    if let Some(handle) = runtime.interval.take() {
        runtime.window.clear_interval_with_handle(handle);
    }
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

fn element(document: &Document, id: &str) -> Result<Element, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(id.to_string()))
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, MountError> {
    element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(id.to_string()))
}

/// A carousel mounted on the page.
#[wasm_bindgen]
pub struct CarouselApp {
    runtime: Rc<Runtime>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl CarouselApp {
    /// Mount with default constants onto the default element ids.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<CarouselApp, JsValue> {
        let app = Self::mount(CarouselConfig::default(), &DomSelectors::default())?;
        Ok(app)
    }

    /// Mount with a JSON configuration and optional JSON selectors.
    pub fn with_config(
        config_json: &str,
        selectors_json: Option<String>,
    ) -> Result<CarouselApp, JsValue> {
        let config = CarouselConfig::from_json(config_json).map_err(MountError::from)?;
        let selectors = match selectors_json {
            Some(json) => DomSelectors::from_json(&json).map_err(MountError::from)?,
            None => DomSelectors::default(),
        };
        Ok(Self::mount(config, &selectors)?)
    }

    /// Slide to the next image.
    pub fn next(&self) {
        dispatch(&self.runtime, CarouselMessage::Next);
    }

    /// Slide to the previous image.
    pub fn previous(&self) {
        dispatch(&self.runtime, CarouselMessage::Previous);
    }

    /// Jump to image `index` (1-based).
    pub fn select(&self, index: usize) {
        dispatch(&self.runtime, CarouselMessage::Select(index));
    }

    /// Displayed image (1-based).
    pub fn current_index(&self) -> usize {
        self.runtime.carousel.borrow().current_index()
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.runtime.carousel.borrow().is_animating()
    }

    /// Current strip offset in pixels.
    pub fn offset(&self) -> i32 {
        self.runtime.carousel.borrow().offset()
    }

    /// Whether auto-play is paused by hover.
    pub fn is_paused(&self) -> bool {
        self.runtime.carousel.borrow().autoplay_state() == AutoplayState::Paused
    }

    /// Detach every listener and stop auto-play.
    pub fn unmount(&mut self) {
        self.detach();
    }
}

impl CarouselApp {
    /// Bind to the page (Rust API).
    pub fn mount(config: CarouselConfig, selectors: &DomSelectors) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;

        let container = element(&document, &selectors.container)?;
        let gallery = html_element(&document, &selectors.gallery)?;
        let prev = element(&document, &selectors.prev)?;
        let next = element(&document, &selectors.next)?;
        let row = element(&document, &selectors.indicators)?;

        let strip = ExtendedStrip::new(config.count());
        let slots = gallery.child_element_count() as usize;
        if slots != strip.slot_count() {
            log::warn!(
                "'{}' holds {slots} slots, expected {}",
                selectors.gallery,
                strip.slot_count()
            );
        }

        let viewport = DomViewport::new(gallery, selectors.offset_property.clone());
        let indicators = DomIndicators::from_row(&row, selectors.active_class.clone());
        let carousel = Carousel::new(config, viewport, indicators)?;

        let runtime = Rc::new(Runtime {
            window,
            carousel: RefCell::new(carousel),
            interval: Cell::new(None),
            autoplay_callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&runtime);
        *runtime.autoplay_callback.borrow_mut() = Some(Closure::new(move || {
            if let Some(rt) = weak.upgrade() {
                dispatch(&rt, CarouselMessage::AutoplayElapsed);
            }
        }));

        let mut app = Self {
            runtime,
            listeners: Vec::new(),
        };
        app.listen(&container, "mouseenter", CarouselMessage::PointerEnter)?;
        app.listen(&container, "mouseleave", CarouselMessage::PointerLeave)?;
        app.listen(&prev, "click", CarouselMessage::Previous)?;
        app.listen(&next, "click", CarouselMessage::Next)?;

        let active_class = selectors.active_class.clone();
        let index_attribute = selectors.index_attribute.clone();
        app.listen_with(&row, "click", move |event| {
            indicator_click(event, &active_class, &index_attribute)
        })?;

        let effect = app.runtime.carousel.borrow().mount();
        execute(&app.runtime, effect);
        log::info!("carousel mounted on '{}'", selectors.container);
        Ok(app)
    }

    fn listen(
        &mut self,
        target: &Element,
        event: &'static str,
        msg: CarouselMessage,
    ) -> Result<(), MountError> {
        self.listen_with(target, event, move |_| Some(msg))
    }

    fn listen_with<F>(
        &mut self,
        target: &Element,
        event: &'static str,
        map: F,
    ) -> Result<(), MountError>
    where
        F: Fn(&Event) -> Option<CarouselMessage> + 'static,
    {
        let weak: Weak<Runtime> = Rc::downgrade(&self.runtime);
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(msg) = map(&event) else {
                return;
            };
            if let Some(rt) = weak.upgrade() {
                dispatch(&rt, msg);
            }
        });
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| MountError::Js(format!("{err:?}")))?;
        self.listeners.push(Listener {
            target: target.clone().into(),
            event,
            callback,
        });
        Ok(())
    }

    fn detach(&mut self) {
        for listener in self.listeners.drain(..) {
            let (target, event) = (&listener.target, listener.event);
            let callback = listener.callback.as_ref().unchecked_ref();
            if let Err(err) = target.remove_event_listener_with_callback(event, callback) {
                log::warn!("failed to remove {event} listener: {err:?}");
            }
        }
        cancel_autoplay(&self.runtime);
    }
}

impl Drop for CarouselApp {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Resolve a delegated click on the indicator row.
fn indicator_click(
    event: &Event,
    active_class: &str,
    index_attribute: &str,
) -> Option<CarouselMessage> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let raw = target.get_attribute(index_attribute)?;
    if target.class_list().contains(active_class) {
        return None;
    }
    match parse_index(&raw) {
        Some(index) => Some(CarouselMessage::Select(index)),
        None => {
            log::warn!("ignoring indicator with {index_attribute}=\"{raw}\"");
            None
        }
    }
}

/// Install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

/// Change the console log level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => logger::init(filter),
        Err(_) => log::warn!("unknown log level '{level}'"),
    }
}
