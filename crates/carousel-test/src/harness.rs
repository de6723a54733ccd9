//! Deterministic host for driving a carousel on a virtual clock.
//!
//! The harness plays the role of the browser: it executes every [`Effect`]
//! the carousel returns, delivers frames, step ticks and auto-play firings at
//! their virtual due times, and exposes the recorded viewport and indicators.
//!
//! Events due at the same instant are delivered frame first, then tick, then
//! auto-play.
//!
//! # Example
//!
//! ```
//! use carousel_core::CarouselConfig;
//! use carousel_test::Harness;
//!
//! let mut harness = Harness::new(CarouselConfig::default())?;
//! harness.advance(2000);
//! assert_eq!(harness.current_index(), 2);
//! harness.settle();
//! assert_eq!(harness.offset(), -1200);
//! # Ok::<(), carousel_core::ConfigError>(())
//! ```

use crate::clock::IntervalTimer;
use crate::fixture::{RecordingIndicators, RecordingViewport};
use carousel_core::{Carousel, CarouselConfig, CarouselMessage, ConfigError, Effect};

/// Carousel bound to the recording fixtures.
pub type TestCarousel = Carousel<RecordingViewport, RecordingIndicators>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Pending {
    Frame,
    Tick,
    Autoplay,
}

/// Virtual-time driver for a [`TestCarousel`].
#[derive(Debug)]
pub struct Harness {
    carousel: TestCarousel,
    now_ms: u64,
    frame_latency_ms: u64,
    frame_due: Option<u64>,
    tick_due: Option<u64>,
    autoplay: IntervalTimer,
    frames: u64,
    ticks: u64,
    journal: Vec<(u64, CarouselMessage)>,
}

impl Harness {
    /// Build and mount a carousel at virtual time 0.
    pub fn new(config: CarouselConfig) -> Result<Self, ConfigError> {
        let carousel = Carousel::new(
            config,
            RecordingViewport::new(),
            RecordingIndicators::new(config.count()),
        )?;
        let mut harness = Self {
            carousel,
            now_ms: 0,
            frame_latency_ms: 0,
            frame_due: None,
            tick_due: None,
            autoplay: IntervalTimer::new(),
            frames: 0,
            ticks: 0,
            journal: Vec::new(),
        };
        let effect = harness.carousel.mount();
        harness.execute(effect);
        Ok(harness)
    }

    /// Delay between a frame request and its delivery.
    #[must_use]
    pub const fn frame_latency(mut self, ms: u64) -> Self {
        self.frame_latency_ms = ms;
        self
    }

    // === Input Simulation ===

    /// Click the "next" trigger.
    pub fn click_next(&mut self) -> &mut Self {
        self.dispatch(CarouselMessage::Next);
        self
    }

    /// Click the "previous" trigger.
    pub fn click_previous(&mut self) -> &mut Self {
        self.dispatch(CarouselMessage::Previous);
        self
    }

    /// Click the indicator for image `index` (1-based).
    pub fn click_indicator(&mut self, index: usize) -> &mut Self {
        self.dispatch(CarouselMessage::Select(index));
        self
    }

    /// Move the pointer over the container.
    pub fn hover(&mut self) -> &mut Self {
        self.dispatch(CarouselMessage::PointerEnter);
        self
    }

    /// Move the pointer out of the container.
    pub fn unhover(&mut self) -> &mut Self {
        self.dispatch(CarouselMessage::PointerLeave);
        self
    }

    // === Time ===

    /// Advance virtual time by `ms`, delivering everything due on the way.
    pub fn advance(&mut self, ms: u64) -> &mut Self {
        let end = self.now_ms + ms;
        while let Some((due, pending)) = self.next_pending() {
            if due > end {
                break;
            }
            self.deliver(due, pending);
        }
        self.now_ms = end;
        self
    }

    /// Run until no transition is in flight.
    pub fn settle(&mut self) -> &mut Self {
        while self.frame_due.is_some() || self.tick_due.is_some() {
            let Some((due, pending)) = self.next_pending() else {
                break;
            };
            self.deliver(due, pending);
        }
        self
    }

    fn next_pending(&self) -> Option<(u64, Pending)> {
        [
            self.frame_due.map(|due| (due, Pending::Frame)),
            self.tick_due.map(|due| (due, Pending::Tick)),
            self.autoplay.due_ms().map(|due| (due, Pending::Autoplay)),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn deliver(&mut self, due: u64, pending: Pending) {
        self.now_ms = self.now_ms.max(due);
        let msg = match pending {
            Pending::Frame => {
                self.frame_due = None;
                self.frames += 1;
                CarouselMessage::Frame
            }
            Pending::Tick => {
                self.tick_due = None;
                self.ticks += 1;
                CarouselMessage::Tick
            }
            Pending::Autoplay => {
                self.autoplay.fire();
                CarouselMessage::AutoplayElapsed
            }
        };
        self.dispatch(msg);
    }

    fn dispatch(&mut self, msg: CarouselMessage) {
        if !matches!(msg, CarouselMessage::Frame | CarouselMessage::Tick) {
            log::debug!("t={}ms {msg:?}", self.now_ms);
        }
        self.journal.push((self.now_ms, msg));
        let effect = self.carousel.update(msg);
        self.execute(effect);
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::RequestFrame => self.frame_due = Some(self.now_ms + self.frame_latency_ms),
            Effect::ScheduleTick { delay_ms } => {
                self.tick_due = Some(self.now_ms + u64::from(delay_ms));
            }
            Effect::StartAutoplay { period_ms } => self.autoplay.start(self.now_ms, period_ms),
            Effect::CancelAutoplay => self.autoplay.stop(),
        }
    }

    // === Queries ===

    /// Current virtual time.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// The driven carousel.
    #[must_use]
    pub const fn carousel(&self) -> &TestCarousel {
        &self.carousel
    }

    /// Displayed image (1-based).
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    /// Current strip offset.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.carousel.offset()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.carousel.is_animating()
    }

    /// Recorded viewport.
    #[must_use]
    pub const fn viewport(&self) -> &RecordingViewport {
        self.carousel.viewport()
    }

    /// Recorded indicator row.
    #[must_use]
    pub const fn indicators(&self) -> &RecordingIndicators {
        self.carousel.indicators()
    }

    /// Frames delivered so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Step ticks delivered so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of auto-play firings delivered so far.
    #[must_use]
    pub const fn autoplay_fires(&self) -> u64 {
        self.autoplay.tick_count()
    }

    /// Virtual time of the next auto-play firing, if armed.
    #[must_use]
    pub const fn next_autoplay_ms(&self) -> Option<u64> {
        self.autoplay.due_ms()
    }

    /// Every message delivered, with its virtual time.
    #[must_use]
    pub fn journal(&self) -> &[(u64, CarouselMessage)] {
        &self.journal
    }
}
