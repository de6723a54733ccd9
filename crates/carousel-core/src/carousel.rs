//! The carousel widget instance and its input controllers.

use crate::animator::{OffsetAnimator, StepPhase};
use crate::autoplay::{AutoplayScheduler, AutoplayState};
use crate::config::CarouselConfig;
use crate::effect::{CarouselMessage, Effect};
use crate::error::ConfigError;
use crate::indicator::{highlight, Indicators};
use crate::model::CarouselState;
use crate::viewport::Viewport;

/// A seamless looping carousel bound to a viewport and an indicator row.
///
/// All state is private; the host drives it through [`Carousel::update`]
/// (or the equivalent controller methods) and executes the returned
/// [`Effect`].
#[derive(Debug)]
pub struct Carousel<V, I> {
    config: CarouselConfig,
    state: CarouselState,
    animator: OffsetAnimator,
    autoplay: AutoplayScheduler,
    viewport: V,
    indicators: I,
}

impl<V: Viewport, I: Indicators> Carousel<V, I> {
    /// Bind a carousel to its viewport and indicators, resting on image 1.
    pub fn new(
        config: CarouselConfig,
        mut viewport: V,
        mut indicators: I,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if indicators.len() != config.count() {
            log::warn!(
                "indicator row has {} entries for {} images",
                indicators.len(),
                config.count()
            );
        }

        let state = CarouselState::new(config.count(), config.rest_offset(1));
        viewport.set_offset(state.current_offset());
        highlight(&mut indicators, state.current_index());

        log::info!(
            "carousel: {} images of {}px, {}px offset each {}ms tick",
            config.image_count,
            config.image_width,
            config.speed(),
            config.tick_interval_ms
        );

        Ok(Self {
            animator: OffsetAnimator::new(&config),
            autoplay: AutoplayScheduler::new(config.stay_time_ms),
            config,
            state,
            viewport,
            indicators,
        })
    }

    /// Effect arming auto-play once the host is ready.
    #[must_use]
    pub const fn mount(&self) -> Effect {
        self.autoplay.start()
    }

    /// Apply a message and return the effect the host must perform.
    pub fn update(&mut self, msg: CarouselMessage) -> Effect {
        match msg {
            CarouselMessage::Next | CarouselMessage::AutoplayElapsed => self.next(),
            CarouselMessage::Previous => self.previous(),
            CarouselMessage::Select(index) => self.select(index),
            CarouselMessage::PointerEnter => self.autoplay.pointer_enter(),
            CarouselMessage::PointerLeave => self.autoplay.pointer_leave(),
            CarouselMessage::Frame => self.animator.on_frame(&mut self.state, &mut self.viewport),
            CarouselMessage::Tick => self.animator.on_tick(&mut self.state, &mut self.viewport),
        }
    }

    /// Slide to the next image, wrapping from the last to the first.
    pub fn next(&mut self) -> Effect {
        if self.state.is_animating() {
            log::debug!("next dropped: transition in flight");
            return Effect::None;
        }
        let index = self.state.next_index();
        self.state.set_index(index);
        highlight(&mut self.indicators, index);
        let delta = -self.config.width_px();
        self.animator.animate(&mut self.state, &mut self.viewport, delta, true)
    }

    /// Slide to the previous image, wrapping from the first to the last.
    pub fn previous(&mut self) -> Effect {
        if self.state.is_animating() {
            log::debug!("previous dropped: transition in flight");
            return Effect::None;
        }
        let index = self.state.previous_index();
        self.state.set_index(index);
        highlight(&mut self.indicators, index);
        let delta = self.config.width_px();
        self.animator.animate(&mut self.state, &mut self.viewport, delta, true)
    }

    /// Jump straight to image `index` (1-based) without animating.
    ///
    /// Ignored while a transition is in flight, for the current image, and
    /// for indices outside `1..=image_count`.
    pub fn select(&mut self, index: usize) -> Effect {
        if !self.state.contains(index) {
            log::warn!(
                "indicator {index} out of range 1..={}",
                self.state.image_count()
            );
            return Effect::None;
        }
        if index == self.state.current_index() {
            return Effect::None;
        }
        if self.state.is_animating() {
            log::debug!("select {index} dropped: transition in flight");
            return Effect::None;
        }

        let steps = index as i32 - self.state.current_index() as i32;
        let effect = self.animator.animate(
            &mut self.state,
            &mut self.viewport,
            -self.config.width_px() * steps,
            false,
        );
        self.state.set_index(index);
        highlight(&mut self.indicators, index);
        effect
    }

    /// Displayed image (1-based).
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Current strip offset in pixels.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.state.current_offset()
    }

    /// Snapshot of the mutable state.
    #[must_use]
    pub const fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Phase of the animator's step loop.
    #[must_use]
    pub const fn phase(&self) -> StepPhase {
        self.animator.phase()
    }

    /// Auto-play state.
    #[must_use]
    pub const fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The bound viewport.
    #[must_use]
    pub const fn viewport(&self) -> &V {
        &self.viewport
    }

    /// The bound indicator row.
    #[must_use]
    pub const fn indicators(&self) -> &I {
        &self.indicators
    }
}
