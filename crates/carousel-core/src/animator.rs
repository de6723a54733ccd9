//! Offset animator: moves the strip towards a target offset in fixed steps.
//!
//! A transition is an explicit state machine driven by the host:
//!
//! ```text
//!  animate(delta, true)
//!        │
//!        ▼           Frame            Tick (not reached)
//!  ┌──────────┐   ─────────►  ┌─────────────┐ ─────────┐
//!  │ Awaiting │               │ AwaitingTick│          │
//!  │  Frame   │ ◄──────────────────────────────────────┘
//!  └──────────┘
//!        Tick (reached) ──► finish: snap to target, clear flag, wrap
//! ```
//!
//! Each step is committed on a paint opportunity and the next check is only
//! scheduled after that, so steps of one transition never overlap.

use crate::config::CarouselConfig;
use crate::effect::Effect;
use crate::model::{CarouselState, Direction};
use crate::strip::ExtendedStrip;
use crate::viewport::Viewport;

/// Where the step loop is waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPhase {
    /// No transition in flight
    #[default]
    Idle,
    /// Waiting for the next paint opportunity to move one step
    AwaitingFrame,
    /// Step committed, waiting for the tick that re-checks completion
    AwaitingTick,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    start: i32,
    target: i32,
    direction: Direction,
    steps: u32,
}

/// Drives the strip offset between image-aligned positions.
#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    speed: f64,
    tick_interval_ms: u32,
    width: i32,
    strip: ExtendedStrip,
    transition: Option<Transition>,
    phase: StepPhase,
}

impl OffsetAnimator {
    /// Create an idle animator for `config`.
    #[must_use]
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            speed: config.speed(),
            tick_interval_ms: config.tick_interval_ms,
            width: config.width_px(),
            strip: ExtendedStrip::new(config.count()),
            transition: None,
            phase: StepPhase::Idle,
        }
    }

    /// Pixels per step.
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Current phase of the step loop.
    #[must_use]
    pub const fn phase(&self) -> StepPhase {
        self.phase
    }

    /// Target of the transition in flight.
    #[must_use]
    pub fn target(&self) -> Option<i32> {
        self.transition.map(|t| t.target)
    }

    /// Steps committed by the transition in flight.
    #[must_use]
    pub fn steps_taken(&self) -> u32 {
        self.transition.map_or(0, |t| t.steps)
    }

    /// Move the offset by `delta`, instantly or as a stepped transition.
    ///
    /// Instant moves leave the animation flag alone and skip wrap correction;
    /// callers only use them while idle. Stepped moves set the flag and
    /// return the effect that starts the loop.
    pub fn animate<V: Viewport + ?Sized>(
        &mut self,
        state: &mut CarouselState,
        viewport: &mut V,
        delta: i32,
        with_transition: bool,
    ) -> Effect {
        let target = state.current_offset() + delta;

        if !with_transition {
            log::debug!("instant jump {} -> {target}", state.current_offset());
            state.set_offset(target);
            viewport.set_offset(target);
            return Effect::None;
        }

        if self.transition.is_some() {
            log::debug!("transition already in flight, dropping delta {delta}");
            return Effect::None;
        }

        state.set_animating(true);
        let Some(direction) = Direction::of_delta(delta) else {
            self.finish(state, viewport, target);
            return Effect::None;
        };

        log::debug!(
            "transition {} -> {target} ({direction:?}, {} px/step)",
            state.current_offset(),
            self.speed
        );
        self.transition = Some(Transition {
            start: state.current_offset(),
            target,
            direction,
            steps: 0,
        });
        self.check(state, viewport)
    }

    /// Commit one step on a paint opportunity.
    pub fn on_frame<V: Viewport + ?Sized>(
        &mut self,
        state: &mut CarouselState,
        viewport: &mut V,
    ) -> Effect {
        if self.phase != StepPhase::AwaitingFrame {
            return Effect::None;
        }
        let Some(transition) = self.transition.as_mut() else {
            self.phase = StepPhase::Idle;
            return Effect::None;
        };

        transition.steps += 1;
        let (start, target, steps) = (transition.start, transition.target, transition.steps);
        let sign = i64::from(transition.direction.sign());
        let distance = (i64::from(target) - i64::from(start)).abs();
        let travelled = ((self.speed * f64::from(steps)).round() as i64).min(distance);
        // Clamped between start and target, so always in range.
        let next = i64::from(start) + sign * travelled;
        let next = i32::try_from(next).unwrap_or(target);
        log::trace!("step {steps} -> {next}");

        state.set_offset(next);
        viewport.set_offset(next);
        self.phase = StepPhase::AwaitingTick;
        Effect::ScheduleTick {
            delay_ms: self.tick_interval_ms,
        }
    }

    /// Re-check completion after a step's tick interval.
    pub fn on_tick<V: Viewport + ?Sized>(
        &mut self,
        state: &mut CarouselState,
        viewport: &mut V,
    ) -> Effect {
        if self.phase != StepPhase::AwaitingTick {
            return Effect::None;
        }
        self.check(state, viewport)
    }

    fn check<V: Viewport + ?Sized>(
        &mut self,
        state: &mut CarouselState,
        viewport: &mut V,
    ) -> Effect {
        let Some(transition) = self.transition else {
            self.phase = StepPhase::Idle;
            return Effect::None;
        };
        let (offset, target) = (state.current_offset(), transition.target);
        if transition.direction.reached(offset, target) {
            self.finish(state, viewport, target);
            Effect::None
        } else {
            self.phase = StepPhase::AwaitingFrame;
            Effect::RequestFrame
        }
    }

    fn finish<V: Viewport + ?Sized>(
        &mut self,
        state: &mut CarouselState,
        viewport: &mut V,
        target: i32,
    ) {
        self.transition = None;
        self.phase = StepPhase::Idle;
        state.set_animating(false);
        state.set_offset(target);
        viewport.set_offset(target);

        if let Some(real) = self.strip.wrap_target(target, self.width) {
            log::debug!("wrap {target} -> {real}");
            state.set_offset(real);
            viewport.set_offset(real);
        } else {
            log::debug!("transition settled at {target}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::MemoryViewport;
    use proptest::prelude::*;

    fn setup(
        config: &CarouselConfig,
        index: usize,
    ) -> (OffsetAnimator, CarouselState, MemoryViewport) {
        let mut state = CarouselState::new(config.count(), config.rest_offset(1));
        state.set_index(index);
        state.set_offset(config.rest_offset(index));
        let mut viewport = MemoryViewport::new();
        viewport.set_offset(config.rest_offset(index));
        (OffsetAnimator::new(config), state, viewport)
    }

    /// Drive the loop to completion, returning the number of committed steps.
    fn run(
        animator: &mut OffsetAnimator,
        state: &mut CarouselState,
        viewport: &mut MemoryViewport,
        mut effect: Effect,
    ) -> u32 {
        let mut frames = 0;
        loop {
            effect = match effect {
                Effect::RequestFrame => {
                    frames += 1;
                    animator.on_frame(state, viewport)
                }
                Effect::ScheduleTick { .. } => animator.on_tick(state, viewport),
                _ => return frames,
            };
        }
    }

    #[test]
    fn test_instant_jump() {
        let config = CarouselConfig::default();
        let (mut animator, mut state, mut viewport) = setup(&config, 1);
        let effect = animator.animate(&mut state, &mut viewport, -1800, false);
        assert!(effect.is_none());
        assert_eq!(state.current_offset(), -2400);
        assert_eq!(viewport.offset(), -2400);
        assert!(!state.is_animating());
        assert_eq!(animator.phase(), StepPhase::Idle);
    }

    #[test]
    fn test_instant_jump_skips_wrap() {
        let config = CarouselConfig::default();
        let (mut animator, mut state, mut viewport) = setup(&config, 1);
        animator.animate(&mut state, &mut viewport, 600, false);
        assert_eq!(state.current_offset(), 0);
    }

    #[test]
    fn test_transition_starts_with_frame_request() {
        let config = CarouselConfig::default();
        let (mut animator, mut state, mut viewport) = setup(&config, 1);
        let effect = animator.animate(&mut state, &mut viewport, -600, true);
        assert_eq!(effect, Effect::RequestFrame);
        assert!(state.is_animating());
        assert_eq!(animator.phase(), StepPhase::AwaitingFrame);
        assert_eq!(animator.target(), Some(-1200));
        assert_eq!(state.current_offset(), -600);
    }

    #[test]
    fn test_frame_moves_one_step_then_schedules_tick() {
        let config = CarouselConfig::default();
        let (mut animator, mut state, mut viewport) = setup(&config, 1);
        animator.animate(&mut state, &mut viewport, -600, true);
        let effect = animator.on_frame(&mut state, &mut viewport);
        assert_eq!(effect, Effect::ScheduleTick { delay_ms: 10 });
        assert_eq!(state.current_offset(), -615);
        assert_eq!(viewport.offset(), -615);
        assert_eq!(animator.steps_taken(), 1);
    }

    #[test]
    fn test_stale_messages_ignored() {
        let config = CarouselConfig::default();
        let (mut animator, mut state, mut viewport) = setup(&config, 1);
        assert!(animator.on_frame(&mut state, &mut viewport).is_none());
        assert!(animator.on_tick(&mut state, &mut viewport).is_none());

        animator.animate(&mut state, &mut viewport, -600, true);
        // A tick before the frame was painted does nothing.
        assert!(animator.on_tick(&mut state, &mut viewport).is_none());
        assert_eq!(state.current_offset(), -600);
    }

    #[test]
    fn test_full_transition_left() {
        let config = CarouselConfig::default();
        let (mut animator, mut state, mut viewport) = setup(&config, 1);
        let effect = animator.animate(&mut state, &mut viewport, -600, true);
        let frames = run(&mut animator, &mut state, &mut viewport, effect);
        assert_eq!(frames, 40);
        assert_eq!(state.current_offset(), -1200);
        assert!(!state.is_animating());
        assert_eq!(animator.phase(), StepPhase::Idle);
    }

    #[test]
    fn test_full_transition_right() {
        let config = CarouselConfig::default();
        let (mut animator, mut state, mut viewport) = setup(&config, 3);
        let effect = animator.animate(&mut state, &mut viewport, 600, true);
        run(&mut animator, &mut state, &mut viewport, effect);
        assert_eq!(state.current_offset(), -1200);
    }

    #[test]
    fn test_wrap_from_duplicate_first() {
        let config = CarouselConfig::default();
        let (mut animator, mut state, mut viewport) = setup(&config, 5);
        let effect = animator.animate(&mut state, &mut viewport, -600, true);
        run(&mut animator, &mut state, &mut viewport, effect);
        assert_eq!(state.current_offset(), -600);
        assert_eq!(viewport.offset(), -600);
    }

    #[test]
    fn test_wrap_from_duplicate_last() {
        let config = CarouselConfig::default();
        let (mut animator, mut state, mut viewport) = setup(&config, 1);
        let effect = animator.animate(&mut state, &mut viewport, 600, true);
        run(&mut animator, &mut state, &mut viewport, effect);
        assert_eq!(state.current_offset(), -3000);
    }

    #[test]
    fn test_fractional_speed_clamps_to_target() {
        let config = CarouselConfig::new()
            .image_width(500)
            .transition_ms(300)
            .tick_interval_ms(7);
        let (mut animator, mut state, mut viewport) = setup(&config, 2);
        let effect = animator.animate(&mut state, &mut viewport, -500, true);
        let mut effect = effect;
        let mut seen = Vec::new();
        loop {
            effect = match effect {
                Effect::RequestFrame => animator.on_frame(&mut state, &mut viewport),
                Effect::ScheduleTick { .. } => animator.on_tick(&mut state, &mut viewport),
                _ => break,
            };
            seen.push(state.current_offset());
        }
        assert!(seen.iter().all(|offset| *offset >= -1500));
        assert_eq!(state.current_offset(), -1500);
    }

    #[test]
    fn test_last_step_near_offset_limit_clamps_without_overflow() {
        // Widest strip that still fits: -width * (count + 1) is just above i32::MIN.
        let config = CarouselConfig::new()
            .image_width(715_827_882)
            .image_count(2)
            .tick_interval_ms(15)
            .transition_ms(20);
        assert!(config.validate().is_ok());
        let (mut animator, mut state, mut viewport) = setup(&config, 2);
        let effect = animator.animate(&mut state, &mut viewport, -config.width_px(), true);
        let frames = run(&mut animator, &mut state, &mut viewport, effect);
        assert_eq!(frames, 2);
        assert!(!state.is_animating());
        assert_eq!(state.current_offset(), -715_827_882);
    }

    #[test]
    fn test_second_transition_dropped_while_in_flight() {
        let config = CarouselConfig::default();
        let (mut animator, mut state, mut viewport) = setup(&config, 1);
        animator.animate(&mut state, &mut viewport, -600, true);
        let effect = animator.animate(&mut state, &mut viewport, -600, true);
        assert!(effect.is_none());
        assert_eq!(animator.target(), Some(-1200));
    }

    #[test]
    fn test_zero_delta_finishes_immediately() {
        let config = CarouselConfig::default();
        let (mut animator, mut state, mut viewport) = setup(&config, 2);
        let effect = animator.animate(&mut state, &mut viewport, 0, true);
        assert!(effect.is_none());
        assert!(!state.is_animating());
        assert_eq!(state.current_offset(), -1200);
    }

    proptest! {
        #[test]
        fn prop_transition_lands_image_aligned(
            width in 1u32..1200,
            count in 1u32..10,
            tick in 1u32..40,
            extra in 0u32..600,
            start in 1usize..10,
            left in proptest::bool::ANY
        ) {
            let config = CarouselConfig::new()
                .image_width(width)
                .image_count(count)
                .tick_interval_ms(tick)
                .transition_ms(tick + extra);
            let start = (start - 1) % config.count() + 1;
            let (mut animator, mut state, mut viewport) = setup(&config, start);
            let delta = if left { -config.width_px() } else { config.width_px() };
            let effect = animator.animate(&mut state, &mut viewport, delta, true);
            let frames = run(&mut animator, &mut state, &mut viewport, effect);

            prop_assert!(frames <= config.steps_per_transition() + 1);
            prop_assert!(!state.is_animating());
            let offset = state.current_offset();
            prop_assert_eq!(offset % config.width_px(), 0);
            prop_assert!(offset <= -config.width_px());
            prop_assert!(offset >= config.rest_offset(config.count()));
            prop_assert_eq!(viewport.offset(), offset);
        }
    }
}
