//! Auto-play scheduler: advances the carousel on a periodic timer.
//!
//! Hovering the container cancels the timer outright. Leaving it starts a
//! fresh full-length interval; elapsed time from before the hover is lost.

use crate::effect::Effect;
use serde::{Deserialize, Serialize};

/// Auto-play state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AutoplayState {
    /// Timer armed, advancing every period
    #[default]
    Running,
    /// Pointer is over the container, timer cancelled
    Paused,
}

/// Running/Paused state machine for the auto-play timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayScheduler {
    state: AutoplayState,
    period_ms: u32,
}

impl AutoplayScheduler {
    /// Create a scheduler firing every `period_ms` once started.
    #[must_use]
    pub const fn new(period_ms: u32) -> Self {
        Self {
            state: AutoplayState::Running,
            period_ms,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> AutoplayState {
        self.state
    }

    /// Whether auto-play is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        matches!(self.state, AutoplayState::Paused)
    }

    /// Timer period in milliseconds.
    #[must_use]
    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Effect arming the timer for the initial Running state.
    #[must_use]
    pub const fn start(&self) -> Effect {
        match self.state {
            AutoplayState::Running => Effect::StartAutoplay {
                period_ms: self.period_ms,
            },
            AutoplayState::Paused => Effect::None,
        }
    }

    /// Pointer entered the container.
    pub fn pointer_enter(&mut self) -> Effect {
        match self.state {
            AutoplayState::Running => {
                log::debug!("auto-play paused");
                self.state = AutoplayState::Paused;
                Effect::CancelAutoplay
            }
            AutoplayState::Paused => Effect::None,
        }
    }

    /// Pointer left the container.
    pub fn pointer_leave(&mut self) -> Effect {
        match self.state {
            AutoplayState::Paused => {
                log::debug!("auto-play resumed, next advance in {}ms", self.period_ms);
                self.state = AutoplayState::Running;
                Effect::StartAutoplay {
                    period_ms: self.period_ms,
                }
            }
            AutoplayState::Running => Effect::None,
        }
    }
}
