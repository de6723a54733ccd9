//! Messages into the carousel and the effects it asks its host to perform.
//!
//! The carousel is driven Elm-style: `update(message) -> effect`. A host
//! (browser binding, deterministic test clock) executes the effect and feeds
//! the resulting callback back in as another message.

use serde::{Deserialize, Serialize};

/// Inputs accepted by [`Carousel::update`](crate::Carousel::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselMessage {
    /// The "next" trigger was clicked
    Next,
    /// The "previous" trigger was clicked
    Previous,
    /// Indicator with the given 1-based index was clicked
    Select(usize),
    /// Pointer entered the container
    PointerEnter,
    /// Pointer left the container
    PointerLeave,
    /// The auto-play interval elapsed
    AutoplayElapsed,
    /// A requested animation frame is being painted
    Frame,
    /// A scheduled step tick fired
    Tick,
}

/// Side effects the host must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Effect {
    /// Nothing to schedule
    #[default]
    None,
    /// Deliver [`CarouselMessage::Frame`] on the next paint opportunity
    RequestFrame,
    /// Deliver [`CarouselMessage::Tick`] after `delay_ms`
    ScheduleTick {
        /// Delay before the tick
        delay_ms: u32,
    },
    /// Start a periodic timer delivering [`CarouselMessage::AutoplayElapsed`]
    StartAutoplay {
        /// Timer period
        period_ms: u32,
    },
    /// Cancel the periodic auto-play timer
    CancelAutoplay,
}

impl Effect {
    /// Check if this is the none effect.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
