//! Headless core of a seamless looping image carousel.
//!
//! This crate provides everything except rendering:
//! - Fixed constants: [`CarouselConfig`]
//! - Slot layout with duplicated end images: [`ExtendedStrip`]
//! - The stepped offset animator and its wrap correction: [`OffsetAnimator`]
//! - Indicator synchronisation: [`highlight`], [`Indicators`]
//! - Hover-aware auto-play: [`AutoplayScheduler`]
//! - The widget instance tying them together: [`Carousel`]
//!
//! Rendering and timing are capabilities supplied by the host through
//! [`Viewport`], [`Indicators`] and the [`Effect`] values returned by
//! [`Carousel::update`].
//!
//! # Examples
//!
//! ```
//! use carousel_core::{
//!     Carousel, CarouselConfig, CarouselMessage, Effect, MemoryIndicators, MemoryViewport,
//! };
//!
//! let mut carousel = Carousel::new(
//!     CarouselConfig::default(),
//!     MemoryViewport::new(),
//!     MemoryIndicators::new(5),
//! )?;
//!
//! let mut effect = carousel.update(CarouselMessage::Next);
//! while !effect.is_none() {
//!     effect = match effect {
//!         Effect::RequestFrame => carousel.update(CarouselMessage::Frame),
//!         Effect::ScheduleTick { .. } => carousel.update(CarouselMessage::Tick),
//!         _ => Effect::None,
//!     };
//! }
//! assert_eq!(carousel.current_index(), 2);
//! assert_eq!(carousel.offset(), -1200);
//! # Ok::<(), carousel_core::ConfigError>(())
//! ```

mod animator;
mod autoplay;
mod carousel;
mod config;
mod effect;
mod error;
mod indicator;
mod model;
mod strip;
mod viewport;

pub use animator::{OffsetAnimator, StepPhase};
pub use autoplay::{AutoplayScheduler, AutoplayState};
pub use carousel::Carousel;
pub use config::{CarouselConfig, MAX_DELAY_MS};
pub use effect::{CarouselMessage, Effect};
pub use error::ConfigError;
pub use indicator::{highlight, Indicators, MemoryIndicators};
pub use model::{CarouselState, Direction};
pub use strip::ExtendedStrip;
pub use viewport::{MemoryViewport, Viewport};
