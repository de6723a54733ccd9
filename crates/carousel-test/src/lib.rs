//! Testing harness for carousel hosts.
//!
//! Replaces the browser's animation-frame, timeout and interval primitives
//! with a deterministic virtual clock so timing scenarios can be asserted
//! exactly.

#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod clock;
pub mod fixture;
pub mod harness;

pub use clock::IntervalTimer;
pub use fixture::{RecordingIndicators, RecordingViewport};
pub use harness::{Harness, TestCarousel};
