//! Browser bindings for the carousel.
//!
//! The DOM-facing parts only build for `wasm32`; string handling and
//! selector configuration are cross-platform so they can be tested natively.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod logger;

// Cross-platform modules
pub mod error;
pub mod selectors;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub use app::CarouselApp;
#[cfg(target_arch = "wasm32")]
pub use dom::{DomIndicators, DomViewport};
pub use error::MountError;
pub use selectors::DomSelectors;
