//! Carousel: a seamless looping image carousel for the browser.
//!
//! Re-exports the headless [`carousel_core`] API and adds the DOM binding.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { CarouselApp, set_log_level } from './carousel.js';
//!
//! async function main() {
//!     await init();
//!     set_log_level('debug');
//!     const carousel = new CarouselApp();
//!     // or: CarouselApp.with_config('{"image_count": 3}', '{"gallery": "strip"}')
//! }
//! ```

pub use carousel_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::CarouselApp;

pub use browser::{DomSelectors, MountError};
