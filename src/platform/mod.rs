//! Platform abstraction layer
//!
//! Browser side of the app (wasm32 only):
//! - DOM event listeners feeding the raw input sources
//! - Canvas 2D surface
//! - Error overlay shown when the tick loop stops

#[cfg(target_arch = "wasm32")]
pub mod web;
