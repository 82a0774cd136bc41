//! WASM bindings for podcastr-playback
//!
//! This module provides WebAssembly bindings for the PlayerController,
//! so the browser rendering layer can drive it directly.

#[cfg(feature = "wasm")]
pub mod controller;

#[cfg(feature = "wasm")]
pub use controller::WasmPlayerController;
