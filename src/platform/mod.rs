//! Platform layer
//!
//! - `driver`: tick-then-render frame driver, shared by every host
//! - `web`: requestAnimationFrame loop and pointer/resize input (WASM)
//! - `page`: landing page DOM behaviours (WASM)

pub mod driver;
#[cfg(target_arch = "wasm32")]
pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use driver::FieldDriver;
