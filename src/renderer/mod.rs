//! Rendering module
//!
//! The field is drawn through the `Surface` trait: a 2D canvas in the
//! browser, a command recorder everywhere else.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod color;
pub mod frame;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use color::Rgba;
pub use frame::{FrameStats, render};
pub use surface::{DrawCommand, RecordingSurface, Surface};
