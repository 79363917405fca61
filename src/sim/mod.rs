//! Particle field simulation
//!
//! Pure and deterministic given a seeded RNG:
//! - One tick per display frame, constants are per-frame
//! - Pointer passed in per tick, never global
//! - No rendering or platform dependencies

pub mod connect;
pub mod state;
pub mod tick;

pub use connect::{Connection, connections, link_alpha};
pub use state::{Particle, ParticleField};
pub use tick::{TickInput, pointer_force, tick};
