//! Particle Field - interactive landing page background
//!
//! Core modules:
//! - `sim`: Deterministic particle simulation (springs, pointer attraction, connections)
//! - `renderer`: Draw-call surface abstraction and frame rendering
//! - `settings`: Tunable constants, loaded from JSON
//! - `ui`: Page behaviour state (navigation, star rating, process steps, anchors)
//! - `platform`: Frame driver and browser bindings

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::FieldError;
pub use settings::FieldSettings;

/// Default configuration constants
pub mod consts {
    /// Viewports narrower than this get the mobile particle count
    pub const MOBILE_BREAKPOINT: f32 = 768.0;
    pub const MOBILE_PARTICLE_COUNT: usize = 60;
    pub const DESKTOP_PARTICLE_COUNT: usize = 120;
    /// Upper bound for either count; connections are checked pairwise
    pub const MAX_PARTICLE_COUNT: usize = 120;

    /// Max distance at which two particles get a connecting line
    pub const CONNECTION_DISTANCE: f32 = 140.0;
    /// Max pointer distance that still pulls particles
    pub const INTERACTION_RADIUS: f32 = 120.0;
    pub const INTERACTION_STRENGTH: f32 = 1.0;

    /// Fraction of origin displacement added to velocity per frame
    pub const SPRING: f32 = 0.05;
    /// Per-frame velocity decay (heavy, for a static feel)
    pub const FRICTION: f32 = 0.85;

    /// Particle radius range [min, max)
    pub const RADIUS_MIN: f32 = 1.0;
    pub const RADIUS_MAX: f32 = 3.0;

    /// Connection line alpha at distance zero
    pub const LINE_ALPHA: f32 = 0.4;
    pub const LINE_WIDTH: f32 = 0.5;

    /// Page scroll offset past which the navbar is marked as scrolled
    pub const SCROLL_THRESHOLD: f64 = 100.0;
}
