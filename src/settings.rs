//! Field settings
//!
//! Every tunable of the simulation and rendering. Defaults match the shipped
//! landing page; a page can override any subset through a JSON blob in the
//! canvas' `data-field-settings` attribute.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::FieldError;
use crate::renderer::Rgba;

/// Particle field settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    // === Particle count ===
    /// Viewport width below which the mobile count is used
    pub mobile_breakpoint: f32,
    pub mobile_particle_count: usize,
    pub desktop_particle_count: usize,

    // === Physics ===
    /// Pull toward origin per frame
    pub spring: f32,
    /// Velocity multiplier per frame, in [0, 1)
    pub friction: f32,
    /// Pointer attraction radius
    pub interaction_radius: f32,
    /// Pointer attraction strength at distance zero
    pub interaction_strength: f32,
    pub radius_min: f32,
    pub radius_max: f32,

    // === Rendering ===
    pub connection_distance: f32,
    pub particle_color: Rgba,
    /// Line color; alpha is replaced per connection
    pub line_color: Rgba,
    /// Line alpha for two coincident particles
    pub line_alpha: f32,
    pub line_width: f32,

    // === Page ===
    pub scroll_threshold: f64,
    /// Anchors that keep the browser's default jump
    pub excluded_anchors: Vec<String>,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            mobile_breakpoint: MOBILE_BREAKPOINT,
            mobile_particle_count: MOBILE_PARTICLE_COUNT,
            desktop_particle_count: DESKTOP_PARTICLE_COUNT,

            spring: SPRING,
            friction: FRICTION,
            interaction_radius: INTERACTION_RADIUS,
            interaction_strength: INTERACTION_STRENGTH,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,

            connection_distance: CONNECTION_DISTANCE,
            particle_color: Rgba::new(139, 92, 246, 0.6),
            line_color: Rgba::new(139, 92, 246, 1.0),
            line_alpha: LINE_ALPHA,
            line_width: LINE_WIDTH,

            scroll_threshold: SCROLL_THRESHOLD,
            excluded_anchors: vec!["#pilot".to_string()],
        }
    }
}

impl FieldSettings {
    /// Number of particles for a viewport of the given width
    pub fn particle_count(&self, viewport_width: f32) -> usize {
        if viewport_width < self.mobile_breakpoint {
            self.mobile_particle_count
        } else {
            self.desktop_particle_count
        }
    }

    /// Check every numeric setting is in range.
    ///
    /// A friction of 1 or more never settles, and a non-positive connection
    /// distance would divide by zero when fading lines. The update is a
    /// damped spring stepped once per frame, which only stays bounded while
    /// `spring * friction < 2 * (1 + friction)`.
    pub fn validate(&self) -> Result<(), FieldError> {
        let check = |ok: bool, name, value, expected| {
            if ok {
                Ok(())
            } else {
                Err(FieldError::InvalidSetting {
                    name,
                    value,
                    expected,
                })
            }
        };

        check(
            (0.0..1.0).contains(&self.friction),
            "friction",
            self.friction,
            "0 <= friction < 1",
        )?;
        check(self.spring > 0.0, "spring", self.spring, "spring > 0")?;
        check(
            self.spring * self.friction < 2.0 * (1.0 + self.friction),
            "spring",
            self.spring,
            "spring * friction < 2 * (1 + friction)",
        )?;
        check(
            self.mobile_particle_count <= MAX_PARTICLE_COUNT,
            "mobile_particle_count",
            self.mobile_particle_count as f32,
            "at most MAX_PARTICLE_COUNT",
        )?;
        check(
            self.desktop_particle_count <= MAX_PARTICLE_COUNT,
            "desktop_particle_count",
            self.desktop_particle_count as f32,
            "at most MAX_PARTICLE_COUNT",
        )?;
        check(
            self.interaction_radius > 0.0,
            "interaction_radius",
            self.interaction_radius,
            "interaction_radius > 0",
        )?;
        check(
            self.interaction_strength.is_finite(),
            "interaction_strength",
            self.interaction_strength,
            "a finite number",
        )?;
        check(
            self.connection_distance > 0.0,
            "connection_distance",
            self.connection_distance,
            "connection_distance > 0",
        )?;
        check(
            self.radius_min >= 0.0,
            "radius_min",
            self.radius_min,
            "radius_min >= 0",
        )?;
        check(
            self.radius_max > self.radius_min,
            "radius_max",
            self.radius_max,
            "radius_max > radius_min",
        )?;
        check(
            (0.0..=1.0).contains(&self.line_alpha),
            "line_alpha",
            self.line_alpha,
            "0 <= line_alpha <= 1",
        )?;
        check(
            self.line_width > 0.0,
            "line_width",
            self.line_width,
            "line_width > 0",
        )?;
        Ok(())
    }

    /// Parse settings from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Attribute holding the JSON overrides
    pub const DATA_ATTRIBUTE: &'static str = "data-field-settings";

    /// Load settings from an element's data attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load_from(element: &web_sys::Element) -> Self {
        let Some(json) = element.get_attribute(Self::DATA_ATTRIBUTE) else {
            log::info!("Using default field settings");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded field settings from {}", Self::DATA_ATTRIBUTE);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring field settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read {} ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded field settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }
}
