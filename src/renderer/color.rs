//! Colors for canvas drawing

use serde::{Deserialize, Serialize};

/// 8-bit RGB with a float alpha, as CSS `rgba()` takes it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha (clamped to 0-1)
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS color string, e.g. `rgba(139, 92, 246, 0.6)`
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_string() {
        assert_eq!(Rgba::new(139, 92, 246, 0.6).css(), "rgba(139, 92, 246, 0.6)");
    }

    #[test]
    fn test_with_alpha_clamps() {
        let c = Rgba::new(1, 2, 3, 0.5);
        assert_eq!(c.with_alpha(0.25).a, 0.25);
        assert_eq!(c.with_alpha(2.0).a, 1.0);
        assert_eq!(c.with_alpha(-1.0).a, 0.0);
        assert_eq!(c.with_alpha(0.25).r, 1);
    }
}
