//! Error types
//!
//! Settings validation and browser setup are the only fallible paths; the
//! simulation itself never fails.

use std::fmt;

/// Errors from loading settings or attaching to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// A settings value is out of its valid range
    InvalidSetting {
        /// Field name in `FieldSettings`
        name: &'static str,
        /// Offending value
        value: f32,
        /// Human readable constraint
        expected: &'static str,
    },
    /// Settings JSON could not be parsed
    Parse(String),
    /// No global `window` (not running in a browser)
    NoWindow,
    /// `window.document` is missing
    NoDocument,
    /// A required element is not on the page
    MissingElement(String),
    /// The canvas has no 2D rendering context
    NoContext,
    /// A JS call threw
    Js(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting {
                name,
                value,
                expected,
            } => write!(f, "invalid setting {name} = {value}: expected {expected}"),
            Self::Parse(msg) => write!(f, "failed to parse settings: {msg}"),
            Self::NoWindow => write!(f, "no global window"),
            Self::NoDocument => write!(f, "window has no document"),
            Self::MissingElement(selector) => write!(f, "element not found: {selector}"),
            Self::NoContext => write!(f, "canvas has no 2d context"),
            Self::Js(msg) => write!(f, "javascript error: {msg}"),
        }
    }
}

impl std::error::Error for FieldError {}

impl From<serde_json::Error> for FieldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FieldError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<FieldError> for wasm_bindgen::JsValue {
    fn from(err: FieldError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_setting() {
        let err = FieldError::InvalidSetting {
            name: "friction",
            value: 1.5,
            expected: "0 <= friction < 1",
        };
        assert_eq!(
            err.to_string(),
            "invalid setting friction = 1.5: expected 0 <= friction < 1"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err: FieldError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, FieldError::Parse(_)));
    }
}
