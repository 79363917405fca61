//! Scroll-linked process step highlighting

/// Tracks which process step (and matching image) is active
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepHighlighter {
    active: Option<String>,
}

impl StepHighlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A step scrolled into view. Returns true if the active step changed.
    pub fn activate(&mut self, step: &str) -> bool {
        if self.active.as_deref() == Some(step) {
            return false;
        }
        self.active = Some(step.to_string());
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether a step item or image tagged `data-step=step` should be active
    pub fn is_active(&self, step: &str) -> bool {
        self.active.as_deref() == Some(step)
    }
}
