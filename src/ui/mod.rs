//! Landing page behaviour
//!
//! DOM-free state for the page widgets. `platform::page` binds them to the
//! document in the browser.

pub mod anchor;
pub mod nav;
pub mod rating;
pub mod steps;

pub use anchor::smooth_scroll_target;
pub use nav::NavBar;
pub use rating::StarRating;
pub use steps::StepHighlighter;
