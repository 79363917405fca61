//! Star rating widget state
//!
//! Hovering previews a rating, leaving the widget restores the clicked one.

pub const FILLED_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    max: u8,
    selected: u8,
    hover: Option<u8>,
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(5)
    }
}

impl StarRating {
    pub fn new(max: u8) -> Self {
        Self {
            max,
            selected: 0,
            hover: None,
        }
    }

    fn in_range(&self, rating: u8) -> bool {
        (1..=self.max).contains(&rating)
    }

    /// Commit a rating; out-of-range values are ignored
    pub fn click(&mut self, rating: u8) {
        if self.in_range(rating) {
            self.selected = rating;
            self.hover = None;
        }
    }

    pub fn hover(&mut self, rating: u8) {
        if self.in_range(rating) {
            self.hover = Some(rating);
        }
    }

    /// Pointer left the widget
    pub fn leave(&mut self) {
        self.hover = None;
    }

    /// Rating currently shown: the hovered one, else the selection
    pub fn displayed(&self) -> u8 {
        self.hover.unwrap_or(self.selected)
    }

    /// Committed rating, `None` until a star is clicked
    pub fn selected(&self) -> Option<u8> {
        (self.selected > 0).then_some(self.selected)
    }

    /// Whether star number `star` (1-based) is lit
    pub fn lit(&self, star: u8) -> bool {
        star <= self.displayed()
    }

    pub fn glyph(&self, star: u8) -> char {
        if self.lit(star) { FILLED_STAR } else { EMPTY_STAR }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(rating: &StarRating) -> String {
        (1..=5).map(|star| rating.glyph(star)).collect()
    }

    #[test]
    fn test_initially_empty() {
        let rating = StarRating::default();
        assert_eq!(rating.selected(), None);
        assert_eq!(glyphs(&rating), "☆☆☆☆☆");
    }

    #[test]
    fn test_hover_previews_then_leave_restores() {
        let mut rating = StarRating::default();
        rating.click(2);
        rating.hover(4);
        assert_eq!(rating.displayed(), 4);
        assert_eq!(glyphs(&rating), "★★★★☆");
        assert_eq!(rating.selected(), Some(2));

        rating.leave();
        assert_eq!(glyphs(&rating), "★★☆☆☆");
    }

    #[test]
    fn test_click_replaces_selection() {
        let mut rating = StarRating::default();
        rating.click(5);
        rating.click(1);
        assert_eq!(rating.selected(), Some(1));
        assert!(rating.lit(1));
        assert!(!rating.lit(2));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut rating = StarRating::default();
        rating.click(3);
        rating.click(0);
        rating.click(6);
        rating.hover(9);
        assert_eq!(rating.displayed(), 3);
        assert_eq!(rating.selected(), Some(3));
    }
}
