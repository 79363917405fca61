//! In-page anchor handling

/// Selector to smooth-scroll to for a link's `href`.
///
/// Only `#id` fragments qualify. The bare `#` and anchors listed in
/// `excluded` keep the browser's default behaviour.
pub fn smooth_scroll_target<'a, S: AsRef<str>>(href: &'a str, excluded: &[S]) -> Option<&'a str> {
    if !href.starts_with('#') || href == "#" {
        return None;
    }
    if excluded.iter().any(|e| e.as_ref() == href) {
        return None;
    }
    Some(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXCLUDED: [&str; 1] = ["#pilot"];

    #[test]
    fn test_fragment_links() {
        assert_eq!(smooth_scroll_target("#features", &EXCLUDED), Some("#features"));
        assert_eq!(smooth_scroll_target("#", &EXCLUDED), None);
        assert_eq!(smooth_scroll_target("#pilot", &EXCLUDED), None);
    }

    #[test]
    fn test_non_fragment_links() {
        assert_eq!(smooth_scroll_target("/about", &EXCLUDED), None);
        assert_eq!(smooth_scroll_target("https://example.com/#x", &EXCLUDED), None);
        assert_eq!(smooth_scroll_target("", &EXCLUDED), None);
    }

    #[test]
    fn test_owned_exclusions() {
        let excluded = vec!["#contact".to_string()];
        assert_eq!(smooth_scroll_target("#contact", &excluded), None);
        assert_eq!(smooth_scroll_target("#pilot", &excluded), Some("#pilot"));
    }
}
