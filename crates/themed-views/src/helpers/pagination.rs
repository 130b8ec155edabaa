//! Google-style pagination window.

use serde::Serialize;

/// Pages shown on each side of the current page.
const RADIUS: i64 = 4;

/// Inclusive range of page links to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub start_page: i64,
    pub end_page: i64,
}

impl PageWindow {
    /// Whether a "first page" link is needed before the window.
    pub fn shows_first(&self) -> bool {
        self.start_page > 1
    }

    /// Whether a "last page" link is needed after the window.
    pub fn shows_last(&self, total_page: i64) -> bool {
        self.end_page < total_page
    }

    pub fn pages(&self) -> impl Iterator<Item = i64> {
        self.start_page..=self.end_page
    }
}

/// Window of up to nine page links centred on `current_page`.
///
/// Near the start the window is shifted right so it still spans nine pages;
/// it is then clamped to `total_page`. Arguments come from templates, so the
/// arithmetic saturates instead of overflowing.
pub fn pagination(current_page: i64, total_page: i64) -> PageWindow {
    let mut start_page = current_page.saturating_sub(RADIUS);
    let mut end_page = current_page.saturating_add(RADIUS);

    if start_page <= 0 {
        // Shifting the window right by `RADIUS + 1 - current_page` always ends it here.
        start_page = 1;
        end_page = 2 * RADIUS + 1;
    }

    if end_page > total_page {
        end_page = total_page;
    }

    PageWindow {
        start_page,
        end_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_spans_nine() {
        let w = pagination(1, 20);
        assert_eq!((w.start_page, w.end_page), (1, 9));
        assert!(!w.shows_first());
        assert!(w.shows_last(20));
    }

    #[test]
    fn test_middle_page_is_centred() {
        let w = pagination(10, 20);
        assert_eq!((w.start_page, w.end_page), (6, 14));
        assert_eq!(w.pages().count(), 9);
    }

    #[test]
    fn test_clamped_to_total() {
        let w = pagination(19, 20);
        assert_eq!((w.start_page, w.end_page), (15, 20));
        assert!(!w.shows_last(20));
    }

    #[test]
    fn test_few_pages() {
        let w = pagination(2, 3);
        assert_eq!((w.start_page, w.end_page), (1, 3));
    }

    #[test]
    fn test_edge_of_shift() {
        // current - 4 == 1 keeps the plain window.
        let w = pagination(5, 50);
        assert_eq!((w.start_page, w.end_page), (1, 9));
        let w = pagination(4, 50);
        assert_eq!((w.start_page, w.end_page), (1, 9));
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        let w = pagination(i64::MAX, 10);
        assert_eq!((w.start_page, w.end_page), (i64::MAX - RADIUS, 10));
        assert_eq!(w.pages().count(), 0);

        let w = pagination(i64::MIN, 10);
        assert_eq!((w.start_page, w.end_page), (1, 9));

        let w = pagination(i64::MAX, i64::MAX);
        assert_eq!((w.start_page, w.end_page), (i64::MAX - RADIUS, i64::MAX));
    }

    #[test]
    fn test_non_positive_current_page() {
        assert_eq!(pagination(0, 20), PageWindow { start_page: 1, end_page: 9 });
        assert_eq!(pagination(-3, 20), PageWindow { start_page: 1, end_page: 9 });
        assert_eq!(pagination(0, 3), PageWindow { start_page: 1, end_page: 3 });
    }
}
