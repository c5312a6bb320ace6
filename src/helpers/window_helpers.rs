/// Up to this many pages every page gets a link.
pub const DIRECT_DISPLAY_LIMIT: u64 = 8;

/// Pages shown on each side of the current page once the window kicks in.
pub const WINDOW_RADIUS: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEntry {
    Page(u64),
    Ellipsis,
}

/// Page numbers (and elided ranges) to display for `current` out of `total_pages`.
///
/// `current` is not clamped against `total_pages`; a page past the end still yields a
/// window centred on it.
pub fn visible_pages(total_pages: u64, current: u64) -> Vec<WindowEntry> {
    if total_pages <= DIRECT_DISPLAY_LIMIT {
        return (1..=total_pages).map(WindowEntry::Page).collect();
    }

    let low = current.saturating_sub(WINDOW_RADIUS).max(1).min(current);
    let high = current
        .saturating_add(WINDOW_RADIUS)
        .min(total_pages)
        .max(current);

    let mut entries = Vec::with_capacity((high - low) as usize + 5);

    if low > 2 {
        entries.push(WindowEntry::Page(1));
        entries.push(WindowEntry::Ellipsis);
    } else if low == 2 {
        entries.push(WindowEntry::Page(1));
    }

    entries.extend((low..=high).map(WindowEntry::Page));

    // The trailing check only looks for a gap wider than two pages.
    if high < total_pages - 2 {
        entries.push(WindowEntry::Ellipsis);
        entries.push(WindowEntry::Page(total_pages));
    } else if high == 2 {
        entries.push(WindowEntry::Page(total_pages));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use WindowEntry::{Ellipsis, Page};

    fn pages(range: std::ops::RangeInclusive<u64>) -> Vec<WindowEntry> {
        range.map(Page).collect()
    }

    #[test]
    fn test_small_totals_show_every_page() {
        assert_eq!(visible_pages(8, 5), pages(1..=8));
        assert_eq!(visible_pages(2, 1), pages(1..=2));
        assert_eq!(visible_pages(1, 1), pages(1..=1));
        assert!(visible_pages(0, 1).is_empty());
    }

    #[test]
    fn test_nine_pages_from_the_middle() {
        assert_eq!(visible_pages(9, 5), pages(1..=9));
    }

    #[test]
    fn test_trailing_ellipsis_near_start() {
        let mut expected = pages(1..=9);
        expected.extend([Ellipsis, Page(21)]);

        assert_eq!(visible_pages(21, 5), expected);
    }

    #[test]
    fn test_both_ellipses_around_current() {
        let mut expected = vec![Page(1), Ellipsis];
        expected.extend(pages(7..=15));
        expected.extend([Ellipsis, Page(21)]);

        assert_eq!(visible_pages(21, 11), expected);
    }

    #[test]
    fn test_first_page_joins_without_ellipsis_when_adjacent() {
        let mut expected = vec![Page(1)];
        expected.extend(pages(2..=10));
        expected.extend([Ellipsis, Page(21)]);

        assert_eq!(visible_pages(21, 6), expected);
    }

    #[test]
    fn test_window_at_the_end() {
        let mut expected = vec![Page(1), Ellipsis];
        expected.extend(pages(17..=21));

        assert_eq!(visible_pages(21, 21), expected);
    }

    #[test]
    fn test_window_two_short_of_the_end_adds_nothing() {
        let mut expected = vec![Page(1), Ellipsis];
        expected.extend(pages(11..=19));

        assert_eq!(visible_pages(21, 15), expected);
    }

    #[test]
    fn test_current_beyond_total_is_not_clamped() {
        let mut expected = vec![Page(1), Ellipsis];
        expected.extend(pages(26..=30));

        assert_eq!(visible_pages(21, 30), expected);
    }

    #[test]
    fn test_current_zero() {
        assert_eq!(visible_pages(21, 0)[..5], pages(0..=4)[..]);
        assert_eq!(visible_pages(21, 0).last(), Some(&Page(21)));
    }
}
