//! Pagination math and the compact control model.

use std::ops::Range;

/// Rows per page. Fixed by the dashboard layout.
pub const ITEMS_PER_PAGE: usize = 50;

/// Number of pages needed for `len` rows, never less than one.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(ITEMS_PER_PAGE).max(1)
}

/// Index range of `page` (1-based) within a list of `len` rows.
pub fn page_bounds(page: usize, len: usize) -> Range<usize> {
    let start = (page.saturating_sub(1) * ITEMS_PER_PAGE).min(len);
    let end = (page * ITEMS_PER_PAGE).min(len);
    start..end
}

/// Slice of `rows` covered by `page`.
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    &rows[page_bounds(page, rows.len())]
}

/// One affordance in the pagination control strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageControl {
    First { enabled: bool },
    Prev { enabled: bool },
    Page { number: usize, current: bool },
    Ellipsis,
    Next { enabled: bool },
    Last { enabled: bool },
}

/// Derive the compact control strip for `current` of `total` pages.
///
/// Empty when there is a single page. Otherwise: first/prev and
/// next/last are always present, disabled at their boundary; page 1 gets
/// an explicit link once the current page is beyond 2, with an ellipsis
/// only when the gap is wider than one page; the neighborhood
/// `{current - 1, current, current + 1}` is shown restricted to the open
/// interval `(1, total)`; the trailing side mirrors the leading one.
/// The strip never exceeds a handful of affordances regardless of
/// `total`.
pub fn controls(current: usize, total: usize) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }

    let mut items = Vec::with_capacity(11);
    items.push(PageControl::First {
        enabled: current > 1,
    });
    items.push(PageControl::Prev {
        enabled: current > 1,
    });

    if current > 2 {
        items.push(PageControl::Page {
            number: 1,
            current: false,
        });
    }
    if current > 3 {
        items.push(PageControl::Ellipsis);
    }

    for number in current.saturating_sub(1)..=current + 1 {
        if number > 1 && number < total {
            items.push(PageControl::Page {
                number,
                current: number == current,
            });
        }
    }

    if current + 2 < total {
        items.push(PageControl::Ellipsis);
    }
    if current + 1 < total {
        items.push(PageControl::Page {
            number: total,
            current: false,
        });
    }

    items.push(PageControl::Next {
        enabled: current < total,
    });
    items.push(PageControl::Last {
        enabled: current < total,
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageControl]) -> Vec<usize> {
        items
            .iter()
            .filter_map(|c| match c {
                PageControl::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(50), 1);
        assert_eq!(total_pages(51), 2);
        assert_eq!(total_pages(237), 5);
        assert_eq!(total_pages(500), 10);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(1, 237), 0..50);
        assert_eq!(page_bounds(3, 237), 100..150);
        assert_eq!(page_bounds(5, 237), 200..237);
        // Clamped, not panicking, for a page past the end.
        assert_eq!(page_bounds(9, 237), 237..237);
    }

    #[test]
    fn test_page_slice_lengths() {
        let rows: Vec<u32> = (0..237).collect();
        for page in 1..=5 {
            let slice = page_slice(&rows, page);
            assert!(slice.len() <= ITEMS_PER_PAGE);
        }
        assert_eq!(page_slice(&rows, 5).len(), 37);
        assert_eq!(page_slice(&rows, 3)[0], 100);
        assert_eq!(page_slice(&rows, 3)[49], 149);
    }

    #[test]
    fn test_controls_single_page_is_empty() {
        assert!(controls(1, 1).is_empty());
        assert!(controls(1, 0).is_empty());
    }

    #[test]
    fn test_controls_first_page() {
        let items = controls(1, 10);
        assert_eq!(items[0], PageControl::First { enabled: false });
        assert_eq!(items[1], PageControl::Prev { enabled: false });
        assert_eq!(pages(&items), vec![2, 10]);
        assert_eq!(
            items.last(),
            Some(&PageControl::Last { enabled: true })
        );
    }

    #[test]
    fn test_controls_last_page() {
        let items = controls(10, 10);
        assert_eq!(pages(&items), vec![1, 9]);
        assert_eq!(items.last(), Some(&PageControl::Last { enabled: false }));
        assert_eq!(
            items[items.len() - 2],
            PageControl::Next { enabled: false }
        );
    }

    #[test]
    fn test_controls_middle_page() {
        let items = controls(5, 10);
        assert_eq!(pages(&items), vec![1, 4, 5, 6, 10]);
        assert_eq!(
            items
                .iter()
                .filter(|c| matches!(c, PageControl::Ellipsis))
                .count(),
            2
        );
    }

    #[test]
    fn test_no_ellipsis_for_gap_of_one() {
        // Current page 3: page 1 link then neighborhood starting at 2.
        let items = controls(3, 10);
        assert_eq!(pages(&items), vec![1, 2, 3, 4, 10]);
        let leading_ellipsis = items
            .iter()
            .position(|c| matches!(c, PageControl::Ellipsis));
        // Only the trailing gap (4 -> 10) gets an ellipsis.
        assert_eq!(
            items
                .iter()
                .filter(|c| matches!(c, PageControl::Ellipsis))
                .count(),
            1
        );
        assert!(leading_ellipsis.unwrap() > 4);

        // Mirrored on the trailing side: current page total - 2.
        let items = controls(8, 10);
        assert_eq!(pages(&items), vec![1, 7, 8, 9, 10]);
        assert_eq!(
            items
                .iter()
                .filter(|c| matches!(c, PageControl::Ellipsis))
                .count(),
            1
        );
    }

    #[test]
    fn test_no_ellipsis_adjacent_to_its_neighbor() {
        // Property: an ellipsis always hides at least one page number;
        // it never sits between two consecutive page links.
        for total in 2..=25 {
            for current in 1..=total {
                let items = controls(current, total);
                for i in 0..items.len() {
                    if !matches!(items[i], PageControl::Ellipsis) {
                        continue;
                    }
                    let before = items[..i].iter().rev().find_map(|c| match c {
                        PageControl::Page { number, .. } => Some(*number),
                        _ => None,
                    });
                    let after = items[i..].iter().find_map(|c| match c {
                        PageControl::Page { number, .. } => Some(*number),
                        _ => None,
                    });
                    if let (Some(a), Some(b)) = (before, after) {
                        assert!(
                            b > a + 1,
                            "redundant ellipsis between {} and {} (current {}, total {})",
                            a,
                            b,
                            current,
                            total
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_controls_bounded_size() {
        for total in 2..=200 {
            for current in 1..=total {
                assert!(controls(current, total).len() <= 11);
            }
        }
    }
}
