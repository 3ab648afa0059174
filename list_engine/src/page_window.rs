// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;

/// One slot in the page number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    Page(usize),
    /// One or more hidden pages.
    Gap,
}

impl Display for PageMarker {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PageMarker::Page(number) => write!(f, "{number}"),
            PageMarker::Gap => write!(f, "…"),
        }
    }
}

/// First page, last page, current page and its neighbours, and at most two gaps.
pub type PageWindow = SmallVec<[PageMarker; 8]>;

/// Decides which page numbers to expose as controls.
///
/// - `total <= 1`: nothing.
/// - Otherwise page `1` and page `total`, plus every `p` with
///   `max(2, current - 1) <= p <= min(total - 1, current + 1)`.
/// - Ascending, no duplicates, a [`PageMarker::Gap`] between two shown pages that are not
///   adjacent.
///
/// ```
/// use minicurso_list_engine::{PageMarker::{Gap, Page}, compute_visible_pages};
///
/// let it = compute_visible_pages(5, 10);
/// assert_eq!(it.as_slice(), &[Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]);
/// ```
#[must_use]
pub fn compute_visible_pages(current: usize, total: usize) -> PageWindow {
    let mut acc = PageWindow::new();
    if total <= 1 {
        return acc;
    }

    let window_start = current.saturating_sub(1).max(2);
    let window_end = current.saturating_add(1).min(total - 1);

    let push_page = |acc: &mut PageWindow, page: usize| {
        if let Some(PageMarker::Page(prev)) = acc.last().copied()
            && page - prev > 1
        {
            acc.push(PageMarker::Gap);
        }
        acc.push(PageMarker::Page(page));
    };

    push_page(&mut acc, 1);
    for page in window_start..=window_end {
        push_page(&mut acc, page);
    }
    push_page(&mut acc, total);

    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{PageMarker::{Gap, Page},
                *};

    #[test_case(5, 10, &[Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]; "middle")]
    #[test_case(1, 3, &[Page(1), Page(2), Page(3)]; "all adjacent")]
    #[test_case(1, 1, &[]; "single page")]
    #[test_case(1, 0, &[]; "no pages")]
    #[test_case(1, 2, &[Page(1), Page(2)]; "two pages")]
    #[test_case(1, 10, &[Page(1), Page(2), Gap, Page(10)]; "at start")]
    #[test_case(10, 10, &[Page(1), Gap, Page(9), Page(10)]; "at end")]
    #[test_case(3, 10, &[Page(1), Page(2), Page(3), Page(4), Gap, Page(10)]; "gap only on right")]
    #[test_case(999, 3, &[Page(1), Gap, Page(3)]; "current past the end")]
    fn test_compute_visible_pages(current: usize, total: usize, expected: &[PageMarker]) {
        assert_eq!(compute_visible_pages(current, total).as_slice(), expected);
    }

    #[test]
    fn test_compute_visible_pages_is_deterministic() {
        for total in 0..20 {
            for current in 1..=total.max(1) {
                assert_eq!(
                    compute_visible_pages(current, total),
                    compute_visible_pages(current, total)
                );
            }
        }
    }

    #[test]
    fn test_window_is_ascending_and_starts_and_ends_with_pages() {
        for total in 2..30 {
            for current in 1..=total {
                let it = compute_visible_pages(current, total);
                let pages: Vec<usize> = it
                    .iter()
                    .filter_map(|m| match m {
                        Page(p) => Some(*p),
                        Gap => None,
                    })
                    .collect();
                assert!(pages.windows(2).all(|w| w[0] < w[1]));
                assert_eq!(it.first(), Some(&Page(1)));
                assert_eq!(it.last(), Some(&Page(total)));
                assert!(pages.contains(&current));
            }
        }
    }
}
