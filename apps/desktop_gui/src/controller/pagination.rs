//! Page arithmetic for the champions grid.

/// Fixed number of champions rendered per page.
pub const CHAMPS_PER_PAGE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Half-open index range `[(page-1)*per_page, page*per_page)`. Page 0 is
/// read as page 1.
pub fn page_bounds(page: usize, per_page: usize) -> (usize, usize) {
    let page = page.max(1);
    let end = page.saturating_mul(per_page);
    (end.saturating_sub(per_page), end)
}

/// The items on `page`. Pages past the end yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let (start, end) = page_bounds(page, per_page);
    let start = start.min(items.len());
    let end = end.min(items.len());
    &items[start..end]
}

/// Page buttons to render: both edges plus a window around the current page,
/// with gaps where pages are skipped.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<PageLink> {
    const LEFT_EDGE: usize = 2;
    const LEFT_CURRENT: usize = 2;
    const RIGHT_CURRENT: usize = 4;
    const RIGHT_EDGE: usize = 2;

    let last_page = total_pages;
    if last_page == 0 {
        return vec![];
    }
    let current_page = current_page.max(1);

    let mut links = Vec::new();

    let left_end = (1 + LEFT_EDGE).min(last_page + 1);
    links.extend((1..left_end).map(PageLink::Page));

    let mid_start = left_end.max(current_page.saturating_sub(LEFT_CURRENT));
    let mid_end = current_page
        .saturating_add(RIGHT_CURRENT + 1)
        .min(last_page + 1);

    if mid_start > left_end && mid_start < mid_end {
        links.push(PageLink::Gap);
    }
    links.extend((mid_start..mid_end).map(PageLink::Page));

    // An empty window (current page past the end) leaves the right edge
    // anchored to the left one.
    let shown_end = if mid_start < mid_end { mid_end } else { left_end };
    let right_start = shown_end.max(last_page.saturating_sub(RIGHT_EDGE) + 1);

    if right_start > shown_end {
        links.push(PageLink::Gap);
    }
    links.extend((right_start..=last_page).map(PageLink::Page));

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Gap, Page};

    #[test]
    fn counts_partial_last_page() {
        assert_eq!(page_count(0, CHAMPS_PER_PAGE), 0);
        assert_eq!(page_count(8, CHAMPS_PER_PAGE), 1);
        assert_eq!(page_count(10, CHAMPS_PER_PAGE), 2);
        assert_eq!(page_count(10, 0), 0);
    }

    #[test]
    fn slices_contiguous_pages() {
        let items: Vec<usize> = (1..=10).collect();
        assert_eq!(page_slice(&items, 1, 8), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(page_slice(&items, 2, 8), &[9, 10]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<usize> = (1..=10).collect();
        assert!(page_slice(&items, 3, 8).is_empty());
        assert!(page_slice(&items, usize::MAX, 8).is_empty());
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        let items: Vec<usize> = (1..=3).collect();
        assert_eq!(page_bounds(0, 8), (0, 8));
        assert_eq!(page_slice(&items, 0, 8), &[1, 2, 3]);
    }

    #[test]
    fn short_rosters_list_every_page() {
        assert!(page_links(0, 1).is_empty());
        assert_eq!(page_links(1, 1), vec![Page(1)]);
        assert_eq!(page_links(2, 1), vec![Page(1), Page(2)]);
        assert_eq!(
            page_links(5, 3),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn long_rosters_collapse_into_gaps() {
        assert_eq!(
            page_links(20, 1),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Gap,
                Page(19),
                Page(20)
            ]
        );
        assert_eq!(
            page_links(20, 10),
            vec![
                Page(1),
                Page(2),
                Gap,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Page(13),
                Page(14),
                Gap,
                Page(19),
                Page(20)
            ]
        );
    }

    #[test]
    fn huge_current_page_does_not_overflow() {
        assert_eq!(
            page_links(3, usize::MAX),
            vec![Page(1), Page(2), Page(3)]
        );
    }

    #[test]
    fn current_page_beyond_last_keeps_edges() {
        assert_eq!(
            page_links(6, 40),
            vec![Page(1), Page(2), Gap, Page(5), Page(6)]
        );
    }
}
