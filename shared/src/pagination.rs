//! Listing pagination: page math, the numbered-control layout and the two
//! ways a page of records is obtained (client-side slice or server page).

use crate::models::Paginated;

/// Neighbours shown on each side of the current page.
pub const DEFAULT_WINDOW_RADIUS: usize = 1;

/// Which side of the window an ellipsis stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Between page 1 and the window.
    Left,
    /// Between the window and the last page.
    Right,
}

/// One entry of the numbered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A clickable page number.
    Page(usize),
    /// A gap marker.
    Ellipsis(Side),
}

/// `ceil(total / per_page)`. An empty listing has zero pages.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    total.div_ceil(per_page)
}

/// Clamp a requested page into `[1, total_pages]`. With no pages at all the
/// result is 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// Read the `page` query parameter. Missing, non-numeric and zero values
/// all mean page 1.
pub fn parse_page_param(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Layout of the numbered control. Empty when there is at most one page.
///
/// Page 1 and `total` are always present; the window holds `current` and up
/// to `radius` neighbours on each side, and an ellipsis marks any gap between
/// the window and either anchor.
pub fn visible_slots(current: usize, total: usize, radius: usize) -> Vec<PageSlot> {
    if total <= 1 {
        return Vec::new();
    }

    let current = clamp_page(current, total);
    let start = current.saturating_sub(radius).max(2);
    let end = current.saturating_add(radius).min(total - 1);

    let mut slots = vec![PageSlot::Page(1)];
    if start > 2 && start <= end {
        slots.push(PageSlot::Ellipsis(Side::Left));
    }
    if start <= end {
        slots.extend((start..=end).map(PageSlot::Page));
    }
    if end < total - 1 && start <= end {
        slots.push(PageSlot::Ellipsis(Side::Right));
    }
    slots.push(PageSlot::Page(total));
    slots
}

/// A navigation request coming from the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    /// The "previous" arrow.
    Previous,
    /// The "next" arrow.
    Next,
    /// A page number.
    Goto(usize),
}

/// Target page for `nav`, or `None` when the move is disabled (previous on
/// the first page, next on the last) or lands on the page already shown.
pub fn resolve_navigation(current: usize, total: usize, nav: PageNav) -> Option<usize> {
    if total == 0 {
        return None;
    }
    let current = clamp_page(current, total);
    let target = match nav {
        PageNav::Previous if current > 1 => current - 1,
        PageNav::Next if current < total => current + 1,
        PageNav::Goto(page) => clamp_page(page, total),
        _ => return None,
    };
    (target != current).then_some(target)
}

/// The records to render for one page plus the state of the control.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    /// Records on the page.
    pub items: &'a [T],
    /// Page actually shown.
    pub current_page: usize,
    /// Page count for the control.
    pub total_pages: usize,
}

impl<'a, T> PageView<'a, T> {
    /// Server-paginated listing: the server already sliced, so its items are
    /// rendered as is. The page number is clamped for the control only.
    pub fn from_server(page: &'a Paginated<T>) -> Self {
        let total_pages = page.total_pages();
        PageView {
            items: &page.items,
            current_page: clamp_page(page.page, total_pages),
            total_pages,
        }
    }

    /// Whether the numbered control should be drawn.
    pub fn shows_control(&self) -> bool {
        self.total_pages > 1
    }
}

/// Client-paginated listing: clamp `page` and slice
/// `items[(page-1)*per_page .. page*per_page]`.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> PageView<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = total_pages(items.len(), per_page);
    let current_page = clamp_page(page, total_pages);
    let start = (current_page - 1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    PageView {
        items: &items[start..end],
        current_page,
        total_pages,
    }
}

/// Page a server-paginated view should redirect to, if the requested one is
/// past the end of a non-empty listing.
pub fn server_redirect_target(requested: usize, total_pages: usize) -> Option<usize> {
    (total_pages > 0 && requested > total_pages).then_some(total_pages)
}

#[cfg(test)]
mod tests {
    use super::{PageSlot::*, Side::*, *};

    fn pages(slots: &[PageSlot]) -> Vec<usize> {
        slots
            .iter()
            .filter_map(|slot| match slot {
                Page(n) => Some(*n),
                Ellipsis(_) => None,
            })
            .collect()
    }

    #[test]
    fn no_control_for_single_or_empty_listing() {
        assert!(visible_slots(1, 0, 1).is_empty());
        assert!(visible_slots(1, 1, 1).is_empty());
        assert_eq!(visible_slots(1, 2, 1), vec![Page(1), Page(2)]);
    }

    #[test]
    fn layout_matches_window_rules() {
        assert_eq!(visible_slots(1, 10, 1), vec![Page(1), Page(2), Ellipsis(Right), Page(10)]);
        assert_eq!(
            visible_slots(5, 10, 1),
            vec![Page(1), Ellipsis(Left), Page(4), Page(5), Page(6), Ellipsis(Right), Page(10)]
        );
        assert_eq!(visible_slots(3, 10, 1), vec![
            Page(1),
            Page(2),
            Page(3),
            Page(4),
            Ellipsis(Right),
            Page(10)
        ]);
        assert_eq!(visible_slots(10, 10, 1), vec![Page(1), Ellipsis(Left), Page(9), Page(10)]);
        assert_eq!(visible_slots(8, 10, 1), vec![
            Page(1),
            Ellipsis(Left),
            Page(7),
            Page(8),
            Page(9),
            Page(10)
        ]);
    }

    #[test]
    fn anchors_always_present_and_ellipsis_only_on_gaps() {
        for total in 2..=15 {
            for current in 1..=total {
                for radius in 1..=2 {
                    let slots = visible_slots(current, total, radius);
                    let numbers = pages(&slots);
                    assert_eq!(numbers.first(), Some(&1));
                    assert_eq!(numbers.last(), Some(&total));
                    assert!(numbers.contains(&current));
                    assert!(numbers.windows(2).all(|w| w[0] < w[1]));

                    for (idx, slot) in slots.iter().enumerate() {
                        if let Ellipsis(_) = slot {
                            let before = match slots[idx - 1] {
                                Page(n) => n,
                                Ellipsis(_) => panic!("adjacent ellipses"),
                            };
                            let after = match slots[idx + 1] {
                                Page(n) => n,
                                Ellipsis(_) => panic!("adjacent ellipses"),
                            };
                            assert!(after > before + 1, "ellipsis without a gap");
                        }
                    }
                    for w in slots.windows(2) {
                        if let (Page(a), Page(b)) = (w[0], w[1]) {
                            assert_eq!(b, a + 1, "gap without an ellipsis");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn wider_radius_grows_window() {
        assert_eq!(pages(&visible_slots(6, 12, 2)), vec![1, 4, 5, 6, 7, 8, 12]);
    }

    #[test]
    fn out_of_range_current_is_clamped_for_layout() {
        assert_eq!(visible_slots(99, 4, 1), visible_slots(4, 4, 1));
        assert_eq!(visible_slots(0, 4, 1), visible_slots(1, 4, 1));
    }

    #[test]
    fn client_slicing_clamps_requested_page() {
        let items: Vec<u32> = (1..=20).collect();
        let view = paginate(&items, 1, 9);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.items, &items[0..9]);

        let last = paginate(&items, 3, 9);
        assert_eq!(last.items, &[19, 20]);

        let beyond = paginate(&items, 7, 9);
        assert_eq!(beyond.current_page, 3);
        assert_eq!(beyond.items, &[19, 20]);

        let before = paginate(&items, 0, 9);
        assert_eq!(before.current_page, 1);
    }

    #[test]
    fn client_slicing_of_empty_collection() {
        let items: Vec<u32> = Vec::new();
        let view = paginate(&items, 4, 9);
        assert!(view.items.is_empty());
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 0);
        assert!(!view.shows_control());
    }

    #[test]
    fn server_view_renders_items_unsliced() {
        let page = Paginated {
            page: 2,
            limit: 12,
            total: 30,
            items: vec!["a", "b", "c"],
        };
        let view = PageView::from_server(&page);
        assert_eq!(view.items, &["a", "b", "c"]);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.current_page, 2);
        assert_eq!(server_redirect_target(2, 3), None);
        assert_eq!(server_redirect_target(9, 3), Some(3));
        assert_eq!(server_redirect_target(9, 0), None);
    }

    #[test]
    fn page_param_parsing() {
        assert_eq!(parse_page_param(None), 1);
        assert_eq!(parse_page_param(Some("3")), 3);
        assert_eq!(parse_page_param(Some("0")), 1);
        assert_eq!(parse_page_param(Some("abc")), 1);
        assert_eq!(parse_page_param(Some("-2")), 1);
    }

    #[test]
    fn navigation_is_disabled_at_edges_and_idempotent() {
        assert_eq!(resolve_navigation(1, 5, PageNav::Previous), None);
        assert_eq!(resolve_navigation(5, 5, PageNav::Next), None);
        assert_eq!(resolve_navigation(2, 5, PageNav::Next), Some(3));
        assert_eq!(resolve_navigation(2, 5, PageNav::Previous), Some(1));
        assert_eq!(resolve_navigation(3, 5, PageNav::Goto(3)), None);
        assert_eq!(resolve_navigation(3, 5, PageNav::Goto(40)), Some(5));
        assert_eq!(resolve_navigation(1, 0, PageNav::Next), None);
    }

    #[test]
    fn local_page_change_only_fires_on_a_real_move() {
        assert_eq!(resolve_navigation(1, 4, PageNav::Goto(2)), Some(2));
        assert_eq!(resolve_navigation(2, 4, PageNav::Goto(2)), None);
        // A stale page past a shrunken table counts as its last page.
        assert_eq!(resolve_navigation(9, 3, PageNav::Goto(3)), None);
        assert_eq!(resolve_navigation(9, 3, PageNav::Goto(1)), Some(1));
        assert_eq!(resolve_navigation(1, 0, PageNav::Goto(1)), None);
    }

    #[test]
    fn total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(5, 0), 5);
    }
}
