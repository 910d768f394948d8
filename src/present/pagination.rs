//! Page navigation policy.
//!
//! The store accepts any page number; refusing pages outside
//! `1..=min(total_pages, PAGE_CAP)` is done here, on the UI side.

use crate::catalog::PAGE_CAP;

/// One slot of the page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: u32, current: bool },
    Gap,
}

/// Highest page the UI may request.
pub fn page_bound(total_pages: u32) -> u32 {
    total_pages.min(PAGE_CAP)
}

pub fn can_go_to(page: u32, total_pages: u32) -> bool {
    page >= 1 && page <= page_bound(total_pages)
}

/// Windowed page bar: first, neighbours of the current page, last, with gaps.
///
/// Empty when there is at most one page.
pub fn page_items(current: u32, total_pages: u32) -> Vec<PageItem> {
    let total = page_bound(total_pages);
    if total <= 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    let page = |number: u32| PageItem::Page {
        number,
        current: number == current,
    };

    let mut items = vec![page(1)];
    if current > 3 {
        items.push(PageItem::Gap);
    }
    if current > 2 {
        items.push(page(current - 1));
    }
    if current != 1 && current != total {
        items.push(page(current));
    }
    if current + 1 < total {
        items.push(page(current + 1));
    }
    if current + 2 < total {
        items.push(PageItem::Gap);
    }
    items.push(page(total));
    items
}

/// Parse the "go to page" box. Out-of-range or non-numeric input is `None`.
pub fn parse_page_input(input: &str, total_pages: u32) -> Option<u32> {
    let page: u32 = input.trim().parse().ok()?;
    can_go_to(page, total_pages).then_some(page)
}
