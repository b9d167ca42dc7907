// src/domain/pagination.rs

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of an in-memory list. Page numbers are 1-based.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub current: usize,
    pub total_pages: usize,
}

impl<'a, T> Page<'a, T> {
    /// Slices `items` for the requested page, clamping the page number into
    /// range. An empty list still has one (empty) page.
    pub fn of(items: &'a [T], requested: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = items.len().div_ceil(per_page).max(1);
        let current = requested.clamp(1, total_pages);

        let start = (current - 1) * per_page;
        let end = (start + per_page).min(items.len());

        Self {
            items: &items[start..end],
            current,
            total_pages,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }
}

/// Reads `?page=N`, defaulting to the first page on anything unparsable.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(1)
}
