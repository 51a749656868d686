use content::ContentRecord;
use serde::{Deserialize, Serialize};

use crate::filter::{FilterKey, filter_records};

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Filter + page cursor. `page` is 1-indexed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPaginationState {
    pub filter: FilterKey,
    pub page: usize,
    pub total_pages: usize,
}

impl FilterPaginationState {
    /// Unfiltered, first page.
    pub fn new(records: &[ContentRecord], page_size: usize) -> Self {
        Self {
            filter: FilterKey::All,
            page: 1,
            total_pages: total_pages(records.len(), page_size),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `ceil(count / page_size)`; a zero page size is treated as one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Switch filters. The page always goes back to 1.
pub fn apply_filter(
    state: &FilterPaginationState,
    records: &[ContentRecord],
    key: FilterKey,
    page_size: usize,
) -> FilterPaginationState {
    let filtered = filter_records(records, key).len();
    if key != state.filter {
        tracing::trace!(from = %state.filter, to = %key, filtered, "gallery filter changed");
    }
    FilterPaginationState {
        filter: key,
        page: 1,
        total_pages: total_pages(filtered, page_size),
    }
}

/// Move to `page`, clamped into `[1, total_pages]` (1 when there are no pages).
pub fn set_page(state: &FilterPaginationState, page: usize) -> FilterPaginationState {
    FilterPaginationState {
        page: page.clamp(1, state.total_pages.max(1)),
        ..*state
    }
}

/// Items on `page`. Shorter on the last page, empty past the end.
pub fn current_slice<T>(filtered: &[T], page: usize, page_size: usize) -> &[T] {
    let size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(size);
    if start >= filtered.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(filtered.len());
    &filtered[start..end]
}
