use serde::{Deserialize, Serialize};

/// Rows per admin listing page when the config does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Number of pages needed to show `total` rows, `page_size` at a time.
///
/// A zero page size yields zero pages rather than dividing by zero.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Derived state of the Previous/Next controls for a 1-based page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControls {
    pub page: u64,
    pub total_pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageControls {
    pub fn new(page: u64, total_pages: u64) -> Self {
        Self {
            page,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }

    pub fn prev_disabled(&self) -> bool {
        !self.has_prev
    }

    pub fn next_disabled(&self) -> bool {
        !self.has_next
    }
}
