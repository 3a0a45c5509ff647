//! Pagination envelope shared by the live API and the mock responder.

use serde::{Deserialize, Serialize};

/// Pagination metadata returned alongside each order page.
///
/// Pages are 1-based. Invariant: `current_page <= total_pages` whenever
/// `total_items > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
}

impl Pagination {
    /// Whether `page` is addressable under this pagination state.
    #[must_use]
    pub const fn contains_page(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }
}
