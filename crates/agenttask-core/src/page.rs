//! One slice of a larger server-side result set.

use serde::{Deserialize, Serialize};

/// A page of entities of type `T`, plus the metadata needed to navigate to
/// other slices of the same result set.
///
/// Pagination metadata is server-reported and trusted as the source of truth:
/// `total_pages` is never re-derived locally from `total_items` / `page_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on the current page, in server order.
    pub items: Vec<T>,

    /// Total number of items across all pages.
    pub total_items: u64,

    /// Current page number, 1-based.
    pub current_page: u32,

    /// Maximum number of items per page.
    pub page_size: u32,

    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if a page follows this one.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Map every item on this page, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            current_page: self.current_page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
