//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
///
/// Pages are 1-indexed. Out-of-range inputs are clamped on construction:
/// `number` is at least 1 and `size` lies in `1..=MAX_SIZE`, so the skip
/// arithmetic can never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-indexed).
    pub number: u32,
    /// The number of items per page.
    pub size: u32,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: u32 = 10;
    /// The maximum allowed page size.
    pub const MAX_SIZE: u32 = 100;

    /// Creates a new page request, clamping out-of-range values.
    #[must_use]
    pub fn new(number: u32, size: u32) -> Self {
        Self {
            number: number.max(1),
            size: size.clamp(1, Self::MAX_SIZE),
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(1, Self::DEFAULT_SIZE)
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.number as u64 - 1) * self.size as u64
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.size as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// A page of results together with the total match count.
///
/// `total_count` counts all records matching the filter across all pages,
/// not just the returned slice. This is also the persisted cache value
/// shape; its serde form must round-trip losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PagedResult<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// The total number of matching records across all pages.
    pub total_count: u64,
    /// The page number (1-indexed).
    pub page_number: u32,
    /// The number of items per page.
    pub page_size: u32,
}

impl<T> PagedResult<T> {
    /// Creates a new paged result.
    #[must_use]
    pub fn new(items: Vec<T>, total_count: u64, page: PageRequest) -> Self {
        Self {
            items,
            total_count,
            page_number: page.number,
            page_size: page.size,
        }
    }

    /// Creates an empty result for the given page.
    #[must_use]
    pub fn empty(page: PageRequest) -> Self {
        Self::new(Vec::new(), 0, page)
    }

    /// Maps the items to a different type, preserving the page metadata.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        (self.total_count + self.page_size as u64 - 1) / self.page_size as u64
    }

    /// Returns true if there is a page after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.page_number as u64) < self.total_pages()
    }
}

impl<T> IntoIterator for PagedResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
