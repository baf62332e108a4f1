//! Paging metadata returned next to list payloads.

use serde::{Deserialize, Serialize};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i32 = 250;

/// The `pagination` block of a paged response.
///
/// Links are exposed as returned; the client never follows them on its own.
/// Pass one to [`TastytradeClient::follow_link`](crate::TastytradeClient::follow_link)
/// to fetch that page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pagination {
    /// Items per page
    #[serde(default)]
    pub per_page: i32,
    /// Current page offset (0-indexed)
    #[serde(default)]
    pub page_offset: i32,
    /// Offset of the first item on this page
    #[serde(default)]
    pub item_offset: i32,
    /// Total number of items across all pages
    #[serde(default)]
    pub total_items: i32,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: i32,
    /// Number of items on this page
    #[serde(default)]
    pub current_item_count: i32,
    /// Link to the previous page
    #[serde(default)]
    pub previous_link: Option<String>,
    /// Link to the next page
    #[serde(default)]
    pub next_link: Option<String>,
    /// Template for building links to arbitrary pages
    #[serde(default)]
    pub paging_link_template: Option<String>,
}

impl Pagination {
    /// Check if there are more pages after the current one.
    pub fn has_more(&self) -> bool {
        self.page_offset + 1 < self.total_pages
    }

    /// Get the next page offset, if available.
    pub fn next_page(&self) -> Option<i32> {
        self.has_more().then_some(self.page_offset + 1)
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Paging metadata, when the endpoint is paged
    pub pagination: Option<Pagination>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: None,
        }
    }
}
