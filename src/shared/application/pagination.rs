/// Pagination support for queries
///
/// Standard search/pagination model used across all catalog modules
use serde::{Deserialize, Serialize};

/// Requested ordering of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse a raw direction term; anything that is not "desc" sorts ascending.
    pub fn from_term(term: &str) -> Self {
        if term.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Asc
    }
}

/// Parameters of a paged, filtered, sorted listing. Page numbers are 0-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub page: u32,
    pub per_page: u32,
    pub terms: String,
    pub sort: String,
    pub direction: SortDirection,
}

impl SearchQuery {
    pub fn new(
        page: u32,
        per_page: u32,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: SortDirection,
    ) -> Self {
        Self {
            page,
            per_page,
            terms: terms.into(),
            sort: sort.into(),
            direction,
        }
    }

    /// Calculate offset for storage queries
    pub fn offset(&self) -> usize {
        (self.page * self.per_page) as usize
    }

    /// Get limit for storage queries
    pub fn limit(&self) -> usize {
        self.per_page as usize
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 10,
            terms: String::new(),
            sort: "name".to_string(),
            direction: SortDirection::Asc,
        }
    }
}

/// Paged result wrapper. `total` reflects the full matching set size, not
/// `items.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: u32, per_page: u32, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Transform the items while leaving the paging metadata untouched.
    ///
    /// Every list use case goes from persisted entities to output DTOs
    /// through this, without re-deriving pagination math.
    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
