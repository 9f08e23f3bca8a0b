//! Query types - pagination and ordering shared by all repositories

use serde::{Deserialize, Serialize};

/// Default page size applied when the caller supplies a non-positive one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Sort direction for `find` queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction
    #[inline]
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Pagination and ordering info for `find` queries
///
/// Pagination is always applied. Page numbers at or below zero normalize
/// to page 1; the offset is `(page - 1) * page_size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: i64,
    pub page_size: i64,
    /// Sort column; the query layer whitelists valid columns per entity
    pub sort: String,
    pub order: SortOrder,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: "id".to_string(),
            order: SortOrder::Desc,
        }
    }
}

impl PageInfo {
    /// Create page info with defaults for sort (`id`) and order (descending)
    #[must_use]
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    /// Effective page size, falling back to the default for non-positive values
    #[inline]
    #[must_use]
    pub fn limit(&self) -> i64 {
        if self.page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    /// Row offset after page normalization
    #[inline]
    #[must_use]
    pub fn offset(&self) -> i64 {
        let page = if self.page <= 0 { 1 } else { self.page };
        (page - 1) * self.limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let info = PageInfo::default();
        assert_eq!(info.page, 1);
        assert_eq!(info.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(info.sort, "id");
        assert_eq!(info.order, SortOrder::Desc);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageInfo::new(1, 10).offset(), 0);
        assert_eq!(PageInfo::new(3, 10).offset(), 20);
        assert_eq!(PageInfo::new(2, 25).offset(), 25);
    }

    #[test]
    fn test_non_positive_page_normalizes_to_first() {
        assert_eq!(PageInfo::new(0, 10).offset(), 0);
        assert_eq!(PageInfo::new(-5, 10).offset(), 0);
    }

    #[test]
    fn test_non_positive_page_size_falls_back_to_default() {
        let info = PageInfo::new(2, 0);
        assert_eq!(info.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(info.offset(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_sort_order_sql() {
        assert_eq!(SortOrder::Asc.as_sql(), "ASC");
        assert_eq!(SortOrder::Desc.as_sql(), "DESC");
    }
}
