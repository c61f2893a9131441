//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// First page number
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Items per page when the client does not ask
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Upper bound on `per_page`
pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination query parameters, reusable across all list endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Page number, never below 1
    pub fn page(&self) -> u64 {
        self.page.max(DEFAULT_PAGE_NUMBER)
    }

    /// Row offset for the database query, capped at the largest offset SQL accepts
    pub fn offset(&self) -> u64 {
        (self.page() - 1)
            .saturating_mul(self.limit())
            .min(i64::MAX as u64)
    }

    /// Get limit capped at maximum
    pub fn limit(&self) -> u64 {
        self.per_page.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, params: PaginationParams, total: u64) -> Self {
        let per_page = params.limit();
        Self {
            success: true,
            data,
            meta: PaginationMeta {
                page: params.page(),
                per_page,
                total,
                total_pages: total.div_ceil(per_page),
            },
        }
    }

    /// Transform the page's items, keeping its metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            success: self.success,
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

impl<T: Serialize> axum::response::IntoResponse for Paginated<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let params = PaginationParams::new(3, 10);
        assert_eq!(params.offset(), 20);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_limits_are_clamped() {
        assert_eq!(PaginationParams::new(1, 1000).limit(), MAX_PAGE_SIZE);
        assert_eq!(PaginationParams::new(1, 0).limit(), 1);
        assert_eq!(PaginationParams::new(0, 10).offset(), 0);
    }

    #[test]
    fn test_huge_page_offset_saturates() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"page":18446744073709551615,"per_page":100}"#).unwrap();
        assert_eq!(params.offset(), i64::MAX as u64);
        assert_eq!(PaginationParams::new(u64::MAX / 2, 3).offset(), i64::MAX as u64);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = Paginated::new(vec![1, 2], PaginationParams::new(1, 2), 5);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.map(|n| n * 10).data, vec![10, 20]);
    }

    #[test]
    fn test_query_defaults() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, DEFAULT_PAGE_NUMBER);
        assert_eq!(params.per_page, DEFAULT_PAGE_SIZE);
    }
}
