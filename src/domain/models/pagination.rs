//! Pagination Value Object
//!
//! A 1-indexed page of rides, `limit` rows per page.

use crate::shared::errors::DomainError;

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
    offset: i64,
}

impl PageRequest {
    /// Create a page request, rejecting non-positive values
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPagination` if `page` or `limit` is below 1,
    /// or if the resulting row offset does not fit in an `i64`.
    pub fn new(page: i64, limit: i64) -> Result<Self, DomainError> {
        if page < 1 {
            return Err(DomainError::InvalidPagination(
                "page must be a positive integer".to_string(),
            ));
        }
        if limit < 1 {
            return Err(DomainError::InvalidPagination(
                "limit must be a positive integer".to_string(),
            ));
        }

        let offset = (page - 1).checked_mul(limit).ok_or_else(|| {
            DomainError::InvalidPagination("page and limit are out of range".to_string())
        })?;

        Ok(Self { page, limit, offset })
    }

    #[must_use]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of rows skipped before this page: `(page - 1) * limit`
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_zero_offset() {
        let page = PageRequest::new(1, 10).unwrap();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
        assert_eq!(page.page(), 1);
    }

    #[test]
    fn test_offset_is_page_minus_one_times_limit() {
        assert_eq!(PageRequest::new(3, 25).unwrap().offset(), 50);
        assert_eq!(PageRequest::new(2, 1).unwrap().offset(), 1);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        assert!(matches!(
            PageRequest::new(0, 10),
            Err(DomainError::InvalidPagination(_))
        ));
        assert!(matches!(
            PageRequest::new(-1, 10),
            Err(DomainError::InvalidPagination(_))
        ));
        assert!(matches!(
            PageRequest::new(1, 0),
            Err(DomainError::InvalidPagination(_))
        ));
        assert!(matches!(
            PageRequest::new(1, -5),
            Err(DomainError::InvalidPagination(_))
        ));
    }

    #[test]
    fn test_rejects_overflowing_offset() {
        assert!(PageRequest::new(i64::MAX, i64::MAX).is_err());
    }
}
