//! Page-number pagination helpers.
//!
//! Pages are 1-based. A page past the end is valid and simply empty.

use crate::error::CoreError;

/// Number of items per page when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Validate a page request: `page >= 1` and `1 <= per_page <= MAX_PAGE_SIZE`.
pub fn validate_page(page: i64, per_page: i64) -> Result<(), CoreError> {
    if page < 1 {
        return Err(CoreError::Validation(format!(
            "Page number must be at least 1, got {page}"
        )));
    }
    if per_page < 1 || per_page > MAX_PAGE_SIZE {
        return Err(CoreError::Validation(format!(
            "Page size must be between 1 and {MAX_PAGE_SIZE}, got {per_page}"
        )));
    }
    Ok(())
}

/// Row offset of the first item on `page`.
pub fn page_offset(page: i64, per_page: i64) -> i64 {
    (page - 1).saturating_mul(per_page)
}

/// Total number of pages needed for `total` items: `ceil(total / per_page)`.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if per_page <= 0 || total <= 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}
