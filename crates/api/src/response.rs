//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope per project conventions.
//! Use [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`
//! to get compile-time type safety and consistent serialization.

use newsroom_core::forms::FieldErrors;
use newsroom_core::pagination::PageMeta;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: record }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [...], "page": {...} }` envelope for paginated listings.
///
/// `filter_errors` lists query parameters that could not be parsed and were
/// therefore ignored; it is omitted when empty.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub page: PageMeta,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub filter_errors: FieldErrors,
}
