//! Shared query parameter types for handlers.

use serde::Deserialize;

/// Page-number pagination (`?page=`).
///
/// Kept as a raw string: anything that is not a valid page number falls back
/// to the first or last page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}
