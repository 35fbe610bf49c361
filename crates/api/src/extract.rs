//! Request extractors for the HTML site.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use newsroom_core::types::DbId;

use crate::error::AppError;

/// The `{id}` segment of a record page.
///
/// A segment that is not an integer names no record, so it is a 404 like
/// any other unknown URL rather than a malformed request.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub DbId);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, uri = %parts.uri, "Record id is not an integer");
                AppError::NotFound(format!("No page at {}", parts.uri.path()))
            })?;
        Ok(Self(id))
    }
}
