//! JSON API for news and articles.
//!
//! The same handlers serve `/api/v1/news` and `/api/v1/articles`; the router
//! attaches the [`PublicationKind`] as a request extension.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use newsroom_core::error::CoreError;
use newsroom_core::filter::FilterParams;
use newsroom_core::forms::PublicationForm;
use newsroom_core::publication::PublicationKind;
use newsroom_core::types::DbId;
use newsroom_db::repositories::PublicationRepo;

use crate::error::AppResult;
use crate::handlers::{fetch_page, find_or_404, not_found};
use crate::query::PageParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// GET /api/v1/{kind}
///
/// Paginated listing, newest first, narrowed by `title`, `author` and `date`.
pub async fn list(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    Query(page_params): Query<PageParams>,
    Query(filter_params): Query<FilterParams>,
) -> AppResult<impl IntoResponse> {
    let (filter, filter_errors) = filter_params.parse();
    let (records, page) = fetch_page(
        &state.pool,
        kind,
        &filter,
        state.config.page_size,
        page_params.page.as_deref(),
    )
    .await?;

    Ok(Json(PageResponse {
        data: records,
        page: page.meta(),
        filter_errors,
    }))
}

/// GET /api/v1/{kind}/{id}
pub async fn get_by_id(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = find_or_404(&state.pool, kind, id).await?;
    Ok(Json(DataResponse { data: record }))
}

/// POST /api/v1/{kind}
///
/// Validates the form and inserts a new record. Returns 201.
pub async fn create(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    Json(form): Json<PublicationForm>,
) -> AppResult<impl IntoResponse> {
    let draft = form.clean().map_err(CoreError::InvalidFields)?;
    let record = PublicationRepo::create(&state.pool, kind, &draft).await?;

    tracing::info!(%kind, id = record.id, "Publication created via API");

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// PUT /api/v1/{kind}/{id}
///
/// Replaces every field of an existing record.
pub async fn update(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<PublicationForm>,
) -> AppResult<impl IntoResponse> {
    let draft = form.clean().map_err(CoreError::InvalidFields)?;
    let record = PublicationRepo::update(&state.pool, kind, id, &draft)
        .await?
        .ok_or_else(|| not_found(kind, id))?;

    tracing::info!(%kind, id, "Publication updated via API");

    Ok(Json(DataResponse { data: record }))
}

/// DELETE /api/v1/{kind}/{id}
pub async fn delete(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !PublicationRepo::delete(&state.pool, kind, id).await? {
        return Err(not_found(kind, id));
    }

    tracing::info!(%kind, id, "Publication deleted via API");

    Ok(StatusCode::NO_CONTENT)
}
