//! Route definitions for the news and article JSON API.

use axum::routing::get;
use axum::{Extension, Router};
use newsroom_core::publication::PublicationKind;

use crate::handlers::publications;
use crate::state::AppState;

/// Collection segment under `/api/v1`.
fn segment(kind: PublicationKind) -> &'static str {
    match kind {
        PublicationKind::News => "news",
        PublicationKind::Article => "articles",
    }
}

/// Routes for one publication kind.
///
/// ```text
/// GET    /{segment}         -> list
/// POST   /{segment}         -> create
/// GET    /{segment}/{id}    -> get_by_id
/// PUT    /{segment}/{id}    -> update
/// DELETE /{segment}/{id}    -> delete
/// ```
pub fn router(kind: PublicationKind) -> Router<AppState> {
    let base = format!("/{}", segment(kind));

    Router::new()
        .route(&base, get(publications::list).post(publications::create))
        .route(
            &format!("{base}/{{id}}"),
            get(publications::get_by_id)
                .put(publications::update)
                .delete(publications::delete),
        )
        .layer(Extension(kind))
}
