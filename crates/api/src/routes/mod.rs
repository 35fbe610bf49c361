pub mod health;
pub mod pages;
pub mod publications;

use axum::Router;
use newsroom_core::publication::PublicationKind;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /news                                            list, create
/// /news/{id}                                       get, update, delete
///
/// /articles                                        list, create
/// /articles/{id}                                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(publications::router(PublicationKind::News))
        .merge(publications::router(PublicationKind::Article))
}
