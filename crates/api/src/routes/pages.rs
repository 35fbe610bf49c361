//! Route definitions for the HTML site.
//!
//! News lives under `/news/`, articles under `/news/articles/`. Paths keep
//! their trailing slash.

use axum::routing::get;
use axum::{Extension, Router};
use newsroom_core::publication::PublicationKind;

use crate::handlers::pages;
use crate::state::AppState;

/// All HTML routes.
///
/// ```text
/// GET         /                            -> home (redirect to /news/)
/// GET         /news/                       -> list
/// GET         /news/search/                -> search
/// GET         /news/{id}/                  -> detail
/// GET, POST   /news/create/                -> create_form, create
/// GET, POST   /news/{id}/edit/             -> edit_form, edit
/// GET, POST   /news/{id}/delete/           -> delete_confirm, delete
/// GET         /news/articles/              -> list
/// GET         /news/articles/{id}/         -> detail
/// GET, POST   /news/articles/create/       -> create_form, create
/// GET, POST   /news/articles/{id}/edit/    -> edit_form, edit
/// GET, POST   /news/articles/{id}/delete/  -> delete_confirm, delete
/// ```
pub fn router() -> Router<AppState> {
    let news_search = Router::new()
        .route("/news/search/", get(pages::search))
        .layer(Extension(PublicationKind::News));

    Router::new()
        .route("/", get(pages::home))
        .merge(news_search)
        .merge(publication_pages(PublicationKind::News))
        .merge(publication_pages(PublicationKind::Article))
}

/// Listing, detail, create, edit and delete pages for one kind.
fn publication_pages(kind: PublicationKind) -> Router<AppState> {
    let prefix = kind.page_prefix();

    Router::new()
        .route(&format!("{prefix}/"), get(pages::list))
        .route(
            &format!("{prefix}/create/"),
            get(pages::create_form).post(pages::create),
        )
        .route(&format!("{prefix}/{{id}}/"), get(pages::detail))
        .route(
            &format!("{prefix}/{{id}}/edit/"),
            get(pages::edit_form).post(pages::edit),
        )
        .route(
            &format!("{prefix}/{{id}}/delete/"),
            get(pages::delete_confirm).post(pages::delete),
        )
        .layer(Extension(kind))
}
