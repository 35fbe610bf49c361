pub mod pages;
pub mod publications;

use newsroom_core::error::CoreError;
use newsroom_core::filter::PublicationFilter;
use newsroom_core::pagination::{Page, Paginator};
use newsroom_core::publication::PublicationKind;
use newsroom_core::types::DbId;
use newsroom_db::models::publication::Publication;
use newsroom_db::repositories::PublicationRepo;
use newsroom_db::DbPool;

use crate::error::AppError;

/// Count the matching records, resolve the requested page leniently and
/// fetch its rows.
pub(crate) async fn fetch_page(
    pool: &DbPool,
    kind: PublicationKind,
    filter: &PublicationFilter,
    page_size: i64,
    raw_page: Option<&str>,
) -> Result<(Vec<Publication>, Page), sqlx::Error> {
    let count = PublicationRepo::count(pool, kind, filter).await?;
    let page = Paginator::new(count, page_size).get_page(raw_page);
    let records = PublicationRepo::list_page(pool, kind, filter, &page).await?;
    Ok((records, page))
}

/// Load a record or fail with a 404.
pub(crate) async fn find_or_404(
    pool: &DbPool,
    kind: PublicationKind,
    id: DbId,
) -> Result<Publication, AppError> {
    PublicationRepo::find_by_id(pool, kind, id)
        .await?
        .ok_or_else(|| not_found(kind, id))
}

pub(crate) fn not_found(kind: PublicationKind, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: kind.entity_name(),
        id,
    })
}
