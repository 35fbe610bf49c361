//! Repository for the `news` and `articles` tables.
//!
//! Both tables share one schema, so every method takes the
//! [`PublicationKind`] that selects the table.

use newsroom_core::filter::PublicationFilter;
use newsroom_core::forms::PublicationDraft;
use newsroom_core::pagination::Page;
use newsroom_core::publication::PublicationKind;
use newsroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::publication::Publication;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, body, author, pub_date, created_at, updated_at";

/// Filter predicates bound as `$1` (title), `$2` (author), `$3` (date).
/// A NULL parameter disables its predicate.
const FILTER: &str = "($1::TEXT IS NULL OR strpos(title, $1) > 0)
               AND ($2::TEXT IS NULL OR strpos(author, $2) > 0)
               AND ($3::DATE IS NULL OR pub_date >= $3)";

/// Table backing each publication kind.
fn table(kind: PublicationKind) -> &'static str {
    match kind {
        PublicationKind::News => "news",
        PublicationKind::Article => "articles",
    }
}

/// Provides CRUD, filtering and paging for news and articles.
pub struct PublicationRepo;

impl PublicationRepo {
    /// Insert a new record, returning the created row.
    pub async fn create(
        pool: &PgPool,
        kind: PublicationKind,
        input: &PublicationDraft,
    ) -> Result<Publication, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (title, body, author, pub_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}",
            table = table(kind),
        );
        sqlx::query_as::<_, Publication>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.author)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// Find a record by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        kind: PublicationKind,
        id: DbId,
    ) -> Result<Option<Publication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", table(kind));
        sqlx::query_as::<_, Publication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every editable field of a record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        kind: PublicationKind,
        id: DbId,
        input: &PublicationDraft,
    ) -> Result<Option<Publication>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET
                title = $2,
                body = $3,
                author = $4,
                pub_date = $5
             WHERE id = $1
             RETURNING {COLUMNS}",
            table = table(kind),
        );
        sqlx::query_as::<_, Publication>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.author)
            .bind(input.date)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a record. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        kind: PublicationKind,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", table(kind));
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the records matching `filter`.
    pub async fn count(
        pool: &PgPool,
        kind: PublicationKind,
        filter: &PublicationFilter,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {} WHERE {FILTER}", table(kind));
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(&filter.title_contains)
            .bind(&filter.author_contains)
            .bind(filter.date_from)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// List the records matching `filter` that fall on `page`, newest first.
    pub async fn list_page(
        pool: &PgPool,
        kind: PublicationKind,
        filter: &PublicationFilter,
        page: &Page,
    ) -> Result<Vec<Publication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table}
             WHERE {FILTER}
             ORDER BY pub_date DESC, id DESC
             LIMIT $4 OFFSET $5",
            table = table(kind),
        );
        sqlx::query_as::<_, Publication>(&query)
            .bind(&filter.title_contains)
            .bind(&filter.author_contains)
            .bind(filter.date_from)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }
}
