//! Server-rendered HTML pages.
//!
//! Every handler here serves both news (`/news/...`) and articles
//! (`/news/articles/...`); the router attaches the [`PublicationKind`] as a
//! request extension. Form posts redirect to the news index on success and
//! re-render the form with per-field messages on failure.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use newsroom_core::filter::{FilterParams, PublicationFilter};
use newsroom_core::forms::{FieldErrors, PublicationForm};
use newsroom_core::pagination::PageMeta;
use newsroom_core::publication::PublicationKind;
use newsroom_core::types::DbId;
use newsroom_db::models::publication::Publication;
use newsroom_db::repositories::PublicationRepo;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::RecordId;
use crate::handlers::{fetch_page, find_or_404, not_found};
use crate::query::PageParams;
use crate::state::AppState;
use crate::templates::render;

/// Where every successful create, edit and delete lands.
pub const INDEX_URL: &str = "/news/";

/// Characters left unescaped in query values (RFC 3986 unreserved).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// ---------------------------------------------------------------------------
// Template contexts
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ListContext {
    entity: &'static str,
    prefix: &'static str,
    records: Vec<Publication>,
    page: PageMeta,
    carry: String,
}

#[derive(Serialize)]
struct SearchContext {
    prefix: &'static str,
    records: Vec<Publication>,
    page: PageMeta,
    /// Filter values echoed back into the search form.
    query: SearchForm,
    /// Filter parameters repeated on pagination links.
    carry: String,
    /// Parameters that were ignored, with the reason.
    errors: FieldMessages,
}

#[derive(Serialize)]
struct SearchForm {
    title: String,
    author: String,
    date: String,
}

#[derive(Serialize)]
struct DetailContext {
    entity: &'static str,
    prefix: &'static str,
    record: Publication,
}

#[derive(Serialize)]
struct FormContext {
    entity: &'static str,
    prefix: &'static str,
    heading: String,
    action: String,
    form: PublicationForm,
    errors: FieldMessages,
}

/// Per-field messages for the create/edit and search forms; empty when the
/// field is valid.
#[derive(Serialize)]
struct FieldMessages {
    title: Vec<String>,
    body: Vec<String>,
    author: Vec<String>,
    date: Vec<String>,
}

impl From<FieldErrors> for FieldMessages {
    fn from(mut errors: FieldErrors) -> Self {
        let mut take = |field: &str| errors.remove(field).unwrap_or_default();
        Self {
            title: take("title"),
            body: take("body"),
            author: take("author"),
            date: take("date"),
        }
    }
}

#[derive(Serialize)]
struct DeleteContext {
    entity: &'static str,
    prefix: &'static str,
    action: String,
    record: Publication,
}

// ---------------------------------------------------------------------------
// Listing, search, detail
// ---------------------------------------------------------------------------

/// GET /
pub async fn home() -> Redirect {
    Redirect::to(INDEX_URL)
}

/// GET /news/ and /news/articles/
///
/// One page of records, newest first, selected by `?page=`.
pub async fn list(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Response> {
    let (records, page) = fetch_page(
        &state.pool,
        kind,
        &PublicationFilter::default(),
        state.config.page_size,
        params.page.as_deref(),
    )
    .await?;

    let context = ListContext {
        entity: kind.entity_name(),
        prefix: kind.page_prefix(),
        records,
        page: page.meta(),
        carry: String::new(),
    };
    Ok(render(&state.templates, "publication_list.html", &context)?.into_response())
}

/// GET /news/search/
///
/// Filter form plus the paginated matching records. Unparseable filter
/// values are shown as field errors and otherwise ignored.
pub async fn search(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    Query(page_params): Query<PageParams>,
    Query(filter_params): Query<FilterParams>,
) -> AppResult<Response> {
    let (filter, errors) = filter_params.parse();
    let (records, page) = fetch_page(
        &state.pool,
        kind,
        &filter,
        state.config.page_size,
        page_params.page.as_deref(),
    )
    .await?;

    let context = SearchContext {
        prefix: kind.page_prefix(),
        records,
        page: page.meta(),
        carry: carried_query(&filter_params),
        query: SearchForm {
            title: filter_params.title.unwrap_or_default(),
            author: filter_params.author.unwrap_or_default(),
            date: filter_params.date.unwrap_or_default(),
        },
        errors: errors.into(),
    };
    Ok(render(&state.templates, "search.html", &context)?.into_response())
}

/// GET /news/{id}/ and /news/articles/{id}/
pub async fn detail(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Response> {
    let record = find_or_404(&state.pool, kind, id).await?;

    let context = DetailContext {
        entity: kind.entity_name(),
        prefix: kind.page_prefix(),
        record,
    };
    Ok(render(&state.templates, "publication_detail.html", &context)?.into_response())
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// GET /news/create/ and /news/articles/create/
pub async fn create_form(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    render_form(&state, kind, None, PublicationForm::default(), FieldErrors::new())
}

/// POST /news/create/ and /news/articles/create/
pub async fn create(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    Form(form): Form<PublicationForm>,
) -> AppResult<Response> {
    let draft = match form.clean() {
        Ok(draft) => draft,
        Err(errors) => return render_form(&state, kind, None, form, errors),
    };

    let record = PublicationRepo::create(&state.pool, kind, &draft).await?;
    tracing::info!(%kind, id = record.id, "Publication created");

    Ok(Redirect::to(INDEX_URL).into_response())
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// GET /news/{id}/edit/ and /news/articles/{id}/edit/
pub async fn edit_form(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Response> {
    let record = find_or_404(&state.pool, kind, id).await?;
    render_form(&state, kind, Some(id), record.to_form(), FieldErrors::new())
}

/// POST /news/{id}/edit/ and /news/articles/{id}/edit/
pub async fn edit(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    RecordId(id): RecordId,
    Form(form): Form<PublicationForm>,
) -> AppResult<Response> {
    find_or_404(&state.pool, kind, id).await?;

    let draft = match form.clean() {
        Ok(draft) => draft,
        Err(errors) => return render_form(&state, kind, Some(id), form, errors),
    };

    PublicationRepo::update(&state.pool, kind, id, &draft)
        .await?
        .ok_or_else(|| not_found(kind, id))?;
    tracing::info!(%kind, id, "Publication updated");

    Ok(Redirect::to(INDEX_URL).into_response())
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// GET /news/{id}/delete/ and /news/articles/{id}/delete/
///
/// Confirmation page; nothing is removed until the form is posted.
pub async fn delete_confirm(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Response> {
    let record = find_or_404(&state.pool, kind, id).await?;

    let context = DeleteContext {
        entity: kind.entity_name(),
        prefix: kind.page_prefix(),
        action: format!("{}/{id}/delete/", kind.page_prefix()),
        record,
    };
    Ok(render(&state.templates, "publication_delete.html", &context)?.into_response())
}

/// POST /news/{id}/delete/ and /news/articles/{id}/delete/
pub async fn delete(
    Extension(kind): Extension<PublicationKind>,
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Response> {
    if !PublicationRepo::delete(&state.pool, kind, id).await? {
        return Err(not_found(kind, id));
    }
    tracing::info!(%kind, id, "Publication deleted");

    Ok(Redirect::to(INDEX_URL).into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Render the create form (`id == None`) or the edit form for `id`.
fn render_form(
    state: &AppState,
    kind: PublicationKind,
    id: Option<DbId>,
    form: PublicationForm,
    errors: FieldErrors,
) -> AppResult<Response> {
    let prefix = kind.page_prefix();
    let entity = kind.entity_name();
    let (heading, action) = match id {
        None => (format!("Create {entity}"), format!("{prefix}/create/")),
        Some(id) => (format!("Edit {entity}"), format!("{prefix}/{id}/edit/")),
    };

    let context = FormContext {
        entity,
        prefix,
        heading,
        action,
        form,
        errors: errors.into(),
    };
    Ok(render(&state.templates, "publication_form.html", &context)?.into_response())
}

/// Non-blank filter parameters as a `key=value&` prefix for page links.
fn carried_query(params: &FilterParams) -> String {
    [
        ("title", &params.title),
        ("author", &params.author),
        ("date", &params.date),
    ]
    .into_iter()
    .filter_map(|(key, value)| {
        let value = value.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
        Some(format!("{key}={}&", utf8_percent_encode(value, QUERY_VALUE)))
    })
    .collect()
}
