//! HTML templates, compiled once at startup.
//!
//! Templates are embedded in the binary so the server (and the tests) do not
//! depend on the working directory.

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::AppResult;

const TEMPLATES: [(&str, &str); 7] = [
    ("base.html", include_str!("../templates/base.html")),
    ("pagination.html", include_str!("../templates/pagination.html")),
    ("publication_list.html", include_str!("../templates/publication_list.html")),
    ("publication_detail.html", include_str!("../templates/publication_detail.html")),
    ("publication_form.html", include_str!("../templates/publication_form.html")),
    ("publication_delete.html", include_str!("../templates/publication_delete.html")),
    ("search.html", include_str!("../templates/search.html")),
];

/// Compile every template. Fails on syntax errors.
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES)?;
    Ok(tera)
}

/// Render `name` with `context` into an HTML response body.
pub fn render<C: Serialize>(tera: &Tera, name: &str, context: &C) -> AppResult<Html<String>> {
    let context = Context::from_serialize(context)?;
    Ok(Html(tera.render(name, &context)?))
}
