//! Filter-set for publication listings.
//!
//! Raw query parameters ([`FilterParams`]) are parsed into typed predicates
//! ([`PublicationFilter`]). Parameters that fail to parse are reported as
//! field errors and left out of the filter, so the remaining predicates still
//! narrow the listing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::forms::{no_null_chars, parse_date, FieldErrors, INVALID_DATE, NULL_CHARACTERS};

/// Query parameters accepted by the search page and list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterParams {
    /// Substring the title must contain.
    pub title: Option<String>,
    /// Substring the author must contain.
    pub author: Option<String>,
    /// Earliest date (inclusive), `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// Typed predicates, combined with AND. `None` means "do not filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationFilter {
    pub title_contains: Option<String>,
    pub author_contains: Option<String>,
    pub date_from: Option<NaiveDate>,
}

impl PublicationFilter {
    /// True when no predicate is set and the filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.title_contains.is_none() && self.author_contains.is_none() && self.date_from.is_none()
    }
}

impl FilterParams {
    /// Parse into a filter plus the errors of any unusable parameters.
    pub fn parse(&self) -> (PublicationFilter, FieldErrors) {
        let mut errors = FieldErrors::new();

        let date_from = match non_blank(&self.date) {
            None => None,
            Some(raw) => match parse_date(&raw) {
                Some(date) => Some(date),
                None => {
                    errors.insert("date".to_string(), vec![INVALID_DATE.to_string()]);
                    None
                }
            },
        };

        let filter = PublicationFilter {
            title_contains: text_predicate("title", &self.title, &mut errors),
            author_contains: text_predicate("author", &self.author, &mut errors),
            date_from,
        };
        (filter, errors)
    }
}

/// A substring predicate, or `None` (with an error recorded) for values
/// the database cannot compare against.
fn text_predicate(field: &str, value: &Option<String>, errors: &mut FieldErrors) -> Option<String> {
    let value = non_blank(value)?;
    match no_null_chars(&value) {
        Ok(()) => Some(value),
        Err(_) => {
            errors.insert(field.to_string(), vec![NULL_CHARACTERS.to_string()]);
            None
        }
    }
}

/// Trim a parameter, treating blank values as absent.
fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
