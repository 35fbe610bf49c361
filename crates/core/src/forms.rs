//! Create/edit form for news and articles.
//!
//! [`PublicationForm`] is what the browser (form-encoded) or an API client
//! (JSON) submits: every field is a string so a half-filled form can be
//! re-displayed exactly as typed. [`PublicationForm::clean`] turns it into a
//! typed [`PublicationDraft`] or a map of per-field messages.

use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Field name -> human-readable messages, ordered by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub const TITLE_MAX_CHARS: u64 = 200;
pub const AUTHOR_MAX_CHARS: u64 = 100;

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_DATE: &str = "Enter a valid date.";
pub const NULL_CHARACTERS: &str = "Null characters are not allowed.";

/// Date format accepted by forms and filters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw form input. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct PublicationForm {
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 200, message = "Ensure this value has at most 200 characters.")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub body: String,

    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(max = 100, message = "Ensure this value has at most 100 characters.")
    )]
    pub author: String,

    #[serde(default)]
    #[validate(custom(function = "required_date"))]
    pub date: String,
}

/// Validated publication fields, ready to be inserted or applied as an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationDraft {
    pub title: String,
    pub body: String,
    pub author: String,
    pub date: NaiveDate,
}

impl PublicationForm {
    /// Pre-fill a form from stored values (edit pages).
    pub fn prefill(title: &str, body: &str, author: &str, date: NaiveDate) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            author: author.to_string(),
            date: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Trim every field, validate, and convert to a draft.
    pub fn clean(&self) -> Result<PublicationDraft, FieldErrors> {
        let trimmed = Self {
            title: self.title.trim().to_string(),
            body: self.body.trim().to_string(),
            author: self.author.trim().to_string(),
            date: self.date.trim().to_string(),
        };

        trimmed.validate().map_err(|e| to_field_errors(&e))?;

        let Some(date) = parse_date(&trimmed.date) else {
            // validate() already rejected unparseable dates.
            return Err(FieldErrors::from([(
                "date".to_string(),
                vec![INVALID_DATE.to_string()],
            )]));
        };

        Ok(PublicationDraft {
            title: trimmed.title,
            body: trimmed.body,
            author: trimmed.author,
            date,
        })
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Non-empty text that PostgreSQL can store.
fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(error("required", REQUIRED));
    }
    no_null_chars(value)
}

/// PostgreSQL `TEXT` cannot hold NUL, so reject it before it reaches a query.
pub fn no_null_chars(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(error("null_characters_not_allowed", NULL_CHARACTERS));
    }
    Ok(())
}

fn required_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(error("required", REQUIRED));
    }
    if parse_date(value).is_none() {
        return Err(error("invalid_date", INVALID_DATE));
    }
    Ok(())
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
