//! Publication row shared by the `news` and `articles` tables.

use chrono::NaiveDate;
use newsroom_core::forms::PublicationForm;
use newsroom_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `news` or `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Publication {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub author: String,
    #[sqlx(rename = "pub_date")]
    pub date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Publication {
    /// Form pre-filled with this record's values, for edit pages.
    pub fn to_form(&self) -> PublicationForm {
        PublicationForm::prefill(&self.title, &self.body, &self.author, self.date)
    }
}
