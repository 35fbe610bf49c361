//! The two record kinds served by the site.
//!
//! News and articles share one shape (title, body, author, date) and differ
//! only in where they are stored and where their pages live.

use std::fmt;

use serde::Serialize;

/// Which record kind a request or query is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationKind {
    News,
    Article,
}

impl PublicationKind {
    pub const ALL: [PublicationKind; 2] = [PublicationKind::News, PublicationKind::Article];

    /// Human-readable entity name, used in not-found errors and page titles.
    pub fn entity_name(self) -> &'static str {
        match self {
            PublicationKind::News => "News",
            PublicationKind::Article => "Article",
        }
    }

    /// Lowercase identifier, used in logs and template names.
    pub fn as_str(self) -> &'static str {
        match self {
            PublicationKind::News => "news",
            PublicationKind::Article => "article",
        }
    }

    /// Path prefix of the HTML pages for this kind (no trailing slash).
    pub fn page_prefix(self) -> &'static str {
        match self {
            PublicationKind::News => "/news",
            PublicationKind::Article => "/news/articles",
        }
    }
}

impl fmt::Display for PublicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
