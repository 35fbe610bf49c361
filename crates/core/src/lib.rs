//! Domain building blocks for the newsroom site.
//!
//! This crate has no database or HTTP dependencies: it holds the paginator,
//! the filter-set, form validation and the shared error taxonomy so both the
//! repository layer and the HTTP layer can use them.

pub mod error;
pub mod filter;
pub mod forms;
pub mod pagination;
pub mod publication;
pub mod types;
