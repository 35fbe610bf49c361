//! Domain model structs.
//!
//! Rows are `FromRow` + `Serialize`; inserts and updates take the validated
//! `PublicationDraft` from `newsroom_core::forms`.

pub mod publication;
