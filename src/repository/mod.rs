//! Repository pattern for data access
//!
//! One module per entity family, each exposing list/get/create/update/delete
//! plus its aggregate reads against the shared [`Database`](crate::db::Database)
//! handle. Updates use merge semantics: the current row is read first and
//! omitted fields keep their stored values. Absence of a row is always
//! `Ok(None)` (or a silent no-op for delete), never an error.

pub mod animal_types;
pub mod animals;
pub mod app_info;
pub mod cashflow;
pub mod documents;
pub mod health;
pub mod milk;

use chrono::{NaiveDateTime, Utc};

/// Repository-owned wall-clock for created_at/updated_at columns.
pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
