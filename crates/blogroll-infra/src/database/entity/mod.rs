//! SeaORM entities.
//!
//! Rows convert to domain types with `TryFrom`: a column that does not decode
//! is reported as [`RepoError::Query`], never replaced by a default.

use std::fmt::Display;

use blogroll_core::error::RepoError;
use uuid::Uuid;

pub mod post;
pub mod user;

pub(crate) fn bad_column(table: &str, id: Uuid, column: &str, cause: impl Display) -> RepoError {
    tracing::error!(table, row_id = %id, column, error = %cause, "Stored row does not decode");
    RepoError::Query(format!("{table}.{column} of {id} is malformed: {cause}"))
}
