//! Faceted expert search.
//!
//! One-way pipeline: raw parameters -> [`SearchFilters`] -> [`Predicate`]s ->
//! [`ExpertQuery`] (always gated by [`EligibilityGate`]) -> [`assemble`].
//! Only the database read suspends or fails.

pub mod assembler;
pub mod composer;
pub mod eligibility;
pub mod error;
pub mod filters;
pub mod predicate;

pub use assembler::assemble;
pub use composer::ExpertQuery;
pub use eligibility::EligibilityGate;
pub use error::SearchError;
pub use filters::{RawSearchParams, SearchFilters};
pub use predicate::Predicate;

use sqlx::PgPool;

use crate::domains::experts::data::ExpertSummary;

/// Run a search for already-normalized filters.
pub async fn search(
    filters: &SearchFilters,
    limit: Option<usize>,
    pool: &PgPool,
) -> Result<Vec<ExpertSummary>, SearchError> {
    let rows = ExpertQuery::new(Predicate::from_filters(filters))
        .with_limit(limit)
        .fetch(pool)
        .await?;
    Ok(assemble(rows))
}
