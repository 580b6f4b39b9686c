//! Eligibility gate: only active experts are ever publicly readable.

use sqlx::{Postgres, QueryBuilder};

use crate::domains::experts::models::ExpertStatus;

/// Unconditional `status = 'active'` conjunct over the `experts e` row.
///
/// Public reads start their WHERE clause with this gate; no request
/// parameter reaches it.
pub struct EligibilityGate;

impl EligibilityGate {
    pub const STATUS: ExpertStatus = ExpertStatus::Active;

    pub fn push_sql<'args>(query: &mut QueryBuilder<'args, Postgres>) {
        query
            .push("e.status = ")
            .push_bind(Self::STATUS.as_str());
    }
}
