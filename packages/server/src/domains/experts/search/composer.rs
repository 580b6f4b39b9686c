//! Query composer.
//!
//! Renders `gate AND p1 AND p2 ...` into a single read-only statement with a
//! total ordering (creation time, then insertion order), and executes it.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::domains::experts::models::Expert;
use crate::domains::experts::search::{EligibilityGate, Predicate, SearchError};

/// A composed expert search, ready to run.
#[derive(Debug, Clone, Default)]
pub struct ExpertQuery {
    predicates: Vec<Predicate>,
    limit: Option<usize>,
}

impl ExpertQuery {
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Self {
            predicates,
            limit: None,
        }
    }

    /// Cap the number of rows. Applied after ordering, so a capped result is
    /// always a prefix of the uncapped one. A zero cap means no cap.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Render the full statement.
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new("SELECT e.* FROM experts e WHERE ");
        EligibilityGate::push_sql(&mut query);

        for predicate in &self.predicates {
            query.push(" AND ");
            predicate.push_sql(&mut query);
        }

        query.push(" ORDER BY e.created_at ASC, e.insertion_seq ASC");

        if let Some(limit) = self.limit.filter(|limit| *limit > 0) {
            query
                .push(" LIMIT ")
                .push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        query
    }

    /// Execute against the pool. Any database error fails the whole search.
    pub async fn fetch(&self, pool: &PgPool) -> Result<Vec<Expert>, SearchError> {
        let mut query = self.build();
        debug!(sql = query.sql(), "Running expert search");

        let experts = query.build_query_as::<Expert>().fetch_all(pool).await?;
        Ok(experts)
    }
}
