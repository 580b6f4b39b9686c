use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::common::{AccountId, ExpertId};
use crate::domains::experts::search::EligibilityGate;

/// Expert lifecycle status. Only `Active` experts are publicly discoverable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpertStatus {
    Pending,
    Active,
    Suspended,
}

impl ExpertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpertStatus::Pending => "pending",
            ExpertStatus::Active => "active",
            ExpertStatus::Suspended => "suspended",
        }
    }
}

impl std::fmt::Display for ExpertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExpertStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(ExpertStatus::Pending),
            "active" => Ok(ExpertStatus::Active),
            "suspended" => Ok(ExpertStatus::Suspended),
            _ => Err(anyhow::anyhow!("Invalid expert status: {}", s)),
        }
    }
}

/// Expert model - a listed service business
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Expert {
    pub id: ExpertId,
    /// Database-assigned insertion order
    pub insertion_seq: i64,
    pub account_id: AccountId,

    // Profile
    pub slug: String,
    pub name: String,
    pub provider_type: String,

    // Address
    pub country: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub street_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    // Contact
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,

    // Lifecycle
    pub status: String,

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expert {
    /// Find a publicly visible expert by slug.
    ///
    /// Pending and suspended experts resolve to `None`, exactly as if the slug
    /// did not exist.
    pub async fn find_active_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Self>> {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT e.* FROM experts e WHERE ");
        EligibilityGate::push_sql(&mut query);
        query.push(" AND e.slug = ").push_bind(slug);

        let expert = query
            .build_query_as::<Self>()
            .fetch_optional(pool)
            .await?;
        Ok(expert)
    }
}
