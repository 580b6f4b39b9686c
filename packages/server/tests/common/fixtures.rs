//! Test fixtures for creating test data.
//!
//! Registration, activation and profile editing are owned by other services,
//! so fixtures write rows directly.

use anyhow::Result;
use chrono::{DateTime, Utc};
use directory_core::common::{AccountId, ExpertId};
use directory_core::domains::experts::{ExpertStatus, FacetCategory};
use sqlx::{PgConnection, PgPool};
use typed_builder::TypedBuilder;
use uuid::Uuid;

/// Everything needed to seed one expert with its facet memberships.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ExpertSeed {
    #[builder(setter(into))]
    pub name: String,
    #[builder(default = ExpertStatus::Active)]
    pub status: ExpertStatus,
    #[builder(default = "installer".to_string(), setter(into))]
    pub provider_type: String,
    #[builder(default, setter(strip_option, into))]
    pub city: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub country: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub slug: Option<String>,
    /// Defaults to the database clock at insert time
    #[builder(default, setter(strip_option))]
    pub created_at: Option<DateTime<Utc>>,
    /// Technology codes (created if missing)
    #[builder(default)]
    pub technologies: Vec<&'static str>,
    /// Building type codes (created if missing)
    #[builder(default)]
    pub building_types: Vec<&'static str>,
    /// Intervention category codes (created with kind "climate" if missing)
    #[builder(default)]
    pub interventions: Vec<&'static str>,
}

impl ExpertSeed {
    pub async fn insert(self, pool: &PgPool) -> Result<ExpertId> {
        let mut conn = pool.acquire().await?;
        self.insert_with(&mut conn).await
    }

    /// Insert on an existing connection or transaction.
    pub async fn insert_with(self, conn: &mut PgConnection) -> Result<ExpertId> {
        let account_id = create_account(&mut *conn).await?;
        let slug = self
            .slug
            .clone()
            .unwrap_or_else(|| format!("{}-{}", slugify(&self.name), Uuid::new_v4().simple()));

        let id: ExpertId = sqlx::query_scalar(
            r#"
            INSERT INTO experts
                (account_id, slug, name, provider_type, city, country, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, clock_timestamp()))
            RETURNING id
            "#,
        )
        .bind(account_id)
        .bind(&slug)
        .bind(&self.name)
        .bind(&self.provider_type)
        .bind(&self.city)
        .bind(&self.country)
        .bind(self.status.as_str())
        .bind(self.created_at)
        .fetch_one(&mut *conn)
        .await?;

        for code in &self.technologies {
            attach_facet(&mut *conn, id, FacetCategory::Technology, code).await?;
        }
        for code in &self.building_types {
            attach_facet(&mut *conn, id, FacetCategory::BuildingType, code).await?;
        }
        for code in &self.interventions {
            attach_facet(&mut *conn, id, FacetCategory::Intervention, code).await?;
        }

        Ok(id)
    }
}

pub async fn create_account(conn: &mut PgConnection) -> Result<AccountId> {
    let id: AccountId = sqlx::query_scalar("INSERT INTO accounts (email) VALUES ($1) RETURNING id")
        .bind(format!("{}@experts.test", Uuid::new_v4().simple()))
        .fetch_one(conn)
        .await?;
    Ok(id)
}

/// Get or create a facet value by code. The label defaults to the code.
pub async fn ensure_facet_value(
    conn: &mut PgConnection,
    category: FacetCategory,
    code: &str,
) -> Result<Uuid> {
    let sql = match category {
        FacetCategory::Intervention => format!(
            "INSERT INTO {} (code, label, kind) VALUES ($1, $1, 'climate') \
             ON CONFLICT (code) DO UPDATE SET code = EXCLUDED.code RETURNING id",
            category.value_table()
        ),
        _ => format!(
            "INSERT INTO {} (code, label) VALUES ($1, $1) \
             ON CONFLICT (code) DO UPDATE SET code = EXCLUDED.code RETURNING id",
            category.value_table()
        ),
    };
    let id: Uuid = sqlx::query_scalar(&sql).bind(code).fetch_one(conn).await?;
    Ok(id)
}

pub async fn attach_facet(
    conn: &mut PgConnection,
    expert_id: ExpertId,
    category: FacetCategory,
    code: &str,
) -> Result<()> {
    let value_id = ensure_facet_value(&mut *conn, category, code).await?;
    let sql = format!(
        "INSERT INTO {} (expert_id, {}) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        category.membership_table(),
        category.value_column()
    );
    sqlx::query(&sql)
        .bind(expert_id)
        .bind(value_id)
        .execute(conn)
        .await?;
    Ok(())
}

/// Add a vocabulary entry with a label distinct from its code.
pub async fn create_facet_value(
    pool: &PgPool,
    category: FacetCategory,
    code: &str,
    label: &str,
    kind: Option<&str>,
) -> Result<Uuid> {
    let sql = match category {
        FacetCategory::Intervention => format!(
            "INSERT INTO {} (code, label, kind) VALUES ($1, $2, COALESCE($3, 'climate')) RETURNING id",
            category.value_table()
        ),
        _ => format!(
            "INSERT INTO {} (code, label) VALUES ($1, $2) RETURNING id",
            category.value_table()
        ),
    };
    let mut query = sqlx::query_scalar::<_, Uuid>(&sql).bind(code).bind(label);
    if category == FacetCategory::Intervention {
        query = query.bind(kind);
    }
    let id: Uuid = query.fetch_one(pool).await?;
    Ok(id)
}

pub async fn set_status(pool: &PgPool, expert_id: ExpertId, status: ExpertStatus) -> Result<()> {
    sqlx::query("UPDATE experts SET status = $2, updated_at = NOW() WHERE id = $1")
        .bind(expert_id)
        .bind(status.as_str())
        .execute(pool)
        .await?;
    Ok(())
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
