//! Facet vocabularies and their many-to-many membership tables.
//!
//! Each category is an independent relation between experts and a small,
//! slowly-changing vocabulary. Table and column names are fixed per category
//! and never derived from request input.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::ExpertId;

/// A facet dimension attached to experts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetCategory {
    Technology,
    BuildingType,
    Intervention,
}

impl FacetCategory {
    pub const ALL: [FacetCategory; 3] = [
        FacetCategory::Technology,
        FacetCategory::BuildingType,
        FacetCategory::Intervention,
    ];

    /// Vocabulary table holding `code` and `label`.
    pub fn value_table(self) -> &'static str {
        match self {
            FacetCategory::Technology => "technologies",
            FacetCategory::BuildingType => "building_types",
            FacetCategory::Intervention => "intervention_categories",
        }
    }

    /// Membership table keyed by `expert_id`.
    pub fn membership_table(self) -> &'static str {
        match self {
            FacetCategory::Technology => "expert_technologies",
            FacetCategory::BuildingType => "expert_building_types",
            FacetCategory::Intervention => "expert_interventions",
        }
    }

    /// Column in the membership table referencing the vocabulary row.
    pub fn value_column(self) -> &'static str {
        match self {
            FacetCategory::Technology => "technology_id",
            FacetCategory::BuildingType => "building_type_id",
            FacetCategory::Intervention => "intervention_category_id",
        }
    }

    // Only intervention categories are subdivided by kind
    fn kind_expr(self) -> &'static str {
        match self {
            FacetCategory::Intervention => "f.kind",
            _ => "NULL::text",
        }
    }
}

/// Intervention subdivision, stored in `intervention_categories.kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionKind {
    Climate,
    Study,
    Diagnostic,
}

impl InterventionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterventionKind::Climate => "climate",
            InterventionKind::Study => "study",
            InterventionKind::Diagnostic => "diagnostic",
        }
    }
}

impl std::str::FromStr for InterventionKind {
    type Err = anyhow::Error;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "climate" => Ok(InterventionKind::Climate),
            "study" => Ok(InterventionKind::Study),
            "diagnostic" => Ok(InterventionKind::Diagnostic),
            _ => Err(anyhow::anyhow!("Invalid intervention kind: {}", s)),
        }
    }
}

/// One vocabulary entry of any category.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FacetValue {
    pub id: Uuid,
    pub code: String,
    pub label: String,
    pub kind: Option<String>,
}

impl FacetValue {
    /// List the whole vocabulary of a category, ordered by label then code.
    pub async fn list(category: FacetCategory, pool: &PgPool) -> Result<Vec<Self>> {
        let sql = format!(
            "SELECT f.id, f.code, f.label, {kind} AS kind FROM {table} f ORDER BY f.label, f.code",
            kind = category.kind_expr(),
            table = category.value_table(),
        );
        let values = sqlx::query_as::<_, Self>(&sql).fetch_all(pool).await?;
        Ok(values)
    }

    /// Values of a category held by one expert, ordered by label then code.
    pub async fn find_for_expert(
        category: FacetCategory,
        expert_id: ExpertId,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let sql = format!(
            r#"
            SELECT f.id, f.code, f.label, {kind} AS kind
            FROM {membership} m
            JOIN {table} f ON f.id = m.{column}
            WHERE m.expert_id = $1
            ORDER BY f.label, f.code
            "#,
            kind = category.kind_expr(),
            membership = category.membership_table(),
            table = category.value_table(),
            column = category.value_column(),
        );
        let values = sqlx::query_as::<_, Self>(&sql)
            .bind(expert_id)
            .fetch_all(pool)
            .await?;
        Ok(values)
    }
}
