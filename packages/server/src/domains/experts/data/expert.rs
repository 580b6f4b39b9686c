use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::ExpertId;
use crate::domains::experts::models::{Expert, FacetValue};

/// Search result projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertSummary {
    pub id: ExpertId,
    pub slug: String,
    pub name: String,
    pub provider_type: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<Expert> for ExpertSummary {
    fn from(expert: Expert) -> Self {
        Self {
            id: expert.id,
            slug: expert.slug,
            name: expert.name,
            provider_type: expert.provider_type,
            city: expert.city,
            country: expert.country,
            postal_code: expert.postal_code,
            latitude: expert.latitude,
            longitude: expert.longitude,
            created_at: expert.created_at,
        }
    }
}

/// Facet value as shown to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValueData {
    pub code: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl From<FacetValue> for FacetValueData {
    fn from(value: FacetValue) -> Self {
        Self {
            code: value.code,
            label: value.label,
            kind: value.kind,
        }
    }
}

/// Public profile of a single active expert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertProfile {
    pub id: ExpertId,
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

    // Facets
    pub technologies: Vec<FacetValueData>,
    pub building_types: Vec<FacetValueData>,
    pub interventions: Vec<FacetValueData>,

    pub created_at: DateTime<Utc>,
}

impl ExpertProfile {
    pub fn new(
        expert: Expert,
        technologies: Vec<FacetValue>,
        building_types: Vec<FacetValue>,
        interventions: Vec<FacetValue>,
    ) -> Self {
        Self {
            id: expert.id,
            slug: expert.slug,
            name: expert.name,
            provider_type: expert.provider_type,
            country: expert.country,
            city: expert.city,
            postal_code: expert.postal_code,
            street_address: expert.street_address,
            latitude: expert.latitude,
            longitude: expert.longitude,
            phone: expert.phone,
            email: expert.email,
            website: expert.website,
            technologies: technologies.into_iter().map(Into::into).collect(),
            building_types: building_types.into_iter().map(Into::into).collect(),
            interventions: interventions.into_iter().map(Into::into).collect(),
            created_at: expert.created_at,
        }
    }
}

/// Full facet vocabulary, for building filter controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetCatalog {
    pub technologies: Vec<FacetValueData>,
    pub building_types: Vec<FacetValueData>,
    pub interventions: Vec<FacetValueData>,
}
