//! Expert query activities
//!
//! Read-only entry points. None of them is restricted: everything they return
//! has already passed the eligibility gate.

use anyhow::Result;
use tracing::{error, info};

use crate::domains::experts::data::{ExpertProfile, ExpertSummary, FacetCatalog};
use crate::domains::experts::models::{Expert, FacetCategory, FacetValue};
use crate::domains::experts::search::{self, RawSearchParams, SearchError, SearchFilters};
use crate::kernel::ServerDeps;

/// Search active experts matching the request parameters
pub async fn search_experts(
    params: &RawSearchParams,
    deps: &ServerDeps,
) -> Result<Vec<ExpertSummary>, SearchError> {
    let filters = SearchFilters::normalize(params);

    info!(
        query = ?filters.query,
        city = ?filters.city,
        country = ?filters.country,
        provider_types = ?filters.provider_types,
        technologies = ?filters.technologies,
        building_types = ?filters.building_types,
        interventions = ?filters.interventions,
        intervention_kinds = ?filters.intervention_kinds,
        "Searching experts"
    );

    match search::search(&filters, deps.search_max_results, &deps.db_pool).await {
        Ok(results) => {
            info!(count = results.len(), "Expert search complete");
            Ok(results)
        }
        Err(e) => {
            error!(error = %e, "Expert search failed");
            Err(e)
        }
    }
}

/// Get the public profile of an active expert by slug
pub async fn get_expert_profile(slug: &str, deps: &ServerDeps) -> Result<Option<ExpertProfile>> {
    info!(slug = %slug, "Getting expert profile");

    let pool = &deps.db_pool;
    let Some(expert) = Expert::find_active_by_slug(slug, pool).await? else {
        return Ok(None);
    };

    let technologies = FacetValue::find_for_expert(FacetCategory::Technology, expert.id, pool).await?;
    let building_types =
        FacetValue::find_for_expert(FacetCategory::BuildingType, expert.id, pool).await?;
    let interventions =
        FacetValue::find_for_expert(FacetCategory::Intervention, expert.id, pool).await?;

    Ok(Some(ExpertProfile::new(
        expert,
        technologies,
        building_types,
        interventions,
    )))
}

/// List every facet vocabulary
pub async fn list_facets(deps: &ServerDeps) -> Result<FacetCatalog> {
    info!("Listing facet vocabularies");

    let pool = &deps.db_pool;
    let technologies = FacetValue::list(FacetCategory::Technology, pool).await?;
    let building_types = FacetValue::list(FacetCategory::BuildingType, pool).await?;
    let interventions = FacetValue::list(FacetCategory::Intervention, pool).await?;

    Ok(FacetCatalog {
        technologies: technologies.into_iter().map(Into::into).collect(),
        building_types: building_types.into_iter().map(Into::into).collect(),
        interventions: interventions.into_iter().map(Into::into).collect(),
    })
}
