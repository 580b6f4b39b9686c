use axum::{
    extract::{Extension, Path, RawQuery},
    Json,
};

use crate::domains::experts::activities;
use crate::domains::experts::search::RawSearchParams;
use crate::domains::experts::{ExpertProfile, ExpertSummary};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// Faceted search over active experts
///
/// `GET /api/experts/search?q=&city=&country=&type=&technologies=&batiments=&interventions=&intervention_kinds=`
///
/// Multi-valued parameters may be comma-joined or repeated.
pub async fn search_experts_handler(
    Extension(state): Extension<AxumAppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<ExpertSummary>>, ApiError> {
    let params = RawSearchParams::from_query_string(query.as_deref().unwrap_or_default());

    let results = activities::search_experts(&params, &state.server_deps).await?;

    Ok(Json(results))
}

/// Public profile of an active expert
pub async fn expert_profile_handler(
    Extension(state): Extension<AxumAppState>,
    Path(slug): Path<String>,
) -> Result<Json<ExpertProfile>, ApiError> {
    activities::get_expert_profile(&slug, &state.server_deps)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Expert"))
}
