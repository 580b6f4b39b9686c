use axum::{extract::Extension, Json};

use crate::domains::experts::activities;
use crate::domains::experts::FacetCatalog;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// Facet vocabularies for filter controls
pub async fn facets_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<FacetCatalog>, ApiError> {
    let catalog = activities::list_facets(&state.server_deps).await?;
    Ok(Json(catalog))
}
