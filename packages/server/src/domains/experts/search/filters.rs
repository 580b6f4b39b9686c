//! Request parameter normalization.
//!
//! Turns loosely-typed query parameters into a fixed-shape [`SearchFilters`].
//! Normalization is total: anything malformed collapses to "filter absent".

use std::collections::HashMap;

use serde::Serialize;

use crate::domains::experts::models::FacetCategory;

const QUERY_KEYS: &[&str] = &["q"];
const CITY_KEYS: &[&str] = &["city"];
const COUNTRY_KEYS: &[&str] = &["country"];
const TYPE_KEYS: &[&str] = &["type", "types"];
const TECHNOLOGY_KEYS: &[&str] = &["technologies"];
const BUILDING_TYPE_KEYS: &[&str] = &["batiments", "building_types"];
const INTERVENTION_KEYS: &[&str] = &["interventions"];
const INTERVENTION_KIND_KEYS: &[&str] = &["intervention_kinds", "intervention_kind"];

/// Raw query parameters, with repeated keys accumulated in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RawSearchParams {
    values: HashMap<String, Vec<String>>,
}

impl RawSearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    pub fn from_query_string(query: &str) -> Self {
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    fn values_for<'a>(&'a self, keys: &'a [&'a str]) -> impl Iterator<Item = &'a str> + 'a {
        keys.iter()
            .filter_map(|key| self.values.get(*key))
            .flatten()
            .map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawSearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Canonical search filters.
///
/// `None` or an empty list is the only way a filter expresses "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchFilters {
    pub query: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub provider_types: Vec<String>,
    pub technologies: Vec<String>,
    pub building_types: Vec<String>,
    pub interventions: Vec<String>,
    /// Kinds of intervention category (`climate`, `study`, `diagnostic`)
    pub intervention_kinds: Vec<String>,
}

impl SearchFilters {
    pub fn normalize(raw: &RawSearchParams) -> Self {
        Self {
            query: scalar(raw, QUERY_KEYS),
            city: scalar(raw, CITY_KEYS),
            country: scalar(raw, COUNTRY_KEYS),
            provider_types: multi(raw, TYPE_KEYS),
            technologies: multi(raw, TECHNOLOGY_KEYS),
            building_types: multi(raw, BUILDING_TYPE_KEYS),
            interventions: multi(raw, INTERVENTION_KEYS),
            intervention_kinds: multi(raw, INTERVENTION_KIND_KEYS),
        }
    }

    /// Requested values for a facet category.
    pub fn facet(&self, category: FacetCategory) -> &[String] {
        match category {
            FacetCategory::Technology => &self.technologies,
            FacetCategory::BuildingType => &self.building_types,
            FacetCategory::Intervention => &self.interventions,
        }
    }
}

// First non-blank value wins
fn scalar(raw: &RawSearchParams, keys: &[&str]) -> Option<String> {
    raw.values_for(keys)
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(String::from)
}

fn multi(raw: &RawSearchParams, keys: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in raw.values_for(keys).flat_map(|v| v.split(',')) {
        let item = item.trim();
        if !item.is_empty() && !out.iter().any(|seen| seen == item) {
            out.push(item.to_string());
        }
    }
    out
}
