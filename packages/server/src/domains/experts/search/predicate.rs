//! Facet predicate builder.
//!
//! Every constrained filter category becomes exactly one [`Predicate`]; an
//! unconstrained category produces nothing. Predicates render as boolean SQL
//! over the `experts e` row and never join rows into the outer select.

use sqlx::{Postgres, QueryBuilder};

use crate::domains::experts::models::{FacetCategory, InterventionKind};
use crate::domains::experts::search::SearchFilters;

/// A single-category constraint on the candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive substring match on the display name.
    NameContains(String),
    /// Case-insensitive exact match on the city.
    CityEquals(String),
    /// Case-insensitive exact match on the country.
    CountryEquals(String),
    /// Provider type is one of the listed codes.
    ProviderTypeIn(Vec<String>),
    /// At least one membership row in `category` whose value is listed.
    /// Values are held as requested; code, label and value are all folded by
    /// the database, so both sides use the same locale rules.
    HasFacet {
        category: FacetCategory,
        values: Vec<String>,
    },
    /// At least one intervention category of one of the listed kinds.
    /// An empty list matches nothing.
    InterventionKindIn(Vec<InterventionKind>),
}

impl Predicate {
    /// Build the predicates for every constrained category, in a fixed order.
    pub fn from_filters(filters: &SearchFilters) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(query) = &filters.query {
            predicates.push(Predicate::NameContains(query.clone()));
        }
        if let Some(city) = &filters.city {
            predicates.push(Predicate::CityEquals(city.clone()));
        }
        if let Some(country) = &filters.country {
            predicates.push(Predicate::CountryEquals(country.clone()));
        }
        if !filters.provider_types.is_empty() {
            predicates.push(Predicate::ProviderTypeIn(filters.provider_types.clone()));
        }
        for category in FacetCategory::ALL {
            let values = filters.facet(category);
            if !values.is_empty() {
                predicates.push(Predicate::HasFacet {
                    category,
                    values: values.to_vec(),
                });
            }
        }
        if !filters.intervention_kinds.is_empty() {
            // Unknown kinds are dropped but still constrain
            let kinds = filters
                .intervention_kinds
                .iter()
                .filter_map(|kind| kind.parse().ok())
                .collect();
            predicates.push(Predicate::InterventionKindIn(kinds));
        }

        predicates
    }

    /// Append this predicate as a parenthesized boolean expression.
    pub fn push_sql<'args>(&self, query: &mut QueryBuilder<'args, Postgres>) {
        query.push("(");
        match self {
            Predicate::NameContains(text) => {
                query
                    .push("e.name ILIKE ")
                    .push_bind(format!("%{}%", escape_like(text)));
            }
            Predicate::CityEquals(city) => {
                query
                    .push("lower(e.city) = lower(")
                    .push_bind(city.clone())
                    .push(")");
            }
            Predicate::CountryEquals(country) => {
                query
                    .push("lower(e.country) = lower(")
                    .push_bind(country.clone())
                    .push(")");
            }
            Predicate::ProviderTypeIn(types) => {
                query
                    .push("e.provider_type = ANY(")
                    .push_bind(types.clone())
                    .push(")");
            }
            Predicate::HasFacet { category, values } => {
                query.push(format!(
                    "EXISTS (SELECT 1 FROM {membership} m JOIN {table} f ON f.id = m.{column} \
                     JOIN unnest(",
                    membership = category.membership_table(),
                    table = category.value_table(),
                    column = category.value_column(),
                ));
                query.push_bind(values.clone()).push(
                    "::text[]) AS wanted(value) \
                     ON lower(f.code) = lower(wanted.value) OR lower(f.label) = lower(wanted.value) \
                     WHERE m.expert_id = e.id)",
                );
            }
            Predicate::InterventionKindIn(kinds) => {
                let category = FacetCategory::Intervention;
                query.push(format!(
                    "EXISTS (SELECT 1 FROM {membership} m JOIN {table} f ON f.id = m.{column} \
                     WHERE m.expert_id = e.id AND f.kind = ANY(",
                    membership = category.membership_table(),
                    table = category.value_table(),
                    column = category.value_column(),
                ));
                let kinds: Vec<String> = kinds.iter().map(|k| k.as_str().to_string()).collect();
                query.push_bind(kinds).push("))");
            }
        }
        query.push(")");
    }
}

/// Escape LIKE metacharacters so user text matches literally.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
