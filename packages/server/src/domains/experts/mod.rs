//! Experts domain - public directory of service providers

pub mod activities;
pub mod data;
pub mod models;
pub mod search;

// Re-export commonly used types
pub use data::{ExpertProfile, ExpertSummary, FacetCatalog, FacetValueData};
pub use models::{Expert, ExpertStatus, FacetCategory, FacetValue};
pub use search::{RawSearchParams, SearchError, SearchFilters};
