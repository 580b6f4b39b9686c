// Business domains
pub mod experts;
