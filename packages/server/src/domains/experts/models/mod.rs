pub mod expert;
pub mod facet;

pub use expert::*;
pub use facet::*;
