// HTTP routes
pub mod experts;
pub mod facets;
pub mod health;

pub use experts::*;
pub use facets::*;
pub use health::*;
