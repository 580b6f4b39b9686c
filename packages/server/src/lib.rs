// Expert Directory - API Core
//
// Public directory of service providers ("experts") with faceted search over
// technologies, building types and intervention categories. Only active
// experts are ever readable through this crate.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
