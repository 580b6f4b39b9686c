//! Expert activities - read-only entry points used by the HTTP layer

pub mod queries;

pub use queries::*;
