pub mod expert;

pub use expert::*;
