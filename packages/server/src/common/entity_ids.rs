//! Typed ID definitions for directory entities.

pub use super::id::Id;

/// Marker type for Account entities (credential holders).
pub struct Account;

/// Marker type for Expert entities (listed service providers).
pub struct Expert;

/// Typed ID for Account entities.
pub type AccountId = Id<Account>;

/// Typed ID for Expert entities.
pub type ExpertId = Id<Expert>;
