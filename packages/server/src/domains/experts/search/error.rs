use thiserror::Error;

/// Terminal failure of a search request.
///
/// Only the database read can fail; everything before it is total.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("search read failed: {0}")]
    Persistence(#[from] sqlx::Error),
}
