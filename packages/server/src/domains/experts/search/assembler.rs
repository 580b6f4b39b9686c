//! Result assembler: fetched rows -> ordered, duplicate-free projections.

use std::collections::HashSet;

use crate::domains::experts::data::ExpertSummary;
use crate::domains::experts::models::Expert;

/// Project candidate rows into search results.
///
/// Keeps the first row seen for each expert id and orders by
/// `(created_at, insertion_seq)`, the same total order the composer asks the
/// database for.
pub fn assemble(rows: Vec<Expert>) -> Vec<ExpertSummary> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut unique: Vec<Expert> = rows
        .into_iter()
        .filter(|expert| seen.insert(expert.id))
        .collect();

    unique.sort_by_key(|expert| (expert.created_at, expert.insertion_seq));
    unique.into_iter().map(ExpertSummary::from).collect()
}
