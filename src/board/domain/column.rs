//! Column entries of a board catalog.

use super::ColumnId;
use serde::{Deserialize, Serialize};

/// A named column of a board, displayed in ascending `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column identifier referenced by tasks.
    pub id: ColumnId,
    /// Human-readable column title.
    pub name: String,
    /// One-based display order.
    pub order: u32,
}

impl Column {
    /// Builds a column list from `(id, name)` pairs, numbering them from one.
    pub(crate) fn layout(entries: &[(&str, &str)]) -> Vec<Self> {
        entries
            .iter()
            .zip(1_u32..)
            .filter_map(|((id, name), order)| {
                ColumnId::new(*id).ok().map(|column_id| Self {
                    id: column_id,
                    name: (*name).to_owned(),
                    order,
                })
            })
            .collect()
    }
}
