//! Column catalog port consulted before moving tasks.

use crate::board::domain::{BoardId, ColumnId};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Source of truth for the column set of a board.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ColumnCatalog: Send + Sync {
    /// Returns the column identifiers of `board_id` as seen by `owner`.
    ///
    /// Returns `None` when the board does not exist or is not visible to
    /// `owner`.
    async fn column_ids(
        &self,
        board_id: BoardId,
        owner: &UserId,
    ) -> Result<Option<Vec<ColumnId>>, ColumnCatalogError>;
}

/// Failure while reading the column catalog.
#[derive(Debug, Clone, Error)]
#[error("column catalog unavailable: {0}")]
pub struct ColumnCatalogError(pub Arc<dyn std::error::Error + Send + Sync>);
