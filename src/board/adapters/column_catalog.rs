//! Column catalog backed by board storage.

use crate::board::domain::{BoardId, ColumnId};
use crate::board::ports::BoardRepository;
use crate::task::ports::{ColumnCatalog, ColumnCatalogError};
use crate::user::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
impl<T> ColumnCatalog for T
where
    T: BoardRepository + ?Sized,
{
    async fn column_ids(
        &self,
        board_id: BoardId,
        owner: &UserId,
    ) -> Result<Option<Vec<ColumnId>>, ColumnCatalogError> {
        let board = self
            .find_by_id(board_id)
            .await
            .map_err(|err| ColumnCatalogError(Arc::new(err)))?;
        Ok(board
            .filter(|board| board.is_visible_to(owner))
            .map(|board| board.columns().iter().map(|column| column.id.clone()).collect()))
    }
}
