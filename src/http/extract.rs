//! Request extractors that report failures as [`ApiError`].

use super::ApiError;
use crate::board::domain::BoardId;
use crate::task::domain::TaskId;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use std::str::FromStr;

/// JSON body whose rejections render as `400 {"msg": ...}`.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

pub(super) fn task_id(raw: &str) -> Result<TaskId, ApiError> {
    Ok(TaskId::from_str(raw)?)
}

pub(super) fn board_id(raw: &str) -> Result<BoardId, ApiError> {
    Ok(BoardId::from_str(raw)?)
}
