//! Mapping from service errors to HTTP responses.

use crate::board::domain::BoardDomainError;
use crate::board::services::BoardCatalogError;
use crate::task::domain::TaskDomainError;
use crate::task::services::{ReorderError, TaskLifecycleError};
use crate::user::services::UserProfileError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;
use tracing::error;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error returned by handlers, rendered as `{"msg": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed. Rendered as `400`.
    #[error("{0}")]
    Validation(String),
    /// The resource does not exist for the caller. Rendered as `404`.
    #[error("{0}")]
    NotFound(&'static str),
    /// A store or collaborator failed. Rendered as `500`; the cause is logged.
    #[error("internal error: {0}")]
    Internal(Box<dyn StdError + Send + Sync>),
}

impl ApiError {
    /// Builds a validation error from any displayable cause.
    #[must_use]
    pub fn validation(cause: &impl fmt::Display) -> Self {
        Self::Validation(cause.to_string())
    }

    fn internal(cause: impl StdError + Send + Sync + 'static) -> Self {
        Self::Internal(Box::new(cause))
    }

    /// Status code this error renders with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            Self::Validation(msg) => msg,
            Self::NotFound(msg) => msg.to_owned(),
            Self::Internal(cause) => {
                error!(error = %cause, "request failed");
                INTERNAL_MESSAGE.to_owned()
            }
        };
        (status, Json(json!({ "msg": msg }))).into_response()
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        Self::validation(&err)
    }
}

impl From<BoardDomainError> for ApiError {
    fn from(err: BoardDomainError) -> Self {
        Self::validation(&err)
    }
}

impl From<ReorderError> for ApiError {
    fn from(err: ReorderError) -> Self {
        match err {
            ReorderError::NotFound(_) => Self::NotFound("Todo not found"),
            ReorderError::Domain(_)
            | ReorderError::Column(_)
            | ReorderError::BoardMismatch { .. }
            | ReorderError::UnknownColumn { .. } => Self::validation(&err),
            ReorderError::Catalog(_) | ReorderError::Repository(_) => Self::internal(err),
        }
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::NotFound(_) => Self::NotFound("Todo not found"),
            TaskLifecycleError::Domain(_) | TaskLifecycleError::Column(_) => Self::validation(&err),
            TaskLifecycleError::Repository(_) => Self::internal(err),
        }
    }
}

impl From<BoardCatalogError> for ApiError {
    fn from(err: BoardCatalogError) -> Self {
        match err {
            BoardCatalogError::NotFound(_) => Self::NotFound("Board not found"),
            BoardCatalogError::TemplateNotFound(_) => Self::NotFound("template not found"),
            BoardCatalogError::Domain(_) => Self::validation(&err),
            BoardCatalogError::Repository(_) | BoardCatalogError::Tasks(_) => Self::internal(err),
        }
    }
}

impl From<UserProfileError> for ApiError {
    fn from(err: UserProfileError) -> Self {
        match err {
            UserProfileError::NotFound(_) => Self::NotFound("User not found"),
            UserProfileError::Domain(_) | UserProfileError::AlreadyExists(_) => {
                Self::validation(&err)
            }
            UserProfileError::Repository(_) => Self::internal(err),
        }
    }
}
