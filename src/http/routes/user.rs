//! `/api/v1/user` routes.

use crate::http::{ApiError, ApiJson, AppState};
use crate::user::domain::UserId;
use crate::user::services::{CreateProfileRequest, UpdateProfileRequest, UserProfileError};
use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Deserialize;
use serde_json::{Value, json};

pub(in crate::http) fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create))
        .route("/update", put(update))
        .route("/userInfo", get(info))
        .route("/updateAvatar", put(update_avatar))
}

#[derive(Debug, Deserialize)]
struct CreateUserBody {
    email: String,
    name: Option<String>,
    avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateUserBody {
    name: Option<String>,
    avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AvatarBody {
    avatar: String,
}

async fn create(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    ApiJson(body): ApiJson<CreateUserBody>,
) -> Result<Response, ApiError> {
    let mut request = CreateProfileRequest::new(body.email);
    if let Some(name) = body.name {
        request = request.with_name(name);
    }
    if let Some(avatar) = body.avatar {
        request = request.with_avatar(avatar);
    }

    match state.users.create(&user_id, request).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(json!({ "msg": "User created successfully", "user": user })),
        )
            .into_response()),
        Err(UserProfileError::AlreadyExists(existing)) => Ok((
            StatusCode::CONFLICT,
            Json(json!({ "msg": "User already exists", "user": existing })),
        )
            .into_response()),
        Err(err) => Err(err.into()),
    }
}

async fn update(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    ApiJson(body): ApiJson<UpdateUserBody>,
) -> Result<Json<Value>, ApiError> {
    let request = UpdateProfileRequest {
        name: body.name,
        avatar: body.avatar,
    };
    state.users.update(&user_id, request).await?;
    Ok(Json(json!({ "msg": "Updated" })))
}

async fn info(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
) -> Result<Json<Value>, ApiError> {
    let user = state.users.info(&user_id).await?;
    Ok(Json(json!({ "user": user })))
}

async fn update_avatar(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    ApiJson(body): ApiJson<AvatarBody>,
) -> Result<Json<Value>, ApiError> {
    let request = UpdateProfileRequest {
        avatar: Some(body.avatar),
        ..UpdateProfileRequest::default()
    };
    state.users.update(&user_id, request).await?;
    Ok(Json(json!({ "msg": "Avatar updated successfully" })))
}
