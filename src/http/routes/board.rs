//! `/api/v1/board` routes.

use crate::board::domain::ColorTheme;
use crate::http::{ApiError, ApiJson, AppState, extract};
use crate::user::domain::UserId;
use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use serde_json::{Value, json};

pub(in crate::http) fn router() -> Router<AppState> {
    Router::new()
        .route("/allBoards", get(all_boards))
        .route("/addBoard", post(add_board))
        .route("/oneBoard/{id}", get(one_board))
        .route("/updateName/{id}", put(update_name))
        .route("/delete/{id}", delete(delete_board))
        .route("/createFromTemplate/{template_id}", post(create_from_template))
        .route("/updateAccess/{id}", put(update_access))
        .route("/stats/{id}", get(stats))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddBoardBody {
    name: String,
    color_theme: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RenameBody {
    name: String,
}

async fn all_boards(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
) -> Result<Json<Value>, ApiError> {
    let listing = state.boards.list_all(&owner).await?;
    Ok(Json(json!({
        "templateBoards": listing.templates,
        "userBoards": listing.owned,
    })))
}

async fn add_board(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    ApiJson(body): ApiJson<AddBoardBody>,
) -> Result<Json<Value>, ApiError> {
    let theme = body
        .color_theme
        .as_deref()
        .map(ColorTheme::try_from)
        .transpose()
        .map_err(|err| ApiError::validation(&err))?
        .unwrap_or_default();
    let board = state.boards.create(&owner, &body.name, theme).await?;
    Ok(Json(json!({ "board": board })))
}

async fn one_board(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let board = state
        .boards
        .find_visible(&owner, extract::board_id(&id)?)
        .await?;
    Ok(Json(json!({ "board": board })))
}

async fn update_name(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<RenameBody>,
) -> Result<Json<Value>, ApiError> {
    let board = state
        .boards
        .rename(&owner, extract::board_id(&id)?, &body.name)
        .await?;
    Ok(Json(json!({ "board": board })))
}

async fn delete_board(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deletion = state.boards.delete(&owner, extract::board_id(&id)?).await?;
    Ok(Json(json!({
        "msg": "Board and associated todos deleted successfully",
        "deletedBoard": deletion.deleted_boards,
        "deletedTodos": deletion.deleted_tasks,
    })))
}

async fn create_from_template(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(template_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let board = state
        .boards
        .create_from_template(&owner, extract::board_id(&template_id)?)
        .await?;
    Ok(Json(json!({ "board": board })))
}

async fn update_access(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let board = state
        .boards
        .record_access(&owner, extract::board_id(&id)?)
        .await?;
    Ok(Json(json!({ "board": board })))
}

async fn stats(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let stats = state.boards.stats(&owner, extract::board_id(&id)?).await?;
    Ok(Json(json!({ "stats": stats })))
}
