//! `/api/v1/todo` routes, including the move and reorder endpoints.

use crate::http::{ApiError, ApiJson, AppState, extract};
use crate::task::domain::{Position, Task, TaskId, TaskMove, TaskPatch};
use crate::task::services::{CreateTaskRequest, MoveTaskRequest, PositionUpdate};
use crate::user::domain::UserId;
use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};

pub(in crate::http) fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add))
        .route("/update/{id}", put(update))
        .route("/board/{board_id}/todos", get(list_board))
        .route(
            "/board/{board_id}/columns/{column_id}/todos",
            get(list_column),
        )
        .route("/updateColumn/{id}", put(update_column))
        .route("/delete/{id}", delete(delete_todo))
        .route("/move/{id}", put(move_todo))
        .route("/reorder", put(reorder))
        .route("/search/{board_id}", post(search))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddTodoBody {
    title: String,
    description: Option<String>,
    time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    kind: Option<String>,
    priority: Option<String>,
    column_id: String,
    board_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTodoBody {
    title: Option<String>,
    description: Option<String>,
    time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    kind: Option<String>,
    priority: Option<String>,
    column_id: Option<String>,
    position: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateColumnBody {
    column_id: String,
    position: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoveBody {
    new_column_id: String,
    new_position: i64,
    board_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReorderBody {
    todo_updates: Vec<TodoUpdate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodoUpdate {
    todo_id: String,
    new_position: i64,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    title: Option<String>,
}

async fn add(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    ApiJson(body): ApiJson<AddTodoBody>,
) -> Result<Json<Value>, ApiError> {
    let board_id = extract::board_id(&body.board_id)?;
    let mut request = CreateTaskRequest::new(board_id, body.column_id, body.title);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(priority) = body.priority {
        request = request.with_priority(priority);
    }
    if let Some(kind) = body.kind {
        request = request.with_kind(kind);
    }
    if let Some(time) = body.time {
        request = request.with_time(time);
    }

    let todo = state.tasks.create(&owner, request).await?;
    Ok(Json(json!({ "msg": "todo added", "todo": todo })))
}

async fn update(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateTodoBody>,
) -> Result<Json<Value>, ApiError> {
    let current = state.tasks.find(&owner, extract::task_id(&id)?).await?;
    let column_id = body.column_id.filter(|column| !column.is_empty());
    let placement = plan_placement(&state, &owner, &current, column_id, body.position).await?;
    let patch = TaskPatch {
        title: body.title,
        description: body.description,
        priority: body.priority,
        kind: body.kind,
        time: body.time,
    };
    let patched = state
        .tasks
        .update_details(&owner, current.id(), &patch)
        .await?;
    let todo = match placement {
        Some(task_move) => state.reorder.apply_move(&task_move).await?,
        None => patched,
    };
    Ok(Json(json!({ "msg": "Info updated", "todo": todo })))
}

async fn update_column(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateColumnBody>,
) -> Result<Json<Value>, ApiError> {
    let current = state.tasks.find(&owner, extract::task_id(&id)?).await?;
    let placement =
        plan_placement(&state, &owner, &current, Some(body.column_id), body.position).await?;
    let todo = match placement {
        Some(task_move) => state.reorder.apply_move(&task_move).await?,
        None => current,
    };
    Ok(Json(json!({ "msg": "todo updated", "todo": todo })))
}

/// Validates a placement change against the reindexing engine without
/// writing. A missing column or position keeps the task's current value;
/// when both are missing there is nothing to move.
async fn plan_placement(
    state: &AppState,
    owner: &UserId,
    task: &Task,
    column_id: Option<String>,
    position: Option<i64>,
) -> Result<Option<TaskMove>, ApiError> {
    if column_id.is_none() && position.is_none() {
        return Ok(None);
    }
    let request = MoveTaskRequest::new(
        column_id.unwrap_or_else(|| task.column_id().as_str().to_owned()),
        position.unwrap_or_else(|| i64::from(task.position().value())),
    );
    Ok(Some(state.reorder.plan_move(owner, task.id(), request).await?))
}

async fn list_board(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(board_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let todos = state
        .tasks
        .list_board(&owner, extract::board_id(&board_id)?)
        .await?;
    Ok(Json(json!({ "todos": todos })))
}

async fn list_column(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path((board_id, column_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let todos = state
        .reorder
        .list_by_column(&owner, extract::board_id(&board_id)?, &column_id)
        .await?;
    Ok(Json(json!({ "todos": todos })))
}

async fn delete_todo(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.tasks.delete(&owner, extract::task_id(&id)?).await?;
    Ok(Json(json!({ "msg": "todo deleted" })))
}

async fn move_todo(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<MoveBody>,
) -> Result<Json<Value>, ApiError> {
    let task_id = extract::task_id(&id)?;
    let request = MoveTaskRequest::new(body.new_column_id, body.new_position)
        .on_board(extract::board_id(&body.board_id)?);
    let todo = state.reorder.move_task(&owner, task_id, request).await?;
    Ok(Json(json!({ "msg": "todo moved successfully", "todo": todo })))
}

async fn reorder(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    ApiJson(body): ApiJson<ReorderBody>,
) -> Result<Json<Value>, ApiError> {
    // An id that does not parse cannot name a task; it reports `null` like
    // any other unknown id. Its position is still validated.
    let mut updates = Vec::with_capacity(body.todo_updates.len());
    for update in &body.todo_updates {
        match update.todo_id.parse::<TaskId>() {
            Ok(task_id) => updates.push(Some(PositionUpdate::new(task_id, update.new_position))),
            Err(_) => {
                Position::try_from(update.new_position)?;
                updates.push(None);
            }
        }
    }
    let resolved: Vec<PositionUpdate> = updates.iter().flatten().copied().collect();
    let mut applied = state
        .reorder
        .reorder_batch(&owner, &resolved)
        .await?
        .into_iter();
    let todos: Vec<Option<Task>> = updates
        .iter()
        .map(|update| update.as_ref().and_then(|_| applied.next().flatten()))
        .collect();
    Ok(Json(json!({ "msg": "todos reordered successfully", "todos": todos })))
}

async fn search(
    State(state): State<AppState>,
    Extension(owner): Extension<UserId>,
    Path(board_id): Path<String>,
    ApiJson(body): ApiJson<SearchBody>,
) -> Result<Json<Value>, ApiError> {
    let Some(term) = body.title.filter(|title| !title.trim().is_empty()) else {
        return Err(ApiError::Validation("Search term is required.".to_owned()));
    };
    let todos = state
        .tasks
        .search_titles(&owner, extract::board_id(&board_id)?, &term)
        .await?;
    Ok(Json(json!({ "todos": todos })))
}
