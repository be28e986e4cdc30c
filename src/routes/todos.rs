use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::AppError,
    state::AppState,
    store::{TodoChange, TodoDraft},
    todo::{Status, Todo},
};

// Missing required fields deserialize to empty values so the store reports
// them as validation failures instead of a body rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub status: Status,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/todos", post(create_todo).get(list_todos))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .route("/todos/{id}/advance", post(advance_todo))
        .route("/todos/{id}/duplicate", post(duplicate_todo))
        .with_state(state)
}

async fn list_todos(State(state): State<Arc<AppState>>) -> Json<Vec<TodoResponse>> {
    let todos = state.store.list();
    Json(todos.into_iter().map(TodoResponse::from).collect())
}

async fn get_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.store.get(id)?;
    Ok(Json(todo.into()))
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let todo = state.store.create(TodoDraft {
        title: body.title,
        body: body.body,
        due_date: body.due_date,
    })?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    let status = body
        .status
        .ok_or_else(|| AppError::new(StatusCode::BAD_REQUEST, "status is required"))?;
    let todo = state.store.update(
        id,
        TodoChange {
            title: body.title,
            body: body.body,
            status,
            due_date: body.due_date,
        },
    )?;
    Ok(Json(todo.into()))
}

async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn advance_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.store.advance(id)?;
    Ok(Json(todo.into()))
}

async fn duplicate_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let todo = state.store.duplicate(id)?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            body: todo.body,
            status: todo.status,
            created: todo.created,
            updated: todo.updated,
            due_date: todo.due_date,
        }
    }
}
