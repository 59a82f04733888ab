use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::error::AppResult;
use crate::models::{DeletedTodo, Todo, TodoId};
use crate::state::AppState;

pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Todo CRUD API is running",
        "endpoints": {
            "GET /todos": "Get all todos",
            "GET /todos/:id": "Get a single todo",
            "POST /todos": "Create a new todo",
            "PUT /todos/:id": "Update a todo",
            "DELETE /todos/:id": "Delete a todo"
        }
    }))
}

pub async fn list_todos(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = state.store.list().await?;
    Ok(Json(todos))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> AppResult<Json<Todo>> {
    let todo = state.store.get(id).await?;
    Ok(Json(todo))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let todo = state.store.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(payload): Json<Value>,
) -> AppResult<Json<Todo>> {
    let todo = state.store.update(id, &payload).await?;
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> AppResult<Json<DeletedTodo>> {
    let todo = state.store.delete(id).await?;
    Ok(Json(DeletedTodo {
        message: "Todo deleted successfully".to_string(),
        todo,
    }))
}
