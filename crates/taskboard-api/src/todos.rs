use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info};

use taskboard_types::api::{
    CreateTodoRequest, ErrorBody, ListTodosQuery, UpdateTodoCategoryRequest,
    UpdateTodoTitleRequest,
};
use taskboard_types::models::Todo;

use crate::error::{AppError, AppResult, Entity};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;
use crate::validate::{optional_id, parse_id, required_text};

const TITLE_REQUIRED: &str = "Title is required";

/// List todos, most recently updated first.
#[utoipa::path(
    get,
    path = "/api/todos",
    params(ListTodosQuery),
    responses(
        (status = 200, description = "Todos, most recently updated first", body = Vec<Todo>),
        (status = 400, description = "Invalid category ID", body = ErrorBody)
    ),
    tag = "Todos"
)]
pub async fn list_todos(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListTodosQuery>,
) -> AppResult<Json<Vec<Todo>>> {
    let category_id = match query.category_id.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(parse_id(raw, Entity::Category)?),
    };

    let todos = state.db.list_todos(category_id)?;
    debug!(count = todos.len(), ?category_id, "Listed todos");
    Ok(Json(todos))
}

/// Create a todo. The category is not required to exist.
#[utoipa::path(
    post,
    path = "/api/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 400, description = "Missing title or invalid category ID", body = ErrorBody)
    ),
    tag = "Todos"
)]
pub async fn create_todo(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTodoRequest>,
) -> AppResult<impl IntoResponse> {
    let title = required_text(req.title, TITLE_REQUIRED)?;
    let category_id = optional_id(req.category_id.as_ref(), Entity::Category)?;

    let todo = state.db.create_todo(&title, category_id)?;
    info!(todo_id = todo.id, ?category_id, "Todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Rename a todo.
#[utoipa::path(
    put,
    path = "/api/todos/{id}/title",
    params(("id" = u64, Path, description = "Todo ID")),
    request_body = UpdateTodoTitleRequest,
    responses(
        (status = 200, description = "Title updated", body = Todo),
        (status = 400, description = "Invalid ID or missing title", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody)
    ),
    tag = "Todos"
)]
pub async fn update_todo_title(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(req): ApiJson<UpdateTodoTitleRequest>,
) -> AppResult<Json<Todo>> {
    let id = parse_id(&id, Entity::Todo)?;
    let title = required_text(req.title, TITLE_REQUIRED)?;

    let todo = state
        .db
        .update_todo_title(id, &title)?
        .ok_or(AppError::NotFound(Entity::Todo))?;
    info!(todo_id = id, "Todo renamed");
    Ok(Json(todo))
}

/// Move a todo to another category, or clear it with `null`.
#[utoipa::path(
    put,
    path = "/api/todos/{id}/category",
    params(("id" = u64, Path, description = "Todo ID")),
    request_body = UpdateTodoCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = Todo),
        (status = 400, description = "Invalid todo or category ID", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody)
    ),
    tag = "Todos"
)]
pub async fn update_todo_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(req): ApiJson<UpdateTodoCategoryRequest>,
) -> AppResult<Json<Todo>> {
    let id = parse_id(&id, Entity::Todo)?;
    let category_id = optional_id(req.category_id.as_ref(), Entity::Category)?;

    let todo = state
        .db
        .update_todo_category(id, category_id)?
        .ok_or(AppError::NotFound(Entity::Todo))?;
    info!(todo_id = id, ?category_id, "Todo recategorized");
    Ok(Json(todo))
}

/// Flip a todo between done and not done.
#[utoipa::path(
    post,
    path = "/api/todos/{id}/toggle",
    params(("id" = u64, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Completion toggled", body = Todo),
        (status = 400, description = "Invalid todo ID", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody)
    ),
    tag = "Todos"
)]
pub async fn toggle_todo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<Todo>> {
    let id = parse_id(&id, Entity::Todo)?;

    let todo = state
        .db
        .toggle_todo(id)?
        .ok_or(AppError::NotFound(Entity::Todo))?;
    info!(todo_id = id, done = todo.done, "Todo toggled");
    Ok(Json(todo))
}

#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    params(("id" = u64, Path, description = "Todo ID")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, description = "Invalid todo ID", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody)
    ),
    tag = "Todos"
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, Entity::Todo)?;

    if !state.db.remove_todo(id)? {
        return Err(AppError::NotFound(Entity::Todo));
    }
    info!(todo_id = id, "Todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
