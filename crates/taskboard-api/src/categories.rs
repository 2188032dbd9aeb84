use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info, warn};

use taskboard_store::CategoryRemoval;
use taskboard_types::api::{CategoryRequest, ErrorBody};
use taskboard_types::models::Category;

use crate::error::{AppError, AppResult, Entity};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use crate::validate::{parse_id, required_text};

const NAME_REQUIRED: &str = "Category name is required";

/// List categories sorted by name.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Categories sorted by name", body = Vec<Category>)
    ),
    tag = "Categories"
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.db.list_categories()?;
    debug!(count = categories.len(), "Listed categories");
    Ok(Json(categories))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Missing name", body = ErrorBody)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CategoryRequest>,
) -> AppResult<impl IntoResponse> {
    let name = required_text(req.name, NAME_REQUIRED)?;

    let category = state.db.create_category(&name, req.color.as_deref())?;
    info!(category_id = category.id, name = %category.name, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// Replace a category's name and color. Omitting `color` clears it.
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = u64, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, description = "Invalid ID or missing name", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody)
    ),
    tag = "Categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(req): ApiJson<CategoryRequest>,
) -> AppResult<Json<Category>> {
    let id = parse_id(&id, Entity::Category)?;
    let name = required_text(req.name, NAME_REQUIRED)?;

    let category = state
        .db
        .update_category(id, &name, req.color.as_deref())?
        .ok_or(AppError::NotFound(Entity::Category))?;
    info!(category_id = id, "Category updated");
    Ok(Json(category))
}

/// Delete a category. Refused while any todo still references it.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = u64, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Invalid ID, or todos still reference the category", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id, Entity::Category)?;

    match state.db.remove_category(id)? {
        CategoryRemoval::Removed => {
            info!(category_id = id, "Category deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        CategoryRemoval::NotFound => Err(AppError::NotFound(Entity::Category)),
        CategoryRemoval::InUse { todos } => {
            warn!(category_id = id, todos, "Refusing to delete category with todos");
            Err(AppError::CategoryInUse)
        }
    }
}
