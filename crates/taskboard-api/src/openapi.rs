use utoipa::OpenApi;

use taskboard_types::api::{
    CategoryRequest, CreateTodoRequest, ErrorBody, HealthResponse, UpdateTodoCategoryRequest,
    UpdateTodoTitleRequest,
};
use taskboard_types::models::{Category, Todo};

use crate::{categories, health, todos};

/// Where the generated document is served.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
/// Where Swagger UI is mounted.
pub const SWAGGER_UI_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard API",
        description = "REST API for managing todos and their categories"
    ),
    paths(
        health::health,
        todos::list_todos,
        todos::create_todo,
        todos::update_todo_title,
        todos::update_todo_category,
        todos::toggle_todo,
        todos::delete_todo,
        categories::list_categories,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
    ),
    components(schemas(
        Todo,
        Category,
        ErrorBody,
        HealthResponse,
        CreateTodoRequest,
        UpdateTodoTitleRequest,
        UpdateTodoCategoryRequest,
        CategoryRequest,
    )),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Todos", description = "Todo management"),
        (name = "Categories", description = "Category management")
    )
)]
pub struct ApiDoc;
