use std::any::Any;

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    http::{HeaderValue, Method, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower::timeout::{TimeoutLayer, error::Elapsed};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use taskboard_types::api::ErrorBody;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::state::AppState;
use crate::{categories, health, todos};

/// Every JSON route, without middleware.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/todos", get(todos::list_todos).post(todos::create_todo))
        .route("/api/todos/{id}", delete(todos::delete_todo))
        .route("/api/todos/{id}/title", put(todos::update_todo_title))
        .route("/api/todos/{id}/category", put(todos::update_todo_category))
        .route("/api/todos/{id}/toggle", post(todos::toggle_todo))
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
}

/// The full application: routes, API docs, 404 handling and the middleware
/// stack. `main` and the integration tests both build the app through here.
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let app = api_routes()
        .with_state(state)
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found);
    with_middleware(app, config)
}

/// Panic recovery, request timeout, tracing and CORS around any router.
pub fn with_middleware(app: Router, config: &ServerConfig) -> Router {
    // Applied bottom-up: CORS sees the request first.
    app.layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
}

async fn not_found() -> AppError {
    AppError::RouteNotFound
}

async fn handle_timeout(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        warn!("Request timed out");
        AppError::Timeout
    } else {
        AppError::Internal(anyhow::anyhow!("Unhandled middleware error: {err}"))
    }
}

/// Turn a handler panic into the generic 500 body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(panic = detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Internal Server Error".to_string(),
        }),
    )
        .into_response()
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}
