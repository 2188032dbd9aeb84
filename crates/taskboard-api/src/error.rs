use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use taskboard_types::api::ErrorBody;

/// The kind of record a request addressed, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Todo,
    Category,
}

impl Entity {
    pub fn noun(self) -> &'static str {
        match self {
            Entity::Todo => "todo",
            Entity::Category => "category",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Entity::Todo => "Todo",
            Entity::Category => "Category",
        }
    }
}

/// Every failure a handler can report. Rendered as `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid {} ID", .0.noun())]
    InvalidId(Entity),

    /// A required text field was missing, not a string, or blank.
    #[error("{0}")]
    MissingField(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("Invalid path: {0}")]
    InvalidPath(#[from] PathRejection),

    #[error("{} not found", .0.title())]
    NotFound(Entity),

    #[error("Cannot delete category with existing todos")]
    CategoryInUse,

    #[error("Not Found")]
    RouteNotFound,

    #[error("Request Timeout")]
    Timeout,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_)
            | AppError::MissingField(_)
            | AppError::InvalidBody(_)
            | AppError::InvalidQuery(_)
            | AppError::CategoryInUse => StatusCode::BAD_REQUEST,
            // 400 for undecodable segments, 500 when route and extractor disagree.
            AppError::InvalidPath(rejection) => rejection.status(),
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Internal(err) => {
                error!("Internal error: {:#}", err);
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
