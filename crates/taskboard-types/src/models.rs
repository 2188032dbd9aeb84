use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task item. `updated_at` moves forward on every mutation; `created_at` never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: u64,
    #[cfg_attr(feature = "openapi", schema(example = "Learn Rust"))]
    pub title: String,
    pub done: bool,
    /// Not checked against the category store on write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub category_id: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: u64,
    #[cfg_attr(feature = "openapi", schema(example = "Work"))]
    pub name: String,
    /// Free-form, e.g. `#ff6b6b`. Never validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "#ff6b6b"))]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}
