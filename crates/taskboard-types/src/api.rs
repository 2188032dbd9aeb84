use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// -- Todos --

/// Required fields are optional here so the handler can answer a missing
/// title with its own message instead of a deserializer rejection.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Learn Rust"))]
    pub title: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<u64>, example = 1))]
    pub category_id: Option<IdInput>,
}

#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateTodoTitleRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Renamed task"))]
    pub title: Option<String>,
}

/// `null` or a missing `categoryId` clears the todo's category.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoCategoryRequest {
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<u64>, example = 2))]
    pub category_id: Option<IdInput>,
}

#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct ListTodosQuery {
    /// Only return todos in this category. Empty means no filter.
    #[cfg_attr(feature = "openapi", param(value_type = Option<u64>, example = 1))]
    pub category_id: Option<String>,
}

// -- Categories --

/// Body for both creating and replacing a category.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Work"))]
    pub name: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "#ff6b6b"))]
    pub color: Option<String>,
}

// -- Shared --

/// A client-supplied identifier in a JSON body: either a number or a
/// numeric string. Validation happens in the api layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IdInput {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    #[cfg_attr(feature = "openapi", schema(example = "ok"))]
    pub status: String,
    pub time: DateTime<Utc>,
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    #[cfg_attr(feature = "openapi", schema(example = "Todo not found"))]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_id_accepts_number_string_and_null() {
        let req: CreateTodoRequest =
            serde_json::from_str(r#"{"title":"a","categoryId":3}"#).unwrap();
        assert!(matches!(req.category_id, Some(IdInput::Number(ref n)) if n.as_u64() == Some(3)));

        let req: CreateTodoRequest =
            serde_json::from_str(r#"{"title":"a","categoryId":"4"}"#).unwrap();
        assert_eq!(req.category_id, Some(IdInput::Text("4".into())));

        let req: UpdateTodoCategoryRequest = serde_json::from_str(r#"{"categoryId":null}"#).unwrap();
        assert!(req.category_id.is_none());

        let req: UpdateTodoCategoryRequest = serde_json::from_str("{}").unwrap();
        assert!(req.category_id.is_none());
    }

    #[test]
    fn missing_title_deserializes_to_none() {
        let req: CreateTodoRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
    }
}
