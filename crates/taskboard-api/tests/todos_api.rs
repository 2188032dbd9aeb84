//! Integration tests for the `/api/todos` endpoints.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{
    assert_error, body_json, build_test_app, delete, get, post_json, put_json, send, send_raw,
};

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_todo_returns_201_with_defaults() {
    let (app, _) = build_test_app();

    let response = post_json(&app, "/api/todos", json!({ "title": "  learn rust  " })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let todo = body_json(response).await;
    assert_eq!(todo["id"], 1);
    assert_eq!(todo["title"], "learn rust");
    assert_eq!(todo["done"], false);
    assert!(todo.get("categoryId").is_none());
    assert_eq!(todo["createdAt"], todo["updatedAt"]);
}

#[tokio::test]
async fn create_todo_ids_increase() {
    let (app, _) = build_test_app();

    let first = body_json(post_json(&app, "/api/todos", json!({ "title": "a" })).await).await;
    let second = body_json(post_json(&app, "/api/todos", json!({ "title": "b" })).await).await;

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);
}

#[tokio::test]
async fn create_todo_accepts_numeric_string_category() {
    let (app, _) = build_test_app();

    let response = post_json(&app, "/api/todos", json!({ "title": "a", "categoryId": "3" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["categoryId"], 3);
}

#[tokio::test]
async fn create_todo_does_not_require_category_to_exist() {
    let (app, state) = build_test_app();

    let response = post_json(&app, "/api/todos", json!({ "title": "a", "categoryId": 42 })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(state.db.get_category(42).unwrap().is_none());
}

#[tokio::test]
async fn create_todo_rejects_missing_or_blank_title() {
    let (app, _) = build_test_app();

    let response = post_json(&app, "/api/todos", json!({})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "Title is required").await;

    let response = post_json(&app, "/api/todos", json!({ "title": "   " })).await;
    assert_error(response, StatusCode::BAD_REQUEST, "Title is required").await;
}

#[tokio::test]
async fn create_todo_rejects_invalid_category() {
    let (app, state) = build_test_app();

    for bad in [json!("abc"), json!(0), json!(-1), json!(1.5)] {
        let response = post_json(&app, "/api/todos", json!({ "title": "a", "categoryId": bad })).await;
        assert_error(response, StatusCode::BAD_REQUEST, "Invalid category ID").await;
    }
    assert!(state.db.list_todos(None).unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_400_with_error_body() {
    let (app, _) = build_test_app();

    let response = send_raw(&app, Method::POST, "/api/todos", "{\"title\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Invalid request body"));
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_filters_by_category_most_recent_first() {
    let (app, _) = build_test_app();

    post_json(&app, "/api/todos", json!({ "title": "a", "categoryId": 1 })).await;
    post_json(&app, "/api/todos", json!({ "title": "b", "categoryId": 2 })).await;
    post_json(&app, "/api/todos", json!({ "title": "c", "categoryId": 1 })).await;
    send(&app, Method::POST, "/api/todos/1/toggle", None).await;

    let response = get(&app, "/api/todos?categoryId=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let todos = body_json(response).await;
    let titles: Vec<&str> = todos
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["a", "c"]);

    let all = body_json(get(&app, "/api/todos").await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
    assert_eq!(all[0]["title"], "a");
}

#[tokio::test]
async fn list_with_empty_category_param_is_unfiltered() {
    let (app, _) = build_test_app();
    post_json(&app, "/api/todos", json!({ "title": "a", "categoryId": 1 })).await;
    post_json(&app, "/api/todos", json!({ "title": "b" })).await;

    let todos = body_json(get(&app, "/api/todos?categoryId=").await).await;
    assert_eq!(todos.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_rejects_invalid_category_param() {
    let (app, _) = build_test_app();

    let response = get(&app, "/api/todos?categoryId=abc").await;
    assert_error(response, StatusCode::BAD_REQUEST, "Invalid category ID").await;
}

#[tokio::test]
async fn list_rejects_repeated_category_param_with_json_error() {
    let (app, _) = build_test_app();

    let response = get(&app, "/api/todos?categoryId=1&categoryId=2").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Invalid query string"), "{message}");
    assert!(message.contains("categoryId"), "{message}");
}

// ---------------------------------------------------------------------------
// Update / toggle / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_title_trims_and_refreshes_updated_at() {
    let (app, _) = build_test_app();
    let created = body_json(post_json(&app, "/api/todos", json!({ "title": "old" })).await).await;

    let response = put_json(&app, "/api/todos/1/title", json!({ "title": " new " })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "new");
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);
}

#[tokio::test]
async fn update_title_errors() {
    let (app, _) = build_test_app();
    post_json(&app, "/api/todos", json!({ "title": "old" })).await;

    let response = put_json(&app, "/api/todos/abc/title", json!({ "title": "x" })).await;
    assert_error(response, StatusCode::BAD_REQUEST, "Invalid todo ID").await;

    let response = put_json(&app, "/api/todos/1/title", json!({ "title": "" })).await;
    assert_error(response, StatusCode::BAD_REQUEST, "Title is required").await;

    let response = put_json(&app, "/api/todos/999/title", json!({ "title": "x" })).await;
    assert_error(response, StatusCode::NOT_FOUND, "Todo not found").await;
}

#[tokio::test]
async fn update_category_sets_and_clears() {
    let (app, _) = build_test_app();
    post_json(&app, "/api/todos", json!({ "title": "a" })).await;

    let response = put_json(&app, "/api/todos/1/category", json!({ "categoryId": 2 })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["categoryId"], 2);

    let response = put_json(&app, "/api/todos/1/category", json!({ "categoryId": null })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.get("categoryId").is_none());

    let response = put_json(&app, "/api/todos/1/category", json!({ "categoryId": "x" })).await;
    assert_error(response, StatusCode::BAD_REQUEST, "Invalid category ID").await;

    let response = put_json(&app, "/api/todos/9/category", json!({})).await;
    assert_error(response, StatusCode::NOT_FOUND, "Todo not found").await;
}

#[tokio::test]
async fn toggle_flips_done_both_ways() {
    let (app, _) = build_test_app();
    post_json(&app, "/api/todos", json!({ "title": "a" })).await;

    let first = body_json(send(&app, Method::POST, "/api/todos/1/toggle", None).await).await;
    assert_eq!(first["done"], true);

    let second = body_json(send(&app, Method::POST, "/api/todos/1/toggle", None).await).await;
    assert_eq!(second["done"], false);

    let response = send(&app, Method::POST, "/api/todos/0/toggle", None).await;
    assert_error(response, StatusCode::BAD_REQUEST, "Invalid todo ID").await;

    let response = send(&app, Method::POST, "/api/todos/5/toggle", None).await;
    assert_error(response, StatusCode::NOT_FOUND, "Todo not found").await;
}

#[tokio::test]
async fn delete_todo_then_gone() {
    let (app, state) = build_test_app();
    post_json(&app, "/api/todos", json!({ "title": "a" })).await;

    let response = delete(&app, "/api/todos/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(state.db.get_todo(1).unwrap().is_none());

    let response = delete(&app, "/api/todos/1").await;
    assert_error(response, StatusCode::NOT_FOUND, "Todo not found").await;

    let response = delete(&app, "/api/todos/nope").await;
    assert_error(response, StatusCode::BAD_REQUEST, "Invalid todo ID").await;
}

#[tokio::test]
async fn undecodable_path_segment_is_a_json_400() {
    let (app, _) = build_test_app();
    post_json(&app, "/api/todos", json!({ "title": "a" })).await;

    let response = send(&app, Method::POST, "/api/todos/%FF/toggle", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Invalid path"));

    let response = delete(&app, "/api/categories/%FF").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let (app, _) = build_test_app();
    post_json(&app, "/api/todos", json!({ "title": "a" })).await;
    delete(&app, "/api/todos/1").await;

    let todo = body_json(post_json(&app, "/api/todos", json!({ "title": "b" })).await).await;
    assert_eq!(todo["id"], 2);
}
