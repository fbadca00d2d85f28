//! Expense endpoints
//!
//! Each handler is one validate → store → respond cycle. Failures are
//! returned as `ApiError`, which owns the status-code mapping.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{ExpenseIdPath, ValidExpense};
use crate::http::server::AppState;
use crate::models::Expense;

/// POST /expenses - create an expense
async fn create_expense(
    State(state): State<Arc<AppState>>,
    ValidExpense(draft): ValidExpense,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let id = state.store.insert(&draft).await?;
    tracing::info!(id, "expense created");

    Ok((StatusCode::CREATED, Json(Expense::from_draft(id, draft))))
}

/// GET /expenses/{id} - get a single expense
async fn get_expense(
    State(state): State<Arc<AppState>>,
    ExpenseIdPath(id): ExpenseIdPath,
) -> Result<Json<Expense>, ApiError> {
    let expense = state.store.find_by_id(id).await?;
    Ok(Json(expense))
}

/// PUT /expenses/{id} - replace every field of an expense
///
/// The response echoes the submitted fields with `id` taken from the route.
async fn update_expense(
    State(state): State<Arc<AppState>>,
    ExpenseIdPath(id): ExpenseIdPath,
    ValidExpense(draft): ValidExpense,
) -> Result<Json<Expense>, ApiError> {
    state.store.replace_by_id(id, &draft).await?;
    tracing::info!(id, "expense updated");

    Ok(Json(Expense::from_draft(id, draft)))
}

/// GET /expenses - list every expense
async fn list_expenses(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = state.store.find_all().await?;
    Ok(Json(expenses))
}

/// Expense routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", get(get_expense).put(update_expense))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::db::memory::MemoryExpenseStore;
    use crate::http::server::build_router;

    fn app() -> Router {
        app_with(MemoryExpenseStore::new())
    }

    fn app_with(store: MemoryExpenseStore) -> Router {
        build_router(Arc::new(AppState::new(Arc::new(store))))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = match body {
            Some(v) => Body::from(v.to_string()),
            None => Body::empty(),
        };
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn send_raw(app: &Router, method: Method, uri: &str, body: &'static str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn smoothie() -> Value {
        json!({
            "title": "strawberry smoothie",
            "amount": 79,
            "note": "night market promotion discount 10 bath",
            "tags": ["food", "beverage"]
        })
    }

    fn ps5() -> Value {
        json!({
            "title": "PS5",
            "amount": 16999,
            "note": "not god of war only",
            "tags": ["gadget", "shopping"]
        })
    }

    fn same_fields(actual: &Value, expected: &Value) {
        assert_eq!(actual["title"], expected["title"]);
        assert_eq!(actual["amount"].as_f64(), expected["amount"].as_f64());
        assert_eq!(actual["note"], expected["note"]);
        assert_eq!(actual["tags"], expected["tags"]);
    }

    #[tokio::test]
    async fn create_returns_201_with_assigned_id() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/expenses", Some(smoothie())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body["id"].as_i64().unwrap() > 0);
        same_fields(&body, &smoothie());
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let app = app();
        let candidate = json!({
            "title": "market",
            "amount": -12.5,
            "note": "",
            "tags": ["b", "", "b", "x,y"]
        });
        let (_, created) = send(&app, Method::POST, "/expenses", Some(candidate.clone())).await;
        let id = created["id"].as_i64().unwrap();

        let (status, fetched) = send(&app, Method::GET, &format!("/expenses/{}", id), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["id"].as_i64(), Some(id));
        same_fields(&fetched, &candidate);
    }

    #[tokio::test]
    async fn create_rejects_empty_title_and_zero_amount() {
        let app = app();

        let (status, body) =
            send(&app, Method::POST, "/expenses", Some(json!({"title": "", "amount": 79}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "title cannot be empty"}));

        let (status, body) =
            send(&app, Method::POST, "/expenses", Some(json!({"title": "x", "amount": 0}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "amount must be non-zero"}));

        let (_, list) = send(&app, Method::GET, "/expenses", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn create_rejects_malformed_body() {
        let app = app();
        let (status, body) = send_raw(&app, Method::POST, "/expenses", "{\"title\": ").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("malformed request body"));
    }

    #[tokio::test]
    async fn create_store_failure_is_500() {
        let app = app_with(MemoryExpenseStore::failing());
        let (status, body) = send(&app, Method::POST, "/expenses", Some(smoothie())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn get_unknown_id_is_404() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/expenses/12345", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "expenses not found"}));
    }

    #[tokio::test]
    async fn get_non_numeric_id_is_400() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/expenses/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "invalid expense id: 'abc'"}));
    }

    #[tokio::test]
    async fn get_store_failure_is_500() {
        let app = app_with(MemoryExpenseStore::failing());
        let (status, _) = send(&app, Method::GET, "/expenses/1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let app = app();
        let (_, created) = send(&app, Method::POST, "/expenses", Some(smoothie())).await;
        let id = created["id"].as_i64().unwrap();

        let replacement = json!({"title": "PS5", "amount": 16999});
        let (status, updated) =
            send(&app, Method::PUT, &format!("/expenses/{}", id), Some(replacement)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"].as_i64(), Some(id));

        let (_, fetched) = send(&app, Method::GET, &format!("/expenses/{}", id), None).await;
        assert_eq!(fetched["title"], "PS5");
        assert_eq!(fetched["note"], "");
        assert_eq!(fetched["tags"], json!([]));
    }

    #[tokio::test]
    async fn update_uses_route_id_over_body_id() {
        let app = app();
        let (_, created) = send(&app, Method::POST, "/expenses", Some(smoothie())).await;
        let id = created["id"].as_i64().unwrap();

        let mut body = ps5();
        body["id"] = json!(id + 100);
        let (status, updated) = send(&app, Method::PUT, &format!("/expenses/{}", id), Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"].as_i64(), Some(id));
        same_fields(&updated, &ps5());
    }

    #[tokio::test]
    async fn update_unknown_id_is_404() {
        let app = app();
        let (status, body) = send(&app, Method::PUT, "/expenses/77", Some(ps5())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "expenses not found"}));
    }

    #[tokio::test]
    async fn update_rejects_invalid_body_and_id() {
        let app = app();
        let (_, created) = send(&app, Method::POST, "/expenses", Some(smoothie())).await;
        let id = created["id"].as_i64().unwrap();

        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/expenses/{}", id),
            Some(json!({"title": "", "amount": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::PUT, "/expenses/one", Some(ps5())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, fetched) = send(&app, Method::GET, &format!("/expenses/{}", id), None).await;
        same_fields(&fetched, &smoothie());
    }

    #[tokio::test]
    async fn update_store_failure_is_500() {
        let app = app_with(MemoryExpenseStore::failing());
        let (status, _) = send(&app, Method::PUT, "/expenses/1", Some(ps5())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn list_empty_store_is_empty_array() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/expenses", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn list_contains_every_created_expense() {
        let app = app();
        let mut created = Vec::new();
        for candidate in [smoothie(), ps5(), smoothie()] {
            let (_, body) = send(&app, Method::POST, "/expenses", Some(candidate)).await;
            created.push(body);
        }

        let (status, body) = send(&app, Method::GET, "/expenses", None).await;
        assert_eq!(status, StatusCode::OK);

        let mut listed = body.as_array().unwrap().clone();
        listed.sort_by_key(|e| e["id"].as_i64());
        created.sort_by_key(|e| e["id"].as_i64());
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn list_store_failure_is_500() {
        let app = app_with(MemoryExpenseStore::failing());
        let (status, _) = send(&app, Method::GET, "/expenses", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let app = app();
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let app = app.clone();
                tokio::spawn(async move {
                    let body = json!({"title": format!("item {}", i), "amount": i + 1});
                    send(&app, Method::POST, "/expenses", Some(body)).await
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            let (status, body) = handle.await.expect("task panicked");
            assert_eq!(status, StatusCode::CREATED);
            ids.push(body["id"].as_i64().unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);

        let (_, list) = send(&app, Method::GET, "/expenses", None).await;
        assert_eq!(list.as_array().unwrap().len(), 16);
    }
}
