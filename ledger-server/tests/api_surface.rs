//! HTTP surface tests: status codes and wire bodies, driven through the
//! assembled router against an in-memory store.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use ledger_server::core::{Config, ServerState, build_router};

async fn app() -> Router {
    let config = Config::with_overrides("mem://", 0);
    let state = ServerState::initialize(&config).await;
    build_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_storage_connectivity() {
    let app = app().await;
    let res = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "connected");
}

#[tokio::test]
async fn member_crud_over_http() {
    let app = app().await;

    // Create → 201 with assigned id and defaults.
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/members",
            json!({"name": "Asha", "phone": "555-1000"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = body_json(res).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["address"], "");
    assert_eq!(created["payments"], json!([]));
    assert!(created["joinDate"].is_string());

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/members",
            json!({"name": "Binta", "phone": "555-2000"}),
        ))
        .await
        .unwrap();
    assert_eq!(body_json(res).await["id"], 2);

    // Update member 1; the submitted payment list must not stick.
    let res = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/members/1",
            json!({
                "name": "Asha K",
                "phone": "555-1000",
                "payments": [{"date": "2024-01-01", "amount": 100, "week": "W1"}]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated = body_json(res).await;
    assert_eq!(updated["name"], "Asha K");
    assert_eq!(updated["payments"], json!([]));

    // List is sorted by id and reflects the update.
    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/members"))
        .await
        .unwrap();
    let list = body_json(res).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0]["id"], 1);
    assert_eq!(list[0]["name"], "Asha K");

    // Delete member 2, then every further touch of it is a 404.
    let res = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/members/2"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["deleted"], true);

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/members/2"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(body_json(res).await["error"].is_string());

    let res = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/members/2"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn member_validation_failures_are_400_with_error_body() {
    let app = app().await;

    // Blank name never persists anything.
    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/members",
            json!({"name": "   ", "phone": "555-1000"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = body_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("name"));

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/members"))
        .await
        .unwrap();
    assert_eq!(body_json(res).await, json!([]));

    // Non-integer path ids are validation failures on every verb.
    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/members/abc"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .clone()
        .oneshot(json_request("PUT", "/api/members/abc", json!({})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/members/abc"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn expense_surface() {
    let app = app().await;

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/expenses",
            json!({"id": 42, "amount": 12.5, "category": "chairs"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = body_json(res).await;
    assert_eq!(created["id"], json!(42.0));
    assert_eq!(created["category"], "chairs");

    // Deleting an id that matches nothing is still a 204.
    let res = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/expenses/999"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/expenses"))
        .await
        .unwrap();
    assert_eq!(body_json(res).await.as_array().unwrap().len(), 1);

    let res = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/expenses/42"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/expenses"))
        .await
        .unwrap();
    assert_eq!(body_json(res).await, json!([]));

    // A non-numeric id cannot reach the store.
    let res = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/expenses/abc"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn donation_surface_mirrors_expenses() {
    let app = app().await;

    let res = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/donations",
            json!({"id": 7, "amount": 250, "donor": "anonymous", "purpose": "roof fund"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(body_json(res).await["donor"], "anonymous");

    let res = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/donations/999"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app
        .clone()
        .oneshot(empty_request("GET", "/api/donations"))
        .await
        .unwrap();
    assert_eq!(body_json(res).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn non_api_paths_serve_the_static_shell() {
    let app = app().await;
    let res = app
        .oneshot(empty_request("GET", "/members/overview"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<div id=\"app\">"));
}
