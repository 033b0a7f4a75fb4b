use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use dashboard_api::{app_with_state, AppState, InMemoryStore};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

// テストごとに新しいストアを注入したルータ
fn fresh_app() -> Router {
    app_with_state(AppState::new(Arc::new(InMemoryStore::seeded())))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn get_tasks_returns_seeded_tasks_in_order() {
    let app = fresh_app();

    let (status, json) = send(&app, get_request("/api/v1/tasks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            {"id": 1, "task": "Review lecture notes", "finished": 1},
            {"id": 2, "task": "Work on dashboard layout", "finished": 0},
        ])
    );
}

#[tokio::test]
async fn post_task_trims_text_and_returns_201() {
    let app = fresh_app();

    let (status, json) = send(
        &app,
        json_request("POST", "/api/v1/tasks", json!({"task": "  Buy milk  "})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json, json!({"id": 3, "task": "Buy milk", "finished": 0}));

    // 挿入順で末尾に追加される
    let (_, list) = send(&app, get_request("/api/v1/tasks")).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
    assert_eq!(list[2]["task"], "Buy milk");
}

#[tokio::test]
async fn post_task_assigns_increasing_ids() {
    let app = fresh_app();

    let mut last = 2;
    for text in ["A", "B", "C"] {
        let (status, json) =
            send(&app, json_request("POST", "/api/v1/tasks", json!({"task": text}))).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = json["id"].as_u64().unwrap();
        assert!(id > last);
        assert_eq!(json["finished"], 0);
        last = id;
    }
}

#[tokio::test]
async fn post_task_rejects_invalid_bodies() {
    let app = fresh_app();

    for body in [json!({"task": "   "}), json!({"task": 5}), json!({}), json!([])] {
        let (status, json) = send(&app, json_request("POST", "/api/v1/tasks", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Body must include non-empty \"task\" string");
    }

    let (_, list) = send(&app, get_request("/api/v1/tasks")).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn patch_task_sets_finished() {
    let app = fresh_app();

    let (status, json) =
        send(&app, json_request("PATCH", "/api/v1/tasks/1", json!({"finished": 1}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"id": 1, "task": "Review lecture notes", "finished": 1}));

    let (status, json) = send(
        &app,
        json_request(
            "PATCH",
            "/api/v1/tasks/2",
            json!({"finished": 1, "task": "ignored"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"id": 2, "task": "Work on dashboard layout", "finished": 1}));
}

#[tokio::test]
async fn patch_task_rejects_non_binary_finished_and_keeps_task() {
    let app = fresh_app();

    for finished in [json!(2), json!(true), json!("1"), json!(null), json!(0.5)] {
        let (status, json) = send(
            &app,
            json_request("PATCH", "/api/v1/tasks/2", json!({ "finished": finished })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Body must include \"finished\" with value 0 or 1");
    }

    let (status, _) = send(&app, json_request("PATCH", "/api/v1/tasks/2", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, get_request("/api/v1/tasks")).await;
    assert_eq!(list[1]["finished"], 0);
}

#[tokio::test]
async fn patch_unknown_task_returns_404_and_mutates_nothing() {
    let app = fresh_app();
    let (_, before) = send(&app, get_request("/api/v1/tasks")).await;

    for uri in ["/api/v1/tasks/99", "/api/v1/tasks/abc"] {
        let (status, json) = send(&app, json_request("PATCH", uri, json!({"finished": 1}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Task not found");
    }

    // 存在確認はボディ検証より先
    let (status, _) = send(
        &app,
        json_request("PATCH", "/api/v1/tasks/99", json!({"finished": 7})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, after) = send(&app, get_request("/api/v1/tasks")).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn patch_without_body_checks_id_first() {
    let app = fresh_app();

    let empty_patch = |uri: &str| {
        Request::builder()
            .method("PATCH")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    };

    let (status, json) = send(&app, empty_patch("/api/v1/tasks/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Task not found");

    // 既存タスクならボディなしは `finished` 欠落として 400
    let (status, json) = send(&app, empty_patch("/api/v1/tasks/2")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Body must include \"finished\" with value 0 or 1");
}

#[tokio::test]
async fn patch_accepts_integral_numeric_id() {
    let app = fresh_app();

    let (status, json) = send(
        &app,
        json_request("PATCH", "/api/v1/tasks/1.0", json!({"finished": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"id": 1, "task": "Review lecture notes", "finished": 0}));

    let (status, _) = send(
        &app,
        json_request("PATCH", "/api/v1/tasks/1.5", json!({"finished": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_notes_returns_seeded_notes() {
    let app = fresh_app();

    let (status, json) = send(&app, get_request("/api/v1/notes")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["notes"],
        "Lab on Friday: bring laptop\nAsk about responsive images.\nTry CSS variables for theme colors."
    );
}

#[tokio::test]
async fn put_notes_round_trips_including_empty_string() {
    let app = fresh_app();

    for value in ["Bring charger", "", "multi\nline ✓"] {
        let (status, json) =
            send(&app, json_request("PUT", "/api/v1/notes", json!({"notes": value}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"notes": value}));

        let (_, json) = send(&app, get_request("/api/v1/notes")).await;
        assert_eq!(json, json!({"notes": value}));
    }
}

#[tokio::test]
async fn put_notes_rejects_non_string_and_keeps_value() {
    let app = fresh_app();
    let (_, before) = send(&app, get_request("/api/v1/notes")).await;

    for body in [json!({"notes": 42}), json!({"notes": null}), json!({})] {
        let (status, json) = send(&app, json_request("PUT", "/api/v1/notes", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Body must include \"notes\" as a string");
    }

    let (_, after) = send(&app, get_request("/api/v1/notes")).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = fresh_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/tasks")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, json) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = fresh_app();

    let (status, json) = send(&app, get_request("/api/v1/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Not found");
}

#[tokio::test]
async fn health_returns_ok() {
    let app = fresh_app();

    let (status, json) = send(&app, get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let app = fresh_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/tasks")
        .header("origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );

    // プリフライト
    let preflight = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/tasks/1")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "PATCH")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(preflight).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
