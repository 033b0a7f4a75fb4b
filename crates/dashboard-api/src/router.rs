use axum::{
    extract::Request,
    http::{
        header::{ACCEPT, CONTENT_TYPE, ORIGIN},
        HeaderName,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, patch},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::AppState;

/// API のベースパス
pub const API_BASE_PATH: &str = "/api/v1";

/// ルータを構築して返します（初期データ入りのストア）。
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// 外部から状態を注入できる版
pub fn app_with_state(state: AppState) -> Router {
    let api = Router::new()
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route("/tasks/:id", patch(handlers::patch_task))
        .route("/notes", get(handlers::get_notes).put(handlers::put_notes));

    Router::new()
        .route("/health", get(handlers::health))
        .nest(API_BASE_PATH, api)
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(log_request))
        .layer(cors_layer())
        .with_state(state)
}

/// オリジン・メソッドは無条件に許可
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
        ])
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let status = response.status().as_u16();

    if status >= 400 {
        tracing::warn!(%method, %path, status, "HTTP request failed");
    } else {
        tracing::info!(%method, %path, status, "HTTP request completed");
    }

    response
}
