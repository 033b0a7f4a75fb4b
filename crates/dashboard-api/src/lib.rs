//! ダッシュボード用 HTTP API（axum）
//!
//! `/api/v1` 配下にタスク一覧とノートのエンドポイントを提供します。
//! 状態は `AppState` 経由でインメモリストアを注入します。

use std::sync::Arc;

pub mod error;
pub mod handlers;
pub mod router;
pub mod store;

pub use error::ApiError;
pub use router::{app, app_with_state, API_BASE_PATH};
pub use store::{DashboardStore, InMemoryStore, StoreError};

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DashboardStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DashboardStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryStore::seeded()))
    }
}
