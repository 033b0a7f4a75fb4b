//! dashboard-api バイナリのエントリポイント
//! ローカル開発用に HTTP サーバを起動します。

use anyhow::Context;
use dashboard_api::{app, API_BASE_PATH};
use shared::{init_tracing, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing().map_err(|e| anyhow::anyhow!(e))?;

    let config = Config::from_env()?;

    // テスト環境では起動しない
    if config.is_test() {
        tracing::info!(environment = %config.environment, "server not started");
        return Ok(());
    }

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server running on http://{addr}{API_BASE_PATH}");

    axum::serve(listener, app()).await.context("server error")?;
    Ok(())
}
