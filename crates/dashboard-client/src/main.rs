//! dashboard バイナリ
//! ローカル API と引用 API から初回読み込みを行い、画面状態を JSON で出力します。
//! 第 1 引数で引用カテゴリを指定できます。

use std::sync::Arc;

use dashboard_client::{Dashboard, HttpLocalApi, HttpQuoteSource, Page, SharedPage};
use shared::{init_tracing, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing().map_err(|e| anyhow::anyhow!(e))?;

    let config = Config::from_env()?;
    let client = reqwest::Client::new();

    let page = Page {
        category: std::env::args().nth(1),
        ..Page::default()
    };

    let dashboard = Dashboard::new(
        Arc::new(HttpQuoteSource::new(client.clone(), &config.quote_api_base)),
        Arc::new(HttpLocalApi::new(client, &config.local_api_base)),
        SharedPage::new(page),
    );
    dashboard.init().await;

    println!("{}", serde_json::to_string_pretty(&dashboard.page().snapshot())?);
    Ok(())
}
