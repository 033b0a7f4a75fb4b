//! 引用機能：外部 API から取得して引用欄・著者欄を更新

use std::sync::Arc;

use async_trait::async_trait;
use domain::{Quote, QUOTE_FAILURE_TEXT};

use crate::api::read_json;
use crate::error::ClientError;
use crate::view::{RenderOp, RenderTarget};

/// 引用の取得元
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch(&self, category: &str) -> Result<Quote, ClientError>;
}

/// `GET {base}/quotes?category=...` を叩く実装
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQuoteSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self, category: &str) -> Result<Quote, ClientError> {
        let response = self
            .client
            .get(format!("{}/quotes", self.base_url))
            .query(&[("category", category)])
            .send()
            .await?;
        read_json(response).await
    }
}

pub struct QuoteController {
    source: Arc<dyn QuoteSource>,
    target: Arc<dyn RenderTarget>,
}

impl QuoteController {
    pub fn new(source: Arc<dyn QuoteSource>, target: Arc<dyn RenderTarget>) -> Self {
        Self { source, target }
    }

    /// 引用を 1 件取得して表示します。失敗は呼び出し元へ返さず、
    /// 固定文言の表示とログ出力に変換します。
    pub async fn load_quote(&self, category: &str) {
        match self.source.fetch(category).await {
            Ok(quote) => {
                self.target.render(RenderOp::SetQuoteText(quote.display_text()));
                self.target.render(RenderOp::SetQuoteAuthor(quote.author));
            }
            Err(e) => {
                tracing::error!(error = %e, category, "Error while fetching quote");
                self.target
                    .render(RenderOp::SetQuoteText(QUOTE_FAILURE_TEXT.to_string()));
                self.target.render(RenderOp::SetQuoteAuthor(String::new()));
            }
        }
    }
}
