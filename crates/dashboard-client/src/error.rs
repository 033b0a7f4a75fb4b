use thiserror::Error;

/// HTTP 呼び出し（外部引用 API / ローカル API）のエラー
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
}
