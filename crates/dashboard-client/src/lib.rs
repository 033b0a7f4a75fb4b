//! ダッシュボードのクライアント側
//!
//! 引用・タスク・ノートの 3 機能のコントローラと起動処理を提供します。
//! HTTP クライアント（`QuoteSource` / `LocalApi`）と描画先（`RenderTarget`）は
//! 注入式で、ブラウザ環境なしにテストできます。

pub mod api;
pub mod app;
pub mod error;
pub mod notes;
pub mod quote;
pub mod tasks;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{HttpLocalApi, LocalApi};
pub use app::{Dashboard, UiEvent};
pub use error::ClientError;
pub use quote::{HttpQuoteSource, QuoteSource};
pub use view::{Page, RenderOp, RenderTarget, SharedPage, TaskRow};
