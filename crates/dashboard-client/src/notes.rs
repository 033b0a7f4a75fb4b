//! ノート機能：読み込み・保存・未保存状態の管理

use std::sync::Arc;

use crate::api::LocalApi;
use crate::view::{RenderOp, RenderTarget};

pub struct NotesController {
    api: Arc<dyn LocalApi>,
    target: Arc<dyn RenderTarget>,
}

impl NotesController {
    pub fn new(api: Arc<dyn LocalApi>, target: Arc<dyn RenderTarget>) -> Self {
        Self { api, target }
    }

    pub async fn load_notes(&self) {
        match self.api.get_notes().await {
            Ok(notes) => self.target.render(RenderOp::SetNotesText(notes.notes)),
            Err(e) => tracing::error!(error = %e, "Error while fetching notes"),
        }
    }

    /// 保存に成功したら保存ボタンを無効化（未保存の変更なし）
    pub async fn save_notes(&self, text: &str) {
        match self.api.put_notes(text).await {
            Ok(_) => self.target.render(RenderOp::SetSaveEnabled(false)),
            Err(e) => tracing::error!(error = %e, "Error while saving notes"),
        }
    }

    /// 入力があれば直前の保存結果に関係なく保存ボタンを有効化
    pub fn mark_dirty(&self) {
        self.target.render(RenderOp::SetSaveEnabled(true));
    }
}
