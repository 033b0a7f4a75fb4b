//! 起動処理とイベント配線

use std::sync::Arc;

use domain::{resolve_category, TaskId};

use crate::api::LocalApi;
use crate::notes::NotesController;
use crate::quote::{QuoteController, QuoteSource};
use crate::tasks::TaskController;
use crate::view::{RenderOp, RenderTarget, SharedPage};

/// 画面からの入力イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// カテゴリセレクタの変更
    CategoryChanged(String),
    /// 「新しい引用」ボタン
    NewQuoteClicked,
    /// 新規タスク入力欄への入力
    NewTaskTyped(String),
    /// 新規タスク入力欄でのキー押下（Enter で追加）
    NewTaskKeyDown(String),
    /// 「追加」ボタン
    AddTaskClicked,
    /// チェックボックスの切り替え
    TaskToggled { id: TaskId, checked: bool },
    /// ノート欄への入力
    NotesTyped(String),
    /// 「保存」ボタン
    SaveNotesClicked,
}

pub struct Dashboard {
    page: SharedPage,
    quotes: QuoteController,
    tasks: TaskController,
    notes: NotesController,
}

impl Dashboard {
    pub fn new(
        quote_source: Arc<dyn QuoteSource>,
        api: Arc<dyn LocalApi>,
        page: SharedPage,
    ) -> Self {
        let target: Arc<dyn RenderTarget> = Arc::new(page.clone());
        Self {
            quotes: QuoteController::new(quote_source, target.clone()),
            tasks: TaskController::new(api.clone(), target.clone()),
            notes: NotesController::new(api, target),
            page,
        }
    }

    pub fn page(&self) -> &SharedPage {
        &self.page
    }

    /// 初回の 3 つの読み込み（引用・タスク・ノート）を並行に実行します。
    /// どれかが失敗しても他の領域には影響しません。
    pub async fn init(&self) {
        let category = resolve_category(self.page.snapshot().category.as_deref());
        tracing::debug!(%category, "initial load");

        tokio::join!(
            self.quotes.load_quote(&category),
            self.tasks.load_tasks(),
            self.notes.load_notes(),
        );
    }

    /// イベントを各コントローラへ振り分けます
    pub async fn handle(&self, event: UiEvent) {
        match event {
            UiEvent::CategoryChanged(category) => {
                self.page.render(RenderOp::SetCategory(category.clone()));
                self.quotes.load_quote(&category).await;
            }
            UiEvent::NewQuoteClicked => {
                let category = resolve_category(self.page.snapshot().category.as_deref());
                self.quotes.load_quote(&category).await;
            }
            UiEvent::NewTaskTyped(text) => {
                self.page.render(RenderOp::SetNewTaskInput(text));
            }
            UiEvent::NewTaskKeyDown(key) => {
                if key == "Enter" {
                    self.add_task_from_input().await;
                }
            }
            UiEvent::AddTaskClicked => self.add_task_from_input().await,
            UiEvent::TaskToggled { id, checked } => {
                self.page.render(RenderOp::SetTaskChecked { id, checked });
                self.tasks.update_task_status(id, checked).await;
            }
            UiEvent::NotesTyped(text) => {
                self.page.render(RenderOp::SetNotesText(text));
                self.notes.mark_dirty();
            }
            UiEvent::SaveNotesClicked => {
                let text = self.page.snapshot().notes_text;
                self.notes.save_notes(&text).await;
            }
        }
    }

    async fn add_task_from_input(&self) {
        let input = self.page.snapshot().new_task_input;
        self.tasks.add_task(&input).await;
    }
}
