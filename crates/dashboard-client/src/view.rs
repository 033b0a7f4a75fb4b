//! 描画層
//!
//! コントローラは DOM を直接触らず、`RenderOp`（描画命令）を
//! `RenderTarget` に送るだけです。`Page` はその命令を畳み込んだ
//! 純粋な画面状態で、テストではこれを直接検証します。

use std::sync::{Arc, Mutex, MutexGuard};

use domain::{Task, TaskId};
use serde::Serialize;

/// タスク一覧の 1 行（チェックボックス + ラベル）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub checkbox_id: String,
    pub label: String,
    pub checked: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            checkbox_id: format!("task-{}", task.id),
            label: task.task.clone(),
            checked: task.finished.is_done(),
        }
    }
}

/// 描画命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    SetCategory(String),
    SetQuoteText(String),
    SetQuoteAuthor(String),
    ClearTaskList,
    AppendTask(TaskRow),
    SetTaskChecked { id: TaskId, checked: bool },
    SetNewTaskInput(String),
    SetNotesText(String),
    SetSaveEnabled(bool),
}

/// 画面状態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    /// カテゴリセレクタの現在値（未選択なら `None`）
    pub category: Option<String>,
    pub quote_text: String,
    pub quote_author: String,
    pub tasks: Vec<TaskRow>,
    pub new_task_input: String,
    pub notes_text: String,
    pub save_enabled: bool,
}

impl Page {
    pub fn apply(&mut self, op: RenderOp) {
        match op {
            RenderOp::SetCategory(category) => self.category = Some(category),
            RenderOp::SetQuoteText(text) => self.quote_text = text,
            RenderOp::SetQuoteAuthor(author) => self.quote_author = author,
            RenderOp::ClearTaskList => self.tasks.clear(),
            // 追加のみ（既存行の更新・削除はしない）
            RenderOp::AppendTask(row) => self.tasks.push(row),
            RenderOp::SetTaskChecked { id, checked } => {
                for row in self.tasks.iter_mut().filter(|r| r.id == id) {
                    row.checked = checked;
                }
            }
            RenderOp::SetNewTaskInput(text) => self.new_task_input = text,
            RenderOp::SetNotesText(text) => self.notes_text = text,
            RenderOp::SetSaveEnabled(enabled) => self.save_enabled = enabled,
        }
    }
}

/// 描画先の抽象
pub trait RenderTarget: Send + Sync {
    fn render(&self, op: RenderOp);
}

/// 複数のコントローラから共有される `Page`
#[derive(Debug, Clone, Default)]
pub struct SharedPage {
    inner: Arc<Mutex<Page>>,
}

impl SharedPage {
    pub fn new(page: Page) -> Self {
        Self {
            inner: Arc::new(Mutex::new(page)),
        }
    }

    pub fn snapshot(&self) -> Page {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Page> {
        // 描画途中で panic しても画面状態自体は有効
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RenderTarget for SharedPage {
    fn render(&self, op: RenderOp) {
        self.lock().apply(op);
    }
}
