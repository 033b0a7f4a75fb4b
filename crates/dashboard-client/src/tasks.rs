//! タスク機能：一覧表示・追加・完了状態の切り替え

use std::sync::Arc;

use domain::{Finished, Task, TaskId};

use crate::api::LocalApi;
use crate::view::{RenderOp, RenderTarget, TaskRow};

pub struct TaskController {
    api: Arc<dyn LocalApi>,
    target: Arc<dyn RenderTarget>,
}

impl TaskController {
    pub fn new(api: Arc<dyn LocalApi>, target: Arc<dyn RenderTarget>) -> Self {
        Self { api, target }
    }

    /// 1 件を一覧の末尾に追加（既存行には触れない）
    pub fn render_task(&self, task: &Task) {
        self.target.render(RenderOp::AppendTask(TaskRow::from(task)));
    }

    /// 一覧を取得し、クリアしてから受信順に描画
    pub async fn load_tasks(&self) {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                self.target.render(RenderOp::ClearTaskList);
                for task in &tasks {
                    self.render_task(task);
                }
            }
            Err(e) => tracing::error!(error = %e, "Error while fetching tasks"),
        }
    }

    /// チェックボックスの変更をサーバへ反映
    pub async fn update_task_status(&self, id: TaskId, checked: bool) {
        let finished = Finished::from_checked(checked);
        if let Err(e) = self.api.update_task_status(id, finished).await {
            tracing::error!(error = %e, task_id = %id, "Error while updating task status");
        }
    }

    /// 入力欄の内容でタスクを追加します。
    /// 空白のみなら何もしない。成功時はサーバが返したタスクを描画して入力欄を空にする。
    pub async fn add_task(&self, input: &str) {
        let text = input.trim();
        if text.is_empty() {
            return;
        }

        match self.api.create_task(text).await {
            Ok(task) => {
                self.render_task(&task);
                self.target.render(RenderOp::SetNewTaskInput(String::new()));
            }
            Err(e) => tracing::error!(error = %e, "Error while adding task"),
        }
    }
}
