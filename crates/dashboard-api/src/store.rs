//! タスク・ノート・採番カウンタを保持するインメモリストア
//!
//! 全状態を 1 つの `Mutex` の内側に置き、各操作を直列化された
//! 1 単位の処理として実行します（リクエスト間のトランザクションはなし）。

use std::sync::{Mutex, MutexGuard};

use domain::{seed, DomainError, Finished, Notes, Task, TaskId, TaskText};
use thiserror::Error;

/// ストア層のエラー
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("store lock poisoned")]
    Poisoned,
}

/// ストアの抽象（ハンドラにはこのトレイト越しに注入）
pub trait DashboardStore: Send + Sync {
    /// 全タスクを挿入順で取得
    fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;
    /// ID でタスクを取得
    fn find_task(&self, id: TaskId) -> Result<Option<Task>, StoreError>;
    /// 新しい ID を採番してタスクを末尾に追加
    fn create_task(&self, text: TaskText) -> Result<Task, StoreError>;
    /// `finished` のみを書き換えて更新後のタスクを返す
    fn set_finished(&self, id: TaskId, finished: Finished) -> Result<Task, StoreError>;
    /// 現在のノート
    fn notes(&self) -> Result<Notes, StoreError>;
    /// ノートを丸ごと置き換える
    fn replace_notes(&self, notes: Notes) -> Result<Notes, StoreError>;
}

#[derive(Debug)]
struct StoreState {
    tasks: Vec<Task>,
    notes: Notes,
    next_id: TaskId,
}

#[derive(Debug)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// `next_id` は既存タスクの最大 ID より大きくなるよう補正されます
    pub fn new(tasks: Vec<Task>, notes: Notes, next_id: TaskId) -> Self {
        let floor = tasks
            .iter()
            .map(|t| t.id.next())
            .max()
            .unwrap_or(TaskId(1));
        Self {
            state: Mutex::new(StoreState {
                tasks,
                notes,
                next_id: next_id.max(floor),
            }),
        }
    }

    /// 初期データ入りのストア
    pub fn seeded() -> Self {
        Self::new(seed::seed_tasks(), seed::seed_notes(), seed::seed_next_id())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, StoreError> {
        self.state.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl DashboardStore for InMemoryStore {
    fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.lock()?.tasks.clone())
    }

    fn find_task(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        Ok(self.lock()?.tasks.iter().find(|t| t.id == id).cloned())
    }

    fn create_task(&self, text: TaskText) -> Result<Task, StoreError> {
        let mut state = self.lock()?;
        let id = state.next_id;
        state.next_id = id.next();

        let task = Task::new(id, text);
        state.tasks.push(task.clone());
        Ok(task)
    }

    fn set_finished(&self, id: TaskId, finished: Finished) -> Result<Task, StoreError> {
        let mut state = self.lock()?;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(DomainError::TaskNotFound(id))?;
        task.finished = finished;
        Ok(task.clone())
    }

    fn notes(&self) -> Result<Notes, StoreError> {
        Ok(self.lock()?.notes.clone())
    }

    fn replace_notes(&self, notes: Notes) -> Result<Notes, StoreError> {
        let mut state = self.lock()?;
        state.notes = notes;
        Ok(state.notes.clone())
    }
}
