//! テスト用のフェイク実装

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use domain::{Finished, Notes, Quote, Task, TaskId};

use crate::api::LocalApi;
use crate::error::ClientError;
use crate::quote::QuoteSource;

/// 呼び出し履歴
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListTasks,
    CreateTask(String),
    UpdateTaskStatus(TaskId, Finished),
    GetNotes,
    PutNotes(String),
}

/// ローカル API のフェイク。`failing` を立てると全呼び出しが 503 になる。
#[derive(Default)]
pub struct FakeApi {
    pub tasks: Mutex<Vec<Task>>,
    pub notes: Mutex<String>,
    pub calls: Mutex<Vec<Call>>,
    pub failing: AtomicBool,
}

impl FakeApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let api = Self::default();
        *api.tasks.lock().unwrap() = tasks;
        api
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Status(503));
        }
        Ok(())
    }
}

#[async_trait]
impl LocalApi for FakeApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        self.record(Call::ListTasks)?;
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn create_task(&self, text: &str) -> Result<Task, ClientError> {
        self.record(Call::CreateTask(text.to_string()))?;
        let mut tasks = self.tasks.lock().unwrap();
        let id = tasks.iter().map(|t| t.id.next()).max().unwrap_or(TaskId(1));
        let task = Task {
            id,
            task: text.to_string(),
            finished: Finished::Open,
        };
        tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task_status(
        &self,
        id: TaskId,
        finished: Finished,
    ) -> Result<Task, ClientError> {
        self.record(Call::UpdateTaskStatus(id, finished))?;
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ClientError::Status(404))?;
        task.finished = finished;
        Ok(task.clone())
    }

    async fn get_notes(&self) -> Result<Notes, ClientError> {
        self.record(Call::GetNotes)?;
        Ok(Notes::new(self.notes.lock().unwrap().clone()))
    }

    async fn put_notes(&self, notes: &str) -> Result<Notes, ClientError> {
        self.record(Call::PutNotes(notes.to_string()))?;
        *self.notes.lock().unwrap() = notes.to_string();
        Ok(Notes::new(notes))
    }
}

/// 固定の結果を返す引用ソース（`None` なら失敗）
pub struct FixedQuote(pub Option<Quote>);

#[async_trait]
impl QuoteSource for FixedQuote {
    async fn fetch(&self, _category: &str) -> Result<Quote, ClientError> {
        self.0.clone().ok_or(ClientError::Status(502))
    }
}
