//! ローカルバックエンド（/api/v1）への HTTP クライアント

use async_trait::async_trait;
use domain::{Finished, Notes, Task, TaskId};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::json;

use crate::error::ClientError;

/// ローカル API の抽象（コントローラへ注入）
#[async_trait]
pub trait LocalApi: Send + Sync {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError>;
    async fn create_task(&self, text: &str) -> Result<Task, ClientError>;
    async fn update_task_status(
        &self,
        id: TaskId,
        finished: Finished,
    ) -> Result<Task, ClientError>;
    async fn get_notes(&self) -> Result<Notes, ClientError>;
    async fn put_notes(&self, notes: &str) -> Result<Notes, ClientError>;
}

/// reqwest による実装
#[derive(Debug, Clone)]
pub struct HttpLocalApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLocalApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// `notes` が欠けていても空文字列として扱う
#[derive(Debug, Deserialize)]
struct NotesBody {
    #[serde(default)]
    notes: Option<String>,
}

/// 2xx 以外はエラー、2xx ならボディを JSON として読む
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status.as_u16()));
    }
    Ok(response.json::<T>().await?)
}

#[async_trait]
impl LocalApi for HttpLocalApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.client.get(self.url("/tasks")).send().await?;
        read_json(response).await
    }

    async fn create_task(&self, text: &str) -> Result<Task, ClientError> {
        let response = self
            .client
            .post(self.url("/tasks"))
            .json(&json!({ "task": text }))
            .send()
            .await?;
        read_json(response).await
    }

    async fn update_task_status(
        &self,
        id: TaskId,
        finished: Finished,
    ) -> Result<Task, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("/tasks/{id}")))
            .json(&json!({ "finished": finished }))
            .send()
            .await?;
        read_json(response).await
    }

    async fn get_notes(&self) -> Result<Notes, ClientError> {
        let response = self.client.get(self.url("/notes")).send().await?;
        let body: NotesBody = read_json(response).await?;
        Ok(Notes::new(body.notes.unwrap_or_default()))
    }

    async fn put_notes(&self, notes: &str) -> Result<Notes, ClientError> {
        let response = self
            .client
            .put(self.url("/notes"))
            .json(&json!({ "notes": notes }))
            .send()
            .await?;
        read_json(response).await
    }
}
