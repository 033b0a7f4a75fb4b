use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use domain::{Finished, Notes, Task, TaskId, TaskText};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::AppState;

type JsonBody = Result<Json<Value>, JsonRejection>;

/// JSON の Content-Type が付いていないボディは空オブジェクトとして扱う。
/// 構文エラーなどそれ以外の拒否は 400。
fn body_or_empty(payload: JsonBody) -> Result<Value, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Object(Default::default())),
        Err(rejection) => Err(rejection.into()),
    }
}

/// GET /tasks
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.store.list_tasks()?;
    Ok(Json(tasks))
}

/// POST /tasks
/// - `task` は前後空白を除去した上で空でない文字列であること
/// - ID はサーバ側で採番し、`finished` は 0 で開始
pub async fn create_task(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let body = body_or_empty(payload)?;
    let text = TaskText::from_json(body.get("task"))?;

    let task = state.store.create_task(text)?;
    tracing::info!(task_id = %task.id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /tasks/:id
/// 存在確認をボディの解釈より先に行い、その後 `finished` を厳密に検証します。
/// `finished` 以外のフィールドは無視します。
pub async fn patch_task(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<Json<Task>, ApiError> {
    // 整数として読めない ID は該当タスクなしとして扱う
    let existing = match TaskId::parse(&raw_id) {
        Some(id) => state.store.find_task(id)?,
        None => None,
    };
    let Some(task) = existing else {
        return Err(ApiError::task_not_found());
    };

    let body = body_or_empty(payload)?;
    let finished = Finished::from_json(body.get("finished"))?;
    let updated = state.store.set_finished(task.id, finished)?;
    tracing::info!(task_id = %updated.id, finished = finished.as_int(), "Task status updated");
    Ok(Json(updated))
}

/// GET /notes
pub async fn get_notes(State(state): State<AppState>) -> Result<Json<Notes>, ApiError> {
    Ok(Json(state.store.notes()?))
}

/// PUT /notes（文字列なら空文字列も可、丸ごと置換）
pub async fn put_notes(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<Json<Notes>, ApiError> {
    let body = body_or_empty(payload)?;
    let notes = Notes::from_json(body.get("notes"))?;

    let saved = state.store.replace_notes(notes)?;
    tracing::info!(length = saved.notes.len(), "Notes replaced");
    Ok(Json(saved))
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    status: &'static str,
}

/// ヘルスチェック
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// 未定義ルート
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
