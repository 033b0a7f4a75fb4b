use thiserror::Error;

use crate::task::TaskId;

/// ドメイン層のエラー（書き込み境界での検証違反など）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Body must include \"finished\" with value 0 or 1")]
    InvalidFinished,

    #[error("Body must include non-empty \"task\" string")]
    InvalidTaskText,

    #[error("Body must include \"notes\" as a string")]
    InvalidNotes,

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),
}
