use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DomainError;

/// `GET /notes` / `PUT /notes` のボディ。プロセス全体で 1 つだけ保持されます。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Notes {
    #[serde(default)]
    pub notes: String,
}

impl Notes {
    pub fn new(notes: impl Into<String>) -> Self {
        Self { notes: notes.into() }
    }

    /// 文字列であれば空文字列も含めて受け付けます
    pub fn from_json(value: Option<&Value>) -> Result<Self, DomainError> {
        match value {
            Some(Value::String(s)) => Ok(Self::new(s.clone())),
            _ => Err(DomainError::InvalidNotes),
        }
    }
}
