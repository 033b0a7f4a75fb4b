use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::errors::DomainError;

// f64 で誤差なく表せる最大の整数
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// タスク ID（サーバ側で単調増加の整数として採番）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// パスパラメータなどの文字列から ID を解釈します。
    /// `1.0` のように整数と同値な数値表記も受け付け、
    /// 整数として読めない場合は `None`（該当タスクなし扱い）。
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(id) = raw.parse::<u64>() {
            return Some(TaskId(id));
        }
        let number = raw.parse::<f64>().ok()?;
        let exact = number.is_finite()
            && number >= 0.0
            && number.fract() == 0.0
            && number <= MAX_EXACT_INTEGER;
        exact.then(|| TaskId(number as u64))
    }

    pub fn next(&self) -> Self {
        TaskId(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 完了フラグ。JSON 上は整数 `0` / `1` として表現されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Finished {
    #[default]
    Open,
    Done,
}

impl Finished {
    pub fn as_int(&self) -> u8 {
        match self {
            Finished::Open => 0,
            Finished::Done => 1,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Finished::Done)
    }

    /// チェックボックスの状態から変換
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Finished::Done
        } else {
            Finished::Open
        }
    }

    /// リクエストボディの値を厳密に検証します。
    /// 数値の 0 / 1 のみを受け付け、真偽値や文字列への型変換は行いません。
    pub fn from_json(value: Option<&Value>) -> Result<Self, DomainError> {
        let number = match value {
            Some(Value::Number(n)) => n,
            _ => return Err(DomainError::InvalidFinished),
        };
        if let Some(i) = number.as_u64() {
            return Self::try_from(i);
        }
        // 1.0 のような浮動小数表記も数値として同値なら許可
        match number.as_f64() {
            Some(f) if f == 0.0 => Ok(Finished::Open),
            Some(f) if f == 1.0 => Ok(Finished::Done),
            _ => Err(DomainError::InvalidFinished),
        }
    }
}

impl TryFrom<u64> for Finished {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Finished::Open),
            1 => Ok(Finished::Done),
            _ => Err(DomainError::InvalidFinished),
        }
    }
}

impl Serialize for Finished {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_int())
    }
}

impl<'de> Deserialize<'de> for Finished {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u64::deserialize(deserializer)?;
        Finished::try_from(raw).map_err(serde::de::Error::custom)
    }
}

/// タスク本体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub task: String,
    pub finished: Finished,
}

impl Task {
    pub fn new(id: TaskId, text: TaskText) -> Self {
        Self {
            id,
            task: text.into_inner(),
            finished: Finished::Open,
        }
    }
}

/// 前後の空白を除去済みで、空でないことが保証されたタスク本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskText(String);

impl TaskText {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTaskText);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// リクエストボディの値を検証します（文字列以外は拒否）
    pub fn from_json(value: Option<&Value>) -> Result<Self, DomainError> {
        match value {
            Some(Value::String(s)) => Self::parse(s),
            _ => Err(DomainError::InvalidTaskText),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
