use serde::{Deserialize, Serialize};

/// カテゴリ未指定時に使う既定カテゴリ
pub const DEFAULT_CATEGORY: &str = "general";

/// 取得に失敗した際に引用表示欄へ出す固定文言
pub const QUOTE_FAILURE_TEXT: &str = "Failed to load quote";

/// 外部 API から取得する引用（保存もキャッシュもしない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Quote {
    /// 表示用に二重引用符で囲んだ本文
    pub fn display_text(&self) -> String {
        format!("\"{}\"", self.quote)
    }
}

/// セレクタの値からカテゴリを決定します。空文字や未設定は既定カテゴリ。
pub fn resolve_category(selected: Option<&str>) -> String {
    match selected {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}
