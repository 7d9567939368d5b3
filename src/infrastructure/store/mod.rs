pub mod json_repo;
pub mod text_repo;

pub use json_repo::JsonFileChoiceRepo;
pub use text_repo::TextFileChoiceRepo;

use crate::domain::choice::ChoiceRepository;
use std::path::Path;
use std::sync::Arc;

/// 保存形式（拡張子で判定）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    /// 1 行 1 件のプレーンテキスト
    Text,
    /// `{"choices": [...]}`
    Json,
}

impl StoreFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StoreFormat::Json,
            _ => StoreFormat::Text,
        }
    }
}

impl std::fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreFormat::Text => write!(f, "text"),
            StoreFormat::Json => write!(f, "json"),
        }
    }
}

/// パスに応じたリポジトリを生成
pub fn open_repository(path: &Path) -> Arc<dyn ChoiceRepository> {
    match StoreFormat::from_path(path) {
        StoreFormat::Json => Arc::new(JsonFileChoiceRepo::new(path)),
        StoreFormat::Text => Arc::new(TextFileChoiceRepo::new(path)),
    }
}
