//! 統一エラーハンドリング
//!
//! random_choice 全体（ストア / GUI / REST / CLI）で使用するエラー型を定義します。

use thiserror::Error;

/// random_choice 全体で使用する統一エラー型
#[derive(Debug, Error)]
pub enum ChoiceError {
    // ========================================
    // 入力検証エラー
    // ========================================
    #[error("Choice cannot be empty!")]
    EmptyChoice,

    // ========================================
    // リスト操作エラー
    // ========================================
    #[error("'{0}' already exists!")]
    AlreadyExists(String),

    #[error("'{0}' not found!")]
    NotFound(String),

    // ========================================
    // 永続化エラー
    // ========================================
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// 統一Result型エイリアス
pub type Result<T> = std::result::Result<T, ChoiceError>;

// ========================================
// ヘルパー関数
// ========================================

impl ChoiceError {
    /// ユーザー入力に起因するエラーか（ストレージ障害ではないか）
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ChoiceError::EmptyChoice | ChoiceError::AlreadyExists(_) | ChoiceError::NotFound(_)
        )
    }
}
