//! UI関連の型定義
//!
//! - UiMode: 画面状態（通常 / 追加入力中）
//! - ResultView: 選択結果の表示内容
//! - Notice: 一定時間で消える通知
//! - UiError: UIエラー処理

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Idle,
    /// テキスト入力と保存ボタンを表示中
    Adding,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    /// まだ何も選んでいない
    #[default]
    Blank,
    /// リストが空で選べなかった
    Nothing,
    Chosen(String),
}

impl ResultView {
    pub fn text(&self) -> &str {
        match self {
            ResultView::Blank => "",
            ResultView::Nothing => "there's nothing to choose",
            ResultView::Chosen(choice) => choice.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Added,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn added(choice: &str) -> Self {
        Self {
            kind: NoticeKind::Added,
            message: format!("'{choice}' added successfully"),
        }
    }

    pub fn already_exists(choice: &str) -> Self {
        Self {
            kind: NoticeKind::AlreadyExists,
            message: format!("{choice} already exists!"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum UiError {
    InitializationFailed(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::InitializationFailed(msg) => write!(f, "UI initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}
