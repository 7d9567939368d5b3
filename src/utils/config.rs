//! グローバル環境変数設定
//!
//! アプリケーション全体で使用する環境変数を一元管理。
//! 初回アクセス時に一度だけ読み込み、以降はどこからでも参照可能。

use once_cell::sync::OnceCell;
use std::sync::Arc;

/// グローバル環境変数設定
static ENV_CONFIG: OnceCell<Arc<EnvConfig>> = OnceCell::new();

/// 環境変数設定
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// データディレクトリの明示指定（最優先）
    pub data_home: Option<String>,
    /// XDG Data Home ディレクトリ
    pub xdg_data_home: Option<String>,
    /// 環境変数ファイルのパス
    pub env_path: Option<String>,
    /// ログを JSON で出力するか
    pub log_json: bool,
}

impl EnvConfig {
    /// 現在のプロセス環境から読み取る
    pub fn from_env() -> Self {
        EnvConfig {
            data_home: std::env::var("RANDOM_CHOICE_DATA_HOME").ok(),
            xdg_data_home: std::env::var("XDG_DATA_HOME").ok(),
            env_path: std::env::var("RANDOM_CHOICE_ENV_PATH").ok(),
            log_json: std::env::var("RANDOM_CHOICE_LOG_JSON")
                .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
                .unwrap_or(false),
        }
    }

    /// 環境変数から設定を初期化
    ///
    /// アプリケーション起動時（`.env` 読み込み後）に呼び出す。
    /// 既に初期化済みの場合は何もしない。
    pub fn init() {
        // 並列実行時の競合を考慮：既に他のスレッドが初期化していても成功とする
        let _ = ENV_CONFIG.set(Arc::new(Self::from_env()));
    }

    /// 設定を取得（未初期化なら現在の環境から初期化）
    pub fn get() -> Arc<EnvConfig> {
        ENV_CONFIG
            .get_or_init(|| Arc::new(Self::from_env()))
            .clone()
    }
}
