use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Random Choice client (pick one thing from your list)")]
pub struct Cli {
    /// 使用するリストファイル（`.json` なら JSON 形式、それ以外は 1 行 1 件）
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// ランダムに 1 件選ぶ（既定）
    Choose,
    /// 追加（前後の空白を除いて小文字化、重複は拒否）
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// 削除
    Remove {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// 全件削除
    Clear,
    /// 一覧表示
    List,
    /// リストファイルを既定アプリで開く
    Open,
    /// 各種設定操作
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// 現在の保存先を表示
    Show,
    /// 保存先を変更
    Set {
        #[command(subcommand)]
        field: ConfigField,
    },
}

#[derive(Subcommand)]
pub enum ConfigField {
    /// GUI / CLI 用リストの保存先を指定
    #[command(name = "list-path")]
    ListPath { path: PathBuf },
    /// REST API 用リストの保存先を指定
    #[command(name = "api-path")]
    ApiPath { path: PathBuf },
}
