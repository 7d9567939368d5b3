//! random_choice_server: JSON ストアを公開する REST API サーバ
//!
//! 認証なし・全オリジン許可のため、ローカル開発用途に限定して使うこと。

use clap::Parser;
use random_choice::{
    application::ChoiceStore,
    infrastructure::config::AppConfig,
    rest_server::{BIND_ADDR, RestServer},
    utils::{config::EnvConfig, env::load_env, logging::init_tracing},
};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Random Choice REST API server")]
struct Args {
    /// 使用する JSON ファイル（既定はデータディレクトリの choices_data.json）
    #[arg(long)]
    store: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    load_env();
    EnvConfig::init();
    init_tracing("info");

    let args = Args::parse();
    let path = match args.store {
        Some(path) => path,
        None => AppConfig::load().api_path()?,
    };

    println!("🚀 Starting Random Choice server...");
    println!("📡 Listening on http://{BIND_ADDR} (store: {})", path.display());
    println!("❌ Press Ctrl+C to stop the server");

    RestServer::new(BIND_ADDR, ChoiceStore::open(&path)).run().await
}
