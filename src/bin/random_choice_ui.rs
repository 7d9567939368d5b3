//! random_choice_ui: デスクトップ GUI（メインスレッドで egui EventLoop を実行）

use clap::Parser;
use random_choice::{
    application::ChoiceStore,
    infrastructure::{
        config::AppConfig,
        external::opener::SystemOpener,
        ui::{RandomChoiceApp, UiError},
    },
    utils::{config::EnvConfig, env::load_env, logging::init_tracing},
};
use std::error::Error;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about = "Random Choice desktop window")]
struct Args {
    /// 使用するリストファイル（既定はデータディレクトリの list_of_choices.txt）
    #[arg(long)]
    store: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    load_env();
    EnvConfig::init();
    init_tracing("warn");

    let args = Args::parse();
    let path = match args.store {
        Some(path) => path,
        None => AppConfig::load().list_path()?,
    };
    let store = ChoiceStore::open(&path);
    info!(store = %path.display(), "starting UI");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Random Choice")
            .with_inner_size([300.0, 300.0])
            .with_resizable(false), // リサイズ無効化
        ..Default::default()
    };

    // eframe::run_nativeはブロッキング実行
    if let Err(e) = eframe::run_native(
        "Random Choice",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(RandomChoiceApp::new(store, Box::new(SystemOpener)))
        }),
    ) {
        error!(error = %e, "failed to run UI");
        return Err(UiError::InitializationFailed(e.to_string()).into());
    }

    Ok(())
}
