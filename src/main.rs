//! random_choice CLI: GUI と同じリストをコマンドラインから操作します。
//! `choose` / `add` / `remove` / `clear` / `list` / `open` / `config` を提供します。
use clap::Parser;
use random_choice::{
    ChoiceError,
    application::ChoiceStore,
    cli::{Cli, Cmd, ConfigCmd, ConfigField},
    domain::choose_random,
    infrastructure::{
        config::AppConfig,
        external::opener::{FileOpener, SystemOpener},
    },
    utils::{config::EnvConfig, env::load_env, logging::init_tracing},
};
use std::process::ExitCode;

/// 入力起因のエラーは stderr に出して終了コードで返し、それ以外は呼び出し元へ伝播
fn report(e: ChoiceError) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if e.is_user_error() {
        eprintln!("Error: {e}");
        Ok(ExitCode::FAILURE)
    } else {
        Err(e.into())
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // .env 読み込み
    load_env();
    EnvConfig::init();
    init_tracing("warn");

    let cli = Cli::parse();
    let mut cfg = AppConfig::load();

    let store_path = match cli.store {
        Some(path) => path,
        None => cfg.list_path()?,
    };
    let store = ChoiceStore::open(&store_path);

    match cli.cmd.unwrap_or(Cmd::Choose) {
        Cmd::Choose => match choose_random(&store.load()) {
            Some(choice) => println!("{choice}"),
            None => {
                eprintln!("there's nothing to choose");
                return Ok(ExitCode::FAILURE);
            }
        },
        Cmd::Add { text } => match store.append(&text.join(" ")) {
            Ok(appended) => println!("✅ '{}' added successfully", appended.choice),
            Err(e) => return report(e),
        },
        Cmd::Remove { text } => match store.remove(&text.join(" ")) {
            Ok(remaining) => println!("🗑️ removed ({} remaining)", remaining.len()),
            Err(e) => return report(e),
        },
        Cmd::Clear => {
            store.clear();
            println!("✅ All choices cleared!");
        }
        Cmd::List => print!("{}", store.list_formatted()),
        Cmd::Open => {
            // 無ければ空ファイルを作成してから開く
            store.load();
            if let Err(e) = SystemOpener.open_in_default_application(store.path()) {
                eprintln!("Error: {e}");
                return Ok(ExitCode::FAILURE);
            }
        }
        Cmd::Config { action } => match action {
            ConfigCmd::Show => {
                println!("list-path: {}", cfg.list_path()?.display());
                println!("api-path:  {}", cfg.api_path()?.display());
            }
            ConfigCmd::Set { field } => match field {
                ConfigField::ListPath { path } => {
                    cfg.set_list_path(path)?;
                    println!("✅ list-path set to {}", cfg.list_path()?.display());
                }
                ConfigField::ApiPath { path } => {
                    cfg.set_api_path(path)?;
                    println!("✅ api-path set to {}", cfg.api_path()?.display());
                }
            },
        },
    }
    Ok(ExitCode::SUCCESS)
}
