use crate::error::{ChoiceError, Result};
use crate::infrastructure::store::{StoreFormat, open_repository};
use crate::utils::config::EnvConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// GUI / CLI 既定のテキスト保存先
pub const DEFAULT_LIST_FILE: &str = "list_of_choices.txt";
/// REST API 既定の JSON 保存先
pub const DEFAULT_API_FILE: &str = "choices_data.json";

/// 永続設定（データディレクトリの `config.json`）
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// GUI / CLI が使う選択肢リスト
    pub list_path: Option<String>,
    /// REST API が使う選択肢リスト
    pub api_path: Option<String>,
}

/// 設定と既定リストを置くディレクトリ
pub fn data_dir() -> Result<PathBuf> {
    let config = EnvConfig::get();
    let dir = if let Some(home) = &config.data_home {
        PathBuf::from(home)
    } else if let Some(xdg_data_home) = &config.xdg_data_home {
        PathBuf::from(xdg_data_home).join("random_choice")
    } else {
        let proj = ProjectDirs::from("com", "user", "random_choice")
            .ok_or_else(|| ChoiceError::Config("cannot resolve platform dirs".into()))?;
        proj.data_local_dir().to_path_buf()
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn config_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("config.json"))
}

pub fn default_list_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(DEFAULT_LIST_FILE))
}

pub fn default_api_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(DEFAULT_API_FILE))
}

impl AppConfig {
    /// 既定の場所から読み込む。無い・壊れている場合は既定値
    pub fn load() -> Self {
        config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(f) = fs::File::open(path) {
            if let Ok(cfg) = serde_json::from_reader(f) {
                return cfg;
            }
        }
        AppConfig::default()
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        {
            let f = fs::File::create(&tmp)?;
            serde_json::to_writer_pretty(&f, self).map_err(std::io::Error::from)?;
        }
        fs::rename(tmp, path)?;
        Ok(())
    }

    pub fn list_path(&self) -> Result<PathBuf> {
        match &self.list_path {
            Some(p) => Ok(PathBuf::from(p)),
            None => default_list_path(),
        }
    }

    pub fn api_path(&self) -> Result<PathBuf> {
        match &self.api_path {
            Some(p) => Ok(PathBuf::from(p)),
            None => default_api_path(),
        }
    }

    /// GUI / CLI 用リストの保存先を変更（既存ファイルは移行し、旧ファイルは `.bak`）
    pub fn set_list_path(&mut self, new_path: PathBuf) -> Result<()> {
        let old = self.list_path()?;
        if old != new_path {
            migrate_file(&old, &new_path)?;
            self.list_path = Some(new_path.to_string_lossy().to_string());
            self.save()?;
        }
        Ok(())
    }

    /// REST API 用リストの保存先を変更
    pub fn set_api_path(&mut self, new_path: PathBuf) -> Result<()> {
        let old = self.api_path()?;
        if old != new_path {
            migrate_file(&old, &new_path)?;
            self.api_path = Some(new_path.to_string_lossy().to_string());
            self.save()?;
        }
        Ok(())
    }
}

/// `old` を `new_path` へ移行し、`old` は `.bak` に退避する。
/// 形式（拡張子）が変わる場合は旧形式で読み、新形式で書き直す。
/// `new_path` が既にある場合はそちらを優先して何もしない。
fn migrate_file(old: &Path, new_path: &Path) -> Result<()> {
    if let Some(parent) = new_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    if !old.exists() || new_path.exists() {
        return Ok(());
    }

    let converted = if StoreFormat::from_path(old) == StoreFormat::from_path(new_path) {
        None
    } else {
        Some(open_repository(old).load()?)
    };

    let bak = old.with_extension("bak");
    if bak.exists() {
        fs::remove_file(&bak)?;
    }
    fs::rename(old, &bak)?;
    match converted {
        Some(choices) => open_repository(new_path).save(&choices)?,
        None => {
            fs::copy(&bak, new_path)?;
        }
    }
    Ok(())
}
