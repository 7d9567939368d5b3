//! JSON ファイル版 ChoiceRepository 実装
//!
//! `{"choices": [...]}` を 2 スペースインデントで保存する（REST API 用）。
use crate::domain::choice::ChoiceRepository;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::to_writer_pretty;
use std::io::{self, BufWriter, Write};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ChoicesDocument {
    #[serde(default)]
    choices: Vec<String>,
}

pub struct JsonFileChoiceRepo {
    path: PathBuf,
}

impl JsonFileChoiceRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ChoiceRepository for JsonFileChoiceRepo {
    fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            self.save(&[])?;
            return Ok(vec![]);
        }
        let raw = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<ChoicesDocument>(&raw) {
            Ok(doc) => Ok(doc.choices),
            Err(e) => {
                // 壊れた JSON は空リスト扱い（元ファイルは次の保存まで残る）
                warn!(path = %self.path.display(), error = %e, "malformed choices document, treating as empty");
                Ok(vec![])
            }
        }
    }

    fn save(&self, all: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let doc = ChoicesDocument {
            choices: all.to_vec(),
        };
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut w = BufWriter::new(fs::File::create(&tmp)?);
            to_writer_pretty(&mut w, &doc).map_err(io::Error::from)?;
            w.flush()?;
        }
        fs::rename(tmp, &self.path)?;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
