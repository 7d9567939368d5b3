//! テキストファイル版 ChoiceRepository 実装（1 行 1 件、エスケープなし）
use crate::domain::choice::ChoiceRepository;
use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub struct TextFileChoiceRepo {
    path: PathBuf,
}

impl TextFileChoiceRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl ChoiceRepository for TextFileChoiceRepo {
    fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            self.ensure_parent()?;
            fs::File::create(&self.path)?;
            return Ok(vec![]);
        }
        let raw = fs::read_to_string(&self.path)?;
        // 外部エディタで編集された空行は無視
        Ok(raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    fn save(&self, all: &[String]) -> Result<()> {
        self.ensure_parent()?;
        let tmp = self.path.with_extension("txt.tmp");
        {
            let mut w = BufWriter::new(fs::File::create(&tmp)?);
            for choice in all {
                writeln!(w, "{choice}")?;
            }
            w.flush()?;
        }
        fs::rename(tmp, &self.path)?;
        Ok(())
    }

    /// 追記モードで 1 行だけ書き足す
    fn push(&self, _current: &[String], choice: &str) -> Result<()> {
        self.ensure_parent()?;
        let mut f = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        // 末尾に改行が無い（手編集された）ファイルでも行が連結されないようにする
        let len = f.metadata()?.len();
        if len > 0 {
            let mut last = [0u8; 1];
            f.seek(SeekFrom::Start(len - 1))?;
            f.read_exact(&mut last)?;
            if last[0] != b'\n' {
                f.write_all(b"\n")?;
            }
        }
        writeln!(f, "{choice}")?;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
