//! OS の既定アプリでファイルを開く

use std::io;
use std::path::Path;
use std::process::Command;

/// 既定アプリでファイルを開く機能の抽象化
pub trait FileOpener {
    /// `path` を OS の既定ハンドラで開き、起動コマンドの終了を待つ
    fn open_in_default_application(&self, path: &Path) -> io::Result<()>;
}

/// `open` / `xdg-open` / `start` を呼び出す本番実装
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(path: &Path) -> Command {
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        }
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl FileOpener for SystemOpener {
    fn open_in_default_application(&self, path: &Path) -> io::Result<()> {
        let status = Self::command(path).status()?;
        if !status.success() {
            return Err(io::Error::other(format!(
                "opener exited with {status} for {}",
                path.display()
            )));
        }
        Ok(())
    }
}
