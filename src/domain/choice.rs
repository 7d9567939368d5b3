//! 選択肢エンティティとリポジトリ抽象 – ドメイン層

use crate::error::{ChoiceError, Result};
use std::path::Path;

/// 入力テキストを保存・比較用に正規化します。
///
/// 前後の空白を取り除き、小文字化します。GUI / REST / CLI すべてこの規則を共有し、
/// 重複判定は正規化後の完全一致で行います。
///
/// テキスト形式は 1 行 1 件なので、改行を含む入力は空白 1 つでつないだ 1 行にします。
pub fn normalize(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// 正規化した上で空文字を拒否します。
pub fn normalize_non_empty(text: &str) -> Result<String> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(ChoiceError::EmptyChoice);
    }
    Ok(normalized)
}

/// 選択肢リスト永続化 I/F
///
/// `load` / `save` だけが必須。どちらのエンコーディングも排他制御は行わず、
/// 並行する書き込みは後勝ちになる。
pub trait ChoiceRepository: Send + Sync {
    /// 全件読み込み。ファイルが無ければ空で作成して `[]` を返す
    fn load(&self) -> Result<Vec<String>>;

    /// 全件上書き
    fn save(&self, all: &[String]) -> Result<()>;

    /// `current` の末尾に 1 件追加して永続化（既定は全件書き直し）
    fn push(&self, current: &[String], choice: &str) -> Result<()> {
        let mut all = current.to_vec();
        all.push(choice.to_string());
        self.save(&all)
    }

    /// 保存先ファイル
    fn path(&self) -> &Path;
}
