use crate::domain::choice::{ChoiceRepository, normalize, normalize_non_empty};
use crate::error::{ChoiceError, Result};
use crate::infrastructure::store::open_repository;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// 追加結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appended {
    /// 正規化後の追加テキスト
    pub choice: String,
    /// 追加後の全件
    pub choices: Vec<String>,
}

/// 選択肢ストア
///
/// GUI / REST / CLI が共有する唯一の操作窓口。毎回リポジトリから全件を読み直して
/// read-modify-write するだけで、ロックは持たない。別プロセスが同じファイルへ同時に
/// 書き込んだ場合は後勝ちになる。
#[derive(Clone)]
pub struct ChoiceStore {
    repo: Arc<dyn ChoiceRepository>,
}

impl ChoiceStore {
    pub fn new(repo: Arc<dyn ChoiceRepository>) -> Self {
        Self { repo }
    }

    /// 拡張子から形式を判定して開く（`.json` → JSON, それ以外 → テキスト）
    pub fn open(path: &Path) -> Self {
        Self::new(open_repository(path))
    }

    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// 全件読み込み（ストレージエラーをそのまま返す）
    pub fn try_load(&self) -> Result<Vec<String>> {
        self.repo.load()
    }

    /// 全件読み込み。ストレージエラーはログに残して空リスト扱い
    pub fn load(&self) -> Vec<String> {
        match self.repo.load() {
            Ok(list) => list,
            Err(e) => {
                warn!(path = %self.path().display(), error = %e, "failed to load choices");
                Vec::new()
            }
        }
    }

    /// 正規化して末尾に追加
    ///
    /// 空文字は `EmptyChoice`、既存と一致すれば `AlreadyExists`（ストレージは変更しない）。
    /// 書き込み失敗はログのみで呼び出し側には返さない。
    pub fn append(&self, text: &str) -> Result<Appended> {
        let choice = normalize_non_empty(text)?;
        let mut choices = self.load();
        // 手編集された行は正規化前のまま残っているので、比較時に正規化する
        if choices.iter().any(|c| normalize(c) == choice) {
            debug!(%choice, "duplicate choice rejected");
            return Err(ChoiceError::AlreadyExists(choice));
        }

        if let Err(e) = self.repo.push(&choices, &choice) {
            error!(path = %self.path().display(), error = %e, %choice, "failed to save choice");
        }
        choices.push(choice.clone());
        Ok(Appended { choice, choices })
    }

    /// 全件削除（冪等）
    pub fn clear(&self) {
        if let Err(e) = self.repo.save(&[]) {
            error!(path = %self.path().display(), error = %e, "failed to clear choices");
        }
    }

    /// 一致する 1 件を削除し、残りを返す
    pub fn remove(&self, text: &str) -> Result<Vec<String>> {
        let target = normalize(text);
        let mut choices = self.load();
        let Some(index) = choices.iter().position(|c| normalize(c) == target) else {
            return Err(ChoiceError::NotFound(target));
        };
        choices.remove(index);

        if let Err(e) = self.repo.save(&choices) {
            error!(path = %self.path().display(), error = %e, choice = %target, "failed to save after removal");
        }
        Ok(choices)
    }

    /// フォーマット済み一覧表示
    pub fn list_formatted(&self) -> String {
        let choices = self.load();
        if choices.is_empty() {
            return "📝 No choices saved. Use 'random_choice add <text>' to add one.".to_string();
        }

        let mut output = format!("📚 {} choice(s):\n", choices.len());
        for (i, choice) in choices.iter().enumerate() {
            output.push_str(&format!("  [{}] {}\n", i + 1, choice));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// メモリ上のリポジトリ（書き込み失敗を注入できる）
    struct MemoryRepo {
        items: Mutex<Vec<String>>,
        fail_writes: bool,
        path: PathBuf,
    }

    impl MemoryRepo {
        fn new(items: &[&str]) -> Self {
            Self {
                items: Mutex::new(items.iter().map(|s| s.to_string()).collect()),
                fail_writes: false,
                path: PathBuf::from("memory"),
            }
        }

        fn failing(items: &[&str]) -> Self {
            Self {
                fail_writes: true,
                ..Self::new(items)
            }
        }
    }

    impl ChoiceRepository for MemoryRepo {
        fn load(&self) -> Result<Vec<String>> {
            Ok(self.items.lock().unwrap().clone())
        }

        fn save(&self, all: &[String]) -> Result<()> {
            if self.fail_writes {
                return Err(std::io::Error::other("disk full").into());
            }
            *self.items.lock().unwrap() = all.to_vec();
            Ok(())
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }

    struct UnreadableRepo(PathBuf);

    impl ChoiceRepository for UnreadableRepo {
        fn load(&self) -> Result<Vec<String>> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }
        fn save(&self, _all: &[String]) -> Result<()> {
            Ok(())
        }
        fn path(&self) -> &Path {
            &self.0
        }
    }

    #[test]
    fn append_grows_list_by_one() {
        let repo = Arc::new(MemoryRepo::new(&["sushi"]));
        let store = ChoiceStore::new(repo.clone());

        let appended = store.append("  Pizza ").unwrap();
        assert_eq!(appended.choice, "pizza");
        assert_eq!(appended.choices, vec!["sushi", "pizza"]);
        assert_eq!(store.load(), vec!["sushi", "pizza"]);
        assert_eq!(store.load().iter().filter(|c| *c == "pizza").count(), 1);
    }

    #[test]
    fn duplicate_is_rejected_case_insensitively() {
        let store = ChoiceStore::new(Arc::new(MemoryRepo::new(&["pizza"])));

        let err = store.append("PIZZA ").unwrap_err();
        assert!(matches!(err, ChoiceError::AlreadyExists(ref c) if c == "pizza"));
        assert_eq!(store.load(), vec!["pizza"]);
    }

    #[test]
    fn empty_text_is_rejected() {
        let store = ChoiceStore::new(Arc::new(MemoryRepo::new(&[])));
        assert!(matches!(store.append("   "), Err(ChoiceError::EmptyChoice)));
        assert!(store.load().is_empty());
    }

    #[test]
    fn remove_present_and_absent() {
        let store = ChoiceStore::new(Arc::new(MemoryRepo::new(&["pizza", "sushi"])));

        assert!(matches!(
            store.remove("ramen"),
            Err(ChoiceError::NotFound(ref c)) if c == "ramen"
        ));
        assert_eq!(store.load().len(), 2);

        let remaining = store.remove("Pizza").unwrap();
        assert_eq!(remaining, vec!["sushi"]);
        assert_eq!(store.load(), vec!["sushi"]);
    }

    #[test]
    fn hand_edited_lines_are_compared_normalized() {
        let store = ChoiceStore::new(Arc::new(MemoryRepo::new(&["Pizza", "  Sushi "])));

        assert!(matches!(
            store.append("pizza"),
            Err(ChoiceError::AlreadyExists(ref c)) if c == "pizza"
        ));
        assert_eq!(store.load().len(), 2);

        assert_eq!(store.remove("sushi").unwrap(), vec!["Pizza"]);
        assert_eq!(store.remove("PIZZA").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn line_breaks_collapse_into_one_choice() {
        let store = ChoiceStore::new(Arc::new(MemoryRepo::new(&["b"])));

        let appended = store.append("A\nb").unwrap();
        assert_eq!(appended.choice, "a b");
        assert_eq!(store.load(), vec!["b", "a b"]);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = ChoiceStore::new(Arc::new(MemoryRepo::new(&["a", "b"])));
        store.clear();
        assert!(store.load().is_empty());
        store.clear();
        assert!(store.load().is_empty());
    }

    /// 書き込み失敗は呼び出し側に返らず、書き込みは失われる
    #[test]
    fn save_failure_is_swallowed_and_write_is_dropped() {
        let store = ChoiceStore::new(Arc::new(MemoryRepo::failing(&["sushi"])));

        let appended = store.append("pizza").unwrap();
        assert_eq!(appended.choices, vec!["sushi", "pizza"]);
        assert_eq!(store.load(), vec!["sushi"]);
    }

    #[test]
    fn load_failure_becomes_empty_list() {
        let store = ChoiceStore::new(Arc::new(UnreadableRepo(PathBuf::from("locked"))));
        assert!(store.load().is_empty());
        assert!(matches!(store.try_load(), Err(ChoiceError::Storage(_))));
    }

    #[test]
    fn formatted_list_numbers_items() {
        let store = ChoiceStore::new(Arc::new(MemoryRepo::new(&["pizza", "sushi"])));
        let out = store.list_formatted();
        assert!(out.contains("2 choice(s)"));
        assert!(out.contains("[1] pizza"));
        assert!(out.contains("[2] sushi"));

        let empty = ChoiceStore::new(Arc::new(MemoryRepo::new(&[])));
        assert!(empty.list_formatted().contains("No choices saved"));
    }
}
