//! ランダム選択ウィンドウ
//!
//! eGui で「選ぶ」「追加する」「リストを開く」の 3 操作を提供します。
//! 状態は `Idle` と `Adding` の 2 つだけで、追加結果の通知は一定時間で自動的に消えます。

use egui::{Color32, Context, FontFamily, FontId, Frame, Key, Margin, RichText, Vec2};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::types::{Notice, NoticeKind, ResultView, UiMode};
use crate::application::ChoiceStore;
use crate::error::ChoiceError;
use crate::infrastructure::external::opener::FileOpener;

const RESULT_BG: Color32 = Color32::from_rgb(0xE0, 0xF2, 0xF1);
const RESULT_FG: Color32 = Color32::from_rgb(0x0E, 0x85, 0x73);
const EMPTY_BG: Color32 = Color32::from_rgb(0xFE, 0xEF, 0xE3);
const EMPTY_FG: Color32 = Color32::from_rgb(0xB3, 0x14, 0x12);
const BLANK_BG: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);
const ADD_BUTTON: Color32 = Color32::from_rgb(0x0E, 0x85, 0x73);
const SAVE_BUTTON: Color32 = Color32::from_rgb(0xB3, 0x9D, 0xDB);

/// 1 フレーム中に押された操作
#[derive(Debug, Default)]
struct FrameActions {
    choose: bool,
    add: bool,
    save: bool,
    view_list: bool,
}

pub struct RandomChoiceApp {
    store: ChoiceStore,
    opener: Box<dyn FileOpener>,
    choices: Vec<String>,
    mode: UiMode,
    input: String,
    result: ResultView,
    notice: Option<Notice>,
    notice_until: Option<Instant>,
    focus_input: bool,
}

impl RandomChoiceApp {
    const NOTICE_DURATION_SECS: u64 = 2;

    pub fn new(store: ChoiceStore, opener: Box<dyn FileOpener>) -> Self {
        let choices = store.load();
        Self {
            store,
            opener,
            choices,
            mode: UiMode::Idle,
            input: String::new(),
            result: ResultView::Blank,
            notice: None,
            notice_until: None,
            focus_input: false,
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn result(&self) -> &ResultView {
        &self.result
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// ストアから読み直す
    pub fn reload(&mut self) {
        self.choices = self.store.load();
    }

    /// 「選ぶ」ボタン
    pub fn on_choose(&mut self) {
        self.result = match crate::domain::choose_random(&self.choices) {
            Some(choice) => ResultView::Chosen(choice.clone()),
            None => ResultView::Nothing,
        };
    }

    /// 「追加」ボタン: 入力欄を表示
    pub fn on_add_pressed(&mut self) {
        self.mode = UiMode::Adding;
        self.focus_input = true;
    }

    /// ESC: 入力を破棄して戻る
    pub fn on_cancel(&mut self) {
        if self.mode == UiMode::Adding {
            self.input.clear();
            self.mode = UiMode::Idle;
        }
    }

    /// 「保存」ボタン: 結果に関わらず入力欄はクリアして閉じる
    pub fn on_save(&mut self) {
        let text = std::mem::take(&mut self.input);
        self.mode = UiMode::Idle;

        match self.store.append(&text) {
            Ok(appended) => {
                self.show_notice(Notice::added(&appended.choice));
                self.reload();
            }
            Err(ChoiceError::AlreadyExists(choice)) => {
                self.show_notice(Notice::already_exists(&choice));
            }
            Err(e) => debug!(error = %e, "choice not added"),
        }
    }

    /// 「リストを見る」: 既定アプリで開き、外部編集を反映するため読み直す
    pub fn on_view_list(&mut self) {
        let path = self.store.path().to_path_buf();
        // 空ファイルを作っておく
        self.store.load();
        if let Err(e) = self.opener.open_in_default_application(&path) {
            warn!(path = %path.display(), error = %e, "failed to open choice list");
        }
        self.reload();
    }

    /// 表示中の通知（期限切れなら `None`）
    pub fn active_notice(&self) -> Option<&Notice> {
        self.active_notice_at(Instant::now())
    }

    fn active_notice_at(&self, now: Instant) -> Option<&Notice> {
        match (self.notice.as_ref(), self.notice_until) {
            (Some(notice), Some(until)) if now < until => Some(notice),
            _ => None,
        }
    }

    /// 新しい通知は古い通知を上書きする（古いタイマーも無効になる）
    fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_until =
            Some(Instant::now() + Duration::from_secs(Self::NOTICE_DURATION_SECS));
    }

    #[cfg(test)]
    pub fn set_notice_until(&mut self, until: Option<Instant>) {
        self.notice_until = until;
    }

    fn render_ui(&mut self, ctx: &Context) -> FrameActions {
        let mut actions = FrameActions::default();
        let panel_frame = Frame::none()
            .fill(Color32::WHITE)
            .inner_margin(Margin::same(10.0));

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                if ui
                    .link(RichText::new("view list").color(Color32::BLACK).underline())
                    .clicked()
                {
                    actions.view_list = true;
                }

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if ui
                        .add_sized([150.0, 30.0], egui::Button::new("Choose a thing to do"))
                        .clicked()
                    {
                        actions.choose = true;
                    }

                    ui.add_space(8.0);
                    match self.mode {
                        UiMode::Idle => {
                            let add = egui::Button::new(
                                RichText::new("Add a thing").color(Color32::WHITE),
                            )
                            .fill(ADD_BUTTON);
                            if ui.add_sized([150.0, 30.0], add).clicked() {
                                actions.add = true;
                            }
                        }
                        UiMode::Adding => {
                            ui.horizontal(|ui| {
                                ui.add_space(55.0);
                                let response = ui.add_sized(
                                    [95.0, 30.0],
                                    egui::TextEdit::singleline(&mut self.input),
                                );
                                if self.focus_input {
                                    response.request_focus();
                                    self.focus_input = false;
                                }
                                if response.lost_focus()
                                    && ui.input(|i| i.key_pressed(Key::Enter))
                                {
                                    actions.save = true;
                                }
                                let save = egui::Button::new(
                                    RichText::new("Save").color(Color32::WHITE),
                                )
                                .fill(SAVE_BUTTON);
                                if ui.add_sized([75.0, 30.0], save).clicked() {
                                    actions.save = true;
                                }
                            });
                        }
                    }

                    if let Some(notice) = self.active_notice() {
                        let color = match notice.kind {
                            NoticeKind::Added => RESULT_FG,
                            NoticeKind::AlreadyExists => Color32::RED,
                        };
                        ui.label(RichText::new(&notice.message).color(color));
                    } else {
                        ui.add_space(ui.spacing().interact_size.y);
                    }

                    ui.add_space(8.0);
                    self.render_result(ui);
                });
            });

        actions
    }

    fn render_result(&self, ui: &mut egui::Ui) {
        let (bg, fg) = match self.result {
            ResultView::Blank => (BLANK_BG, Color32::BLACK),
            ResultView::Nothing => (EMPTY_BG, EMPTY_FG),
            ResultView::Chosen(_) => (RESULT_BG, RESULT_FG),
        };

        Frame::none()
            .fill(bg)
            .rounding(15.0)
            .inner_margin(Margin::same(8.0))
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(264.0, 84.0));
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(self.result.text())
                            .color(fg)
                            .font(FontId::new(16.0, FontFamily::Proportional)),
                    );
                });
            });
    }

    fn apply(&mut self, actions: FrameActions) {
        if actions.choose {
            self.on_choose();
        }
        if actions.add {
            self.on_add_pressed();
        }
        if actions.save {
            self.on_save();
        }
        if actions.view_list {
            self.on_view_list();
        }
    }
}

impl eframe::App for RandomChoiceApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.on_cancel();
        }

        let actions = self.render_ui(ctx);
        self.apply(actions);

        // 通知の自動消去に合わせて再描画
        if let Some(until) = self.notice_until {
            let now = Instant::now();
            if now < until {
                ctx.request_repaint_after(until - now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;
    use tempfile::{TempDir, tempdir};

    /// 開いたパスを記録するだけのオープナー
    #[derive(Clone, Default)]
    struct RecordingOpener {
        opened: Rc<RefCell<Vec<PathBuf>>>,
        append_on_open: Option<String>,
    }

    impl FileOpener for RecordingOpener {
        fn open_in_default_application(&self, path: &Path) -> std::io::Result<()> {
            self.opened.borrow_mut().push(path.to_path_buf());
            if let Some(line) = &self.append_on_open {
                // ユーザーがエディタで 1 行追加したことを模擬
                let mut raw = std::fs::read_to_string(path)?;
                raw.push_str(line);
                raw.push('\n');
                std::fs::write(path, raw)?;
            }
            Ok(())
        }
    }

    fn app_with(items: &[&str]) -> (TempDir, RandomChoiceApp, RecordingOpener) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list_of_choices.txt");
        std::fs::write(&path, items.iter().map(|s| format!("{s}\n")).collect::<String>())
            .unwrap();
        let opener = RecordingOpener::default();
        let app = RandomChoiceApp::new(ChoiceStore::open(&path), Box::new(opener.clone()));
        (dir, app, opener)
    }

    #[test]
    fn choose_on_empty_list_shows_nothing() {
        let (_dir, mut app, _) = app_with(&[]);
        app.on_choose();
        assert_eq!(app.result(), &ResultView::Nothing);
        assert_eq!(app.result().text(), "there's nothing to choose");
    }

    #[test]
    fn choose_returns_a_member() {
        let (_dir, mut app, _) = app_with(&["pizza", "sushi"]);
        for _ in 0..20 {
            app.on_choose();
            match app.result() {
                ResultView::Chosen(c) => assert!(c == "pizza" || c == "sushi"),
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn add_then_escape_discards_input() {
        let (_dir, mut app, _) = app_with(&[]);
        app.on_add_pressed();
        assert_eq!(app.mode(), UiMode::Adding);
        app.set_input("pizza");

        app.on_cancel();
        assert_eq!(app.mode(), UiMode::Idle);
        assert_eq!(app.input(), "");
        assert!(app.choices().is_empty());
    }

    #[test]
    fn save_adds_and_shows_notice() {
        let (_dir, mut app, _) = app_with(&["sushi"]);
        app.on_add_pressed();
        app.set_input("  Pizza ");
        app.on_save();

        assert_eq!(app.mode(), UiMode::Idle);
        assert_eq!(app.input(), "");
        assert_eq!(app.choices(), &["sushi".to_string(), "pizza".to_string()]);
        let notice = app.active_notice().expect("notice shown");
        assert_eq!(notice.kind, NoticeKind::Added);
        assert_eq!(notice.message, "'pizza' added successfully");
    }

    #[test]
    fn save_duplicate_shows_exists_notice() {
        let (_dir, mut app, _) = app_with(&["pizza"]);
        app.on_add_pressed();
        app.set_input("PIZZA");
        app.on_save();

        assert_eq!(app.mode(), UiMode::Idle);
        assert_eq!(app.input(), "");
        assert_eq!(app.choices().len(), 1);
        let notice = app.active_notice().expect("notice shown");
        assert_eq!(notice.kind, NoticeKind::AlreadyExists);
        assert_eq!(notice.message, "pizza already exists!");
    }

    #[test]
    fn empty_save_closes_input_without_notice() {
        let (_dir, mut app, _) = app_with(&[]);
        app.on_add_pressed();
        app.set_input("   ");
        app.on_save();

        assert_eq!(app.mode(), UiMode::Idle);
        assert!(app.active_notice().is_none());
        assert!(app.choices().is_empty());
    }

    #[test]
    fn notice_expires() {
        let (_dir, mut app, _) = app_with(&[]);
        app.set_input("pizza");
        app.on_save();
        assert!(app.active_notice().is_some());

        // 手動でタイマーを過去に設定
        app.set_notice_until(Some(Instant::now() - Duration::from_secs(1)));
        assert!(app.active_notice().is_none());
    }

    #[test]
    fn newer_notice_replaces_older() {
        let (_dir, mut app, _) = app_with(&[]);
        app.set_input("pizza");
        app.on_save();
        app.set_input("pizza");
        app.on_save();

        let notice = app.active_notice().expect("notice shown");
        assert_eq!(notice.kind, NoticeKind::AlreadyExists);
        let later = Instant::now() + Duration::from_millis(1500);
        assert!(app.active_notice_at(later).is_some());
    }

    #[test]
    fn view_list_opens_file_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list_of_choices.txt");
        let opener = RecordingOpener {
            append_on_open: Some("ramen".into()),
            ..Default::default()
        };
        let mut app = RandomChoiceApp::new(ChoiceStore::open(&path), Box::new(opener.clone()));
        assert!(app.choices().is_empty());

        app.on_view_list();

        assert_eq!(opener.opened.borrow().as_slice(), &[path.clone()]);
        assert_eq!(app.choices(), &["ramen".to_string()]);
        assert_eq!(app.mode(), UiMode::Idle);
    }
}
