//! アセットライブラリ TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: ストア + 画面ローカルな状態（カーソル・フォーカス）
//! - `Msg`: アプリケーションへのメッセージ
//!
//! UI 状態（タブ・検索・お気に入り・モーダル）はすべて `CatalogStore` の
//! 操作経由で更新する。Model が直接持つのは描画用のカーソル位置のみ。

use crate::asset::Asset;
use crate::store::CatalogStore;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 次のタブへ
    NextTab,
    /// 前のタブへ
    PrevTab,
    /// 検索欄にフォーカス移動
    SearchFocus,
    /// 検索欄からフォーカス解除
    SearchUnfocus,
    /// 検索文字入力
    SearchInput(char),
    /// 検索文字削除
    SearchBackspace,
    /// 検索クリア
    SearchClear,
    /// 検索語を確定（最近の検索に記録）
    SearchCommit,
    /// 最近の検索を順に呼び出す
    RecallRecentSearch,
    /// 最近の検索を消去
    ClearRecentSearches,
    /// 選択を上に移動
    Up,
    /// 選択を下に移動
    Down,
    /// 選択中アセットの詳細を開く
    OpenDetail,
    /// モーダルを閉じる
    CloseModal,
    /// お気に入り切り替え（モーダル表示中はそのアセット）
    ToggleFavorite,
    /// 全件表示の切り替え
    ToggleShowMore,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    /// カタログストア（UI 状態の単一の情報源）
    pub store: CatalogStore,
    /// 一覧の選択状態
    pub list_state: ListState,
    /// 検索欄にフォーカスしているか
    pub search_focused: bool,
    /// 最近の検索の呼び出し位置
    pub recent_cursor: Option<usize>,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    /// ストアを受け取ってモデルを作成
    pub fn new(store: CatalogStore) -> Self {
        let mut model = Self {
            store,
            list_state: ListState::default(),
            search_focused: false,
            recent_cursor: None,
            should_quit: false,
        };
        clamp_selection(&mut model);
        model
    }

    /// 選択中のアセット
    pub fn selected_asset(&self) -> Option<&Asset> {
        let idx = self.list_state.selected()?;
        self.store.visible().items.get(idx).copied()
    }

    /// お気に入りの表示ラベル（お気に入り順、存在しない ID は `#id`）
    pub fn favorite_labels(&self) -> Vec<String> {
        self.store
            .favorite_assets()
            .iter()
            .map(|r| r.label())
            .collect()
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.store.open_modal().is_some() {
            // モーダル表示中のキー処理
            return match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Msg::CloseModal),
                KeyCode::Char('f') => Some(Msg::ToggleFavorite),
                _ => None,
            };
        }

        if self.search_focused {
            // 検索欄にフォーカス中のキー処理
            match key {
                KeyCode::Esc if !self.store.search().is_empty() => Some(Msg::SearchClear),
                KeyCode::Esc | KeyCode::Down => Some(Msg::SearchUnfocus),
                KeyCode::Enter => Some(Msg::SearchCommit),
                KeyCode::Up => Some(Msg::RecallRecentSearch),
                KeyCode::Tab => Some(Msg::NextTab),
                KeyCode::BackTab => Some(Msg::PrevTab),
                KeyCode::Backspace => Some(Msg::SearchBackspace),
                KeyCode::Char(c) => Some(Msg::SearchInput(c)),
                _ => None,
            }
        } else {
            // 一覧フォーカス時のキー処理
            match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Tab | KeyCode::Right => Some(Msg::NextTab),
                KeyCode::BackTab | KeyCode::Left => Some(Msg::PrevTab),
                KeyCode::Char('/') => Some(Msg::SearchFocus),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::Up),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::Down),
                KeyCode::Enter => Some(Msg::OpenDetail),
                KeyCode::Char('f') => Some(Msg::ToggleFavorite),
                KeyCode::Char('m') => Some(Msg::ToggleShowMore),
                KeyCode::Char('x') => Some(Msg::ClearRecentSearches),
                _ => None,
            }
        }
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
        }
        Msg::NextTab => {
            model.search_focused = false;
            let tab = model.store.tab().next();
            model.store.set_tab(tab);
            reset_selection(model);
        }
        Msg::PrevTab => {
            model.search_focused = false;
            let tab = model.store.tab().prev();
            model.store.set_tab(tab);
            reset_selection(model);
        }
        Msg::SearchFocus => {
            model.search_focused = true;
        }
        Msg::SearchUnfocus => {
            model.search_focused = false;
            model.recent_cursor = None;
        }
        Msg::SearchInput(c) => {
            let mut search = model.store.search().to_string();
            search.push(c);
            set_search(model, search);
        }
        Msg::SearchBackspace => {
            let mut search = model.store.search().to_string();
            search.pop();
            set_search(model, search);
        }
        Msg::SearchClear => {
            set_search(model, String::new());
        }
        Msg::SearchCommit => {
            let term = model.store.search().to_string();
            model.store.add_recent_search(&term);
            model.search_focused = false;
            model.recent_cursor = None;
        }
        Msg::RecallRecentSearch => {
            let len = model.store.recent_searches().len();
            if len == 0 {
                return;
            }
            let next = model.recent_cursor.map_or(0, |i| (i + 1) % len);
            let term = model.store.recent_searches()[next].clone();
            model.store.set_search(term);
            model.recent_cursor = Some(next);
            clamp_selection(model);
        }
        Msg::ClearRecentSearches => {
            model.store.clear_recent_searches();
            model.recent_cursor = None;
        }
        Msg::Up => select_prev(model),
        Msg::Down => select_next(model),
        Msg::OpenDetail => {
            if let Some(asset) = model.selected_asset().cloned() {
                model.store.open_detail(&asset);
            }
        }
        Msg::CloseModal => {
            model.store.close_modals();
        }
        Msg::ToggleFavorite => {
            let id = match model.store.open_modal() {
                Some((_, asset)) => Some(asset.id),
                None => model.selected_asset().map(|a| a.id),
            };
            if let Some(id) = id {
                model.store.toggle_favorite(id);
            }
        }
        Msg::ToggleShowMore => {
            let show_more = !model.store.show_more();
            model.store.set_show_more(show_more);
            clamp_selection(model);
        }
    }
}

/// 検索テキストを更新し、呼び出し位置と選択を整合させる
fn set_search(model: &mut Model, search: String) {
    model.store.set_search(search);
    model.recent_cursor = None;
    clamp_selection(model);
}

/// 選択を上に移動
fn select_prev(model: &mut Model) {
    if model.store.visible().is_empty() {
        return;
    }
    let current = model.list_state.selected().unwrap_or(0);
    model.list_state.select(Some(current.saturating_sub(1)));
}

/// 選択を下に移動
fn select_next(model: &mut Model) {
    let len = model.store.visible().items.len();
    if len == 0 {
        return;
    }
    let current = model.list_state.selected().unwrap_or(0);
    model.list_state.select(Some((current + 1).min(len - 1)));
}

/// タブ切替時は先頭を選択
fn reset_selection(model: &mut Model) {
    model.list_state.select(None);
    clamp_selection(model);
}

/// 絞り込み結果の変化後に選択状態を整合させる
fn clamp_selection(model: &mut Model) {
    let len = model.store.visible().items.len();
    if len == 0 {
        model.list_state.select(None);
        return;
    }
    let idx = model.list_state.selected().unwrap_or(0).min(len - 1);
    model.list_state.select(Some(idx));
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
