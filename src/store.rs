//! カタログストア
//!
//! アセット一覧と UI の選択状態（タブ・検索・最近の検索・お気に入り・
//! モーダル）を一元管理する。セッション開始時に生成し、参照で各描画側に渡す。
//!
//! 全操作は同期的な全域関数で、失敗しない。ドメイン検証も行わない
//! （負の ID のお気に入り登録なども与えられたまま保持する）。

mod tab;

pub use tab::Tab;

use crate::asset::{Asset, AssetDetails, AssetId};
use crate::catalog::{resolve_all, AssetRef};
use crate::pipeline::{self, Query, Selection};

/// 最近の検索の最大保持件数
pub const RECENT_SEARCH_LIMIT: usize = 5;

// ============================================================================
// ModalSlot（詳細モーダルの種類）
// ============================================================================

/// モーダルスロットの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalSlot {
    Generic,
    Kpi,
    DataViz,
    Layout,
    Storyboard,
}

impl ModalSlot {
    /// 表示優先順
    pub fn all() -> &'static [ModalSlot] {
        &[
            ModalSlot::Generic,
            ModalSlot::Kpi,
            ModalSlot::DataViz,
            ModalSlot::Layout,
            ModalSlot::Storyboard,
        ]
    }

    /// アセット種別に対応するスロット（Generic は汎用スロット）
    pub fn for_asset(asset: &Asset) -> Self {
        match asset.details {
            AssetDetails::Kpi(_) => ModalSlot::Kpi,
            AssetDetails::DataViz(_) => ModalSlot::DataViz,
            AssetDetails::Layout(_) => ModalSlot::Layout,
            AssetDetails::Storyboard(_) => ModalSlot::Storyboard,
            AssetDetails::Generic => ModalSlot::Generic,
        }
    }
}

/// 各モーダルに表示中のアセット
///
/// スロット同士の排他制御はしない。どのスロットを表示するかは描画側の責務。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalSlots {
    pub generic: Option<Asset>,
    pub kpi: Option<Asset>,
    pub data_viz: Option<Asset>,
    pub layout: Option<Asset>,
    pub storyboard: Option<Asset>,
}

impl ModalSlots {
    pub fn get(&self, slot: ModalSlot) -> Option<&Asset> {
        match slot {
            ModalSlot::Generic => self.generic.as_ref(),
            ModalSlot::Kpi => self.kpi.as_ref(),
            ModalSlot::DataViz => self.data_viz.as_ref(),
            ModalSlot::Layout => self.layout.as_ref(),
            ModalSlot::Storyboard => self.storyboard.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: ModalSlot) -> &mut Option<Asset> {
        match slot {
            ModalSlot::Generic => &mut self.generic,
            ModalSlot::Kpi => &mut self.kpi,
            ModalSlot::DataViz => &mut self.data_viz,
            ModalSlot::Layout => &mut self.layout,
            ModalSlot::Storyboard => &mut self.storyboard,
        }
    }
}

// ============================================================================
// CatalogStore
// ============================================================================

/// UI 状態の単一の情報源
#[derive(Debug, Clone)]
pub struct CatalogStore {
    assets: Vec<Asset>,
    tab: Tab,
    search: String,
    show_more: bool,
    /// 新しくお気に入りにしたものが先頭
    favorites: Vec<AssetId>,
    /// 新しい検索が先頭、最大 RECENT_SEARCH_LIMIT 件
    recent_searches: Vec<String>,
    modals: ModalSlots,
}

impl CatalogStore {
    /// 外部から与えられたアセット一覧で初期化（他の状態はデフォルト値）
    pub fn new(assets: Vec<Asset>) -> Self {
        Self {
            assets,
            tab: Tab::default(),
            search: String::new(),
            show_more: false,
            favorites: Vec::new(),
            recent_searches: Vec::new(),
            modals: ModalSlots::default(),
        }
    }

    // ------------------------------------------------------------------------
    // 読み取り
    // ------------------------------------------------------------------------

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn tab(&self) -> &Tab {
        &self.tab
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn show_more(&self) -> bool {
        self.show_more
    }

    pub fn favorites(&self) -> &[AssetId] {
        &self.favorites
    }

    pub fn recent_searches(&self) -> &[String] {
        &self.recent_searches
    }

    pub fn modals(&self) -> &ModalSlots {
        &self.modals
    }

    pub fn modal_asset(&self) -> Option<&Asset> {
        self.modals.generic.as_ref()
    }

    pub fn kpi_modal_asset(&self) -> Option<&Asset> {
        self.modals.kpi.as_ref()
    }

    pub fn data_viz_modal_asset(&self) -> Option<&Asset> {
        self.modals.data_viz.as_ref()
    }

    pub fn layout_modal_asset(&self) -> Option<&Asset> {
        self.modals.layout.as_ref()
    }

    pub fn storyboard_modal_asset(&self) -> Option<&Asset> {
        self.modals.storyboard.as_ref()
    }

    pub fn is_favorite(&self, id: AssetId) -> bool {
        self.favorites.contains(&id)
    }

    // ------------------------------------------------------------------------
    // 更新
    // ------------------------------------------------------------------------

    /// タブを置き換える（未知のラベルはそのまま保持）
    pub fn set_tab(&mut self, tab: impl Into<Tab>) {
        self.tab = tab.into().normalized();
        tracing::debug!(tab = %self.tab, "set tab");
    }

    /// 検索テキストを置き換える（大文字小文字はそのまま保持）
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// 最近の検索に追加
    ///
    /// 空白のみなら何もしない。同じ文字列は先頭へ移動し、件数は上限で切り詰める。
    pub fn add_recent_search(&mut self, term: &str) {
        if term.trim().is_empty() {
            return;
        }
        self.recent_searches.retain(|s| s != term);
        self.recent_searches.insert(0, term.to_string());
        self.recent_searches.truncate(RECENT_SEARCH_LIMIT);
        tracing::debug!(term, count = self.recent_searches.len(), "recent search added");
    }

    pub fn clear_recent_searches(&mut self) {
        self.recent_searches.clear();
        tracing::debug!("recent searches cleared");
    }

    /// お気に入りを切り替え（登録済みなら削除、未登録なら先頭に追加）
    pub fn toggle_favorite(&mut self, id: AssetId) {
        if let Some(pos) = self.favorites.iter().position(|&f| f == id) {
            self.favorites.remove(pos);
            tracing::debug!(id, "favorite removed");
        } else {
            self.favorites.insert(0, id);
            tracing::debug!(id, "favorite added");
        }
    }

    pub fn set_show_more(&mut self, show_more: bool) {
        self.show_more = show_more;
    }

    /// 汎用モーダルのアセットを設定（None で閉じる）
    pub fn set_modal_asset(&mut self, asset: Option<Asset>) {
        self.set_slot(ModalSlot::Generic, asset);
    }

    pub fn set_kpi_modal_asset(&mut self, asset: Option<Asset>) {
        self.set_slot(ModalSlot::Kpi, asset);
    }

    pub fn set_data_viz_modal_asset(&mut self, asset: Option<Asset>) {
        self.set_slot(ModalSlot::DataViz, asset);
    }

    pub fn set_layout_modal_asset(&mut self, asset: Option<Asset>) {
        self.set_slot(ModalSlot::Layout, asset);
    }

    pub fn set_storyboard_modal_asset(&mut self, asset: Option<Asset>) {
        self.set_slot(ModalSlot::Storyboard, asset);
    }

    fn set_slot(&mut self, slot: ModalSlot, asset: Option<Asset>) {
        tracing::debug!(?slot, id = asset.as_ref().map(|a| a.id), "set modal asset");
        *self.modals.slot_mut(slot) = asset;
    }

    // ------------------------------------------------------------------------
    // 派生操作
    // ------------------------------------------------------------------------

    /// アセット種別に応じたモーダルを開く
    pub fn open_detail(&mut self, asset: &Asset) {
        let slot = ModalSlot::for_asset(asset);
        self.set_slot(slot, Some(asset.clone()));
    }

    /// 全モーダルを閉じる
    pub fn close_modals(&mut self) {
        for &slot in ModalSlot::all() {
            if self.modals.get(slot).is_some() {
                self.set_slot(slot, None);
            }
        }
    }

    /// 表示中のモーダル（複数開いている場合は表示優先順で最初のもの）
    pub fn open_modal(&self) -> Option<(ModalSlot, &Asset)> {
        ModalSlot::all()
            .iter()
            .find_map(|&slot| self.modals.get(slot).map(|a| (slot, a)))
    }

    /// お気に入りをアセットに解決（存在しない ID は Dangling）
    pub fn favorite_assets(&self) -> Vec<AssetRef<'_>> {
        resolve_all(&self.assets, &self.favorites)
    }

    /// 選択パイプラインへの入力（現在状態のスナップショット）
    pub fn query(&self) -> Query<'_> {
        Query {
            tab: &self.tab,
            search: &self.search,
            show_more: self.show_more,
        }
    }

    /// 表示対象のアセット（読み取りのたびに再計算）
    pub fn visible(&self) -> Selection<'_> {
        pipeline::select(&self.assets, &self.query())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

#[cfg(test)]
#[path = "store_proptests.rs"]
mod proptests;
