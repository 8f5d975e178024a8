//! 選択パイプライン
//!
//! タブ → 検索テキスト → ページングの順に絞り込む純粋関数群。
//! キャッシュはせず、読み取りのたびにストアの状態から再計算する。
//! 並び替えは一切行わず、元のコレクション順を保つ。

use crate::asset::{Asset, AssetId};
use crate::store::Tab;

/// `show_more` が false のときに表示する件数
pub const PAGE_SIZE: usize = 4;

/// パイプラインへの入力（ストア状態の借用スナップショット）
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub tab: &'a Tab,
    pub search: &'a str,
    pub show_more: bool,
}

/// 結果が空のときの表示区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// 検索なしでタブに該当するアセットがない
    NoAssets,
    /// 検索に一致するアセットがない
    NoSearchResults,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoAssets => "No assets available in this category",
            EmptyState::NoSearchResults => "No assets match your search",
        }
    }
}

/// パイプラインの出力
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// 表示するアセット（ページング後）
    pub items: Vec<&'a Asset>,
    /// ページング前の一致件数
    pub matched: usize,
    searched: bool,
}

impl Selection<'_> {
    /// ページングで隠れているアセットがあるか
    pub fn has_more(&self) -> bool {
        self.matched > self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 空の場合の表示区分（空でなければ None）
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.items.is_empty() {
            None
        } else if self.searched {
            Some(EmptyState::NoSearchResults)
        } else {
            Some(EmptyState::NoAssets)
        }
    }

    pub fn ids(&self) -> Vec<AssetId> {
        self.items.iter().map(|a| a.id).collect()
    }
}

/// タブで絞り込む
///
/// `Featured` と未知のタブは全件を通す。
pub fn filter_by_tab<'a>(assets: &[&'a Asset], tab: &Tab) -> Vec<&'a Asset> {
    match tab.kind() {
        None => assets.to_vec(),
        Some(kind) => assets
            .iter()
            .copied()
            .filter(|a| a.kind() == Some(kind))
            .collect(),
    }
}

/// 検索テキストで絞り込む
///
/// - 前後の空白を除いて空なら全件返却
/// - case-insensitive な部分一致で `name` と `description` を検索
pub fn filter_by_search<'a>(assets: &[&'a Asset], search: &str) -> Vec<&'a Asset> {
    let query = search.trim();
    if query.is_empty() {
        return assets.to_vec();
    }

    let query = query.to_lowercase();
    assets
        .iter()
        .copied()
        .filter(|a| {
            a.name.to_lowercase().contains(&query)
                || a.description.to_lowercase().contains(&query)
        })
        .collect()
}

/// 先頭 PAGE_SIZE 件に切り詰める（show_more なら全件）
pub fn paginate<'a>(assets: &[&'a Asset], show_more: bool) -> Vec<&'a Asset> {
    if show_more {
        assets.to_vec()
    } else {
        assets.iter().copied().take(PAGE_SIZE).collect()
    }
}

/// パイプライン全体を適用
pub fn select<'a>(assets: &'a [Asset], query: &Query<'_>) -> Selection<'a> {
    let all: Vec<&Asset> = assets.iter().collect();
    let by_tab = filter_by_tab(&all, query.tab);
    let matched = filter_by_search(&by_tab, query.search);
    let items = paginate(&matched, query.show_more);

    Selection {
        items,
        matched: matched.len(),
        searched: !query.search.trim().is_empty(),
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;

#[cfg(test)]
#[path = "pipeline_proptests.rs"]
mod proptests;
