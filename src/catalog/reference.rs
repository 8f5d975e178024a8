//! アセット間参照の解決
//!
//! DataViz / Layout が持つ KPI 参照やお気に入り ID は、
//! コレクションに存在しなくてもエラーにしない。

use crate::asset::{Asset, AssetId};

/// 参照の解決結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssetRef<'a> {
    /// コレクション内に存在する
    Resolved(&'a Asset),
    /// コレクションに存在しない ID
    Dangling(AssetId),
}

impl AssetRef<'_> {
    pub fn id(&self) -> AssetId {
        match self {
            AssetRef::Resolved(a) => a.id,
            AssetRef::Dangling(id) => *id,
        }
    }

    /// 表示用ラベル（未解決の参照は `#id`）
    pub fn label(&self) -> String {
        match self {
            AssetRef::Resolved(a) => a.name.clone(),
            AssetRef::Dangling(id) => format!("#{}", id),
        }
    }

    pub fn is_dangling(&self) -> bool {
        matches!(self, AssetRef::Dangling(_))
    }
}

/// ID をコレクション内のアセットに解決
pub fn resolve(assets: &[Asset], id: AssetId) -> AssetRef<'_> {
    assets
        .iter()
        .find(|a| a.id == id)
        .map_or(AssetRef::Dangling(id), AssetRef::Resolved)
}

/// 複数の ID を順序を保って解決
pub fn resolve_all<'a>(assets: &'a [Asset], ids: &[AssetId]) -> Vec<AssetRef<'a>> {
    ids.iter().map(|&id| resolve(assets, id)).collect()
}
