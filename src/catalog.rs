//! アセットカタログの読み込み
//!
//! 組み込みのサンプルコーパス、またはユーザー指定の JSON/TOML ファイルから
//! アセット一覧を構築する。読み込み後のアセットは不変。

mod reference;

pub use reference::{resolve, resolve_all, AssetRef};

use crate::asset::{Asset, AssetId};
use crate::error::{AlibError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// 組み込みサンプルコーパス（id 1〜18）
const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

/// カタログファイルのルート構造
#[derive(Debug, Deserialize)]
struct CatalogFile {
    assets: Vec<Asset>,
}

/// 読み込み済みのアセット一覧
#[derive(Debug, Clone)]
pub struct Catalog {
    assets: Vec<Asset>,
}

impl Catalog {
    /// 組み込みのサンプルコーパスを読み込む
    pub fn sample() -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(SAMPLE_CATALOG)?;
        Self::from_assets(file.assets)
    }

    /// 拡張子（.json / .toml）に応じてファイルから読み込む
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let file: CatalogFile = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => return Err(AlibError::UnsupportedCatalogFormat(path.to_path_buf())),
        };

        tracing::info!(path = %path.display(), count = file.assets.len(), "catalog loaded");
        Self::from_assets(file.assets)
    }

    /// アセット一覧からカタログを構築（ID の重複は拒否）
    ///
    /// 他アセットへの参照（applicable_kpis 等）の存在チェックは行わない。
    pub fn from_assets(assets: Vec<Asset>) -> Result<Self> {
        let mut seen = HashSet::new();
        for asset in &assets {
            if !seen.insert(asset.id) {
                return Err(AlibError::DuplicateAssetId(asset.id));
            }
        }
        Ok(Self { assets })
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn into_assets(self) -> Vec<Asset> {
        self.assets
    }

    /// ID でアセットを検索
    pub fn find(&self, id: AssetId) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
