use crate::asset::AssetId;
use std::path::PathBuf;
use thiserror::Error;

/// alib 統一エラー型
///
/// ストアとパイプラインは全域関数なので、ここに現れるのは
/// カタログ読み込み・設定・CLI 周りのエラーのみ。
#[derive(Debug, Error)]
pub enum AlibError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {}. Expected .json or .toml", .0.display())]
    UnsupportedCatalogFormat(PathBuf),

    #[error("Duplicate asset id in catalog: {0}")]
    DuplicateAssetId(AssetId),

    #[error("Asset not found: {0}")]
    AssetNotFound(AssetId),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AlibError>;
