//! アセット種別の定義

use serde::{Deserialize, Serialize};

/// アセット種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    #[serde(rename = "KPI")]
    Kpi,
    Layout,
    DataViz,
    Storyboard,
}

impl AssetKind {
    /// `type` フィールドの値を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Kpi => "KPI",
            AssetKind::Layout => "Layout",
            AssetKind::DataViz => "DataViz",
            AssetKind::Storyboard => "Storyboard",
        }
    }

    /// 表示名を取得
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetKind::Kpi => "KPI",
            AssetKind::Layout => "Layout",
            AssetKind::DataViz => "Data Visualization",
            AssetKind::Storyboard => "Storyboard",
        }
    }

    /// 全種別を取得
    pub fn all() -> &'static [AssetKind] {
        &[
            AssetKind::Kpi,
            AssetKind::Layout,
            AssetKind::DataViz,
            AssetKind::Storyboard,
        ]
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
