//! アセットのドメインモデル
//!
//! - `kind`: アセット種別（KPI / Layout / DataViz / Storyboard）
//! - `record`: JSON/TOML 上のフラットな表現との相互変換

mod kind;
mod record;

pub use kind::AssetKind;

use record::AssetRecord;
use serde::{Deserialize, Serialize};

/// アセットID（外部で採番される）
pub type AssetId = i64;

/// カタログの1エントリ
///
/// セッション中は不変。ストアは参照の選択/解除のみを行う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AssetRecord", into = "AssetRecord")]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub description: String,
    /// 表示用の日付文字列（パースしない）
    pub date: String,
    pub details: AssetDetails,
}

/// 種別ごとの詳細フィールド
#[derive(Debug, Clone, PartialEq)]
pub enum AssetDetails {
    Kpi(KpiDetails),
    Layout(LayoutDetails),
    DataViz(DataVizDetails),
    Storyboard(StoryboardDetails),
    /// `type` を持たないアセット
    Generic,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KpiDetails {
    pub business_questions: Vec<String>,
    pub metric_ids: Vec<String>,
    pub calculation: String,
    pub visuals_available: Vec<String>,
    pub affiliate_applicability: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutDetails {
    pub amount_of_pages: f64,
    /// KPI アセットへの参照（存在チェックなし）
    pub kpis_being_used: Vec<AssetId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataVizDetails {
    /// KPI アセットへの参照（存在チェックなし）
    pub applicable_kpis: Vec<AssetId>,
    pub asset_info_context: String,
    pub chart_interaction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryboardDetails {
    pub coupled_kpis_filters: Vec<String>,
    pub applicable_affiliates: Vec<String>,
}

impl Asset {
    /// 種別を取得（Generic は None）
    pub fn kind(&self) -> Option<AssetKind> {
        match self.details {
            AssetDetails::Kpi(_) => Some(AssetKind::Kpi),
            AssetDetails::Layout(_) => Some(AssetKind::Layout),
            AssetDetails::DataViz(_) => Some(AssetKind::DataViz),
            AssetDetails::Storyboard(_) => Some(AssetKind::Storyboard),
            AssetDetails::Generic => None,
        }
    }

    /// 種別の表示名（Generic は "Asset"）
    pub fn kind_label(&self) -> &'static str {
        self.kind().map_or("Asset", |k| k.display_name())
    }

    /// 他アセット（KPI）への参照ID一覧
    pub fn referenced_kpis(&self) -> &[AssetId] {
        match &self.details {
            AssetDetails::DataViz(d) => &d.applicable_kpis,
            AssetDetails::Layout(d) => &d.kpis_being_used,
            _ => &[],
        }
    }
}

#[cfg(test)]
#[path = "asset_test.rs"]
mod tests;
