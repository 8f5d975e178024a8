//! カタログファイル上のアセット表現
//!
//! ファイル上は `type` を判別子とするフラットなレコード（camelCase）。
//! 種別に関係しないフィールドは読み込み時に捨てる。

use super::{
    Asset, AssetDetails, AssetId, AssetKind, DataVizDetails, KpiDetails, LayoutDetails,
    StoryboardDetails,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AssetRecord {
    id: AssetId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    date: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<AssetKind>,

    // KPI
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    business_questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    metric_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    calculation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    visuals_available: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    affiliate_applicability: Option<String>,

    // DataViz
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    applicable_kpis: Vec<AssetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    asset_info_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chart_interaction: Option<String>,

    // Layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount_of_pages: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    kpis_being_used: Vec<AssetId>,

    // Storyboard
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    coupled_kpis_filters: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    applicable_affiliates: Vec<String>,
}

impl From<AssetRecord> for Asset {
    fn from(r: AssetRecord) -> Self {
        let details = match r.kind {
            Some(AssetKind::Kpi) => AssetDetails::Kpi(KpiDetails {
                business_questions: r.business_questions,
                metric_ids: r.metric_ids,
                calculation: r.calculation.unwrap_or_default(),
                visuals_available: r.visuals_available,
                affiliate_applicability: r.affiliate_applicability.unwrap_or_default(),
            }),
            Some(AssetKind::Layout) => AssetDetails::Layout(LayoutDetails {
                amount_of_pages: r.amount_of_pages.unwrap_or_default(),
                kpis_being_used: r.kpis_being_used,
            }),
            Some(AssetKind::DataViz) => AssetDetails::DataViz(DataVizDetails {
                applicable_kpis: r.applicable_kpis,
                asset_info_context: r.asset_info_context.unwrap_or_default(),
                chart_interaction: r.chart_interaction.unwrap_or_default(),
            }),
            Some(AssetKind::Storyboard) => AssetDetails::Storyboard(StoryboardDetails {
                coupled_kpis_filters: r.coupled_kpis_filters,
                applicable_affiliates: r.applicable_affiliates,
            }),
            None => AssetDetails::Generic,
        };

        Asset {
            id: r.id,
            name: r.name,
            description: r.description,
            date: r.date,
            details,
        }
    }
}

impl From<Asset> for AssetRecord {
    fn from(a: Asset) -> Self {
        let mut record = AssetRecord {
            id: a.id,
            name: a.name,
            description: a.description,
            date: a.date,
            ..AssetRecord::default()
        };

        match a.details {
            AssetDetails::Kpi(d) => {
                record.kind = Some(AssetKind::Kpi);
                record.business_questions = d.business_questions;
                record.metric_ids = d.metric_ids;
                record.calculation = Some(d.calculation);
                record.visuals_available = d.visuals_available;
                record.affiliate_applicability = Some(d.affiliate_applicability);
            }
            AssetDetails::Layout(d) => {
                record.kind = Some(AssetKind::Layout);
                record.amount_of_pages = Some(d.amount_of_pages);
                record.kpis_being_used = d.kpis_being_used;
            }
            AssetDetails::DataViz(d) => {
                record.kind = Some(AssetKind::DataViz);
                record.applicable_kpis = d.applicable_kpis;
                record.asset_info_context = Some(d.asset_info_context);
                record.chart_interaction = Some(d.chart_interaction);
            }
            AssetDetails::Storyboard(d) => {
                record.kind = Some(AssetKind::Storyboard);
                record.coupled_kpis_filters = d.coupled_kpis_filters;
                record.applicable_affiliates = d.applicable_affiliates;
            }
            AssetDetails::Generic => {}
        }

        record
    }
}
