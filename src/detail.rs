//! 詳細ビューの表示項目
//!
//! モーダル（TUI）と `show` コマンドが共通で使う。
//! 種別ごとに表示する項目が変わる。KPI 参照は名前に解決し、
//! 見つからない ID は `#id` のまま表示する。

use crate::asset::{Asset, AssetDetails, AssetId};
use crate::catalog::resolve_all;

/// 表示値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

/// 詳細ビューの1項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: FieldValue,
}

impl DetailField {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: FieldValue::Text(value.into()),
        }
    }

    fn list(label: &'static str, values: Vec<String>) -> Self {
        Self {
            label,
            value: FieldValue::List(values),
        }
    }
}

/// アセットの詳細項目を構築
///
/// `assets` は参照解決に使うコレクション。
pub fn detail_fields(asset: &Asset, assets: &[Asset]) -> Vec<DetailField> {
    let mut fields = vec![
        DetailField::text("Type", asset.kind_label()),
        DetailField::text("Description", asset.description.clone()),
        DetailField::text("Date", asset.date.clone()),
    ];

    let labels = |ids: &[AssetId]| -> Vec<String> {
        resolve_all(assets, ids).iter().map(|r| r.label()).collect()
    };

    match &asset.details {
        AssetDetails::Kpi(d) => {
            fields.push(DetailField::list(
                "Business Questions",
                d.business_questions.clone(),
            ));
            fields.push(DetailField::list("Metric IDs", d.metric_ids.clone()));
            fields.push(DetailField::text("Calculation", d.calculation.clone()));
            fields.push(DetailField::list(
                "Visuals Available",
                d.visuals_available.clone(),
            ));
            fields.push(DetailField::text(
                "Affiliate Applicability",
                d.affiliate_applicability.clone(),
            ));
        }
        AssetDetails::DataViz(d) => {
            fields.push(DetailField::list(
                "Applicable KPIs",
                labels(&d.applicable_kpis),
            ));
            fields.push(DetailField::text(
                "Asset Information",
                d.asset_info_context.clone(),
            ));
            fields.push(DetailField::text(
                "Chart Interaction",
                d.chart_interaction.clone(),
            ));
        }
        AssetDetails::Layout(d) => {
            fields.push(DetailField::text(
                "Amount of Pages",
                d.amount_of_pages.to_string(),
            ));
            fields.push(DetailField::list(
                "KPIs Being Used",
                labels(&d.kpis_being_used),
            ));
        }
        AssetDetails::Storyboard(d) => {
            fields.push(DetailField::list(
                "Coupled KPIs / Filters",
                d.coupled_kpis_filters.clone(),
            ));
            fields.push(DetailField::list(
                "Applicable Affiliates",
                d.applicable_affiliates.clone(),
            ));
        }
        AssetDetails::Generic => {}
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn field<'a>(fields: &'a [DetailField], label: &str) -> &'a FieldValue {
        &fields.iter().find(|f| f.label == label).unwrap().value
    }

    #[test]
    fn kpi_fields_include_calculation() {
        let catalog = Catalog::sample().unwrap();
        let fields = detail_fields(catalog.find(3).unwrap(), catalog.assets());

        assert_eq!(
            field(&fields, "Calculation"),
            &FieldValue::Text("(Net Sales - COGS) / Net Sales".to_string())
        );
        assert!(fields.iter().all(|f| f.label != "Applicable KPIs"));
    }

    #[test]
    fn dataviz_references_resolve_to_names_or_ids() {
        let catalog = Catalog::sample().unwrap();
        let fields = detail_fields(catalog.find(15).unwrap(), catalog.assets());

        assert_eq!(
            field(&fields, "Applicable KPIs"),
            &FieldValue::List(vec!["Gross Margin".to_string(), "#99".to_string()])
        );
    }

    #[test]
    fn layout_shows_page_count_and_kpis() {
        let catalog = Catalog::sample().unwrap();
        let fields = detail_fields(catalog.find(7).unwrap(), catalog.assets());

        assert_eq!(
            field(&fields, "Amount of Pages"),
            &FieldValue::Text("3".to_string())
        );
        assert_eq!(
            field(&fields, "KPIs Being Used"),
            &FieldValue::List(vec![
                "Customer Retention Rate".to_string(),
                "#21".to_string()
            ])
        );
    }

    #[test]
    fn generic_asset_has_only_common_fields() {
        let asset = Asset {
            id: 1,
            name: "Loose".to_string(),
            description: "d".to_string(),
            date: "today".to_string(),
            details: AssetDetails::Generic,
        };
        let fields = detail_fields(&asset, &[]);
        let labels: Vec<&str> = fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["Type", "Description", "Date"]);
    }
}
