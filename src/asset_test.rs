use super::*;

fn parse(json: &str) -> Asset {
    serde_json::from_str(json).unwrap()
}

#[test]
fn kpi_record_parses_into_kpi_details() {
    let asset = parse(
        r#"{
            "id": 1,
            "name": "Revenue Growth",
            "description": "desc",
            "date": "2024-01-01",
            "type": "KPI",
            "businessQuestions": ["Are we growing?"],
            "metricIds": ["REV-001"],
            "calculation": "(a - b) / b",
            "visualsAvailable": ["Line"],
            "affiliateApplicability": "All"
        }"#,
    );

    assert_eq!(asset.kind(), Some(AssetKind::Kpi));
    let AssetDetails::Kpi(d) = &asset.details else {
        panic!("Expected Kpi");
    };
    assert_eq!(d.business_questions, vec!["Are we growing?"]);
    assert_eq!(d.metric_ids, vec!["REV-001"]);
    assert_eq!(d.calculation, "(a - b) / b");
    assert_eq!(d.affiliate_applicability, "All");
}

#[test]
fn missing_type_becomes_generic() {
    let asset = parse(r#"{ "id": 7, "name": "Loose", "description": "", "date": "" }"#);
    assert_eq!(asset.details, AssetDetails::Generic);
    assert_eq!(asset.kind(), None);
    assert_eq!(asset.kind_label(), "Asset");
}

#[test]
fn fields_of_other_kinds_are_dropped() {
    // DataViz に KPI 用のフィールドが付いていても保持しない
    let asset = parse(
        r#"{
            "id": 3,
            "name": "Chart",
            "type": "DataViz",
            "calculation": "ignored",
            "applicableKpis": [1, 99]
        }"#,
    );

    let AssetDetails::DataViz(d) = &asset.details else {
        panic!("Expected DataViz");
    };
    assert_eq!(d.applicable_kpis, vec![1, 99]);
    assert!(d.asset_info_context.is_empty());
}

#[test]
fn missing_optional_fields_default_to_empty() {
    let asset = parse(r#"{ "id": 5, "name": "Overview", "type": "Layout" }"#);
    let AssetDetails::Layout(d) = &asset.details else {
        panic!("Expected Layout");
    };
    assert_eq!(d.amount_of_pages, 0.0);
    assert!(d.kpis_being_used.is_empty());
    assert!(asset.description.is_empty());
}

#[test]
fn fractional_page_count_is_accepted() {
    let asset = parse(r#"{ "id": 5, "name": "Overview", "type": "Layout", "amountOfPages": 2.5 }"#);
    let AssetDetails::Layout(d) = &asset.details else {
        panic!("Expected Layout");
    };
    assert_eq!(d.amount_of_pages, 2.5);
}

#[test]
fn unknown_type_is_rejected() {
    let result: Result<Asset, _> =
        serde_json::from_str(r#"{ "id": 1, "name": "x", "type": "Widget" }"#);
    assert!(result.is_err());
}

#[test]
fn serialize_writes_flat_record_with_type_tag() {
    let asset = Asset {
        id: 9,
        name: "QBR".to_string(),
        description: "story".to_string(),
        date: "2024-02-02".to_string(),
        details: AssetDetails::Storyboard(StoryboardDetails {
            coupled_kpis_filters: vec!["Region".to_string()],
            applicable_affiliates: vec![],
        }),
    };

    let value = serde_json::to_value(&asset).unwrap();
    assert_eq!(value["type"], "Storyboard");
    assert_eq!(value["coupledKpisFilters"][0], "Region");
    assert!(value.get("applicableAffiliates").is_none());
    assert!(value.get("calculation").is_none());
}

#[test]
fn referenced_kpis_only_for_dataviz_and_layout() {
    let layout = parse(r#"{ "id": 5, "name": "L", "type": "Layout", "kpisBeingUsed": [1, 2] }"#);
    let kpi = parse(r#"{ "id": 1, "name": "K", "type": "KPI" }"#);

    assert_eq!(layout.referenced_kpis(), &[1, 2]);
    assert!(kpi.referenced_kpis().is_empty());
}

#[test]
fn kind_label_uses_display_name() {
    let viz = parse(r#"{ "id": 13, "name": "V", "type": "DataViz" }"#);
    assert_eq!(viz.kind_label(), "Data Visualization");
}
