use super::*;
use crate::asset::{AssetDetails, DataVizDetails, KpiDetails, LayoutDetails, StoryboardDetails};
use proptest::prelude::*;

/// 任意の種別（Generic を含む）
fn details_strategy() -> impl Strategy<Value = AssetDetails> {
    prop_oneof![
        Just(AssetDetails::Kpi(KpiDetails::default())),
        Just(AssetDetails::Layout(LayoutDetails::default())),
        Just(AssetDetails::DataViz(DataVizDetails::default())),
        Just(AssetDetails::Storyboard(StoryboardDetails::default())),
        Just(AssetDetails::Generic),
    ]
}

/// 連番 ID のアセット一覧
fn assets_strategy() -> impl Strategy<Value = Vec<Asset>> {
    prop::collection::vec(
        (details_strategy(), "[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,20}"),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (details, name, description))| Asset {
                id: i as i64 + 1,
                name,
                description,
                date: String::new(),
                details,
            })
            .collect()
    })
}

fn tab_strategy() -> impl Strategy<Value = Tab> {
    prop_oneof![
        Just(Tab::Featured),
        Just(Tab::Kpi),
        Just(Tab::Layouts),
        Just(Tab::Storyboards),
        Just(Tab::DataViz),
        "[A-Za-z]{1,8}".prop_map(|s| Tab::parse(&s)),
    ]
}

proptest! {
    /// タブ→検索の順で絞り込んだ結果は、両方の述語で全体を絞り込んだ結果と等しい
    #[test]
    fn prop_tab_and_search_commute(
        assets in assets_strategy(),
        tab in tab_strategy(),
        search in "[a-z]{0,3}",
    ) {
        let all: Vec<&Asset> = assets.iter().collect();

        let tab_then_search = filter_by_search(&filter_by_tab(&all, &tab), &search);
        let search_then_tab = filter_by_tab(&filter_by_search(&all, &search), &tab);

        let ids = |v: &[&Asset]| v.iter().map(|a| a.id).collect::<Vec<_>>();
        prop_assert_eq!(ids(&tab_then_search), ids(&search_then_tab));
    }

    /// 同じ状態で2回実行すると同じ列が得られる
    #[test]
    fn prop_select_is_stable(
        assets in assets_strategy(),
        tab in tab_strategy(),
        search in "[a-z]{0,3}",
        show_more in any::<bool>(),
    ) {
        let query = Query { tab: &tab, search: &search, show_more };
        let first = select(&assets, &query);
        let second = select(&assets, &query);
        prop_assert_eq!(first.ids(), second.ids());
    }

    /// 結果は元のコレクション順（ID 昇順）を保ち、show_more=false なら PAGE_SIZE 以下
    #[test]
    fn prop_select_preserves_order_and_page_size(
        assets in assets_strategy(),
        tab in tab_strategy(),
        search in "[a-z]{0,3}",
        show_more in any::<bool>(),
    ) {
        let query = Query { tab: &tab, search: &search, show_more };
        let selection = select(&assets, &query);
        let ids = selection.ids();

        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(selection.items.len() <= selection.matched);
        if !show_more {
            prop_assert!(selection.items.len() <= PAGE_SIZE);
        } else {
            prop_assert_eq!(selection.items.len(), selection.matched);
        }
    }
}
