use crossterm::event::KeyCode;

use super::{update, Model, Msg};
use crate::catalog::Catalog;
use crate::store::{CatalogStore, ModalSlot, Tab};

/// サンプルコーパスで初期化した Model を構築するヘルパー
fn make_model() -> Model {
    let store = CatalogStore::new(Catalog::sample().unwrap().into_assets());
    Model::new(store)
}

fn type_text(model: &mut Model, text: &str) {
    for c in text.chars() {
        update(model, Msg::SearchInput(c));
    }
}

// ============================================================================
// キー変換
// ============================================================================

#[test]
fn q_quits_from_list() {
    let model = make_model();
    assert_eq!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::Quit));
}

#[test]
fn q_is_text_while_searching() {
    let mut model = make_model();
    update(&mut model, Msg::SearchFocus);
    assert_eq!(
        model.key_to_msg(KeyCode::Char('q')),
        Some(Msg::SearchInput('q'))
    );
}

#[test]
fn esc_clears_then_unfocuses_search() {
    let mut model = make_model();
    update(&mut model, Msg::SearchFocus);
    type_text(&mut model, "rev");

    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::SearchClear));
    update(&mut model, Msg::SearchClear);
    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::SearchUnfocus));
}

#[test]
fn modal_keys_take_priority() {
    let mut model = make_model();
    update(&mut model, Msg::OpenDetail);

    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::CloseModal));
    assert_eq!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::CloseModal));
    assert_eq!(model.key_to_msg(KeyCode::Tab), None);
}

// ============================================================================
// タブ / 検索
// ============================================================================

#[test]
fn new_model_selects_first_visible_asset() {
    let model = make_model();
    assert_eq!(model.list_state.selected(), Some(0));
    assert_eq!(model.selected_asset().map(|a| a.id), Some(1));
}

#[test]
fn next_tab_moves_through_store() {
    let mut model = make_model();
    update(&mut model, Msg::NextTab);
    assert_eq!(model.store.tab(), &Tab::Kpi);

    update(&mut model, Msg::PrevTab);
    update(&mut model, Msg::PrevTab);
    assert_eq!(model.store.tab(), &Tab::DataViz);
    assert_eq!(model.selected_asset().map(|a| a.id), Some(13));
}

#[test]
fn typing_updates_store_search_and_clamps_selection() {
    let mut model = make_model();
    update(&mut model, Msg::Down);
    update(&mut model, Msg::Down);
    update(&mut model, Msg::Down);
    assert_eq!(model.list_state.selected(), Some(3));

    update(&mut model, Msg::SearchFocus);
    type_text(&mut model, "revenue");

    assert_eq!(model.store.search(), "revenue");
    assert_eq!(model.store.visible().ids(), vec![1, 3, 13]);
    assert_eq!(model.list_state.selected(), Some(2));
}

#[test]
fn no_results_clears_selection() {
    let mut model = make_model();
    type_text(&mut model, "zzzz");
    assert_eq!(model.list_state.selected(), None);
    assert!(model.selected_asset().is_none());

    // 空の一覧で移動しても何も起きない
    update(&mut model, Msg::Down);
    assert_eq!(model.list_state.selected(), None);
}

#[test]
fn commit_records_recent_search() {
    let mut model = make_model();
    update(&mut model, Msg::SearchFocus);
    type_text(&mut model, "margin");
    update(&mut model, Msg::SearchCommit);

    assert!(!model.search_focused);
    assert_eq!(model.store.recent_searches(), &["margin"]);
}

#[test]
fn blank_commit_is_not_recorded() {
    let mut model = make_model();
    update(&mut model, Msg::SearchFocus);
    type_text(&mut model, "  ");
    update(&mut model, Msg::SearchCommit);
    assert!(model.store.recent_searches().is_empty());
}

#[test]
fn recall_cycles_through_recent_searches() {
    let mut model = make_model();
    for term in ["chart", "revenue"] {
        update(&mut model, Msg::SearchClear);
        type_text(&mut model, term);
        update(&mut model, Msg::SearchCommit);
    }

    update(&mut model, Msg::RecallRecentSearch);
    assert_eq!(model.store.search(), "revenue");
    update(&mut model, Msg::RecallRecentSearch);
    assert_eq!(model.store.search(), "chart");
    update(&mut model, Msg::RecallRecentSearch);
    assert_eq!(model.store.search(), "revenue");
}

#[test]
fn clear_recent_searches_goes_through_store() {
    let mut model = make_model();
    type_text(&mut model, "chart");
    update(&mut model, Msg::SearchCommit);
    update(&mut model, Msg::ClearRecentSearches);
    assert!(model.store.recent_searches().is_empty());
}

// ============================================================================
// お気に入り / 全件表示 / モーダル
// ============================================================================

#[test]
fn toggle_favorite_uses_selected_asset() {
    let mut model = make_model();
    update(&mut model, Msg::Down);
    update(&mut model, Msg::ToggleFavorite);
    assert_eq!(model.store.favorites(), &[2]);

    update(&mut model, Msg::ToggleFavorite);
    assert!(model.store.favorites().is_empty());
}

#[test]
fn toggle_favorite_in_modal_uses_modal_asset() {
    let mut model = make_model();
    update(&mut model, Msg::NextTab); // KPI
    update(&mut model, Msg::Down);
    update(&mut model, Msg::OpenDetail);
    update(&mut model, Msg::ToggleFavorite);

    assert_eq!(model.store.favorites(), &[2]);
}

#[test]
fn favorite_labels_resolve_names_and_keep_dangling_ids() {
    let mut model = make_model();
    assert!(model.favorite_labels().is_empty());

    update(&mut model, Msg::ToggleFavorite); // id 1
    model.store.toggle_favorite(99);

    assert_eq!(
        model.favorite_labels(),
        vec!["#99".to_string(), "Revenue Growth".to_string()]
    );
}

#[test]
fn toggle_show_more_reveals_all() {
    let mut model = make_model();
    assert_eq!(model.store.visible().items.len(), 4);

    update(&mut model, Msg::ToggleShowMore);
    assert!(model.store.show_more());
    assert_eq!(model.store.visible().items.len(), 18);

    for _ in 0..20 {
        update(&mut model, Msg::Down);
    }
    assert_eq!(model.list_state.selected(), Some(17));

    update(&mut model, Msg::ToggleShowMore);
    assert_eq!(model.list_state.selected(), Some(3));
}

#[test]
fn open_detail_routes_to_kind_slot_and_close_clears() {
    let mut model = make_model();
    update(&mut model, Msg::PrevTab); // DataViz
    update(&mut model, Msg::OpenDetail);

    let (slot, asset) = model.store.open_modal().unwrap();
    assert_eq!(slot, ModalSlot::DataViz);
    assert_eq!(asset.id, 13);

    update(&mut model, Msg::CloseModal);
    assert!(model.store.open_modal().is_none());
}
