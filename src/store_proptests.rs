use super::*;
use proptest::prelude::*;

fn empty_store() -> CatalogStore {
    CatalogStore::new(Vec::new())
}

/// 最近の検索に使う短い語（重複しやすいように語彙を絞る）
fn term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-c]{1,2}",
        Just(String::new()),
        Just("   ".to_string()),
    ]
}

proptest! {
    /// 同じ ID を N 回切り替えると、N が奇数のときだけ 1 件含まれる
    #[test]
    fn prop_toggle_parity(id in any::<i64>(), n in 0usize..10) {
        let mut store = empty_store();
        for _ in 0..n {
            store.toggle_favorite(id);
        }
        let count = store.favorites().iter().filter(|&&f| f == id).count();
        prop_assert_eq!(count, n % 2);
    }

    /// 任意の切り替え列のあとでもお気に入りに重複はない
    #[test]
    fn prop_favorites_have_no_duplicates(ids in prop::collection::vec(-5i64..5, 0..40)) {
        let mut store = empty_store();
        for id in ids {
            store.toggle_favorite(id);
        }
        let mut sorted = store.favorites().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), store.favorites().len());
    }

    /// 最近の検索は上限以内・重複なし・空白のみの語を含まない
    #[test]
    fn prop_recent_searches_invariants(terms in prop::collection::vec(term_strategy(), 0..30)) {
        let mut store = empty_store();
        for term in &terms {
            store.add_recent_search(term);
        }

        let recent = store.recent_searches();
        prop_assert!(recent.len() <= RECENT_SEARCH_LIMIT);
        prop_assert!(recent.iter().all(|s| !s.trim().is_empty()));
        for (i, s) in recent.iter().enumerate() {
            prop_assert!(!recent[i + 1..].contains(s));
        }
    }

    /// s1 != s2 のとき、s2 の後に s1 を再追加すると s1 が先頭に来て件数は増えない
    #[test]
    fn prop_re_adding_moves_to_front(
        s1 in "[a-z]{1,4}",
        s2 in "[A-Z]{1,4}",
        prefix in prop::collection::vec("[0-9]{1,2}", 0..6),
    ) {
        let mut store = empty_store();
        for term in &prefix {
            store.add_recent_search(term);
        }
        store.add_recent_search(&s1);
        store.add_recent_search(&s2);
        let len_before = store.recent_searches().len();

        store.add_recent_search(&s1);

        prop_assert_eq!(&store.recent_searches()[0], &s1);
        prop_assert_eq!(&store.recent_searches()[1], &s2);
        prop_assert_eq!(store.recent_searches().len(), len_before);
        prop_assert_eq!(store.recent_searches().iter().filter(|s| **s == s1).count(), 1);
    }

    /// 空白のみの語を追加しても一覧は変わらない
    #[test]
    fn prop_blank_term_is_noop(
        terms in prop::collection::vec("[a-z]{1,3}", 0..8),
        blank in "[ \t]{0,4}",
    ) {
        let mut store = empty_store();
        for term in &terms {
            store.add_recent_search(term);
        }
        let before = store.recent_searches().to_vec();
        store.add_recent_search(&blank);
        prop_assert_eq!(store.recent_searches(), before.as_slice());
    }
}
