//! alib list コマンド
//!
//! 選択パイプライン（タブ → 検索 → ページング）の結果を表示する。

use crate::output::{asset_table, selection_summary};
use alib::asset::Asset;
use alib::pipeline::Selection;
use alib::store::CatalogStore;
use clap::Parser;
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Tab to filter by (Featured, KPI, Layouts, Storyboards, DataViz)
    #[arg(long)]
    pub tab: Option<String>,

    /// Case-insensitive text matched against name and description
    #[arg(long, short)]
    pub search: Option<String>,

    /// Show every match instead of the first page
    #[arg(long)]
    pub all: bool,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only asset ids and names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

/// JSON 出力用
#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    tab: &'a str,
    search: &'a str,
    matched: usize,
    assets: Vec<&'a Asset>,
}

pub fn run(args: Args, mut store: CatalogStore) -> Result<(), String> {
    if let Some(tab) = args.tab.as_deref() {
        store.set_tab(tab);
    }
    if let Some(search) = args.search {
        store.set_search(search);
    }
    store.set_show_more(args.all);

    let selection = store.visible();

    if args.json {
        print_json(&store, &selection)
    } else if args.simple {
        print_simple(&selection);
        Ok(())
    } else {
        print_table(&store, &selection);
        Ok(())
    }
}

fn print_json(store: &CatalogStore, selection: &Selection<'_>) -> Result<(), String> {
    let output = ListOutput {
        tab: store.tab().title(),
        search: store.search(),
        matched: selection.matched,
        assets: selection.items.clone(),
    };
    serde_json::to_string_pretty(&output)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize assets: {}", e))
}

fn print_simple(selection: &Selection<'_>) {
    for asset in &selection.items {
        println!("{}\t{}", asset.id, asset.name);
    }
}

fn print_table(store: &CatalogStore, selection: &Selection<'_>) {
    if store.assets().is_empty() {
        println!("Catalog is empty");
        return;
    }
    if let Some(empty) = selection.empty_state() {
        println!("{}", empty.message());
        return;
    }

    println!("{}", asset_table(&selection.items));
    println!("{}", selection_summary(selection));
}
