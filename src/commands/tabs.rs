//! alib tabs コマンド
//!
//! 各タブに該当するアセット件数を表示する。

use alib::store::{CatalogStore, Tab};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// Count only assets matching this search text
    #[arg(long, short)]
    pub search: Option<String>,
}

pub fn run(args: Args, mut store: CatalogStore) -> Result<(), String> {
    if let Some(search) = args.search {
        store.set_search(search);
    }
    let current = store.tab().clone();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Tab", "Assets"]);

    for tab in Tab::all() {
        store.set_tab(tab.clone());
        let matched = store.visible().matched;
        let marker = if *tab == current { " *" } else { "" };
        table.add_row(vec![format!("{}{}", tab, marker), matched.to_string()]);
    }

    println!("{table}");
    Ok(())
}
