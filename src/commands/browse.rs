//! alib browse コマンド
//!
//! 対話的な TUI でカタログを閲覧する。

use alib::store::CatalogStore;
use alib::tui;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Initial tab (Featured, KPI, Layouts, Storyboards, DataViz)
    #[arg(long)]
    pub tab: Option<String>,

    /// Initial search text
    #[arg(long, short)]
    pub search: Option<String>,
}

pub fn run(args: Args, mut store: CatalogStore) -> Result<(), String> {
    if let Some(tab) = args.tab.as_deref() {
        store.set_tab(tab);
    }
    if let Some(search) = args.search {
        store.set_search(search);
    }

    let store = tui::run(store).map_err(|e| format!("TUI error: {}", e))?;
    tracing::info!(
        favorites = store.favorites().len(),
        recent_searches = store.recent_searches().len(),
        "session ended"
    );
    Ok(())
}
