use crate::cli::{Cli, Command};
use alib::catalog::Catalog;
use alib::config::Config;
use alib::logging;
use alib::store::CatalogStore;
use std::path::Path;
use tracing::Level;

pub mod browse;
pub mod list;
pub mod show;
pub mod tabs;

pub fn dispatch(cli: Cli) -> Result<(), String> {
    let config = Config::load().map_err(|e| e.to_string())?;

    // TUI 表示中は stderr への出力で画面が崩れるため、-v なしではエラーのみ
    let level = match cli.command {
        Command::Browse(_) if cli.verbose == 0 => Level::ERROR,
        _ => logging::resolve_level(cli.verbose, config.log_level.as_deref()),
    };
    logging::init(level);

    let catalog_path = cli.catalog.as_deref().or(config.catalog.as_deref());
    let catalog = load_catalog(catalog_path)?;
    tracing::debug!(count = catalog.len(), "catalog ready");

    let mut store = CatalogStore::new(catalog.into_assets());
    if let Some(tab) = config.default_tab.as_deref() {
        store.set_tab(tab);
    }

    match cli.command {
        Command::Browse(args) => browse::run(args, store),
        Command::List(args) => list::run(args, store),
        Command::Show(args) => show::run(args, store),
        Command::Tabs(args) => tabs::run(args, store),
    }
}

/// カタログを読み込む（パス未指定なら組み込みサンプル）
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(p) => Catalog::load_from(p)
            .map_err(|e| format!("Failed to load catalog {}: {}", p.display(), e)),
        None => Catalog::sample().map_err(|e| e.to_string()),
    }
}
