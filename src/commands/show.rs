//! alib show コマンド
//!
//! 1件のアセットを詳細モーダルと同じ項目で表示する。

use crate::output::format_detail;
use alib::asset::AssetId;
use alib::catalog::{resolve, AssetRef};
use alib::detail::detail_fields;
use alib::error::AlibError;
use alib::store::CatalogStore;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Asset id
    pub id: AssetId,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args, mut store: CatalogStore) -> Result<(), String> {
    let asset = match resolve(store.assets(), args.id) {
        AssetRef::Resolved(asset) => asset.clone(),
        AssetRef::Dangling(id) => return Err(AlibError::AssetNotFound(id).to_string()),
    };

    // モーダルと同じ経路で種別ごとのスロットに載せる
    store.open_detail(&asset);
    let Some((slot, asset)) = store.open_modal() else {
        return Err(AlibError::AssetNotFound(args.id).to_string());
    };
    tracing::debug!(?slot, id = asset.id, "showing asset");

    if args.json {
        return serde_json::to_string_pretty(asset)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize asset: {}", e));
    }

    let fields = detail_fields(asset, store.assets());
    print!("{}", format_detail(asset, &fields, store.is_favorite(asset.id)));
    Ok(())
}
