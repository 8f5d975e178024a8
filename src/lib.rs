//! alib: ターミナル向けアセットライブラリ
//!
//! KPI / Layout / DataViz / Storyboard の4種類のアセットを
//! タブ・検索・お気に入り・詳細モーダルで閲覧する。
//!
//! - `store`: UI 状態の単一の情報源（CatalogStore）
//! - `pipeline`: タブ → 検索 → ページングの選択パイプライン
//! - `catalog`: アセット一覧の読み込みと参照解決
//! - `tui`: 対話的ブラウザ

pub mod asset;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod store;
pub mod tui;
