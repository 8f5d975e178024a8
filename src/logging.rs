//! tracing の初期化
//!
//! ログは stderr に出す（stdout は一覧・JSON 出力用）。

use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// 既定のログレベル
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// `-v` の回数と設定ファイルの値からログレベルを決める
///
/// `-v` が1回以上指定されていれば設定ファイルより優先する。
/// 設定値が不正な場合は既定値にフォールバックする。
pub fn resolve_level(verbosity: u8, configured: Option<&str>) -> Level {
    match verbosity {
        0 => configured
            .and_then(|s| Level::from_str(s.trim()).ok())
            .unwrap_or(DEFAULT_LEVEL),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// グローバルな subscriber を設定（2回目以降は無視）
pub fn init(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already set");
    }
}
