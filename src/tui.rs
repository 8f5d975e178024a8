//! アセットライブラリ TUI
//!
//! ratatui/crossterm による対話的なカタログブラウザ。
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update（Elm Architecture）
//! - `view`: 一覧画面の描画
//! - `modal`: 詳細モーダルの描画

mod app;
mod modal;
mod view;

pub use app::{update, Model, Msg};
pub use view::view;

use crate::store::CatalogStore;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};

/// TUI を実行し、終了時のストアを返す
pub fn run(store: CatalogStore) -> io::Result<CatalogStore> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let mut model = Model::new(store);
    let result = event_loop(&mut model);

    // ループの成否に関わらずターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result.map(|()| model.store)
}

fn event_loop(model: &mut Model) -> io::Result<()> {
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    while !model.should_quit {
        terminal.draw(|f| view(f, model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = model.key_to_msg(key.code) {
                    update(model, msg);
                }
            }
        }
    }

    Ok(())
}
