//! 一覧画面の描画
//!
//! タブバー・検索欄・アセット一覧・お気に入り・最近の検索・ヘルプを描画し、
//! モーダルが開いていれば上に重ねる。

use super::app::Model;
use super::modal;
use crate::store::Tab;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs};

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブバー
            Constraint::Length(3), // 検索欄
            Constraint::Min(3),    // 一覧
            Constraint::Length(1), // お気に入り
            Constraint::Length(1), // 最近の検索
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    view_tabs(f, model, chunks[0]);
    view_search(f, model, chunks[1]);
    view_list(f, model, chunks[2]);
    view_favorites(f, model, chunks[3]);
    view_recent(f, model, chunks[4]);

    let help = if model.search_focused {
        " Enter: save search | Up: recall | Esc: clear/back | Tab: switch"
    } else {
        " Tab: switch | /: search | Enter: details | f: favorite | m: more | x: clear recent | q: quit"
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[5],
    );

    if let Some((slot, asset)) = model.store.open_modal() {
        modal::view(f, slot, asset, &model.store);
    }
}

/// タブバー
fn view_tabs(f: &mut Frame, model: &Model, area: Rect) {
    let titles: Vec<&str> = Tab::all().iter().map(|t| t.title()).collect();
    // 未知のタブは Featured と同じ扱い
    let selected = model.store.tab().index().unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, area);
}

/// 検索欄
fn view_search(f: &mut Frame, model: &Model, area: Rect) {
    let border_style = if model.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = if model.search_focused { "_" } else { "" };
    let text = format!("{}{}", model.store.search(), cursor);

    let search = Paragraph::new(text).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(search, area);
}

/// アセット一覧
fn view_list(f: &mut Frame, model: &Model, area: Rect) {
    let selection = model.store.visible();
    let title = if selection.has_more() {
        format!(
            " {} ({} of {}, m: show more) ",
            model.store.tab(),
            selection.items.len(),
            selection.matched
        )
    } else {
        format!(" {} ({}) ", model.store.tab(), selection.matched)
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if let Some(empty) = selection.empty_state() {
        let para = Paragraph::new(empty.message())
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let items: Vec<ListItem> = selection
        .items
        .iter()
        .map(|a| {
            let star = if model.store.is_favorite(a.id) {
                "★"
            } else {
                " "
            };
            let line = Line::from(vec![
                Span::styled(star, Style::default().fg(Color::Yellow)),
                Span::raw(format!(" {:<28}", a.name)),
                Span::styled(
                    format!(" {:<18}", a.kind_label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(a.date.clone(), Style::default().fg(Color::DarkGray)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");

    let mut state = model.list_state.clone();
    f.render_stateful_widget(list, area, &mut state);
}

/// お気に入り
fn view_favorites(f: &mut Frame, model: &Model, area: Rect) {
    let labels = model.favorite_labels();
    let text = if labels.is_empty() {
        " Favorites: -".to_string()
    } else {
        format!(" Favorites: {}", labels.join(", "))
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Yellow)),
        area,
    );
}

/// 最近の検索
fn view_recent(f: &mut Frame, model: &Model, area: Rect) {
    let recent = model.store.recent_searches();
    let text = if recent.is_empty() {
        " Recent: -".to_string()
    } else {
        format!(" Recent: {}", recent.join(", "))
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
