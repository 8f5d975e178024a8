//! 詳細モーダルの描画

use crate::asset::Asset;
use crate::detail::{detail_fields, FieldValue};
use crate::store::{CatalogStore, ModalSlot};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// 画面中央のダイアログ領域を計算
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// スロットごとの枠の色
fn slot_color(slot: ModalSlot) -> Color {
    match slot {
        ModalSlot::Generic => Color::White,
        ModalSlot::Kpi => Color::Cyan,
        ModalSlot::DataViz => Color::Magenta,
        ModalSlot::Layout => Color::Blue,
        ModalSlot::Storyboard => Color::Green,
    }
}

/// モーダルを描画
pub fn view(f: &mut Frame, slot: ModalSlot, asset: &Asset, store: &CatalogStore) {
    let mut lines = Vec::new();
    for field in detail_fields(asset, store.assets()) {
        lines.push(Line::from(Span::styled(
            field.label,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        match field.value {
            FieldValue::Text(text) if text.is_empty() => {
                lines.push(Line::styled("  -", Style::default().fg(Color::DarkGray)));
            }
            FieldValue::Text(text) => lines.push(Line::raw(format!("  {}", text))),
            FieldValue::List(items) if items.is_empty() => {
                lines.push(Line::styled("  (none)", Style::default().fg(Color::DarkGray)));
            }
            FieldValue::List(items) => {
                lines.extend(items.into_iter().map(|i| Line::raw(format!("  • {}", i))));
            }
        }
    }

    let star = if store.is_favorite(asset.id) { " ★" } else { "" };
    let title = format!(" {}{} ", asset.name, star);
    let height = (lines.len() as u16).saturating_add(3);

    let area = centered_rect(70, height, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(slot_color(slot))),
        );
    f.render_widget(body, chunks[0]);

    let help = Paragraph::new(" f: favorite | Esc: close")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
