//! 端末向けの出力整形

use alib::asset::Asset;
use alib::detail::{DetailField, FieldValue};
use alib::pipeline::Selection;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;

/// アセット一覧のテーブルを構築
pub fn asset_table(items: &[&Asset]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Type", "Date", "Description"]);

    for asset in items {
        table.add_row(vec![
            asset.id.to_string(),
            asset.name.clone(),
            asset.kind_label().to_string(),
            asset.date.clone(),
            asset.description.clone(),
        ]);
    }

    table
}

/// 一覧の件数表示（ページングで隠れている場合はその旨も）
pub fn selection_summary(selection: &Selection<'_>) -> String {
    if selection.has_more() {
        format!(
            "{} Showing {} of {} assets (use --all to show more)",
            "•".yellow(),
            selection.items.len(),
            selection.matched
        )
    } else {
        format!("{} {} asset(s)", "✓".green(), selection.matched)
    }
}

/// 詳細項目を整形
pub fn format_detail(asset: &Asset, fields: &[DetailField], favorite: bool) -> String {
    let mut out = String::new();
    let star = if favorite { " ★" } else { "" };
    out.push_str(&format!("{} (#{}){}\n", asset.name.bold(), asset.id, star));

    for field in fields {
        match &field.value {
            FieldValue::Text(text) => {
                let text = if text.is_empty() { "-" } else { text.as_str() };
                out.push_str(&format!("  {}: {}\n", field.label.cyan(), text));
            }
            FieldValue::List(items) if items.is_empty() => {
                out.push_str(&format!("  {}: (none)\n", field.label.cyan()));
            }
            FieldValue::List(items) => {
                out.push_str(&format!("  {}:\n", field.label.cyan()));
                for item in items {
                    out.push_str(&format!("    • {}\n", item));
                }
            }
        }
    }

    out
}
