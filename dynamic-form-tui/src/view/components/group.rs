//! 分组容器渲染（说明列表 / 表格）

use dynamic_form_core::render::{GroupBody, GroupView};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::view::theme::{colors, Styles};

/// 渲染分组容器；折叠时只有标题行
pub fn lines(view: &GroupView, focused: bool) -> Vec<Line<'static>> {
    let arrow = if view.open { "▼" } else { "▶" };
    let title = view.title.clone().unwrap_or_default();

    let mut lines = vec![Line::from(vec![
        Span::styled(if focused { "› " } else { "  " }, Styles::label(focused)),
        Span::styled(format!("{arrow} {title}"), Styles::label(focused)),
    ])];

    match view.visible_body() {
        Some(GroupBody::NumberedList(items)) => {
            for (i, item) in items.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {}. ", i + 1), Styles::muted()),
                    Span::styled(item.clone(), Style::default().fg(colors().fg)),
                ]));
            }
        }
        Some(GroupBody::Table { header, rows }) => {
            lines.extend(table_lines(header, rows));
        }
        None => {}
    }

    lines
}

/// 按显示宽度对齐的表格
fn table_lines(header: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, title)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .chain(std::iter::once(title.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_style = Style::default().fg(colors().fg).add_modifier(Modifier::BOLD);
    let mut lines = vec![row_line(header, &widths, header_style)];

    let rule: String = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");
    lines.push(Line::styled(format!("    {rule}"), Styles::muted()));

    for row in rows {
        lines.push(row_line(row, &widths, Style::default().fg(colors().fg)));
    }
    lines
}

fn row_line(cells: &[String], widths: &[usize], style: Style) -> Line<'static> {
    let mut spans = vec![Span::raw("    ")];
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::muted()));
        }
        let cell = cells.get(i).map_or("", String::as_str);
        let padding = width.saturating_sub(cell.width());
        spans.push(Span::styled(
            format!("{cell}{:padding$}", "", padding = padding),
            style,
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn collapsed_group_is_title_only() {
        let view = GroupView {
            title: Some("Instruction".to_string()),
            open: false,
            body: GroupBody::NumberedList(vec!["a".to_string()]),
        };
        let lines = lines(&view, false);
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), "  ▶ Instruction");
    }

    #[test]
    fn table_columns_are_aligned() {
        let view = GroupView {
            title: Some("T".to_string()),
            open: true,
            body: GroupBody::Table {
                header: vec!["Date".to_string(), "Amount".to_string()],
                rows: vec![vec!["2024-09-01".to_string(), "100".to_string()]],
            },
        };
        let lines = lines(&view, false);
        assert_eq!(lines.len(), 4);
        assert_eq!(text(&lines[1]), "    Date       │ Amount");
        assert_eq!(text(&lines[3]), "    2024-09-01 │ 100   ");
    }
}
