//! 帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

const SHORTCUTS: &[(&str, &str)] = &[
    ("Tab/↓", "Next field"),
    ("S-Tab/↑", "Previous field"),
    ("←→", "Move between options"),
    ("Space", "Toggle / select option"),
    ("Del", "Clear dropdown"),
    ("Enter", "Expand / collapse section"),
    ("Alt+s", "Submit form"),
    ("Esc", "Close without output"),
];

/// 渲染帮助弹窗
pub fn render(frame: &mut Frame) {
    let height = u16::try_from(SHORTCUTS.len()).unwrap_or(u16::MAX).saturating_add(6);
    let area = centered_rect(48, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::styled(
            "Shortcuts",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    for (key, desc) in SHORTCUTS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
