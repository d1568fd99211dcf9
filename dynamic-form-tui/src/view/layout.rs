//! 主布局

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, FocusTarget};

use super::components;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 表单区 + 按钮栏 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 表单区
            Constraint::Length(1), // 按钮栏
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_form(app, frame, main_layout[1]);
    render_buttons(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 帮助弹窗（在最上层）
    if app.show_help {
        components::help::render(frame);
    }
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = app
        .host
        .engine()
        .schema()
        .title
        .clone()
        .unwrap_or_else(|| "Dynamic Form".to_string());
    let bar = Paragraph::new(format!(" {title}"))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

/// 渲染表单控件
fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let view = app.view();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if app.focus.field().is_some() {
            Style::default().fg(c.border_focused)
        } else {
            Style::default().fg(c.border)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.widgets.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled("  This form has no fields.", Styles::muted())),
            inner,
        );
        return;
    }

    let mut lines = Vec::new();
    let mut focus_span = (0, 0);
    for (position, widget) in view.widgets.iter().enumerate() {
        let focused = app.focus.field() == Some(position);
        let widget_lines = components::field::lines(widget, focused, app.cursor);
        if focused {
            focus_span = (lines.len(), widget_lines.len());
        }
        lines.extend(widget_lines);
        lines.push(Line::from(""));
    }

    let offset = scroll_offset(focus_span, usize::from(inner.height));
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

/// 让焦点控件完整出现在可视区域内
fn scroll_offset((start, len): (usize, usize), height: usize) -> usize {
    if start + len <= height {
        0
    } else {
        (start + len - height).min(start)
    }
}

/// 渲染提交 / 关闭按钮
fn render_buttons(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let button = |label: &'static str, focused: bool, accent: Color| {
        if focused {
            Span::styled(label, Styles::selected())
        } else {
            Span::styled(
                label,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )
        }
    };

    let line = Line::from(vec![
        Span::raw("  "),
        button("[ Submit ]", app.focus == FocusTarget::Submit, c.success),
        Span::raw("  "),
        button("[ Close ]", app.focus == FocusTarget::Close, c.fg),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
