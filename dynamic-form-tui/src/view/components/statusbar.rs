//! 底部状态栏组件

use dynamic_form_core::Control;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusTarget};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().warning)));
    }

    let pending = app.host.engine().pending_options();
    if pending > 0 {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("loading options ({pending})"),
            Styles::hint_desc(),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Tab", "Next")];

    match app.focus {
        FocusTarget::Submit => hints.push(("Enter", "Submit")),
        FocusTarget::Close => hints.push(("Enter", "Close")),
        FocusTarget::Field(_) => match app.focused_widget().map(|w| w.control) {
            Some(Control::Input { .. }) => hints.push(("Type", "Edit")),
            Some(Control::CheckboxGroup { .. }) => {
                hints.push(("←→", "Move"));
                hints.push(("Space", "Toggle"));
            }
            Some(Control::RadioGroup { .. }) => {
                hints.push(("←→", "Move"));
                hints.push(("Space", "Select"));
            }
            Some(Control::Dropdown { .. }) => {
                hints.push(("←→", "Move"));
                hints.push(("Space", "Select"));
                hints.push(("Del", "Clear"));
            }
            Some(Control::Group(_)) => hints.push(("Enter", "Expand/Collapse")),
            None => {}
        },
    }

    hints.push(("Alt+s", "Submit"));
    hints.push(("Esc", "Close"));
    hints.push(("Alt+h", "Help"));

    hints
}
