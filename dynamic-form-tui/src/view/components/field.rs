//! 字段控件渲染
//!
//! 每个控件渲染为若干行：第一行是标签，之后是控件本体。

use dynamic_form_core::render::ChoiceItem;
use dynamic_form_core::types::InputKind;
use dynamic_form_core::{Control, Widget};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::group;
use crate::view::theme::{colors, Styles};

/// 渲染一个控件
///
/// `cursor` 只对焦点所在的选择类控件有意义。
pub fn lines(widget: &Widget, focused: bool, cursor: usize) -> Vec<Line<'static>> {
    match &widget.control {
        Control::Group(view) => group::lines(view, focused),
        Control::Input { input, value } => {
            vec![label_line(widget, focused), input_line(*input, value, focused)]
        }
        Control::CheckboxGroup { items } => {
            vec![label_line(widget, focused), choices_line(items, "[x]", "[ ]", focused, cursor)]
        }
        Control::RadioGroup { items } => {
            vec![label_line(widget, focused), choices_line(items, "(•)", "( )", focused, cursor)]
        }
        Control::Dropdown {
            options,
            selected,
            remote,
        } => {
            let mut lines = vec![
                label_line(widget, focused),
                dropdown_line(selected.as_deref(), options.is_empty(), *remote),
            ];
            if focused && !options.is_empty() {
                lines.push(options_line(options, selected.as_deref(), cursor));
            }
            lines
        }
    }
}

fn label_line(widget: &Widget, focused: bool) -> Line<'static> {
    let text = widget
        .label
        .clone()
        .or_else(|| widget.name.clone())
        .unwrap_or_default();

    let mut spans = vec![
        Span::styled(if focused { "› " } else { "  " }, Styles::label(focused)),
        Span::styled(text, Styles::label(focused)),
    ];
    if widget.required {
        spans.push(Span::styled(" *", Styles::required()));
    }
    Line::from(spans)
}

fn input_line(input: InputKind, value: &str, focused: bool) -> Line<'static> {
    let c = colors();
    if value.is_empty() && !focused {
        return Line::styled(format!("    {}", placeholder(input)), Styles::muted());
    }

    let style = if focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.fg)
    };
    let display = if focused {
        format!("    {value}▎")
    } else {
        format!("    {value}")
    };
    Line::styled(display, style)
}

fn placeholder(input: InputKind) -> &'static str {
    match input {
        InputKind::Text => "",
        InputKind::Number => "0",
        InputKind::Date => "YYYY-MM-DD",
        InputKind::Time => "HH:MM",
    }
}

fn choices_line(
    items: &[ChoiceItem],
    on: &str,
    off: &str,
    focused: bool,
    cursor: usize,
) -> Line<'static> {
    let mut spans = vec![Span::raw("    ")];
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let mark = if item.checked { on } else { off };
        let style = if focused && i == cursor {
            Styles::selected()
        } else if item.checked {
            Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors().fg)
        };
        spans.push(Span::styled(format!("{mark} {}", item.option), style));
    }
    if items.is_empty() {
        spans.push(Span::styled("(no options)", Styles::muted()));
    }
    Line::from(spans)
}

fn dropdown_line(selected: Option<&str>, empty: bool, remote: bool) -> Line<'static> {
    match selected {
        Some(value) => Line::from(vec![
            Span::raw("    ▾ "),
            Span::styled(value.to_string(), Style::default().fg(colors().fg)),
        ]),
        None if empty && remote => Line::styled("    ▾ (no options loaded)", Styles::muted()),
        None if empty => Line::styled("    ▾ (no options)", Styles::muted()),
        None => Line::styled("    ▾ -- Select --", Styles::muted()),
    }
}

fn options_line(options: &[String], selected: Option<&str>, cursor: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("      ")];
    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::muted()));
        }
        let style = if i == cursor {
            Styles::selected()
        } else if Some(option.as_str()) == selected {
            Style::default().fg(colors().success)
        } else {
            Style::default().fg(colors().fg)
        };
        spans.push(Span::styled(option.clone(), style));
    }
    Line::from(spans)
}
