//! 表单编辑消息处理
//!
//! 把 "对焦点控件做什么" 翻译成核心库的 FieldEvent。

use dynamic_form_core::render::ChoiceItem;
use dynamic_form_core::types::InputKind;
use dynamic_form_core::{Control, EditAction, FieldEvent, Widget};

use crate::message::FormMessage;
use crate::model::App;

/// 处理表单编辑消息
pub fn update(app: &mut App, msg: FormMessage) {
    let Some(widget) = app.focused_widget() else {
        return;
    };

    match msg {
        FormMessage::Input(c) => {
            let Control::Input { input, value } = &widget.control else {
                return;
            };
            if !accepts(*input, c) {
                app.set_status(format!("'{c}' is not allowed in a {} field", input.tag()));
                return;
            }
            let mut next = value.clone();
            next.push(c);
            apply(app, &widget, EditAction::SetScalar(next));
        }

        FormMessage::Backspace => {
            let Control::Input { value, .. } = &widget.control else {
                return;
            };
            let mut next = value.clone();
            if next.pop().is_some() {
                apply(app, &widget, EditAction::SetScalar(next));
            }
        }

        FormMessage::CursorPrev => {
            app.cursor = app.cursor.saturating_sub(1);
        }

        FormMessage::CursorNext => {
            if app.cursor + 1 < widget.choice_count() {
                app.cursor += 1;
            }
        }

        FormMessage::Activate => activate(app, &widget),

        FormMessage::Clear => {
            if matches!(widget.control, Control::Dropdown { .. }) {
                apply(app, &widget, EditAction::Clear);
            }
        }

        FormMessage::ToggleGroup => {
            if let Control::Group(_) = widget.control {
                if let Some(open) = app.host.engine_mut().toggle_group(widget.index) {
                    log::debug!("Group #{} is now {}", widget.index, if open { "open" } else { "collapsed" });
                }
            }
        }
    }
}

/// 勾选 / 选中光标所在选项
fn activate(app: &mut App, widget: &Widget) {
    let cursor = app.cursor;
    let action = match &widget.control {
        Control::CheckboxGroup { items } => option_at(items, cursor).map(EditAction::Toggle),
        Control::RadioGroup { items } => option_at(items, cursor).map(EditAction::SetScalar),
        Control::Dropdown { options, remote, .. } => {
            if options.is_empty() {
                app.set_status(if *remote {
                    "Options are not available yet"
                } else {
                    "This dropdown has no options"
                });
                return;
            }
            options.get(cursor).cloned().map(EditAction::Select)
        }
        Control::Input { .. } | Control::Group(_) => None,
    };

    if let Some(action) = action {
        apply(app, widget, action);
    }
}

fn option_at(items: &[ChoiceItem], cursor: usize) -> Option<String> {
    items.get(cursor).map(|item| item.option.clone())
}

/// 投递编辑事件；无名字段的编辑不会被保存
fn apply(app: &mut App, widget: &Widget, action: EditAction) {
    let event = FieldEvent::new(widget.name.as_deref(), action);
    if !app.host.engine_mut().apply(event) {
        app.set_status("This field has no name, the edit is not kept");
    }
}

/// 输入框允许的字符
fn accepts(input: InputKind, c: char) -> bool {
    if c.is_control() {
        return false;
    }
    match input {
        InputKind::Text => true,
        InputKind::Number => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
        InputKind::Date => c.is_ascii_digit() || c == '-',
        InputKind::Time => c.is_ascii_digit() || c == ':',
    }
}
