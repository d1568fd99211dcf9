//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dynamic_form_core::Control;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage};
use crate::model::{App, FocusTarget};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变时主循环会自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助弹窗打开时，任意键关闭
    if app.show_help {
        return AppMessage::HideHelp;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Submit;
    }
    if DefaultKeymap::CLOSE.matches(&key) || DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Close;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) || key.code == KeyCode::Down {
        return AppMessage::NextFocus;
    }
    if DefaultKeymap::FOCUS_PREV.matches(&key)
        || key.code == KeyCode::BackTab
        || key.code == KeyCode::Up
    {
        return AppMessage::PrevFocus;
    }

    match app.focus {
        FocusTarget::Submit if DefaultKeymap::CONFIRM.matches(&key) => AppMessage::Submit,
        FocusTarget::Close if DefaultKeymap::CONFIRM.matches(&key) => AppMessage::Close,
        FocusTarget::Field(_) => handle_field_keys(key, app),
        _ => AppMessage::Noop,
    }
}

/// 处理焦点控件上的按键
fn handle_field_keys(key: KeyEvent, app: &App) -> AppMessage {
    let Some(widget) = app.focused_widget() else {
        return AppMessage::Noop;
    };

    match widget.control {
        Control::Input { .. } => match key.code {
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                AppMessage::Form(FormMessage::Input(c))
            }
            KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
            KeyCode::Enter => AppMessage::NextFocus,
            _ => AppMessage::Noop,
        },

        Control::CheckboxGroup { .. } | Control::RadioGroup { .. } | Control::Dropdown { .. } => {
            if DefaultKeymap::CURSOR_LEFT.matches(&key) || key.code == KeyCode::Char('h') {
                AppMessage::Form(FormMessage::CursorPrev)
            } else if DefaultKeymap::CURSOR_RIGHT.matches(&key) || key.code == KeyCode::Char('l') {
                AppMessage::Form(FormMessage::CursorNext)
            } else if DefaultKeymap::ACTIVATE.matches(&key) || DefaultKeymap::CONFIRM.matches(&key) {
                AppMessage::Form(FormMessage::Activate)
            } else if DefaultKeymap::CLEAR.matches(&key) || key.code == KeyCode::Backspace {
                AppMessage::Form(FormMessage::Clear)
            } else if key.modifiers.is_empty() && key.code == KeyCode::Char('?') {
                AppMessage::ShowHelp
            } else {
                AppMessage::Noop
            }
        }

        Control::Group(_) => {
            if DefaultKeymap::CONFIRM.matches(&key) || DefaultKeymap::ACTIVATE.matches(&key) {
                AppMessage::Form(FormMessage::ToggleGroup)
            } else if key.modifiers.is_empty() && key.code == KeyCode::Char('?') {
                AppMessage::ShowHelp
            } else {
                AppMessage::Noop
            }
        }
    }
}
