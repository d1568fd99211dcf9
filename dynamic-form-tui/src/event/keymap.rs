//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const CLOSE: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const SUBMIT: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 焦点
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_PREV: KeyBinding = KeyBinding::new(KeyModifiers::SHIFT, KeyCode::BackTab);

    // 选项
    pub const CURSOR_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const CURSOR_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const ACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const CLEAR: KeyBinding = KeyBinding::key(KeyCode::Delete);
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
}
