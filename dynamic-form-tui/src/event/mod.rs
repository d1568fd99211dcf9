//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     · poll_event      事件轮询，受 app.rs 调用，最长等待 timeout
//!     · handle_event    事件分发
//!
//!         判断顺序：
//!             - Ctrl+C 直接退出（不输出）
//!             - 帮助弹窗打开时，任意键关闭弹窗
//!             - 全局快捷键：Alt+s 提交、Esc/Alt+q 关闭、Alt+h 帮助、Tab/↑↓ 移动焦点
//!             - 焦点在按钮上：Enter 提交 / 关闭
//!             - 焦点在控件上：按控件类型分发
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 控件按键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     输入框          字符 → FormMessage::Input(c)
//!                     Backspace → FormMessage::Backspace
//!                     Enter → 下一个控件
//!
//!     复选/单选/下拉   ←→ 或 h/l → 移动选项光标
//!                     Space/Enter → FormMessage::Activate
//!                     Delete → FormMessage::Clear（仅下拉生效）
//!
//!     分组            Enter/Space → FormMessage::ToggleGroup
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
