//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! Event 层把形形色色的按键翻译成 Message，Update 层根据 Message 更新 Model。
//!
//!     src/message/mod.rs
//!         mod app;            // AppMessage：提交、关闭、焦点、帮助
//!         mod form;           // FormMessage：针对焦点控件的编辑
//!
//!
//!     pub enum AppMessage {
//!         Quit,                   // Ctrl+C 直接退出
//!         Close,                  // 关闭表单（不输出）
//!         Submit,                 // 提交表单（退出后打印 JSON）
//!         NextFocus, PrevFocus,   // 焦点移动
//!         Form(FormMessage),      // 编辑子消息，与主消息分离
//!         ShowHelp, HideHelp,     // 帮助弹窗
//!         Noop,                   // 无操作，用于代替 Option::None
//!     }
//!
//! FormMessage 只描述 "对焦点控件做什么"，由 update/form.rs
//! 结合控件类型翻译成核心库的 FieldEvent。
//!

mod app;
mod form;

pub use app::AppMessage;
pub use form::FormMessage;
