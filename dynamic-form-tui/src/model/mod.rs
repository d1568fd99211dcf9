//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是界面状态的 "唯一真相来源"，只包含数据，不包含按键逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点（字段 / 提交 / 关闭）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub host: FormHost,                 // 表单宿主，草稿/选项/分组状态都在这里
//!             pub focus: FocusTarget,             // 当前焦点
//!             pub cursor: usize,                  // 选择类控件内的光标
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub show_help: bool,                // 帮助弹窗
//!             pub outcome: Outcome,               // 提交 / 关闭
//!         }
//!
//!     表单值不在 App 里复制一份：View 层每次绘制都调用 `app.view()`，
//!     由引擎根据草稿状态与选项缓存重新生成 FormView。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusTarget）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Field(0) → Field(1) → … → Submit → Close → Field(0)
//!
//!     用户按 Tab / ↓
//!         ↓
//!     event/handler.rs 返回 AppMessage::NextFocus
//!         ↓
//!     update/mod.rs 执行 app.focus = app.focus.next(widget_count)
//!         ↓
//!     view 层给焦点控件加高亮边框
//!

mod app;
mod focus;

pub use app::{App, Outcome};
pub use focus::FocusTarget;
