//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 / 表单区 / 按钮栏 / 状态栏
//!         mod components;     // 字段控件、分组容器、状态栏、帮助弹窗
//!         pub mod theme;      // 主题与样式
//!
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ Transaction Form                             │  ← 标题栏（schema.title）
//!     ├──────────────────────────────────────────────┤
//!     │ › Transaction ID *                           │
//!     │     TX12345▎                                 │  ← 焦点控件
//!     │                                              │
//!     │   Transaction Type *                         │
//!     │     [x] Credit   [ ] Debit                   │
//!     │   ...                                        │
//!     ├──────────────────────────────────────────────┤
//!     │  [ Submit ]  [ Close ]                       │  ← 按钮栏
//!     │ Tab Next │ Type Edit │ Alt+s Submit │ ...    │  ← 状态栏
//!     └──────────────────────────────────────────────┘
//!
//! 每一帧都从 `app.view()` 重新生成 FormView，因此远程选项到达后
//! 下一帧就会出现在下拉框中。
//!

mod components;
mod layout;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
