//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!     src/update/mod.rs
//!         mod form;               // 表单编辑子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {
//!             match msg {
//!                 AppMessage::Submit => { app.host.submit(); ... }
//!                 AppMessage::Form(form_msg) => form::update(app, form_msg),
//!                 ...
//!             }
//!         }
//!
//!     提交与关闭都会让主循环退出：
//!         - Submit：FormHost 保存快照，main.rs 在恢复终端后打印 JSON
//!         - Close ：引擎记录诊断，不产生输出
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;

use dynamic_form_core::{Control, Widget};

use crate::message::AppMessage;
use crate::model::{App, Outcome};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Close => {
            app.host.engine_mut().close();
            app.outcome = Outcome::Closed;
            app.should_quit = true;
        }

        AppMessage::Submit => {
            let committed = app.host.submit();
            log::info!("Submitted {} field(s)", committed.len());
            app.outcome = Outcome::Submitted;
            app.should_quit = true;
        }

        AppMessage::NextFocus => {
            let count = app.view().widgets.len();
            app.focus = app.focus.next(count);
            app.clear_status();
            reset_cursor(app);
        }

        AppMessage::PrevFocus => {
            let count = app.view().widgets.len();
            app.focus = app.focus.prev(count);
            app.clear_status();
            reset_cursor(app);
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::HideHelp => {
            app.show_help = false;
        }

        AppMessage::Noop => {}
    }
}

/// 焦点变化后，把光标放到当前选中项上（没有则放在第一项）
fn reset_cursor(app: &mut App) {
    app.cursor = app.focused_widget().as_ref().map_or(0, selected_position);
}

fn selected_position(widget: &Widget) -> usize {
    match &widget.control {
        Control::CheckboxGroup { items } | Control::RadioGroup { items } => {
            items.iter().position(|item| item.checked).unwrap_or(0)
        }
        Control::Dropdown {
            options, selected, ..
        } => selected
            .as_ref()
            .and_then(|s| options.iter().position(|o| o == s))
            .unwrap_or(0),
        Control::Input { .. } | Control::Group(_) => 0,
    }
}
