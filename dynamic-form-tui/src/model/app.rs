//! 应用主状态结构

use dynamic_form_core::{FormHost, FormView, Widget};

use super::FocusTarget;

/// 表单结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// 仍在编辑
    #[default]
    Editing,
    /// 已提交，退出后打印结果
    Submitted,
    /// 关闭，不输出
    Closed,
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 表单宿主（持有引擎）
    pub host: FormHost,

    /// 当前焦点
    pub focus: FocusTarget,

    /// 选择类控件中的光标位置
    pub cursor: usize,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 是否显示帮助弹窗
    pub show_help: bool,

    /// 结束方式
    pub outcome: Outcome,
}

impl App {
    /// 创建新的应用实例
    pub fn new(host: FormHost) -> Self {
        let widget_count = host.engine().render().widgets.len();
        Self {
            should_quit: false,
            host,
            focus: FocusTarget::first(widget_count),
            cursor: 0,
            status_message: None,
            show_help: false,
            outcome: Outcome::Editing,
        }
    }

    /// 当前表单视图
    pub fn view(&self) -> FormView {
        self.host.engine().render()
    }

    /// 焦点所在控件
    pub fn focused_widget(&self) -> Option<Widget> {
        let index = self.focus.field()?;
        self.view().widgets.into_iter().nth(index)
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
