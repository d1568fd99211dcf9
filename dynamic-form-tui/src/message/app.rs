//! 应用主消息枚举

use super::FormMessage;

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 直接退出（不经过关闭流程）
    Quit,

    /// 关闭表单
    Close,

    /// 提交表单
    Submit,

    /// 焦点移到下一个控件
    NextFocus,

    /// 焦点移到上一个控件
    PrevFocus,

    /// 表单编辑消息
    Form(FormMessage),

    /// 显示帮助
    ShowHelp,

    /// 关闭帮助
    HideHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
