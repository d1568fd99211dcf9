//! 表单编辑消息

/// 针对焦点控件的编辑消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// 输入字符（输入框）
    Input(char),

    /// 删除最后一个字符（输入框）
    Backspace,

    /// 选项光标左移
    CursorPrev,

    /// 选项光标右移
    CursorNext,

    /// 勾选 / 选中光标所在的选项
    Activate,

    /// 清空下拉选择
    Clear,

    /// 展开 / 折叠分组
    ToggleGroup,
}
