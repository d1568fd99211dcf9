//! 焦点状态定义

/// 焦点目标
///
/// 字段按 `FormView::widgets` 中的位置编号，之后依次是提交与关闭按钮。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// 第 n 个控件
    Field(usize),
    /// 提交按钮
    Submit,
    /// 关闭按钮
    Close,
}

impl Default for FocusTarget {
    fn default() -> Self {
        FocusTarget::Field(0)
    }
}

impl FocusTarget {
    /// 表单的第一个焦点（没有控件时落在提交按钮）
    pub fn first(widget_count: usize) -> Self {
        if widget_count > 0 {
            FocusTarget::Field(0)
        } else {
            FocusTarget::Submit
        }
    }

    /// 下一个焦点（循环）
    pub fn next(self, widget_count: usize) -> Self {
        match self.clamp(widget_count) {
            FocusTarget::Field(i) if i + 1 < widget_count => FocusTarget::Field(i + 1),
            FocusTarget::Field(_) => FocusTarget::Submit,
            FocusTarget::Submit => FocusTarget::Close,
            FocusTarget::Close => FocusTarget::first(widget_count),
        }
    }

    /// 上一个焦点（循环）
    pub fn prev(self, widget_count: usize) -> Self {
        match self.clamp(widget_count) {
            FocusTarget::Field(0) => FocusTarget::Close,
            FocusTarget::Field(i) => FocusTarget::Field(i - 1),
            FocusTarget::Submit if widget_count > 0 => FocusTarget::Field(widget_count - 1),
            FocusTarget::Submit => FocusTarget::Close,
            FocusTarget::Close => FocusTarget::Submit,
        }
    }

    /// 控件数量变化后把越界的焦点拉回范围内
    pub fn clamp(self, widget_count: usize) -> Self {
        match self {
            FocusTarget::Field(i) if i >= widget_count => {
                if widget_count > 0 {
                    FocusTarget::Field(widget_count - 1)
                } else {
                    FocusTarget::Submit
                }
            }
            other => other,
        }
    }

    /// 焦点所在控件的位置
    pub fn field(self) -> Option<usize> {
        match self {
            FocusTarget::Field(i) => Some(i),
            _ => None,
        }
    }
}
