//! 字段渲染
//!
//! 把 schema 中的每个字段按顺序映射为零或一个 [`Widget`]。这里只产出与
//! 具体前端无关的控件树；终端、网页等前端再把控件树画出来，并把用户操作
//! 翻译为 [`FieldEvent`] 交回引擎。

mod group;

pub use group::{GroupBody, GroupState, GroupStates, GroupView};

use crate::services::{DraftState, OptionsCache};
use crate::types::{FieldKind, FieldSpec, FieldValue, FormSchema, InputKind};

/// 选择类控件中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceItem {
    pub option: String,
    pub checked: bool,
}

/// 控件本体
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// 单行输入（文本/数字/日期/时间）
    Input { input: InputKind, value: String },
    /// 复选组
    CheckboxGroup { items: Vec<ChoiceItem> },
    /// 单选组
    RadioGroup { items: Vec<ChoiceItem> },
    /// 下拉单选
    Dropdown {
        options: Vec<String>,
        selected: Option<String>,
        /// 选项是否来自远程地址
        remote: bool,
    },
    /// 分组容器（说明/表格），纯展示
    Group(GroupView),
}

/// 一个字段渲染出的控件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    /// 在 schema 中的下标
    pub index: usize,
    /// 稳定键：`{name}-{index}`
    pub key: String,
    pub label: Option<String>,
    pub name: Option<String>,
    /// 透传给控件的元数据，不做校验
    pub required: bool,
    pub control: Control,
}

impl Widget {
    /// 是否可编辑（分组容器不可编辑）
    pub fn is_editable(&self) -> bool {
        !matches!(self.control, Control::Group(_))
    }

    /// 选择类控件的选项数
    pub fn choice_count(&self) -> usize {
        match &self.control {
            Control::CheckboxGroup { items } | Control::RadioGroup { items } => items.len(),
            Control::Dropdown { options, .. } => options.len(),
            Control::Input { .. } | Control::Group(_) => 0,
        }
    }
}

/// 整个表单的渲染结果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub title: Option<String>,
    pub widgets: Vec<Widget>,
}

impl FormView {
    /// 按字段名查找所有控件（同名字段共享同一个草稿槽位）
    pub fn by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Widget> + 'a {
        self.widgets
            .iter()
            .filter(move |widget| widget.name.as_deref() == Some(name))
    }
}

/// 编辑动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// 替换标量（输入框、单选）
    SetScalar(String),
    /// 复选组切换某一项
    Toggle(String),
    /// 下拉选中某一项
    Select(String),
    /// 下拉清空（置为空字符串）
    Clear,
}

/// 针对某个字段名的编辑事件；无名事件被静默丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEvent {
    pub name: Option<String>,
    pub action: EditAction,
}

impl FieldEvent {
    pub fn new(name: Option<&str>, action: EditAction) -> Self {
        Self {
            name: name.map(str::to_string),
            action,
        }
    }

    pub fn set_scalar(name: &str, value: impl Into<String>) -> Self {
        Self::new(Some(name), EditAction::SetScalar(value.into()))
    }

    pub fn toggle(name: &str, option: impl Into<String>) -> Self {
        Self::new(Some(name), EditAction::Toggle(option.into()))
    }

    pub fn select(name: &str, option: impl Into<String>) -> Self {
        Self::new(Some(name), EditAction::Select(option.into()))
    }

    pub fn clear(name: &str) -> Self {
        Self::new(Some(name), EditAction::Clear)
    }
}

/// 渲染整个表单
pub fn render_form(
    schema: &FormSchema,
    draft: &DraftState,
    options: &OptionsCache,
    groups: &GroupStates,
) -> FormView {
    FormView {
        title: schema.title.clone(),
        widgets: schema
            .fields
            .iter()
            .enumerate()
            .filter_map(|(index, field)| render_field(index, field, draft, options, groups))
            .collect(),
    }
}

/// 渲染单个字段：对字段类型做穷尽匹配，未识别类型不产出控件
fn render_field(
    index: usize,
    field: &FieldSpec,
    draft: &DraftState,
    options: &OptionsCache,
    groups: &GroupStates,
) -> Option<Widget> {
    let current = field.name.as_deref().and_then(|name| draft.get(name));

    let control = match &field.kind {
        FieldKind::Input { input, .. } => Control::Input {
            input: *input,
            value: current
                .and_then(FieldValue::as_scalar_text)
                .unwrap_or_default(),
        },

        FieldKind::CheckboxGroup {
            options: choices, ..
        } => Control::CheckboxGroup {
            items: choices
                .iter()
                .map(|option| ChoiceItem {
                    option: option.clone(),
                    checked: current.is_some_and(|value| value.contains(option)),
                })
                .collect(),
        },

        FieldKind::RadioGroup {
            options: choices, ..
        } => {
            let selected = current.and_then(FieldValue::as_scalar_text);
            Control::RadioGroup {
                items: choices
                    .iter()
                    .map(|option| ChoiceItem {
                        option: option.clone(),
                        checked: selected.as_deref() == Some(option.as_str()),
                    })
                    .collect(),
            }
        }

        FieldKind::Dropdown {
            options: static_options,
            ..
        } => {
            let remote = field.api_url().is_some();
            let source = if remote {
                options.get(field.options_key()).cloned().unwrap_or_default()
            } else {
                static_options.clone()
            };
            Control::Dropdown {
                options: source,
                selected: current
                    .and_then(FieldValue::as_scalar_text)
                    .filter(|value| !value.is_empty()),
                remote,
            }
        }

        FieldKind::Instruction { .. } | FieldKind::Table { .. } => Control::Group(
            group::group_view(&field.kind, field.label.as_deref(), groups.get(index))?,
        ),

        FieldKind::Unknown { .. } => return None,
    };

    Some(Widget {
        index,
        key: format!("{}-{index}", field.options_key()),
        label: field.label.clone(),
        name: field.name.clone(),
        required: field.required,
        control,
    })
}
