//! 表单 schema 类型定义与解析
//!
//! 原始 schema 是一份松散的 JSON 文档（所有属性都可缺省，类型也不保证）。
//! 这里在解析边界把它收敛为按字段类型区分的 [`FieldKind`]，渲染层只需对它做穷尽匹配。
//!
//! 只有整份文档不可用（非法 JSON、不是对象、`fields` 不是数组）时才退化为空 schema；
//! 单个属性类型不符时只影响该属性，按缺省处理。

use serde_json::{Map, Value};

use super::value::{scalar_to_string, FieldValue, ValueMap};
use crate::error::{FormError, FormResult};

/// 单行输入的具体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Text,
    Number,
    Date,
    Time,
}

impl InputKind {
    /// schema 中的类型标签
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
        }
    }
}

/// 字段类型及其专属属性
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// `text` / `number` / `date` / `time`
    Input {
        input: InputKind,
        value: Option<FieldValue>,
    },
    /// `checkbox-group`
    CheckboxGroup {
        options: Vec<String>,
        value: Option<FieldValue>,
    },
    /// `radio-group`
    RadioGroup {
        options: Vec<String>,
        value: Option<FieldValue>,
    },
    /// `dropdown`
    Dropdown {
        options: Vec<String>,
        value: Option<FieldValue>,
    },
    /// `instruction`：纯展示，编号列表
    Instruction { data: Vec<Value> },
    /// `table`：纯展示，按列投影
    Table { columns: Vec<String>, data: Vec<Value> },
    /// 未识别的标签（保留在模型中，但不渲染）
    Unknown { tag: Option<String> },
}

impl FieldKind {
    /// schema 中的类型标签
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Input { input, .. } => Some(input.tag()),
            Self::CheckboxGroup { .. } => Some("checkbox-group"),
            Self::RadioGroup { .. } => Some("radio-group"),
            Self::Dropdown { .. } => Some("dropdown"),
            Self::Instruction { .. } => Some("instruction"),
            Self::Table { .. } => Some("table"),
            Self::Unknown { tag } => tag.as_deref(),
        }
    }

    /// 是否渲染在分组容器中
    pub fn is_grouping(&self) -> bool {
        matches!(self, Self::Instruction { .. } | Self::Table { .. })
    }

    /// 是否参与草稿状态
    pub fn is_editable(&self) -> bool {
        matches!(
            self,
            Self::Input { .. }
                | Self::CheckboxGroup { .. }
                | Self::RadioGroup { .. }
                | Self::Dropdown { .. }
        )
    }
}

/// 一个字段声明
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// 显示标签
    pub label: Option<String>,
    /// 字段名（草稿状态与选项缓存的唯一键；空字符串视为缺失）
    pub name: Option<String>,
    /// 是否必填（仅作为控件元数据，不做校验）
    pub required: bool,
    /// 远程选项地址
    pub api_url: Option<String>,
    /// 类型及专属属性
    pub kind: FieldKind,
}

impl FieldSpec {
    /// 声明的初始值（仅可编辑字段）
    pub fn initial_value(&self) -> Option<&FieldValue> {
        match &self.kind {
            FieldKind::Input { value, .. }
            | FieldKind::CheckboxGroup { value, .. }
            | FieldKind::RadioGroup { value, .. }
            | FieldKind::Dropdown { value, .. } => value.as_ref(),
            FieldKind::Instruction { .. } | FieldKind::Table { .. } | FieldKind::Unknown { .. } => {
                None
            }
        }
    }

    /// 非空的远程选项地址
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// 选项缓存使用的键（无名字段使用空字符串）
    pub fn options_key(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// 从单个字段的 JSON 值转换；属性逐个宽松读取
    fn from_json(value: &Value) -> Self {
        let Some(raw) = value.as_object() else {
            log::debug!("Field entry is not an object ({value}), field will not be rendered");
            return Self {
                label: None,
                name: None,
                required: false,
                api_url: None,
                kind: FieldKind::Unknown { tag: None },
            };
        };

        let initial = raw.get("value");
        let kind = match raw.get("type").and_then(Value::as_str) {
            Some(tag @ ("text" | "number" | "date" | "time")) => FieldKind::Input {
                input: match tag {
                    "number" => InputKind::Number,
                    "date" => InputKind::Date,
                    "time" => InputKind::Time,
                    _ => InputKind::Text,
                },
                value: initial.and_then(FieldValue::scalar_from_json),
            },
            Some("checkbox-group") => FieldKind::CheckboxGroup {
                options: string_list(raw, "options"),
                value: initial.and_then(FieldValue::list_from_json),
            },
            Some("radio-group") => FieldKind::RadioGroup {
                options: string_list(raw, "options"),
                value: initial.and_then(FieldValue::scalar_from_json),
            },
            Some("dropdown") => FieldKind::Dropdown {
                options: string_list(raw, "options"),
                value: initial.and_then(FieldValue::scalar_from_json),
            },
            Some("instruction") => FieldKind::Instruction {
                data: records(raw),
            },
            Some("table") => FieldKind::Table {
                columns: string_list(raw, "columns"),
                data: records(raw),
            },
            _ => {
                let tag = raw.get("type").and_then(scalar_to_string);
                log::debug!("Unrecognized field type {tag:?}, field will not be rendered");
                FieldKind::Unknown { tag }
            }
        };

        Self {
            label: scalar(raw, "label"),
            name: scalar(raw, "name").filter(|name| !name.is_empty()),
            required: matches!(raw.get("required"), Some(Value::Bool(true))),
            api_url: scalar(raw, "apiUrl"),
            kind,
        }
    }
}

/// 标量属性转文本；缺失、`null` 或结构化值视为未声明
fn scalar(raw: &Map<String, Value>, key: &str) -> Option<String> {
    raw.get(key).and_then(scalar_to_string)
}

/// 字符串序列属性：非数组视为空，数组中的非标量元素跳过
fn string_list(raw: &Map<String, Value>, key: &str) -> Vec<String> {
    match raw.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(other) => {
            log::debug!("Ignoring non-array {key:?}: {other}");
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// `data` 属性：非数组视为空
fn records(raw: &Map<String, Value>) -> Vec<Value> {
    match raw.get("data") {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

/// 完整表单 schema
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSchema {
    /// 表单标题
    pub title: Option<String>,
    /// 有序字段列表
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// 解析原始 schema 文本，失败时退化为空 schema（从不向调用方报错）
    pub fn parse(raw: &str) -> Self {
        match Self::try_parse(raw) {
            Ok(schema) => schema,
            Err(e) => {
                log::warn!("Falling back to empty schema: {e}");
                Self::default()
            }
        }
    }

    /// 解析原始 schema 文本，保留错误信息
    pub fn try_parse(raw: &str) -> FormResult<Self> {
        if raw.trim().is_empty() {
            return Err(FormError::InvalidSchema("empty input".to_string()));
        }
        let value: Value =
            serde_json::from_str(raw).map_err(|e| FormError::InvalidSchema(e.to_string()))?;
        Self::try_from_value(value)
    }

    /// 从已解码的 JSON 文档转换，失败时退化为空 schema
    pub fn from_value(value: Value) -> Self {
        Self::try_from_value(value).unwrap_or_else(|e| {
            log::warn!("Falling back to empty schema: {e}");
            Self::default()
        })
    }

    fn try_from_value(value: Value) -> FormResult<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(raw) => {
                let fields = match raw.get("fields") {
                    Some(Value::Array(items)) => items.iter().map(FieldSpec::from_json).collect(),
                    None | Some(Value::Null) => Vec::new(),
                    Some(other) => {
                        return Err(FormError::InvalidSchema(format!(
                            "`fields` must be an array, got {other}"
                        )));
                    }
                };
                Ok(Self {
                    title: raw.get("title").and_then(scalar_to_string),
                    fields,
                })
            }
            _ => Err(FormError::InvalidSchema(
                "schema document must be a JSON object".to_string(),
            )),
        }
    }

    /// 挂载时的草稿初始值
    ///
    /// 只有具名、可编辑且声明了可用初始值的字段产生键；同名字段后者覆盖前者。
    pub fn initial_values(&self) -> ValueMap {
        let mut values = ValueMap::new();
        for field in &self.fields {
            if let (Some(name), Some(value)) = (field.name.as_ref(), field.initial_value()) {
                values.insert(name.clone(), value.clone());
            }
        }
        values
    }

    /// 声明了远程选项的字段：`(缓存键, 地址)`
    pub fn option_sources(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|field| field.api_url().map(|url| (field.options_key(), url)))
    }

    /// 是否没有任何字段
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
