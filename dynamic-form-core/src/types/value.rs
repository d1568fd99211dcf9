//! 字段值类型定义

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// 字段值
///
/// 形状由字段类型决定：标量输入/单选/下拉为 `Text` 或 `Number`，复选组为 `List`。
/// 序列化时不带标签，提交结果即普通 JSON 对象。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// 文本标量
    Text(String),
    /// 数字标量（仅来自 schema 初始值，编辑后变为文本）
    Number(Number),
    /// 字符串序列（复选组）
    List(Vec<String>),
}

impl FieldValue {
    /// 标量的显示文本；序列返回 `None`
    pub fn as_scalar_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(n.to_string()),
            Self::List(_) => None,
        }
    }

    /// 序列视图；标量返回 `None`
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// 是否包含某个选项（仅对序列有意义）
    pub fn contains(&self, option: &str) -> bool {
        self.as_list()
            .is_some_and(|items| items.iter().any(|item| item == option))
    }

    /// 从标量字段的 schema 初始值转换
    ///
    /// 字符串、数字直接保留，布尔值转为文本；数组、对象与 `null` 不可用。
    pub fn scalar_from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::Bool(b) => Some(Self::Text(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// 从复选组的 schema 初始值转换
    ///
    /// 数组中的字符串原样保留，其他标量转为文本，嵌套结构与 `null` 跳过；
    /// 单个字符串视为只含一项的序列。
    pub fn list_from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(Self::List(
                items.iter().filter_map(scalar_to_string).collect(),
            )),
            Value::String(s) => Some(Self::List(vec![s.clone()])),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// 字段名 → 字段值
pub type ValueMap = BTreeMap<String, FieldValue>;

/// 标量 JSON 值转字符串（字符串不加引号）
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// 任意 JSON 值的展示文本：字符串原样，其余为紧凑 JSON，`null` 为空
pub(crate) fn display_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_coercion() {
        assert_eq!(
            FieldValue::scalar_from_json(&json!("TX12345")),
            Some(FieldValue::Text("TX12345".to_string()))
        );
        assert_eq!(
            FieldValue::scalar_from_json(&json!(100)),
            Some(FieldValue::Number(Number::from(100)))
        );
        assert_eq!(
            FieldValue::scalar_from_json(&json!(true)),
            Some(FieldValue::Text("true".to_string()))
        );
        assert_eq!(FieldValue::scalar_from_json(&json!(null)), None);
        assert_eq!(FieldValue::scalar_from_json(&json!(["a"])), None);
    }

    #[test]
    fn list_coercion_skips_nested_values() {
        let value = FieldValue::list_from_json(&json!(["Credit", 7, null, ["x"]])).unwrap();
        assert_eq!(
            value,
            FieldValue::List(vec!["Credit".to_string(), "7".to_string()])
        );
        assert_eq!(
            FieldValue::list_from_json(&json!("Debit")),
            Some(FieldValue::List(vec!["Debit".to_string()]))
        );
        assert_eq!(FieldValue::list_from_json(&json!(3)), None);
    }

    #[test]
    fn serializes_untagged() {
        let mut map = ValueMap::new();
        map.insert("amount".to_string(), FieldValue::Number(Number::from(100)));
        map.insert(
            "transactionType".to_string(),
            FieldValue::List(vec!["Credit".to_string()]),
        );
        map.insert("transactionId".to_string(), FieldValue::from("TX12345"));
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            json!({"amount": 100, "transactionType": ["Credit"], "transactionId": "TX12345"})
        );
    }

    #[test]
    fn scalar_text_of_number() {
        assert_eq!(
            FieldValue::Number(Number::from(0)).as_scalar_text(),
            Some("0".to_string())
        );
        assert_eq!(FieldValue::List(vec![]).as_scalar_text(), None);
    }
}
