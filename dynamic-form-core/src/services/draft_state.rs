//! 草稿状态管理
//!
//! 草稿状态是唯一可写的值映射：所有编辑都只改动一个键，提交时整体拍快照。

use serde::Serialize;

use crate::types::{FieldValue, FormSchema, ValueMap};

/// 提交快照
///
/// 只可能等于某一时刻的完整草稿，从不是部分或合并后的值。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CommittedState(ValueMap);

impl CommittedState {
    /// 字段值
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// 全部字段值
    pub fn values(&self) -> &ValueMap {
        &self.0
    }

    /// 字段数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 序列化为 JSON 对象文本
    pub fn to_json(&self) -> String {
        // 值只含字符串、数字与字符串数组，序列化不会失败
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

/// 草稿状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftState {
    values: ValueMap,
}

impl DraftState {
    /// 创建空草稿
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 schema 的声明值派生（每次挂载仅一次）
    pub fn from_schema(schema: &FormSchema) -> Self {
        Self {
            values: schema.initial_values(),
        }
    }

    /// 直接替换标量（文本/数字/日期/时间/单选/下拉）
    pub fn set_scalar(&mut self, name: &str, value: impl Into<String>) {
        self.values
            .insert(name.to_string(), FieldValue::Text(value.into()));
    }

    /// 复选组的集合切换
    ///
    /// 存在则移除（所有相等项），不存在则追加；槽位不存在或为标量时变为单元素序列。
    pub fn toggle_member(&mut self, name: &str, value: &str) {
        match self.values.get_mut(name) {
            Some(FieldValue::List(items)) => {
                if items.iter().any(|item| item == value) {
                    items.retain(|item| item != value);
                } else {
                    items.push(value.to_string());
                }
            }
            _ => {
                self.values
                    .insert(name.to_string(), FieldValue::List(vec![value.to_string()]));
            }
        }
    }

    /// 清空下拉选择：置为空字符串而非删除键
    pub fn clear(&mut self, name: &str) {
        self.set_scalar(name, String::new());
    }

    /// 生成提交快照
    pub fn commit(&self) -> CommittedState {
        CommittedState(self.values.clone())
    }

    /// 字段值
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// 全部字段值
    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    /// 键数量
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn list(items: &[&str]) -> FieldValue {
        FieldValue::List(items.iter().map(ToString::to_string).collect())
    }

    fn members(draft: &DraftState, name: &str) -> BTreeSet<String> {
        draft
            .get(name)
            .and_then(FieldValue::as_list)
            .map(|items| items.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn set_scalar_replaces() {
        let mut draft = DraftState::new();
        draft.set_scalar("transactionId", "TX1");
        draft.set_scalar("transactionId", "TX2");
        assert_eq!(draft.get("transactionId"), Some(&FieldValue::from("TX2")));
        assert_eq!(draft.len(), 1);
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let schema = FormSchema::parse(
            r#"{"fields": [{"type": "checkbox-group", "name": "t", "options": ["Credit", "Debit"], "value": ["Credit", "Debit"]}]}"#,
        );
        let mut draft = DraftState::from_schema(&schema);
        let before = members(&draft, "t");

        for option in ["Credit", "Debit", "Other"] {
            draft.toggle_member("t", option);
            draft.toggle_member("t", option);
            assert_eq!(members(&draft, "t"), before, "toggling {option} twice");
        }
    }

    #[test]
    fn toggle_creates_singleton() {
        let mut draft = DraftState::new();
        draft.toggle_member("t", "Debit");
        assert_eq!(draft.get("t"), Some(&list(&["Debit"])));
    }

    #[test]
    fn toggle_over_scalar_becomes_singleton() {
        let mut draft = DraftState::new();
        draft.set_scalar("x", "typed");
        draft.toggle_member("x", "Debit");
        assert_eq!(draft.get("x"), Some(&list(&["Debit"])));
    }

    #[test]
    fn toggle_off_leaves_empty_list() {
        let mut draft = DraftState::new();
        draft.toggle_member("t", "Credit");
        draft.toggle_member("t", "Credit");
        assert_eq!(draft.get("t"), Some(&list(&[])));
    }

    #[test]
    fn clear_keeps_key() {
        let mut draft = DraftState::new();
        draft.set_scalar("shop", "Location 2");
        draft.clear("shop");
        assert_eq!(draft.get("shop"), Some(&FieldValue::from("")));

        draft.clear("never-set");
        assert_eq!(draft.get("never-set"), Some(&FieldValue::from("")));
    }

    #[test]
    fn commit_is_a_snapshot() {
        let mut draft = DraftState::new();
        draft.set_scalar("a", "1");
        let committed = draft.commit();
        draft.set_scalar("a", "2");

        assert_eq!(committed.get("a"), Some(&FieldValue::from("1")));
        assert_eq!(committed.to_json(), r#"{"a":"1"}"#);
    }
}
