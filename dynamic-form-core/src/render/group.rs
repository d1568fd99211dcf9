//! 分组容器（可折叠区块）
//!
//! 用于承载说明列表与表格。只有展开/折叠一个布尔状态，不持有任何表单值。

use serde_json::Value;

use crate::types::{display_json, FieldKind, FormSchema};

/// 单个分组容器的状态，默认展开
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupState {
    pub open: bool,
}

impl Default for GroupState {
    fn default() -> Self {
        Self { open: true }
    }
}

impl GroupState {
    /// 切换展开/折叠
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// 按 schema 下标保存的分组状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupStates {
    states: Vec<GroupState>,
}

impl GroupStates {
    /// 为 schema 的每个字段准备一个（默认展开的）状态
    pub fn for_schema(schema: &FormSchema) -> Self {
        Self {
            states: vec![GroupState::default(); schema.fields.len()],
        }
    }

    /// 调整到新的字段数，已有状态保留
    pub fn resize(&mut self, len: usize) {
        self.states.resize(len, GroupState::default());
    }

    /// 某字段的分组状态（越界视为默认展开）
    pub fn get(&self, index: usize) -> GroupState {
        self.states.get(index).copied().unwrap_or_default()
    }

    /// 切换某字段的分组状态，返回切换后是否展开；越界返回 `None`
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let state = self.states.get_mut(index)?;
        state.toggle();
        Some(state.open)
    }
}

/// 分组内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupBody {
    /// 编号列表
    NumberedList(Vec<String>),
    /// 表格
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// 分组容器的渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub title: Option<String>,
    pub open: bool,
    pub body: GroupBody,
}

impl GroupView {
    /// 折叠时不显示内容
    pub fn visible_body(&self) -> Option<&GroupBody> {
        self.open.then_some(&self.body)
    }
}

/// 说明字段 → 编号列表
pub(crate) fn instruction_body(data: &[Value]) -> GroupBody {
    GroupBody::NumberedList(data.iter().map(display_json).collect())
}

/// 表格字段 → 按列投影后的表格，缺失单元格为空
pub(crate) fn table_body(columns: &[String], data: &[Value]) -> GroupBody {
    let rows = data
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| match row {
                    Value::Object(cells) => cells.get(column).map(display_json).unwrap_or_default(),
                    _ => String::new(),
                })
                .collect()
        })
        .collect();

    GroupBody::Table {
        header: columns.to_vec(),
        rows,
    }
}

/// 分组字段的渲染；非分组字段返回 `None`
pub(crate) fn group_view(kind: &FieldKind, label: Option<&str>, state: GroupState) -> Option<GroupView> {
    let (title, body) = match kind {
        FieldKind::Instruction { data } => (Some("Instruction".to_string()), instruction_body(data)),
        FieldKind::Table { columns, data } => (label.map(str::to_string), table_body(columns, data)),
        _ => return None,
    };

    Some(GroupView {
        title,
        open: state.open,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_to_open_and_toggles() {
        let schema = FormSchema::parse(r#"{"fields": [{"type": "instruction", "data": []}]}"#);
        let mut groups = GroupStates::for_schema(&schema);
        assert!(groups.get(0).open);
        assert_eq!(groups.toggle(0), Some(false));
        assert!(!groups.get(0).open);
        assert_eq!(groups.toggle(0), Some(true));
        assert_eq!(groups.toggle(5), None);
        assert!(groups.get(5).open);
    }

    #[test]
    fn resize_keeps_existing_states() {
        let mut groups = GroupStates::default();
        groups.resize(2);
        groups.toggle(1);
        groups.resize(3);
        assert!(!groups.get(1).open);
        assert!(groups.get(2).open);
    }

    #[test]
    fn table_projects_rows_through_columns() {
        let columns = vec!["Date".to_string(), "Amount".to_string(), "Type".to_string()];
        let data = vec![
            json!({"Date": "2024-09-01", "Amount": 100, "Type": "Credit", "Extra": "x"}),
            json!({"Date": "2024-09-02", "Amount": null}),
            json!("not a record"),
        ];
        let GroupBody::Table { header, rows } = table_body(&columns, &data) else {
            panic!("expected table body");
        };
        assert_eq!(header, columns);
        assert_eq!(
            rows,
            vec![
                vec!["2024-09-01".to_string(), "100".to_string(), "Credit".to_string()],
                vec!["2024-09-02".to_string(), String::new(), String::new()],
                vec![String::new(), String::new(), String::new()],
            ]
        );
    }

    #[test]
    fn instruction_items_render_in_order() {
        let body = instruction_body(&[json!("transactionDate"), json!({"step": 2}), json!(3)]);
        assert_eq!(
            body,
            GroupBody::NumberedList(vec![
                "transactionDate".to_string(),
                r#"{"step":2}"#.to_string(),
                "3".to_string(),
            ])
        );
    }

    #[test]
    fn collapsed_group_hides_body() {
        let kind = FieldKind::Instruction { data: vec![json!("a")] };
        let view = group_view(&kind, None, GroupState { open: false }).unwrap();
        assert_eq!(view.title.as_deref(), Some("Instruction"));
        assert_eq!(view.visible_body(), None);
    }
}
