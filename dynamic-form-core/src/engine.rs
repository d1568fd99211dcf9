//! 表单引擎
//!
//! ```text
//! ┌──────────────┐  apply(FieldEvent)  ┌────────────┐
//! │  Host / UI   │ ──────────────────▶ │ DraftState │
//! │              │                     └─────┬──────┘
//! │              │  render()                 │
//! │              │ ◀──────── FormView ◀──────┤
//! │              │                     ┌─────┴────────┐   mpsc   ┌─────────────┐
//! │              │  poll_options()     │ OptionResolver│ ◀─────── │ fetch tasks │
//! │              │ ──────────────────▶ └──────────────┘          └─────────────┘
//! │              │  submit()           ┌─────────────────────┐
//! │              │ ──────────────────▶ │ SubmissionController│ ──▶ on_submit
//! └──────────────┘                     └─────────────────────┘
//! ```
//!
//! 一个引擎对应一次挂载：schema 解析一次，草稿派生一次，远程选项各拉取一次。
//! 所有写操作都是同步的 `&mut self` 方法，由宿主事件循环串行调用。

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::render::{render_form, EditAction, FieldEvent, FormView, GroupStates};
use crate::services::{
    CommittedState, DraftState, OptionResolver, OptionsCache, OptionsFetcher,
    SubmissionController,
};
use crate::types::FormSchema;

/// 表单引擎
pub struct FormEngine {
    schema: FormSchema,
    draft: DraftState,
    resolver: OptionResolver,
    groups: GroupStates,
    submission: SubmissionController,
}

impl FormEngine {
    /// 挂载：派生草稿、启动远程选项拉取、准备分组状态
    pub fn mount(schema: FormSchema, fetcher: Arc<dyn OptionsFetcher>, handle: &Handle) -> Self {
        let draft = DraftState::from_schema(&schema);
        let groups = GroupStates::for_schema(&schema);

        let mut resolver = OptionResolver::new();
        let spawned = resolver.spawn_all(handle, &fetcher, &schema);

        log::info!(
            "Mounted form {:?}: {} field(s), {} draft key(s), {} option fetch(es)",
            schema.title.as_deref().unwrap_or(""),
            schema.fields.len(),
            draft.len(),
            spawned
        );

        Self {
            schema,
            draft,
            resolver,
            groups,
            submission: SubmissionController::new(),
        }
    }

    /// 注册提交回调
    pub fn on_submit(&mut self, callback: impl FnMut(&CommittedState) + Send + 'static) {
        self.submission.on_submit(callback);
    }

    /// 注册关闭回调
    pub fn on_close(&mut self, callback: impl FnMut() + Send + 'static) {
        self.submission.on_close(callback);
    }

    /// 应用一次编辑；无名目标静默丢弃，返回是否产生了写入
    pub fn apply(&mut self, event: FieldEvent) -> bool {
        let Some(name) = event.name.as_deref() else {
            log::debug!("Dropping {:?}: target field has no name", event.action);
            return false;
        };

        match &event.action {
            EditAction::SetScalar(value) | EditAction::Select(value) => {
                self.draft.set_scalar(name, value.as_str());
            }
            EditAction::Toggle(option) => self.draft.toggle_member(name, option),
            EditAction::Clear => self.draft.clear(name),
        }
        true
    }

    /// 渲染当前状态
    pub fn render(&self) -> FormView {
        render_form(&self.schema, &self.draft, self.resolver.cache(), &self.groups)
    }

    /// 把已完成的选项拉取写入缓存，返回写入条数
    pub fn poll_options(&mut self) -> usize {
        self.resolver.poll()
    }

    /// 等待所有选项拉取完成
    pub async fn settle_options(&mut self) {
        self.resolver.settle().await;
    }

    /// 尚未完成的选项拉取数
    pub fn pending_options(&self) -> usize {
        self.resolver.pending()
    }

    /// 切换分组容器；`index` 不是分组字段时返回 `None`
    pub fn toggle_group(&mut self, index: usize) -> Option<bool> {
        let field = self.schema.fields.get(index)?;
        if !field.kind.is_grouping() {
            return None;
        }
        self.groups.toggle(index)
    }

    /// 提交当前草稿
    pub fn submit(&mut self) -> CommittedState {
        self.submission.submit(&self.draft)
    }

    /// 关闭（草稿保持不变）
    pub fn close(&mut self) {
        self.submission.close();
    }

    /// 用新 schema 重新渲染；草稿与选项缓存保持不变
    pub fn refresh_schema(&mut self, schema: FormSchema) {
        if schema == self.schema {
            return;
        }
        log::debug!(
            "Schema changed ({} -> {} field(s)), draft is kept",
            self.schema.fields.len(),
            schema.fields.len()
        );
        self.groups.resize(schema.fields.len());
        self.schema = schema;
    }

    /// 当前草稿
    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    /// 当前选项缓存
    pub fn options(&self) -> &OptionsCache {
        self.resolver.cache()
    }

    /// 当前 schema
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// 销毁：之后到达的选项结果全部丢弃
    pub fn teardown(&mut self) {
        log::debug!("Tearing down form engine");
        self.resolver.shutdown();
    }

    /// 是否尚未销毁
    pub fn is_live(&self) -> bool {
        self.resolver.is_live()
    }
}
