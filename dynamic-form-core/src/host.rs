//! 宿主适配层
//!
//! 宿主以原始 schema 文本驱动表单：`init` 挂载，`update_view` 每次刷新，
//! `get_outputs` 读取最近一次提交，`destroy` 销毁。
//!
//! 快照经由引擎的提交回调到达这里：回调保存快照，再通知宿主输出已变更。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::runtime::Handle;

use crate::engine::FormEngine;
use crate::render::FormView;
use crate::services::{CommittedState, OptionsFetcher};
use crate::types::FormSchema;

/// 宿主可读取的输出
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostOutputs {
    /// 最近一次提交的 JSON 文本；尚未提交时为 `None`
    pub output: Option<String>,
}

/// 宿主适配器
pub struct FormHost {
    engine: FormEngine,
    committed: Arc<Mutex<Option<CommittedState>>>,
}

impl FormHost {
    /// 从原始 schema 文本挂载表单
    pub fn init(
        raw: &str,
        mut notify: impl FnMut() + Send + 'static,
        fetcher: Arc<dyn OptionsFetcher>,
        handle: &Handle,
    ) -> Self {
        let mut engine = FormEngine::mount(FormSchema::parse(raw), fetcher, handle);
        let committed = Arc::new(Mutex::new(None));

        let sink = Arc::clone(&committed);
        engine.on_submit(move |snapshot: &CommittedState| {
            *lock(&sink) = Some(snapshot.clone());
            notify();
        });

        Self { engine, committed }
    }

    /// 用最新的原始 schema 文本刷新，并返回当前视图
    pub fn update_view(&mut self, raw: &str) -> FormView {
        self.engine.poll_options();
        self.engine.refresh_schema(FormSchema::parse(raw));
        self.engine.render()
    }

    /// 当前视图（不重新解析 schema）
    pub fn view(&mut self) -> FormView {
        self.engine.poll_options();
        self.engine.render()
    }

    /// 引擎（用于投递编辑事件）
    pub fn engine(&self) -> &FormEngine {
        &self.engine
    }

    /// 引擎（可变）
    pub fn engine_mut(&mut self) -> &mut FormEngine {
        &mut self.engine
    }

    /// 提交；快照由提交回调保存并通知宿主
    pub fn submit(&mut self) -> CommittedState {
        self.engine.submit()
    }

    /// 最近一次提交的快照
    pub fn committed(&self) -> Option<CommittedState> {
        lock(&self.committed).clone()
    }

    /// 宿主输出
    pub fn get_outputs(&self) -> HostOutputs {
        HostOutputs {
            output: lock(&self.committed).as_ref().map(CommittedState::to_json),
        }
    }

    /// 销毁
    pub fn destroy(&mut self) {
        self.engine.teardown();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FieldEvent;
    use crate::test_utils::{MockOptionsFetcher, TRANSACTION_SCHEMA};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn host(notified: &Arc<AtomicUsize>) -> FormHost {
        let counter = Arc::clone(notified);
        FormHost::init(
            TRANSACTION_SCHEMA,
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            Arc::new(MockOptionsFetcher::new()),
            &Handle::current(),
        )
    }

    #[tokio::test]
    async fn outputs_are_empty_before_submit() {
        let notified = Arc::new(AtomicUsize::new(0));
        let host = host(&notified);
        assert_eq!(host.get_outputs(), HostOutputs { output: None });
        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn submit_stores_output_and_notifies() {
        let notified = Arc::new(AtomicUsize::new(0));
        let mut host = host(&notified);

        host.engine_mut()
            .apply(FieldEvent::set_scalar("transactionId", "TX999"));
        let committed = host.submit();

        assert_eq!(notified.load(Ordering::SeqCst), 1);
        assert_eq!(host.committed(), Some(committed));

        let output = host.get_outputs().output.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["transactionId"], "TX999");
        assert_eq!(parsed["amount"], 100);
        assert_eq!(parsed["transactionType"], serde_json::json!(["Credit"]));
    }

    #[tokio::test]
    async fn submits_from_the_engine_reach_the_host() {
        let notified = Arc::new(AtomicUsize::new(0));
        let mut host = host(&notified);

        host.engine_mut().apply(FieldEvent::set_scalar("amount", "7"));
        host.engine_mut().submit();

        assert_eq!(notified.load(Ordering::SeqCst), 1);
        let output = host.get_outputs().output.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["amount"], "7");
    }

    #[tokio::test]
    async fn update_view_reflects_new_schema_text() {
        let notified = Arc::new(AtomicUsize::new(0));
        let mut host = host(&notified);
        assert_eq!(host.view().widgets.len(), 9);

        let view = host.update_view(r#"{"title": "Short", "fields": [{"type": "text", "name": "amount"}]}"#);
        assert_eq!(view.title.as_deref(), Some("Short"));
        assert_eq!(view.widgets.len(), 1);
    }

    #[tokio::test]
    async fn destroy_tears_down_engine() {
        let notified = Arc::new(AtomicUsize::new(0));
        let mut host = host(&notified);
        host.destroy();
        assert!(!host.engine().is_live());
    }
}
