//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dynamic_form_core::{FormEngine, FormError, FormResult, FormSchema, OptionsFetcher};
use tokio::runtime::Handle;
use tokio::sync::Semaphore;

/// 按地址返回预设结果的选项来源
///
/// 可选闸门：开启后每次拉取都要等到测试放行一个许可才返回，
/// 用来观察"结果尚未到达"的中间状态。
pub struct ScriptedFetcher {
    responses: HashMap<String, FormResult<Vec<String>>>,
    gate: Option<Arc<Semaphore>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_options(mut self, url: &str, options: &[&str]) -> Self {
        self.responses.insert(
            url.to_string(),
            Ok(options.iter().map(ToString::to_string).collect()),
        );
        self
    }

    pub fn with_error(mut self, url: &str, err: FormError) -> Self {
        self.responses.insert(url.to_string(), Err(err));
        self
    }

    /// 开启闸门，返回用于放行的信号量
    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OptionsFetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> FormResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FormError::Network(format!("no route to {url}"))))
    }
}

/// 在当前运行时上挂载表单
pub fn mount(raw: &str, fetcher: ScriptedFetcher) -> FormEngine {
    FormEngine::mount(FormSchema::parse(raw), Arc::new(fetcher), &Handle::current())
}

/// 挂载表单，测试保留拉取器以便检查调用次数
pub fn mount_shared(raw: &str, fetcher: &Arc<ScriptedFetcher>) -> FormEngine {
    let fetcher: Arc<dyn OptionsFetcher> = fetcher.clone();
    FormEngine::mount(FormSchema::parse(raw), fetcher, &Handle::current())
}

/// 让出执行权若干次，使已启动的任务有机会运行
pub async fn yield_a_few() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

/// 提交并解析为 JSON
pub fn submit_json(engine: &mut FormEngine) -> serde_json::Value {
    let committed = engine.submit();
    serde_json::from_str(&committed.to_json()).unwrap_or(serde_json::Value::Null)
}
