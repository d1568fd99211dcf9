//! 远程选项解析
//!
//! 每个声明了 `apiUrl` 的字段在挂载时各自启动一个拉取任务，互不等待。
//! 任务结果通过通道回到引擎所在线程，由 [`OptionResolver::poll`] 写入选项缓存，
//! 因此缓存本身不需要加锁。拉取失败只记录日志，对应下拉框保持无选项。

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use crate::error::{FormError, FormResult};
use crate::types::{scalar_to_string, FormSchema};

/// 选项缓存：字段名 → 最近一次成功解析的选项列表
pub type OptionsCache = HashMap<String, Vec<String>>;

/// 选项来源抽象
///
/// 生产实现为 [`HttpOptionsFetcher`]；测试中可注入脚本化的实现。
#[async_trait]
pub trait OptionsFetcher: Send + Sync {
    /// 拉取一个地址的选项列表
    async fn fetch(&self, url: &str) -> FormResult<Vec<String>>;
}

/// Shared HTTP client for option endpoints.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// 基于 HTTP GET 的选项来源（不重试、不设超时）
#[derive(Clone)]
pub struct HttpOptionsFetcher {
    client: reqwest::Client,
}

impl HttpOptionsFetcher {
    /// 使用共享客户端
    pub fn new() -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
        }
    }

    /// 使用指定客户端
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpOptionsFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OptionsFetcher for HttpOptionsFetcher {
    async fn fetch(&self, url: &str) -> FormResult<Vec<String>> {
        log::debug!("[Options] GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FormError::Network(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FormError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| FormError::Decode(format!("Failed to parse response: {e}")))?;

        decode_options(&body)
    }
}

/// 把响应体解码为选项列表
///
/// 只接受 JSON 数组；字符串原样保留，数字与布尔值转为文本，其他元素视为解码失败。
pub fn decode_options(body: &Value) -> FormResult<Vec<String>> {
    let Value::Array(items) = body else {
        return Err(FormError::Decode(
            "expected a JSON array of option values".to_string(),
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            scalar_to_string(item)
                .ok_or_else(|| FormError::Decode(format!("option #{i} is not a scalar: {item}")))
        })
        .collect()
}

/// 单个拉取任务的结果
#[derive(Debug)]
struct OptionsUpdate {
    key: String,
    result: FormResult<Vec<String>>,
}

/// 拉取任务的回报句柄
///
/// 正常路径由 [`TaskReport::send`] 回报；任务在回报前 panic 或被中止时，
/// `Drop` 补发一条失败结果，保证每个任务恰好回报一次，`settle` 不会悬挂。
struct TaskReport {
    key: String,
    tx: UnboundedSender<OptionsUpdate>,
    liveness: CancellationToken,
    sent: bool,
}

impl TaskReport {
    fn send(mut self, result: FormResult<Vec<String>>) {
        self.sent = true;

        if let Err(ref e) = result {
            if e.is_expected() {
                log::warn!("Failed to fetch options for {}: {e}", self.key);
            } else {
                log::error!("Failed to fetch options for {}: {e}", self.key);
            }
        }

        if self.liveness.is_cancelled() {
            log::debug!("Discarding options for {}: form already torn down", self.key);
            return;
        }

        // 接收端已释放时发送失败，结果无处可写，忽略即可
        let _ = self.tx.send(OptionsUpdate {
            key: self.key.clone(),
            result,
        });
    }
}

impl Drop for TaskReport {
    fn drop(&mut self) {
        if self.sent {
            return;
        }
        log::error!("Options task for {} ended without a result", self.key);
        let _ = self.tx.send(OptionsUpdate {
            key: std::mem::take(&mut self.key),
            result: Err(FormError::Task("fetch did not complete".to_string())),
        });
    }
}

/// 选项解析器
///
/// 持有选项缓存与存活令牌。令牌取消后（引擎销毁），迟到的结果被丢弃。
pub struct OptionResolver {
    cache: OptionsCache,
    tx: UnboundedSender<OptionsUpdate>,
    rx: UnboundedReceiver<OptionsUpdate>,
    pending: usize,
    liveness: CancellationToken,
}

impl OptionResolver {
    /// 创建空解析器
    pub fn new() -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            cache: OptionsCache::new(),
            tx,
            rx,
            pending: 0,
            liveness: CancellationToken::new(),
        }
    }

    /// 为 schema 中每个声明了远程选项的字段启动一个拉取任务，返回任务数
    pub fn spawn_all(
        &mut self,
        handle: &Handle,
        fetcher: &Arc<dyn OptionsFetcher>,
        schema: &FormSchema,
    ) -> usize {
        let mut spawned = 0;
        for (key, url) in schema.option_sources() {
            self.spawn(handle, Arc::clone(fetcher), key, url);
            spawned += 1;
        }
        spawned
    }

    /// 启动一个拉取任务
    pub fn spawn(&mut self, handle: &Handle, fetcher: Arc<dyn OptionsFetcher>, key: &str, url: &str) {
        let tx = self.tx.clone();
        let liveness = self.liveness.clone();
        let key = key.to_string();
        let url = url.to_string();
        self.pending += 1;

        handle.spawn(async move {
            let report = TaskReport {
                key,
                tx,
                liveness,
                sent: false,
            };
            let result = fetcher.fetch(&url).await;
            report.send(result);
        });
    }

    /// 取出已完成的结果并写入缓存，返回成功写入的条目数
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.rx.try_recv() {
            if self.apply(update) {
                applied += 1;
            }
        }
        applied
    }

    /// 等待所有未完成的拉取任务回报
    pub async fn settle(&mut self) {
        while self.pending > 0 && !self.liveness.is_cancelled() {
            match self.rx.recv().await {
                Some(update) => {
                    self.apply(update);
                }
                None => break,
            }
        }
    }

    fn apply(&mut self, update: OptionsUpdate) -> bool {
        self.pending = self.pending.saturating_sub(1);

        if self.liveness.is_cancelled() {
            return false;
        }

        match update.result {
            Ok(options) => {
                log::debug!(
                    "Resolved {} option(s) for {}",
                    options.len(),
                    update.key
                );
                self.cache.insert(update.key, options);
                true
            }
            Err(_) => false,
        }
    }

    /// 某字段的远程选项（未解析或失败时为 `None`）
    pub fn options(&self, key: &str) -> Option<&[String]> {
        self.cache.get(key).map(Vec::as_slice)
    }

    /// 整个选项缓存
    pub fn cache(&self) -> &OptionsCache {
        &self.cache
    }

    /// 尚未回报的任务数
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// 取消存活令牌：之后到达的结果全部丢弃
    pub fn shutdown(&self) {
        self.liveness.cancel();
    }

    /// 是否仍然存活
    pub fn is_live(&self) -> bool {
        !self.liveness.is_cancelled()
    }
}

impl Default for OptionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OptionResolver {
    fn drop(&mut self) {
        self.liveness.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockOptionsFetcher;
    use serde_json::json;

    fn schema_with_sources() -> FormSchema {
        FormSchema::parse(
            r#"{"fields": [
                {"type": "dropdown", "name": "ok", "apiUrl": "mock://ok"},
                {"type": "dropdown", "name": "broken", "apiUrl": "mock://broken"},
                {"type": "dropdown", "name": "static", "options": ["x"]}
            ]}"#,
        )
    }

    #[test]
    fn decode_accepts_scalars() {
        assert_eq!(
            decode_options(&json!(["A", 2, true])).unwrap(),
            vec!["A".to_string(), "2".to_string(), "true".to_string()]
        );
        assert!(decode_options(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_other_shapes() {
        assert!(matches!(
            decode_options(&json!({"options": ["A"]})),
            Err(FormError::Decode(_))
        ));
        assert!(matches!(
            decode_options(&json!(["A", {"label": "B"}])),
            Err(FormError::Decode(_))
        ));
        assert!(matches!(
            decode_options(&json!("A")),
            Err(FormError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn spawns_one_task_per_source() {
        let fetcher = MockOptionsFetcher::new()
            .with_options("mock://ok", &["A", "B"])
            .with_error("mock://broken", FormError::Network("refused".to_string()));
        let mock = Arc::new(fetcher);
        let fetcher: Arc<dyn OptionsFetcher> = mock.clone();

        let mut resolver = OptionResolver::new();
        let spawned = resolver.spawn_all(&Handle::current(), &fetcher, &schema_with_sources());
        assert_eq!(spawned, 2);
        assert_eq!(resolver.pending(), 2);

        resolver.settle().await;

        assert_eq!(resolver.pending(), 0);
        assert_eq!(
            resolver.options("ok"),
            Some(&["A".to_string(), "B".to_string()][..])
        );
        assert_eq!(resolver.options("broken"), None);
        assert_eq!(resolver.options("static"), None);
        assert_eq!(mock.calls(), 2);
    }

    struct PanickingFetcher;

    #[async_trait]
    impl OptionsFetcher for PanickingFetcher {
        async fn fetch(&self, url: &str) -> FormResult<Vec<String>> {
            panic!("fetcher blew up on {url}");
        }
    }

    #[tokio::test]
    async fn settle_returns_when_a_fetch_task_panics() {
        let fetcher: Arc<dyn OptionsFetcher> = Arc::new(PanickingFetcher);
        let mut resolver = OptionResolver::new();
        resolver.spawn(&Handle::current(), fetcher, "shop", "mock://panic");

        resolver.settle().await;

        assert_eq!(resolver.pending(), 0);
        assert_eq!(resolver.options("shop"), None);
        assert!(resolver.is_live());
    }

    #[tokio::test]
    async fn later_result_replaces_entry() {
        let fetcher: Arc<dyn OptionsFetcher> = Arc::new(
            MockOptionsFetcher::new()
                .with_options("mock://one", &["1"])
                .with_options("mock://two", &["2"]),
        );
        let mut resolver = OptionResolver::new();
        resolver.spawn(&Handle::current(), Arc::clone(&fetcher), "f", "mock://one");
        resolver.settle().await;
        resolver.spawn(&Handle::current(), fetcher, "f", "mock://two");
        resolver.settle().await;

        assert_eq!(resolver.options("f"), Some(&["2".to_string()][..]));
    }

    #[tokio::test]
    async fn results_after_shutdown_are_discarded() {
        let fetcher: Arc<dyn OptionsFetcher> =
            Arc::new(MockOptionsFetcher::new().with_options("mock://ok", &["A"]));

        let mut resolver = OptionResolver::new();
        resolver.spawn(&Handle::current(), fetcher, "ok", "mock://ok");
        resolver.shutdown();

        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        assert_eq!(resolver.poll(), 0);
        assert_eq!(resolver.options("ok"), None);
        assert!(!resolver.is_live());

        // settle 在令牌取消后立即返回
        resolver.settle().await;
    }
}
