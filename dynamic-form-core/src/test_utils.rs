//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{FormError, FormResult};
use crate::services::OptionsFetcher;

// ===== MockOptionsFetcher =====

/// 按地址返回预设结果的选项来源；未登记的地址返回网络错误
pub struct MockOptionsFetcher {
    responses: HashMap<String, FormResult<Vec<String>>>,
    calls: AtomicUsize,
}

impl MockOptionsFetcher {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
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

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OptionsFetcher for MockOptionsFetcher {
    async fn fetch(&self, url: &str) -> FormResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FormError::Network(format!("no route to {url}"))))
    }
}

/// 测试用 schema：覆盖全部九种字段类型
pub const TRANSACTION_SCHEMA: &str = r#"{
    "title": "Transaction Form",
    "fields": [
        {"type": "text", "label": "Transaction ID", "name": "transactionId", "value": "TX12345", "required": true},
        {"type": "number", "label": "Amount", "name": "amount", "value": 100},
        {"type": "date", "label": "Transaction Date", "name": "transactionDate", "value": "2024-09-05"},
        {"type": "time", "label": "Transaction Time", "name": "timeDate", "value": "10:30"},
        {"type": "checkbox-group", "label": "Transaction Type", "name": "transactionType", "options": ["Credit", "Debit"], "value": ["Credit"]},
        {"type": "dropdown", "label": "Shop Location", "name": "shopLocation", "options": ["Location 1", "Location 2"], "value": "Location 2"},
        {"type": "radio-group", "label": "Payment Method", "name": "paymentMethod", "options": ["Credit Card", "Cash"], "value": "Credit Card"},
        {"type": "instruction", "data": ["Check the date", "Confirm the amount"]},
        {"type": "table", "label": "Transaction Details", "name": "transactionDetails", "columns": ["Date", "Amount"], "data": [{"Date": "2024-09-01", "Amount": 100}, {"Date": "2024-09-02"}]}
    ]
}"#;
