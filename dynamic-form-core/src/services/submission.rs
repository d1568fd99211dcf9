//! 提交控制
//!
//! 两个转换：
//! - Submit：草稿拍快照，同步交给外部提交回调。这是数据离开引擎的唯一路径。
//! - Close：不丢弃草稿，只记录诊断并通知外部关闭回调（默认未注册）。
//!
//! 没有中间的 "dirty" / "validating" 状态，`required` 也不参与判断。

use super::draft_state::{CommittedState, DraftState};

/// 提交回调
pub type SubmitCallback = Box<dyn FnMut(&CommittedState) + Send>;

/// 关闭回调
pub type CloseCallback = Box<dyn FnMut() + Send>;

/// 提交控制器
#[derive(Default)]
pub struct SubmissionController {
    on_submit: Option<SubmitCallback>,
    on_close: Option<CloseCallback>,
    submit_count: usize,
}

impl SubmissionController {
    /// 创建未注册任何回调的控制器
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册提交回调（替换已有回调）
    pub fn on_submit(&mut self, callback: impl FnMut(&CommittedState) + Send + 'static) {
        self.on_submit = Some(Box::new(callback));
    }

    /// 注册关闭回调（替换已有回调）
    pub fn on_close(&mut self, callback: impl FnMut() + Send + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    /// 提交：生成快照并同步通知外部
    pub fn submit(&mut self, draft: &DraftState) -> CommittedState {
        let committed = draft.commit();
        self.submit_count += 1;
        log::info!(
            "Form submitted ({} field(s), submission #{})",
            committed.len(),
            self.submit_count
        );

        if let Some(callback) = self.on_submit.as_mut() {
            callback(&committed);
        } else {
            log::debug!("No submit callback registered");
        }

        committed
    }

    /// 关闭：草稿保持原样
    pub fn close(&mut self) {
        log::info!("Close");
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    /// 已提交次数
    pub fn submit_count(&self) -> usize {
        self.submit_count
    }
}
