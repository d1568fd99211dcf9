//! 日志初始化
//!
//! 终端被 TUI 占用，日志只能写入文件。过滤规则取自 `RUST_LOG`，缺省为 `info`。

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// 初始化文件日志
pub fn init_logging(log_file: &Path) -> Result<()> {
    if let Some(dir) = log_file.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Logger already initialized")?;

    Ok(())
}
