//! Schema 来源
//!
//! 优先级：命令行参数 > 配置文件中的 `schemaPath` > 内置演示表单。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// 内置演示表单（Transaction Form）
pub const DEMO_SCHEMA: &str = include_str!("demo_schema.json");

/// 读取 schema 原始文本
///
/// 文件内容不做校验：格式错误的 schema 由核心库降级为空表单。
pub fn load_schema_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            log::info!("Loading schema from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read schema file {}", path.display()))
        }
        None => {
            log::info!("No schema path given, using the built-in demo form");
            Ok(DEMO_SCHEMA.to_string())
        }
    }
}
