//!
//! src/backend/mod.rs
//! Backend 层：启动时需要的外部资源
//!
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件读写（<config_dir>/dynamic-form-tui/config.json）
//!         mod schema_source;      // schema 文本来源（文件或内置演示表单）
//!
//! 表单本身的状态与远程选项拉取都在 dynamic-form-core 中，
//! 这一层只负责把配置与 schema 文本交给 main.rs。
//!

mod config_service;
mod schema_source;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use schema_source::load_schema_text;
