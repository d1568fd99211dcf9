//! Dynamic Form TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与 schema 来源 (`backend/`)
//!
//!
//! main.rs 的执行顺序：
//!
//!     LocalConfigService::load()    // 读取 <config_dir>/dynamic-form-tui/config.json
//!     init_logging()                // 日志写入文件，终端留给 TUI
//!     load_schema_text()            // 命令行参数 > 配置 > 内置演示表单
//!     FormHost::init()              // 挂载表单，远程选项开始拉取
//!     init_terminal()               // 原始模式 + 备用屏幕
//!     app::run()                    // 主循环，直到提交或关闭
//!     app::shutdown()               // 销毁表单，并恢复终端（无论成功与否）
//!     println!(output)              // 提交过才打印 JSON
//!
//! 用法：`dynamic-form-tui [SCHEMA_PATH]`

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use dynamic_form_core::{FormHost, HttpOptionsFetcher};

use backend::{ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;
    init_logging(&config_service.log_path(&config))?;
    if !config_service.config_path().exists() {
        // 首次运行时写出默认配置，方便用户修改
        if let Err(e) = config_service.save(&config) {
            log::warn!("Failed to write default config: {e:#}");
        }
    }
    view::theme::set_theme(config.theme);

    // 2. 读取 schema
    let schema_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.schema_path.clone());
    let raw = backend::load_schema_text(schema_path.as_deref())?;

    // 3. 挂载表单（远程选项在后台运行时上拉取）
    let runtime = tokio::runtime::Runtime::new()?;
    let host = FormHost::init(
        &raw,
        || log::debug!("Form output changed"),
        Arc::new(HttpOptionsFetcher::new()),
        runtime.handle(),
    );
    let mut app = model::App::new(host);

    // 4. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 5. 销毁表单并恢复终端（无论成功失败都执行）
    app::shutdown(&mut app, || restore_terminal(&mut terminal))?;
    result?;

    // 6. 输出提交结果
    log::info!("Form finished: {:?}", app.outcome);
    if let Some(output) = app.host.get_outputs().output {
        println!("{output}");
    }

    Ok(())
}
