//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无按键）：
//!
//! loop {
//!
//!     app.host.engine_mut().poll_options()      // 把已完成的远程选项写入缓存
//!     terminal.draw(|f| view::render(&app, f))  // 渲染 UI
//!     if app.should_quit { break }              // 提交或关闭后退出
//!     if let Some(event) = poll_event() {       // 轮询输入，在此最多等待 100ms
//!         let msg = handle_event(event, &app);      // 翻译为消息
//!         update::update(&mut app, msg)             // 更新状态
//!     }
//! }
//!
//! 远程选项的拉取任务跑在 tokio 运行时上，结果经通道送回；
//! 只有这里的 poll_options() 会写选项缓存，所以界面线程无需加锁。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 收取远程选项
        let resolved = app.host.engine_mut().poll_options();
        if resolved > 0 {
            log::debug!("{resolved} option list(s) arrived");
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}

/// 收尾：先销毁表单，再恢复终端；恢复失败也不会跳过销毁
pub fn shutdown(app: &mut App, restore: impl FnOnce() -> Result<()>) -> Result<()> {
    app.host.destroy();
    restore()
}
