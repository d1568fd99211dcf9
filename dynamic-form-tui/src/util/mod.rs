//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与表单逻辑无关的基础设施代码：
//!
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（终端被 TUI 占用，日志不能写 stderr）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     初始化终端：
//!         · enable_raw_mode()
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显，捕获 Ctrl+C、箭头键等特殊键
//!         · EnterAlternateScreen
//!             - TUI 在备用屏幕运行，退出后主屏幕内容原样恢复
//!         · panic hook
//!             - panic 时先恢复终端，保证错误信息可见
//!
//!     恢复终端：
//!         无论 app::run 成功与否，main 都会先调用 restore_terminal()，
//!         之后才把提交结果打印到 stdout。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
