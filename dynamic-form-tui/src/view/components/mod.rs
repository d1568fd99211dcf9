//! UI 组件

pub mod field;
pub mod group;
pub mod help;
pub mod statusbar;
