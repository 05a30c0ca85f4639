//! 应用层 - 命令
//!
//! 解析文稿：字节/路径 → 卷列表

mod manuscript_commands;

pub mod handlers;

pub use manuscript_commands::*;
