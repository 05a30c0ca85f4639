//! 应用层 - 查询（读操作）
//!
//! 将解析结果渲染为各种输出格式

mod export_queries;

pub mod handlers;

pub use export_queries::*;
