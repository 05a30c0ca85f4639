//! Query Handlers 实现

mod export_handlers;

pub use export_handlers::*;
