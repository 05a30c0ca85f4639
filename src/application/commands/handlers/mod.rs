//! Command Handlers 实现

mod manuscript_handlers;

pub use manuscript_handlers::*;
