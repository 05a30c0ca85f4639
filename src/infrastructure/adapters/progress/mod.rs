//! Progress Adapter - 终端进度输出

mod console_progress;

pub use console_progress::ConsoleProgress;
