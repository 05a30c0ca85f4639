//! Progress Port - 进度报告抽象
//!
//! 仅作观察者，不影响解析结果

/// Progress Port
pub trait ProgressPort: Send + Sync {
    fn start(&self, total: u64, label: &str);

    fn advance(&self, delta: u64);

    fn finish(&self, message: &str);
}

/// 不输出任何进度
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressPort for NoopProgress {
    fn start(&self, _total: u64, _label: &str) {}

    fn advance(&self, _delta: u64) {}

    fn finish(&self, _message: &str) {}
}
