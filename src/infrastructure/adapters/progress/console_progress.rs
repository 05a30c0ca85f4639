//! Console Progress - 终端进度条
//!
//! 实现 ProgressPort trait，输出到 stderr

use indicatif::{ProgressBar, ProgressStyle};

use crate::application::ports::ProgressPort;

const TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {pos}/{len} 行 ({elapsed})";

/// indicatif 进度条
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        let bar = ProgressBar::new(0);
        bar.set_style(style);
        Self { bar }
    }

    /// 不绘制的进度条，用于非终端环境
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressPort for ConsoleProgress {
    fn start(&self, total: u64, label: &str) {
        self.bar.set_length(total);
        self.bar.set_position(0);
        self.bar.set_message(label.to_string());
    }

    fn advance(&self, delta: u64) {
        self.bar.inc(delta);
    }

    fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
