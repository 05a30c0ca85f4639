//! Configuration Types
//!
//! 定义所有配置结构体

use serde::{Deserialize, Serialize};

use crate::application::ports::ExportFormat;
use crate::domain::manuscript::RuleOverrides;

/// 应用主配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// 解析规则覆盖（缺省的键使用内置默认规则）
    #[serde(default)]
    pub rules: RuleOverrides,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否输出 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LogConfig {
    /// 未设置 RUST_LOG 时使用的过滤指令
    pub fn filter_directive(&self) -> String {
        format!("{},tome={}", self.level, self.level)
    }
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 导出格式
    #[serde(default)]
    pub format: ExportFormat,

    /// 作者
    #[serde(default = "default_author")]
    pub author: String,

    /// 语言
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_author() -> String {
    "Unknown".to_string()
}

fn default_language() -> String {
    "zh-CN".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            author: default_author(),
            language: default_language(),
        }
    }
}
