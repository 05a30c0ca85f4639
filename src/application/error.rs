//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{DecodeError, ExportError};
use crate::domain::manuscript::ManuscriptError;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 没有形成任何章节，原样上抛不做包装
    #[error("未能在文件中找到任何章节。请检查文件内容或正则表达式配置。")]
    NoSegmentsFound,

    /// 解码失败（保留类型，有损解码总会成功）
    #[error("Decode exhausted: {0}")]
    DecodeExhausted(String),

    /// 读取或切分过程中的其它失败，保留原始错误
    #[error("解析文件时发生错误 ({origin}): {source}")]
    ParseFailed {
        origin: &'static str,
        #[source]
        source: BoxedError,
    },

    /// 导出错误
    #[error("Export error: {0}")]
    ExportFailed(String),
}

impl ApplicationError {
    /// 包装读取/切分阶段的错误
    pub fn parse_failed(origin: &'static str, source: impl Into<BoxedError>) -> Self {
        Self::ParseFailed {
            origin,
            source: source.into(),
        }
    }

    /// 领域错误：NoSegmentsFound 直接透传，其余包装
    pub fn from_manuscript(origin: &'static str, err: ManuscriptError) -> Self {
        match err {
            ManuscriptError::NoSegmentsFound => Self::NoSegmentsFound,
            other => Self::parse_failed(origin, other),
        }
    }

    pub fn is_no_segments(&self) -> bool {
        matches!(self, Self::NoSegmentsFound)
    }
}

impl From<DecodeError> for ApplicationError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Exhausted(message) => Self::DecodeExhausted(message),
        }
    }
}

impl From<ExportError> for ApplicationError {
    fn from(err: ExportError) -> Self {
        Self::ExportFailed(err.to_string())
    }
}
