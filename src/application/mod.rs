//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（解码、读取、进度、导出）
//! - commands: 解析命令及处理器
//! - queries: 导出查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{ParseManuscriptHandler, ParseManuscriptResponse},
    ManuscriptSource, ParseManuscript,
};

pub use error::ApplicationError;

pub use ports::{
    // Exporter
    BookMetadata,
    ExportError,
    ExportFormat,
    ManuscriptExporterPort,
    // Progress
    NoopProgress,
    ProgressPort,
    // Source reader
    SourceError,
    SourceReaderPort,
    // Text decoder
    DecodeError,
    DecodeStrategy,
    DecodedText,
    TextDecoderPort,
};

pub use queries::{
    handlers::{ExportManuscriptHandler, ExportManuscriptResponse},
    ExportManuscript,
};
