//! Tome - 纯文本小说卷/章切分
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Manuscript Context: 行分类、标题清洗、内容类型、片段累加、结构组装
//! - 正文渲染
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TextDecoder, SourceReader, Progress, Exporter）
//! - Commands: 解析命令处理器
//! - Queries: 导出查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 编码检测、文件读取、终端进度条、导出器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

pub use application::{ApplicationError, ManuscriptSource, ParseManuscript, ParseManuscriptHandler};
pub use config::{load_config, AppConfig};
pub use domain::manuscript::{Chapter, ContentType, ParserRules, RuleOverrides, Volume};

use infrastructure::{ChardetTextDecoder, FileSourceReader};

/// 解析文稿：字节或路径 → 卷列表
///
/// 使用文件系统读取与 chardet 编码检测；`overrides` 为 None 时全部使用默认规则
pub fn parse(
    source: impl Into<ManuscriptSource>,
    overrides: Option<RuleOverrides>,
) -> Result<Vec<Volume>, ApplicationError> {
    let handler = ParseManuscriptHandler::new(
        Arc::new(FileSourceReader::new()),
        Arc::new(ChardetTextDecoder::new()),
    );

    let mut command = ParseManuscript::new(source);
    command.overrides = overrides;

    Ok(handler.handle(command)?.volumes)
}
