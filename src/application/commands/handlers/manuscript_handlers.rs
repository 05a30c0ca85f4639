//! Manuscript Command Handlers

use std::sync::Arc;

use crate::application::commands::{ManuscriptSource, ParseManuscript};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    NoopProgress, ProgressPort, SourceReaderPort, TextDecoderPort,
};
use crate::domain::manuscript::{ManuscriptParser, ParserRules, StructureBuilder, Volume};

// ============================================================================
// ParseManuscript
// ============================================================================

/// 解析响应
#[derive(Debug, Clone)]
pub struct ParseManuscriptResponse {
    pub volumes: Vec<Volume>,
    /// 实际采用的编码
    pub encoding: String,
    /// 物理行数
    pub line_count: usize,
}

impl ParseManuscriptResponse {
    pub fn chapter_count(&self) -> usize {
        self.volumes.iter().map(Volume::chapter_count).sum()
    }
}

/// ParseManuscript Handler
///
/// 读取 → 解码 → 逐行累加 → 组装。
/// 除 NoSegmentsFound 外，读取与切分中的错误统一包装为 ParseFailed
pub struct ParseManuscriptHandler {
    reader: Arc<dyn SourceReaderPort>,
    decoder: Arc<dyn TextDecoderPort>,
    progress: Arc<dyn ProgressPort>,
}

impl ParseManuscriptHandler {
    pub fn new(reader: Arc<dyn SourceReaderPort>, decoder: Arc<dyn TextDecoderPort>) -> Self {
        Self {
            reader,
            decoder,
            progress: Arc::new(NoopProgress),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressPort>) -> Self {
        self.progress = progress;
        self
    }

    pub fn handle(&self, command: ParseManuscript) -> Result<ParseManuscriptResponse, ApplicationError> {
        let bytes = match command.source {
            ManuscriptSource::Bytes(bytes) => bytes,
            ManuscriptSource::Path(path) => {
                tracing::debug!(path = %path.display(), "Reading manuscript");
                self.reader
                    .read(&path)
                    .map_err(|e| ApplicationError::parse_failed("read", e))?
            }
        };

        let decoded = self.decoder.decode(&bytes)?;
        tracing::info!(
            bytes = bytes.len(),
            encoding = %decoded.encoding,
            strategy = %decoded.strategy,
            "Manuscript decoded"
        );

        // 每次调用按默认值叠加覆盖，构造独立的规则集
        let rules = ParserRules::from_overrides(command.overrides.as_ref());
        let parser = ManuscriptParser::new(&rules)
            .map_err(|e| ApplicationError::from_manuscript("rules", e))?;

        let lines: Vec<&str> = decoded.text.split('\n').collect();
        let line_count = lines.len();

        self.progress.start(line_count as u64, "解析章节");
        let mut accumulator = parser.accumulator();
        for line in lines {
            accumulator.push_line(line);
            self.progress.advance(1);
        }

        let segments = match accumulator.finish() {
            Ok(segments) => segments,
            Err(e) => {
                self.progress.finish("未找到章节");
                tracing::warn!(line_count = line_count, "No segments found");
                return Err(ApplicationError::from_manuscript("segment", e));
            }
        };
        let segment_count = segments.len();

        let structure = StructureBuilder::assemble(segments);
        if !structure.orphaned.is_empty() {
            tracing::warn!(
                dropped = structure.orphaned.len(),
                titles = ?structure.orphaned,
                "Chapters before the first volume were dropped"
            );
        }

        let response = ParseManuscriptResponse {
            volumes: structure.volumes,
            encoding: decoded.encoding,
            line_count,
        };

        self.progress.finish("解析完成");
        tracing::info!(
            line_count = line_count,
            segments = segment_count,
            volumes = response.volumes.len(),
            chapters = response.chapter_count(),
            nested = structure.nested,
            "Manuscript parsed"
        );

        Ok(response)
    }
}
