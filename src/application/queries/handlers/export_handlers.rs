//! Export Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ExportFormat, ManuscriptExporterPort};
use crate::application::queries::ExportManuscript;
use crate::domain::manuscript::assign_reading_order;

/// 导出响应
#[derive(Debug, Clone)]
pub struct ExportManuscriptResponse {
    pub format: ExportFormat,
    pub content: String,
}

/// ExportManuscript Handler
///
/// 按格式选择导出器；导出前为卷和章节分配阅读顺序
pub struct ExportManuscriptHandler {
    exporters: Vec<Arc<dyn ManuscriptExporterPort>>,
}

impl ExportManuscriptHandler {
    pub fn new(exporters: Vec<Arc<dyn ManuscriptExporterPort>>) -> Self {
        Self { exporters }
    }

    pub fn supported_formats(&self) -> Vec<ExportFormat> {
        self.exporters.iter().map(|e| e.format()).collect()
    }

    pub fn handle(&self, query: ExportManuscript) -> Result<ExportManuscriptResponse, ApplicationError> {
        let exporter = self
            .exporters
            .iter()
            .find(|e| e.format() == query.format)
            .ok_or_else(|| {
                ApplicationError::ExportFailed(format!("no exporter for format: {}", query.format))
            })?;

        let mut volumes = query.volumes;
        assign_reading_order(&mut volumes);

        let content = exporter.export(&query.metadata, &volumes)?;

        tracing::debug!(
            format = %query.format,
            volumes = volumes.len(),
            bytes = content.len(),
            "Manuscript exported"
        );

        Ok(ExportManuscriptResponse {
            format: query.format,
            content,
        })
    }
}
