//! Export Queries

use crate::application::ports::{BookMetadata, ExportFormat};
use crate::domain::manuscript::Volume;

/// 导出已解析的结构
#[derive(Debug, Clone)]
pub struct ExportManuscript {
    pub volumes: Vec<Volume>,
    pub metadata: BookMetadata,
    pub format: ExportFormat,
}
