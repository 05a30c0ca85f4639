//! Manuscript Exporter Port - 结构导出抽象
//!
//! 将解析得到的卷列表与书籍元数据渲染为文本输出

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::manuscript::Volume;

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// 卷/章标题树
    #[default]
    Outline,
    Json,
    Html,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Outline => write!(f, "outline"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outline" => Ok(ExportFormat::Outline),
            "json" => Ok(ExportFormat::Json),
            "html" => Ok(ExportFormat::Html),
            _ => Err(format!("unknown export format: {}", s)),
        }
    }
}

/// 书籍元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
    pub language: String,
    /// `urn:uuid:<v4>`
    pub identifier: String,
}

impl BookMetadata {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            language: language.into(),
            identifier: format!("urn:uuid:{}", Uuid::new_v4()),
        }
    }
}

/// Manuscript Exporter Port
pub trait ManuscriptExporterPort: Send + Sync {
    fn format(&self) -> ExportFormat;

    /// volumes 应已分配阅读顺序
    fn export(&self, metadata: &BookMetadata, volumes: &[Volume]) -> Result<String, ExportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_parse() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::Html.to_string(), "html");
        assert!("epub".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::default(), ExportFormat::Outline);
    }

    #[test]
    fn test_metadata_identifier() {
        let metadata = BookMetadata::new("书名", "Unknown", "zh-CN");
        let uuid = metadata.identifier.strip_prefix("urn:uuid:").unwrap();
        assert!(Uuid::parse_str(uuid).is_ok());
        assert_ne!(metadata.identifier, BookMetadata::new("书名", "Unknown", "zh-CN").identifier);
    }
}
