//! Source Reader Port - 输入读取抽象

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("文件不存在: {0}")]
    NotFound(PathBuf),

    #[error("读取文件失败 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Source Reader Port
///
/// 一次性读取整个输入
pub trait SourceReaderPort: Send + Sync {
    fn read(&self, path: &Path) -> Result<Vec<u8>, SourceError>;
}
