//! File Source - 文件系统输入读取
//!
//! 实现 SourceReaderPort trait

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::application::ports::{SourceError, SourceReaderPort};

/// 从本地文件读取整个文稿
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSourceReader;

impl FileSourceReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReaderPort for FileSourceReader {
    fn read(&self, path: &Path) -> Result<Vec<u8>, SourceError> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
            _ => SourceError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Read source file");

        Ok(bytes)
    }
}
