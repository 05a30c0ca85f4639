//! Manuscript Commands

use std::path::PathBuf;

use crate::domain::manuscript::RuleOverrides;

/// 待解析的输入
#[derive(Debug, Clone)]
pub enum ManuscriptSource {
    /// 已读入内存的原始字节
    Bytes(Vec<u8>),
    /// 文件路径，由 SourceReaderPort 读取
    Path(PathBuf),
}

impl From<PathBuf> for ManuscriptSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<u8>> for ManuscriptSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// 解析文稿命令
#[derive(Debug, Clone)]
pub struct ParseManuscript {
    pub source: ManuscriptSource,
    /// 部分规则覆盖；None 表示全部使用默认规则
    pub overrides: Option<RuleOverrides>,
}

impl ParseManuscript {
    pub fn new(source: impl Into<ManuscriptSource>) -> Self {
        Self {
            source: source.into(),
            overrides: None,
        }
    }

    pub fn with_overrides(mut self, overrides: RuleOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }
}
