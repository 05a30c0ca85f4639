//! Manuscript Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManuscriptError {
    #[error("未能在文件中找到任何章节。请检查文件内容或正则表达式配置。")]
    NoSegmentsFound,

    #[error("无效的正则表达式 `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
