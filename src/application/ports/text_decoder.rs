//! Text Decoder Port - 字节解码抽象
//!
//! 将原始字节还原为文本：置信度检测 → 固定回退链 → 有损解码

use thiserror::Error;

/// 解码错误
///
/// 有损解码总能成功，此错误仅为保留类型
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("所有编码均解码失败: {0}")]
    Exhausted(String),
}

/// 最终采用的解码策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    /// 统计检测结果（置信度足够且可解码）
    Detected,
    /// 回退链中第一个可解码的编码
    Fallback,
    /// UTF-8 有损解码
    Lossy,
}

impl std::fmt::Display for DecodeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeStrategy::Detected => write!(f, "detected"),
            DecodeStrategy::Fallback => write!(f, "fallback"),
            DecodeStrategy::Lossy => write!(f, "lossy"),
        }
    }
}

/// 解码结果
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    /// 采用的编码名称
    pub encoding: String,
    pub strategy: DecodeStrategy,
}

/// Text Decoder Port
pub trait TextDecoderPort: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedText, DecodeError>;
}
