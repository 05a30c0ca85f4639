//! Chardet Text Decoder - 编码检测与解码
//!
//! 实现 TextDecoderPort trait:
//! 1. chardet 统计检测，置信度超过阈值且能严格解码即采用
//! 2. 按固定顺序尝试 utf-8 / gbk / gb2312 / big5 / utf-16
//! 3. UTF-8 有损解码，不会失败

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

use crate::application::ports::{DecodeError, DecodeStrategy, DecodedText, TextDecoderPort};

/// 检测结果被采用的最低置信度（不含）
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.7;

/// 回退链，按顺序尝试
pub const FALLBACK_ENCODINGS: [&str; 5] = ["utf-8", "gbk", "gb2312", "big5", "utf-16"];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// 基于 chardet + encoding_rs 的解码器
#[derive(Debug, Clone)]
pub struct ChardetTextDecoder {
    threshold: f32,
}

impl Default for ChardetTextDecoder {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl ChardetTextDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self { threshold }
    }

    /// 统计检测并严格解码
    fn try_detected(&self, bytes: &[u8]) -> Option<DecodedText> {
        if bytes.is_empty() {
            return None;
        }

        let (charset, confidence, _language) = chardet::detect(&bytes.to_vec());
        let label = chardet::charset2encoding(&charset);

        tracing::debug!(
            charset = %charset,
            label = %label,
            confidence = confidence,
            "Encoding detected"
        );

        if confidence <= self.threshold {
            return None;
        }

        let (text, encoding) = decode_strict(label, bytes)?;
        Some(DecodedText {
            text,
            encoding: encoding.name().to_string(),
            strategy: DecodeStrategy::Detected,
        })
    }
}

impl TextDecoderPort for ChardetTextDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedText, DecodeError> {
        if let Some(decoded) = self.try_detected(bytes) {
            return Ok(decoded);
        }

        if let Some((text, encoding)) = decode_fallback_chain(bytes) {
            tracing::debug!(encoding = encoding.name(), "Decoded via fallback chain");
            return Ok(DecodedText {
                text,
                encoding: encoding.name().to_string(),
                strategy: DecodeStrategy::Fallback,
            });
        }

        tracing::warn!(size = bytes.len(), "All encodings failed, decoding lossily");
        Ok(DecodedText {
            text: decode_lossy(bytes),
            encoding: UTF_8.name().to_string(),
            strategy: DecodeStrategy::Lossy,
        })
    }
}

/// 回退链中第一个能严格解码的编码
fn decode_fallback_chain(bytes: &[u8]) -> Option<(String, &'static Encoding)> {
    FALLBACK_ENCODINGS
        .iter()
        .find_map(|label| decode_strict(label, bytes))
}

/// 按标签严格解码，遇到非法序列返回 None
///
/// UTF-8 去除 BOM；UTF-16 按 BOM 判断字节序，无 BOM 时按小端
fn decode_strict(label: &str, bytes: &[u8]) -> Option<(String, &'static Encoding)> {
    let encoding = Encoding::for_label(label.as_bytes())?;

    let (encoding, body) = if encoding == UTF_8 {
        (UTF_8, bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes))
    } else if encoding == UTF_16LE || encoding == UTF_16BE {
        match Encoding::for_bom(bytes) {
            Some((bom_encoding, bom_len)) if bom_encoding != UTF_8 => (bom_encoding, &bytes[bom_len..]),
            _ => (UTF_16LE, bytes),
        }
    } else {
        (encoding, bytes)
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| (text.into_owned(), encoding))
}

fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
