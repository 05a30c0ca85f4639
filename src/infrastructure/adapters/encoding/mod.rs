//! Encoding Adapter - 字节解码实现

mod chardet_decoder;

pub use chardet_decoder::{ChardetTextDecoder, DEFAULT_CONFIDENCE_THRESHOLD, FALLBACK_ENCODINGS};
