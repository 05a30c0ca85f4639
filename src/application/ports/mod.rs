//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod exporter;
mod progress;
mod source_reader;
mod text_decoder;

pub use exporter::{BookMetadata, ExportError, ExportFormat, ManuscriptExporterPort};
pub use progress::{NoopProgress, ProgressPort};
pub use source_reader::{SourceError, SourceReaderPort};
pub use text_decoder::{DecodeError, DecodeStrategy, DecodedText, TextDecoderPort};
