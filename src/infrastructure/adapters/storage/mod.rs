//! Storage Adapter - 本地文件读取

mod file_source;

pub use file_source::FileSourceReader;
