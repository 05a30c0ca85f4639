//! Outline Exporter - 卷/章标题树
//!
//! 扁平结构不输出卷标题行，章节直接列在顶层

use std::fmt::Write;

use crate::application::ports::{BookMetadata, ExportError, ExportFormat, ManuscriptExporterPort};
use crate::domain::manuscript::{Chapter, Volume};

#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineExporter;

impl OutlineExporter {
    pub fn new() -> Self {
        Self
    }

    fn write_outline(
        out: &mut String,
        metadata: &BookMetadata,
        volumes: &[Volume],
    ) -> std::fmt::Result {
        writeln!(out, "{}", metadata.title)?;
        writeln!(out, "作者: {}  语言: {}", metadata.author, metadata.language)?;

        for volume in volumes {
            writeln!(out)?;
            match volume.title() {
                Some(title) => {
                    writeln!(out, "[{}] {}", display_order(volume.order()), title)?;
                    for chapter in volume.chapters() {
                        write_chapter(out, "  ", chapter)?;
                    }
                }
                None => {
                    for chapter in volume.chapters() {
                        write_chapter(out, "", chapter)?;
                    }
                }
            }
        }

        let chapters: usize = volumes.iter().map(Volume::chapter_count).sum();
        writeln!(out)?;
        writeln!(out, "共 {} 卷 {} 章", volumes.len(), chapters)
    }
}

fn write_chapter(out: &mut String, indent: &str, chapter: &Chapter) -> std::fmt::Result {
    writeln!(
        out,
        "{}{}. {} ({}, {} 字)",
        indent,
        display_order(chapter.order()),
        chapter.title(),
        chapter.content_type(),
        chapter.char_count()
    )
}

fn display_order(order: Option<u32>) -> String {
    order.map(|o| o.to_string()).unwrap_or_else(|| "-".to_string())
}

impl ManuscriptExporterPort for OutlineExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Outline
    }

    fn export(&self, metadata: &BookMetadata, volumes: &[Volume]) -> Result<String, ExportError> {
        let mut out = String::new();
        Self::write_outline(&mut out, metadata, volumes)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manuscript::{assign_reading_order, ManuscriptParser, ParserRules};

    fn export(text: &str) -> String {
        let parser = ManuscriptParser::new(&ParserRules::default()).unwrap();
        let mut volumes = parser.parse_text(text).unwrap();
        assign_reading_order(&mut volumes);
        let metadata = BookMetadata::new("测试之书", "Unknown", "zh-CN");
        OutlineExporter::new().export(&metadata, &volumes).unwrap()
    }

    #[test]
    fn test_nested_outline() {
        let out = export("第一卷 相遇\n正文\n第1章 初遇\n内容一\n后记\n完");

        assert!(out.starts_with("测试之书\n"));
        assert!(out.contains("[1] 第一卷 相遇\n  1. 第一卷 相遇 (chapter, 2 字)\n  2. 第1章 初遇 (chapter, 3 字)\n"));
        assert!(out.contains("[2] 后记\n  3. 后记 (postscript, 1 字)\n"));
        assert!(out.ends_with("共 2 卷 3 章\n"));
    }

    #[test]
    fn test_flat_outline_has_no_volume_header() {
        let out = export("第1章 初遇\n内容一\n第2章 发展\n内容二");

        assert!(!out.contains('['));
        assert!(out.contains("\n1. 第1章 初遇 (chapter, 3 字)\n2. 第2章 发展 (chapter, 3 字)\n"));
        assert!(out.ends_with("共 1 卷 2 章\n"));
    }
}
