//! HTML Exporter
//!
//! 单个 HTML 文档：有标题的卷输出 `<h1>` 卷首，其后是各章节 `<h2>` 与正文段落

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::application::ports::{BookMetadata, ExportError, ExportFormat, ManuscriptExporterPort};
use crate::domain::manuscript::{Chapter, Volume};
use crate::domain::render_paragraphs;

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExporter;

impl HtmlExporter {
    pub fn new() -> Self {
        Self
    }

    fn write_document(
        out: &mut String,
        metadata: &BookMetadata,
        volumes: &[Volume],
    ) -> std::fmt::Result {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(
            out,
            "<html lang=\"{}\">",
            encode_double_quoted_attribute(&metadata.language)
        )?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", encode_text(&metadata.title))?;
        writeln!(
            out,
            "<meta name=\"author\" content=\"{}\">",
            encode_double_quoted_attribute(&metadata.author)
        )?;
        writeln!(
            out,
            "<meta name=\"identifier\" content=\"{}\">",
            encode_double_quoted_attribute(&metadata.identifier)
        )?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;

        for volume in volumes {
            match volume.title() {
                Some(title) => {
                    writeln!(out, "<section class=\"volume\">")?;
                    writeln!(out, "<h1>{}</h1>", encode_text(title))?;
                    for chapter in volume.chapters() {
                        write_chapter(out, chapter)?;
                    }
                    writeln!(out, "</section>")?;
                }
                None => {
                    for chapter in volume.chapters() {
                        write_chapter(out, chapter)?;
                    }
                }
            }
        }

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}

fn write_chapter(out: &mut String, chapter: &Chapter) -> std::fmt::Result {
    writeln!(
        out,
        "<section class=\"chapter\" data-type=\"{}\">",
        chapter.content_type()
    )?;
    writeln!(out, "<h2>{}</h2>", encode_text(chapter.title()))?;
    writeln!(out, "{}", render_paragraphs(chapter.content()))?;
    writeln!(out, "</section>")
}

impl ManuscriptExporterPort for HtmlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn export(&self, metadata: &BookMetadata, volumes: &[Volume]) -> Result<String, ExportError> {
        let mut out = String::new();
        Self::write_document(&mut out, metadata, volumes)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        Ok(out)
    }
}
