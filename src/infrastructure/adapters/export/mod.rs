//! Export Adapter - 结构导出实现

mod html_exporter;
mod json_exporter;
mod outline_exporter;

pub use html_exporter::HtmlExporter;
pub use json_exporter::JsonExporter;
pub use outline_exporter::OutlineExporter;

use std::sync::Arc;

use crate::application::ports::ManuscriptExporterPort;

/// 全部内置导出器
pub fn default_exporters() -> Vec<Arc<dyn ManuscriptExporterPort>> {
    vec![
        Arc::new(OutlineExporter::new()),
        Arc::new(JsonExporter::new()),
        Arc::new(HtmlExporter::new()),
    ]
}
