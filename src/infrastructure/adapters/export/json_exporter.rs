//! JSON Exporter

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ports::{BookMetadata, ExportError, ExportFormat, ManuscriptExporterPort};
use crate::domain::manuscript::Volume;

#[derive(Serialize)]
struct JsonDocument<'a> {
    metadata: &'a BookMetadata,
    generated_at: DateTime<Utc>,
    volumes: &'a [Volume],
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ManuscriptExporterPort for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn export(&self, metadata: &BookMetadata, volumes: &[Volume]) -> Result<String, ExportError> {
        let document = JsonDocument {
            metadata,
            generated_at: Utc::now(),
            volumes,
        };
        serde_json::to_string_pretty(&document).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}
