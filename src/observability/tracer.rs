//! Tracer provider backed by a JSON-lines span exporter.

use super::file_writer::RotatingWriter;
use super::record::SpanRecord;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes every finished span as one [`SpanRecord`] line.
struct JsonLinesExporter {
    service: String,
    writer: RotatingWriter,
    is_shutdown: bool,
}

impl JsonLinesExporter {
    fn export_batch(&self, batch: &[SpanData]) -> Result<(), TraceError> {
        for span in batch {
            let record = SpanRecord::from_span(&self.service, span);
            let line = serde_json::to_string(&record).map_err(|e| TraceError::from(e.to_string()))?;
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.export_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, res: &Resource) {
        if let Some(name) = res.get(opentelemetry::Key::from_static_str("service.name")) {
            self.service = name.to_string();
        }
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("service", &self.service)
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a provider that exports each span synchronously as it closes.
///
/// The plugin runs single-threaded under WASI, so the simple (non-batching)
/// span processor is used.
pub fn create_tracer_provider(file_path: PathBuf, service: &str, resource: Resource) -> TracerProvider {
    let exporter = JsonLinesExporter {
        service: service.to_string(),
        writer: RotatingWriter::new(file_path),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
