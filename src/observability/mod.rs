//! OpenTelemetry-based tracing with file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → file
//! ```
//!
//! - **Output**: `~/.local/share/zellij/wp-palette/wp-palette-trace.jsonl`,
//!   one JSON object per finished span
//! - **Rotation**: at 10MB, keeping 3 numbered backups
//! - **Level**: `trace_level` plugin option, default `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider and span exporter
//! - [`record`]: Span to JSON conversion
//! - [`file_writer`]: Size-rotated line writer

mod file_writer;
mod init;
mod record;
mod tracer;

pub use init::init_tracing;
