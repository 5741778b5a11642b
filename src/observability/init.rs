//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "wp-palette";

/// Installs the global subscriber: level filter → OpenTelemetry layer →
/// JSON-lines file at `<data dir>/wp-palette-trace.jsonl`.
///
/// The level comes from the `trace_level` option (default `"info"`). Tracing
/// is optional: if the data directory cannot be created nothing is installed,
/// and calling this twice keeps the first subscriber.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let trace_file = data_dir.join("wp-palette-trace.jsonl");
    let provider = tracer::create_tracer_provider(trace_file, SERVICE_NAME, resource);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
