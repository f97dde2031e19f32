use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt as layer_fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Collects an event's fields into a JSON object.
#[derive(Default)]
struct FieldCollector {
    fields: Map<String, Value>,
}

impl FieldCollector {
    fn put(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldCollector {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, Value::from(format!("{:?}", value)));
    }
}

/// One JSON object per line: time, level, message, service and any extra fields.
#[derive(Clone)]
struct JsonLineFormatter {
    service: String,
    version: String,
}

impl JsonLineFormatter {
    fn render(&self, event: &Event<'_>) -> Value {
        let metadata = event.metadata();
        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        let mut fields = collector.fields;
        let message = match fields.remove("message") {
            Some(Value::String(message)) => message,
            Some(other) => other.to_string(),
            None => metadata.name().to_string(),
        };

        let mut line = Map::new();
        line.insert(
            "time".to_string(),
            Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        line.insert("level".to_string(), Value::from(metadata.level().as_str()));
        line.insert("target".to_string(), Value::from(metadata.target()));
        line.insert("message".to_string(), Value::from(message));
        line.insert("service".to_string(), Value::from(self.service.clone()));
        line.insert("version".to_string(), Value::from(self.version.clone()));
        if !fields.is_empty() {
            line.insert("fields".to_string(), Value::Object(fields));
        }
        Value::Object(line)
    }
}

impl<S, N> FormatEvent<S, N> for JsonLineFormatter
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let serialized = serde_json::to_string(&self.render(event)).map_err(|_| fmt::Error)?;
        writer.write_str(&serialized)?;
        writer.write_char('\n')
    }
}

/// Installs the global subscriber described by `config`. Logs go to stderr so that
/// command output on stdout stays clean.
///
/// `RUST_LOG` directives are honoured on top of the configured level. Fails on an
/// unknown level or format, or when a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), String> {
    build_subscriber(config, std::io::stderr)?
        .try_init()
        .map_err(|e| format!("Logging already initialised: {}", e))
}

/// Both formats write through `writer`.
fn build_subscriber<W>(
    config: &LoggingConfig,
    writer: W,
) -> Result<Box<dyn Subscriber + Send + Sync>, String>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let level = config.level_filter()?;
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    match config.format.trim().to_lowercase().as_str() {
        "json" => Ok(Box::new(
            tracing_subscriber::registry().with(filter).with(
                layer_fmt::layer()
                    .event_format(JsonLineFormatter {
                        service: config.service_name.clone(),
                        version: config.service_version.clone(),
                    })
                    .with_writer(writer),
            ),
        )),
        "console" => Ok(Box::new(
            tracing_subscriber::registry()
                .with(filter)
                .with(layer_fmt::layer().pretty().with_writer(writer)),
        )),
        other => Err(format!(
            "Invalid logging.format '{}'. Valid values: json, console",
            other
        )),
    }
}
