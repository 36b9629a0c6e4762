use crate::Config;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Metadata, Subscriber};
use tracing_log::NormalizeEvent;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::registry::LookupSpan;

/// Keys every record carries. Caller fields with one of these names are
/// renamed to `field.<name>` instead of shadowing them.
const RESERVED: [&str; 5] = ["timestamp", "level", "caller", "service", "message"];

/// How a record is rendered to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encoding {
    /// One JSON object per line.
    Json,
    /// One human-readable line per record, columns rendered positionally.
    Console,
}

impl Encoding {
    pub(crate) fn from_json_format(json_format: bool) -> Self {
        if json_format {
            Encoding::Json
        } else {
            Encoding::Console
        }
    }
}

/// Event formatter producing the service's record layout.
///
/// Each record carries an RFC 3339 timestamp, the uppercase level, the call
/// site, the fixed `service` field, the message and any caller fields.
/// Records bridged from the `log` crate report their original call site.
#[derive(Debug, Clone)]
pub(crate) struct Encoder {
    encoding: Encoding,
    service: String,
}

impl Encoder {
    pub(crate) fn new(encoding: Encoding, service: impl Into<String>) -> Self {
        Self {
            encoding,
            service: service.into(),
        }
    }

    pub(crate) fn from_config(config: &Config) -> Self {
        Self::new(
            Encoding::from_json_format(config.json_format),
            config.service.clone(),
        )
    }
}

impl<S, N> FormatEvent<S, N> for Encoder
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let normalized = event.normalized_metadata();
        let meta = normalized.as_ref().unwrap_or_else(|| event.metadata());

        let mut fields = Fields::new(normalized.is_some());
        event.record(&mut fields);

        let timestamp = timestamp()?;
        let call_site = caller(meta);
        let record = Record {
            timestamp: &timestamp,
            level: meta.level().as_str(),
            caller: &call_site,
            service: &self.service,
            message: fields.message.as_deref().unwrap_or_default(),
            fields: &fields.values,
        };

        match self.encoding {
            Encoding::Json => record.write_json(&mut writer),
            Encoding::Console => record.write_console(&mut writer),
        }
    }
}

fn timestamp() -> Result<String, fmt::Error> {
    let mut buf = String::new();
    SystemTime.format_time(&mut Writer::new(&mut buf))?;
    Ok(buf)
}

fn caller(meta: &Metadata<'_>) -> String {
    match (meta.file(), meta.line()) {
        (Some(file), Some(line)) => format!("{file}:{line}"),
        (Some(file), None) => file.to_string(),
        _ => meta.target().to_string(),
    }
}

#[derive(Serialize)]
struct Record<'a> {
    timestamp: &'a str,
    level: &'a str,
    caller: &'a str,
    service: &'a str,
    message: &'a str,
    #[serde(flatten)]
    fields: &'a Map<String, Value>,
}

impl Record<'_> {
    fn write_json(&self, writer: &mut Writer<'_>) -> fmt::Result {
        let line = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        writeln!(writer, "{line}")
    }

    fn write_console(&self, writer: &mut Writer<'_>) -> fmt::Result {
        write!(
            writer,
            "{}  {:<5}  {}  {}  {}",
            self.timestamp, self.level, self.service, self.caller, self.message
        )?;
        for (name, value) in self.fields {
            write!(writer, "  {name}={value}")?;
        }
        writeln!(writer)
    }
}

/// Collects an event's fields, keeping their JSON types.
struct Fields {
    bridged: bool,
    message: Option<String>,
    values: Map<String, Value>,
}

impl Fields {
    /// `bridged` marks events forwarded from the `log` facade, whose `log.*`
    /// bookkeeping fields are already surfaced through the caller.
    fn new(bridged: bool) -> Self {
        Self {
            bridged,
            message: None,
            values: Map::new(),
        }
    }

    fn insert(&mut self, field: &Field, value: Value) {
        let name = field.name();
        if self.bridged && name.starts_with("log.") {
            return;
        }
        if name == "message" {
            self.message = Some(match value {
                Value::String(text) => text,
                other => other.to_string(),
            });
            return;
        }
        if RESERVED.contains(&name) {
            self.values.insert(format!("field.{name}"), value);
        } else {
            self.values.insert(name.to_string(), value);
        }
    }
}

impl Visit for Fields {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, Value::from(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, Value::from(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, Value::from(format!("{value:?}")));
    }
}
