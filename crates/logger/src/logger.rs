use crate::encoder::Encoder;
use crate::level::level_filter;
use crate::{Config, Sink};
use std::io;
use tracing::{Dispatch, Subscriber};
use tracing_subscriber::fmt::{self, format::DefaultFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

/// Output layer shared by the injected and the global handle.
pub(crate) type OutputLayer<S> = fmt::Layer<S, DefaultFields, Encoder, Sink>;

pub(crate) fn output_layer<S>(config: &Config, sink: Sink) -> OutputLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .event_format(Encoder::from_config(config))
        .with_writer(sink)
}

/// Explicitly constructed logging handle.
///
/// Components that receive their logging context at construction time hold
/// one of these instead of relying on the process-wide handle. Clones share
/// the same subscriber and sink.
#[derive(Clone, Debug)]
pub struct Logger {
    dispatch: Dispatch,
    sink: Sink,
}

impl Logger {
    pub fn new(config: &Config, sink: Sink) -> Self {
        let subscriber = tracing_subscriber::registry()
            .with(level_filter(&config.level))
            .with(output_layer(config, sink.clone()));

        Self {
            dispatch: Dispatch::new(subscriber),
            sink,
        }
    }

    /// Handle writing to standard output.
    pub fn stdout(config: &Config) -> Self {
        Self::new(config, Sink::stdout())
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Runs `f` with this handle as the current thread's default, so plain
    /// `tracing` macros inside it are routed here.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    pub fn flush(&self) -> io::Result<()> {
        self.sink.flush()
    }
}
