//! The process-wide logging handle.
//!
//! The first successful [`init`] installs a subscriber as the global
//! `tracing` dispatcher and then bridges the `log` facade into it. Later calls swap the
//! level and output layer in place, so the newest configuration fully
//! supersedes the previous one. Calls are serialized.

use crate::logger::{OutputLayer, output_layer};
use crate::level::level_filter;
use crate::{Config, Error, Sink};
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing_log::LogTracer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::{Registry, reload};

type Base = Layered<reload::Layer<LevelFilter, Registry>, Registry>;

struct Installed {
    level: reload::Handle<LevelFilter, Registry>,
    output: reload::Handle<OutputLayer<Base>, Base>,
    sink: Sink,
}

static INSTALLED: Mutex<Option<Installed>> = Mutex::new(None);

fn installed() -> MutexGuard<'static, Option<Installed>> {
    INSTALLED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Installs the process-wide logger writing to standard output.
///
/// Call once at startup, before logging. Calling again replaces the level,
/// encoding, service name and sink of the installed logger.
pub fn init(config: &Config) -> Result<(), Error> {
    init_with_sink(config, Sink::stdout())
}

/// Like [`init`], writing to `sink` instead of standard output.
pub fn init_with_sink(config: &Config, sink: Sink) -> Result<(), Error> {
    let mut installed = installed();
    let level = level_filter(&config.level);
    let output = output_layer(config, sink.clone());

    match installed.as_mut() {
        Some(current) => {
            current.level.reload(level)?;
            current.output.reload(output)?;
            current.sink = sink;
        }
        None => {
            let (level_layer, level_handle) = reload::Layer::new(level);
            let (output_layer, output_handle) = reload::Layer::new(output);
            let subscriber = tracing_subscriber::registry()
                .with(level_layer)
                .with(output_layer);

            tracing::subscriber::set_global_default(subscriber)?;
            *installed = Some(Installed {
                level: level_handle,
                output: output_handle,
                sink,
            });

            // The dispatcher is ours even if the bridge fails; later calls
            // reconfigure it instead of reinstalling.
            LogTracer::init()?;
        }
    }

    Ok(())
}

/// Flushes the installed sink, returning the outcome for callers that care.
///
/// A logger that was never initialized has nothing to flush.
pub fn try_flush() -> io::Result<()> {
    match installed().as_ref() {
        Some(current) => current.sink.flush(),
        None => Ok(()),
    }
}

/// Flushes the installed sink and discards any error.
///
/// Safe to call unconditionally on the shutdown path, including before
/// [`init`].
pub fn flush() {
    let _ = try_flush();
}

/// Flushes the process-wide logger when dropped.
///
/// Hold it for the lifetime of `main` so buffered output is written on every
/// exit path.
#[must_use = "the logger is flushed when the guard is dropped"]
#[derive(Debug, Default)]
pub struct FlushGuard {
    _priv: (),
}

impl Drop for FlushGuard {
    fn drop(&mut self) {
        flush();
    }
}

pub fn flush_guard() -> FlushGuard {
    FlushGuard::default()
}
