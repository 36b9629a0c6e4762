//! Process-wide structured logging for services.
//!
//! Services build a [`Config`] from their own settings and call [`init`]
//! once at startup. Every record is written to standard output, as JSON or
//! as a console line, stamped with a timestamp, the uppercase level, the call
//! site and a fixed `service` field. Hold a [`FlushGuard`] in `main` so the
//! output is flushed on exit.
//!
//! ```no_run
//! let config = logger::Config::new("debug", "billing", true);
//! logger::init(&config).expect("logger already claimed");
//! let _flush = logger::flush_guard();
//!
//! tracing::info!(invoice = 42, "invoice settled");
//! ```
//!
//! Components that prefer an injected handle over global state can build a
//! [`Logger`] directly.

mod config;
mod encoder;
mod errors;
mod global;
mod level;
mod logger;
mod sink;

pub use config::Config;
pub use errors::Error;
pub use global::{FlushGuard, flush, flush_guard, init, init_with_sink, try_flush};
pub use logger::Logger;
pub use sink::{Sink, SinkWriter};
