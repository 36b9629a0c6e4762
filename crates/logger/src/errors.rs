use thiserror::Error;

/// Failures installing the process-wide logger.
///
/// Reconfiguring an already installed logger only fails if the reload
/// machinery lost track of its subscriber; first-time installation fails when
/// something else already claimed the global `tracing` dispatcher or the
/// `log` facade.
#[derive(Debug, Error)]
pub enum Error {
    /// The `log` facade already has a logger, so its records cannot be
    /// bridged into ours.
    #[error("log bridge unavailable: {0}")]
    LogBridge(#[from] tracing_log::log::SetLoggerError),

    /// A global `tracing` dispatcher was installed by someone else.
    #[error("global dispatcher already set: {0}")]
    GlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// The installed subscriber could not be reconfigured because it was
    /// dropped.
    #[error("reload failed: {0}")]
    Reload(#[from] tracing_subscriber::reload::Error),
}
