use serde::Deserialize;

/// Logger configuration supplied by the embedding service.
///
/// The logger never reads the environment or command line itself; services
/// assemble this record from whatever configuration source they own and pass
/// it to [`crate::init`] or [`crate::Logger::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Severity threshold: `debug`, `info`, `warn` or `error`.
    /// Any other value falls back to `info`.
    pub level: String,
    /// Name attached to every record as the `service` field.
    pub service: String,
    /// `true` renders one JSON object per line, `false` renders console text.
    pub json_format: bool,
}

impl Config {
    pub fn new(level: impl Into<String>, service: impl Into<String>, json_format: bool) -> Self {
        Self {
            level: level.into(),
            service: service.into(),
            json_format,
        }
    }
}
