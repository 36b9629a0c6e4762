use tracing_subscriber::filter::LevelFilter;

/// Maps a severity name to the threshold used to filter records.
///
/// Only the exact lowercase names `debug`, `info`, `warn` and `error` are
/// recognized. Everything else, the empty string included, yields `INFO`.
pub(crate) fn level_filter(name: &str) -> LevelFilter {
    match name {
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}
