//! Shared helpers for the logger integration tests.

use logger::Sink;
use serde_json::Value;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for standard output.
#[derive(Clone, Default)]
pub struct Capture {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    pub fn sink(&self) -> Sink {
        Sink::new(self.clone())
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }

    /// Parses every captured line as a JSON record.
    #[allow(dead_code)]
    pub fn records(&self) -> Vec<Value> {
        self.lines()
            .iter()
            .map(|line| {
                serde_json::from_str(line).unwrap_or_else(|e| panic!("bad record {line:?}: {e}"))
            })
            .collect()
    }

    #[allow(dead_code)]
    pub fn clear(&self) {
        self.bytes.lock().unwrap().clear();
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Emits one record per severity, from most to least verbose.
#[allow(dead_code)]
pub fn emit_every_level() {
    tracing::trace!("trace record");
    tracing::debug!("debug record");
    tracing::info!("info record");
    tracing::warn!("warn record");
    tracing::error!("error record");
}
