use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

type Target = Box<dyn Write + Send>;

/// Destination every rendered record is written to.
///
/// The target sits behind a mutex and a record is written while the lock is
/// held, so records emitted concurrently never interleave. Clones share the
/// same target.
#[derive(Clone)]
pub struct Sink {
    target: Arc<Mutex<Target>>,
}

impl Sink {
    /// Wraps an arbitrary writer.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            target: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Targets the process's standard output, where container log
    /// collectors pick records up.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }

    fn lock(&self) -> MutexGuard<'_, Target> {
        // A panic mid-write leaves at worst a truncated record behind.
        self.target.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}

/// Exclusive access to the sink for the duration of one record.
pub struct SinkWriter<'a> {
    guard: MutexGuard<'a, Target>,
}

impl Write for SinkWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.guard.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.guard.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.guard.flush()
    }
}

impl<'a> MakeWriter<'a> for Sink {
    type Writer = SinkWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter { guard: self.lock() }
    }
}
