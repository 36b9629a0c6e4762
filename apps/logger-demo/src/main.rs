use anyhow::{Context, Result};
use clap::Parser;
use logger::Config;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(name = "logger-demo")]
#[command(about = "Emits records through the process-wide logger from concurrent workers")]
struct Args {
    /// Severity threshold: debug, info, warn or error
    #[arg(long, default_value = "info")]
    level: String,
    /// Value of the `service` field on every record
    #[arg(long, default_value = "logger-demo")]
    service: String,
    /// Emit JSON records instead of console lines
    #[arg(long)]
    json: bool,
    /// Number of concurrent workers
    #[arg(long, default_value_t = 4)]
    workers: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::new(args.level, args.service, args.json);

    logger::init(&config).context("Failed to initialize logger")?;
    let _flush = logger::flush_guard();

    info!(workers = args.workers, json = config.json_format, "starting workers");

    let mut handles = Vec::with_capacity(args.workers);
    for worker in 0..args.workers {
        handles.push(tokio::spawn(run_worker(worker)));
    }
    for handle in handles {
        handle.await.context("Worker task failed")?;
    }

    info!("all workers finished");
    Ok(())
}

/// Simulates a unit of work that reports progress at several severities.
async fn run_worker(worker: usize) {
    for step in 0..3u64 {
        debug!(worker, step, "processing step");
        tokio::time::sleep(Duration::from_millis(10 * (worker as u64 + 1))).await;
    }

    if worker % 2 == 1 {
        warn!(worker, "worker finished late");
    } else {
        info!(worker, "worker finished");
    }
}
