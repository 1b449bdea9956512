//! Spacebound - replays cache command scripts
//!
//! Reads one command per line from a file given as the first argument, or
//! from stdin, and prints one response per command.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spacebound_cache::{Config, Session};

/// Main entry point for the command driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (to stderr)
/// 2. Load configuration from environment variables
/// 3. Create the session cache
/// 4. Replay the script, printing responses to stdout
fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spacebound=info,spacebound_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: space_limit={}, cache_name={}",
        config.space_limit, config.cache_name
    );

    let mut session = Session::from_config(&config);

    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("Failed to open {}", path))?;
            info!("Replaying script {}", path);
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut executed = 0usize;

    for line in input.lines() {
        let line = line.context("Failed to read script line")?;
        if let Some(response) = session.run_line(&line) {
            writeln!(out, "{}", response).context("Failed to write response")?;
            executed += 1;
        }
    }

    let stats = session.cache.stats();
    info!(
        "Replay complete: {} commands, {} entries, {} evictions, hit rate {:.2}",
        executed,
        stats.total_entries,
        stats.evictions,
        stats.hit_rate()
    );
    Ok(())
}
