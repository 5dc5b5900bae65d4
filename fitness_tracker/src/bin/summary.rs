use std::io::Write;

use fitness_tracker::{SAMPLE_PACKAGES, process};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let messages = process(SAMPLE_PACKAGES)?;

    tracing::info!("Total: {} packages", messages.len());

    let io = std::io::stdout();
    let mut io = io.lock();

    for message in messages {
        writeln!(io, "{message}")?;
    }

    io.flush()?;

    Ok(())
}
