use anyhow::{Context, Error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a global fmt subscriber, filtered by `RUST_LOG` and defaulting to `info`.
pub fn init_logging() -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set global subscriber")?;

    Ok(())
}
