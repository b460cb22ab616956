use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize a stderr tracing subscriber.
///
/// The level comes from `RUST_LOG`, defaulting to "warn" so normal runs only
/// print the sync result itself.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, warn};

    #[test]
    fn test_logging_init() {
        // Only one subscriber per process; a second init just errors.
        let _ = init();

        debug!("debug message");
        warn!("warning message");
    }
}
