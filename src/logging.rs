use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Debug output stays off unless requested so
/// stdout and stderr carry only the generated text and errors.
pub fn init(debug: bool) -> Result<()> {
    let directive = if debug { "actdocs=debug" } else { "actdocs=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))
}
