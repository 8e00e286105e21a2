use crate::{Options, Result};
use color_eyre::eyre::WrapErr;

impl Options {
    /// Installs the global `tracing` subscriber, filtered by the `--log`
    /// option.
    ///
    /// Logs go to stderr, so they don't interleave with the demo's output on
    /// stdout.
    pub fn trace_init(&self) -> Result<()> {
        use tracing_subscriber::prelude::*;
        let filter = self
            .log
            .parse::<tracing_subscriber::EnvFilter>()
            .with_context(|| format!("invalid log filter {:?}", self.log))?;
        let fmt = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .without_time();

        tracing_subscriber::registry()
            .with(fmt)
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()?;
        Ok(())
    }
}
