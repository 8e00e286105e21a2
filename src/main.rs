use clap::Parser;
use color_eyre::{eyre::WrapErr, Help};
use hyphae_demo::{Options, Result};

fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = Options::parse();
    opts.trace_init()?;

    tracing::info!("spreading hyphae!");
    tracing::debug!(
        opts.count,
        opts.seed,
        opts.max,
        opts.ordered,
        "demo configuration"
    );

    let stdout = std::io::stdout();
    opts.run(&mut stdout.lock())
        .context("the demo didn't pass")
        .suggestion("rerun with `RUST_LOG=hyphae_demo=debug` to see more")?;

    Ok(())
}
