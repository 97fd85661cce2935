use anyhow::Result;
use clap::Parser;
use toasty_autocode_cli::Cli;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // Generated source goes to stdout, so logs must not
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().run()
}
