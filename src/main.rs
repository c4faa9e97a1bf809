use clap::Parser;
use routedraw::cli::{run_cli, Cli};
use routedraw::logging::{init_logging, LogConfig};

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::from_env())?;
    run_cli(Cli::parse())
}
