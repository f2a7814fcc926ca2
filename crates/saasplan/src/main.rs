use clap::Parser;
use saasplan::{Cli, init_logging, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.log_dir.as_deref(), &cli.log_level)?;

    let result = run(&cli);
    if let Err(err) = &result {
        tracing::error!("command failed: {err}");
    }
    result
}
