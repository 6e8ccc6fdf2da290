use clap::Parser;
use tracing_subscriber::EnvFilter;

use hgnc_db::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("hgnc_db=debug,info")
    } else {
        EnvFilter::new("hgnc_db=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Fetch(args) => {
            cli::fetch::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Lookup(args) => {
            cli::lookup::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Fields(args) => {
            cli::fields::run(args, cli.format)?;
        }
        cli::Commands::Info(args) => {
            cli::info::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
