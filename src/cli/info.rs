use clap::Args;

use crate::cli::{DataArgs, OutputFormat};

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

/// Execute info subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: InfoArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let db = args.data.load(verbose)?;
    let stats = db.stats();

    match format {
        OutputFormat::Text => {
            println!("Dataset: {}", args.data.data.display());
            println!("{}", "=".repeat(60));
            println!("  Records:            {}", stats.records);
            println!("  Current symbols:    {}", stats.canonical_symbols);
            println!("  Aliases:            {}", stats.aliases);
            println!("  Reassigned aliases: {}", stats.reassigned_aliases);
            println!("\nIndexed fields (distinct values):");
            for (field, count) in &stats.indexed_keys {
                println!("  {:<20} {count}", field.as_str());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Tsv => {
            println!("key\tvalue");
            println!("records\t{}", stats.records);
            println!("canonical_symbols\t{}", stats.canonical_symbols);
            println!("aliases\t{}", stats.aliases);
            println!("reassigned_aliases\t{}", stats.reassigned_aliases);
            for (field, count) in &stats.indexed_keys {
                println!("{field}\t{count}");
            }
        }
    }

    Ok(())
}
