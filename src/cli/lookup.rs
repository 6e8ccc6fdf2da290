use clap::Args;
use serde::Serialize;

use crate::cli::{parse_field, DataArgs, OutputFormat};
use crate::core::field::Field;
use crate::query::classify::classify_gene;
use crate::query::engine::QueryOptions;

#[derive(Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Values to look up
    #[arg(required = true, num_args = 1..)]
    pub values: Vec<String>,

    /// Field to print for each matching record
    #[arg(short, long, required = true, value_parser = parse_field)]
    pub target: Field,

    /// Field to search (detected per value by default)
    #[arg(long, value_parser = parse_field)]
    pub field: Option<Field>,

    /// Match symbols literally instead of resolving aliases and previous symbols
    #[arg(long)]
    pub no_normalize: bool,
}

#[derive(Serialize)]
struct LookupResult<'a> {
    query: &'a str,
    field: Field,
    target: Field,
    values: Vec<&'a str>,
}

/// Execute lookup subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: LookupArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let db = args.data.load(verbose)?;
    let options = QueryOptions {
        normalize_symbols: !args.no_normalize,
    };

    let results: Vec<LookupResult> = args
        .values
        .iter()
        .map(|value| {
            let field = args.field.unwrap_or_else(|| classify_gene(value));
            LookupResult {
                query: value,
                field,
                target: args.target,
                values: db.lookup_with(value, field, args.target, options),
            }
        })
        .collect();

    if verbose {
        let found = results.iter().filter(|r| !r.values.is_empty()).count();
        eprintln!("{found} of {} values matched", results.len());
    }

    match format {
        OutputFormat::Text => {
            for result in &results {
                if result.values.is_empty() {
                    println!("{} -> (not found)", result.query);
                } else {
                    println!("{} -> {}", result.query, result.values.join(", "));
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Tsv => {
            println!("query\tfield\t{}", args.target);
            for result in &results {
                for value in &result.values {
                    println!("{}\t{}\t{value}", result.query, result.field);
                }
            }
        }
    }

    Ok(())
}
