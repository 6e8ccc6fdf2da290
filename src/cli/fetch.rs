use clap::Args;

use crate::cli::{parse_field, DataArgs, OutputFormat};
use crate::core::field::Field;
use crate::core::record::Record;
use crate::query::classify::classify_gene;
use crate::query::engine::QueryOptions;

#[derive(Args)]
pub struct FetchArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Value to search for
    #[arg(required = true)]
    pub value: String,

    /// Field to search (detected from the value by default)
    #[arg(long, value_parser = parse_field)]
    pub field: Option<Field>,

    /// Match symbols literally instead of resolving aliases and previous symbols
    #[arg(long)]
    pub no_normalize: bool,
}

/// Execute fetch subcommand
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FetchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let db = args.data.load(verbose)?;

    let field = args.field.unwrap_or_else(|| classify_gene(&args.value));
    let options = QueryOptions {
        normalize_symbols: !args.no_normalize,
    };

    if verbose {
        eprintln!(
            "Searching '{}' in field {field} ({})",
            args.value,
            if field.is_indexed() { "indexed" } else { "scan" }
        );
    }

    let records = db.fetch_with(&args.value, field, options);

    if records.is_empty() {
        eprintln!("No records found for '{}' in field {field}.", args.value);
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_records(&records),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Tsv => print_tsv_records(&records),
    }

    Ok(())
}

fn print_text_records(records: &[&Record]) {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} ({})", record.symbol(), record.hgnc_id());
        println!("{}", "-".repeat(60));
        for (field, value) in record.iter().filter(|(_, v)| !v.is_empty()) {
            println!("  {:<26} {value}", field.as_str());
        }
    }
}

fn print_tsv_records(records: &[&Record]) {
    let header: Vec<&str> = Field::ALL.iter().map(|f| f.as_str()).collect();
    println!("{}", header.join("\t"));
    for record in records {
        let values: Vec<&str> = record.iter().map(|(_, v)| v).collect();
        println!("{}", values.join("\t"));
    }
}
