use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::field::Field;

#[derive(Args)]
pub struct FieldsArgs {
    /// Only list indexed fields
    #[arg(long)]
    pub indexed: bool,
}

#[derive(Serialize)]
struct FieldInfo {
    name: &'static str,
    indexed: bool,
    description: &'static str,
}

/// Execute fields subcommand
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FieldsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let fields: Vec<FieldInfo> = Field::ALL
        .iter()
        .filter(|f| !args.indexed || f.is_indexed())
        .map(|&f| FieldInfo {
            name: f.as_str(),
            indexed: f.is_indexed(),
            description: f.description(),
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for field in &fields {
                let marker = if field.indexed { "*" } else { " " };
                println!("{marker} {:<26} {}", field.name, field.description);
            }
            if !args.indexed {
                println!("\n* indexed");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fields)?),
        OutputFormat::Tsv => {
            println!("name\tindexed\tdescription");
            for field in &fields {
                println!("{}\t{}\t{}", field.name, field.indexed, field.description);
            }
        }
    }

    Ok(())
}
