//! FILENAME: app/cli/src/main.rs
//! Thin command-line front end for the consolidation engine.
//!
//! `convert` runs the whole pipeline file to file; `inspect` reports the
//! block structure of a workbook without converting it, which is handy
//! when a sheet unexpectedly yields zero blocks.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use consolidate_engine::{consolidate, find_block_starts, ConsolidateOptions, MergePolicy};
use persistence::{load_workbook, save_table};

#[derive(Parser)]
#[command(name = "consolida", about = "Merge multi-block statistics workbooks into one wide table")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Consolidate a workbook into a single wide table
    Convert {
        /// Source .xlsx file
        input: PathBuf,
        /// Destination .xlsx file
        output: PathBuf,
        /// How to resolve a value set by more than one block
        #[arg(long, value_enum, default_value = "last-wins")]
        merge_policy: MergePolicyArg,
        /// Header marker expected in column A of a block header row
        #[arg(long)]
        header_marker: Option<String>,
        /// Unit marker expected in column B of a block header row
        #[arg(long)]
        unit_marker: Option<String>,
        /// Label for the leading entity column of the output
        #[arg(long)]
        entity_label: Option<String>,
    },
    /// Report sheet dimensions and detected block header rows
    Inspect {
        /// Source .xlsx file
        input: PathBuf,
        /// Header marker expected in column A of a block header row
        #[arg(long)]
        header_marker: Option<String>,
        /// Unit marker expected in column B of a block header row
        #[arg(long)]
        unit_marker: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MergePolicyArg {
    /// The last block processed wins (default)
    LastWins,
    /// The first block that set a value wins
    FirstWins,
    /// Fail on any conflicting value
    Error,
    /// Sum numeric values, fail on anything else
    Sum,
}

impl From<MergePolicyArg> for MergePolicy {
    fn from(arg: MergePolicyArg) -> Self {
        match arg {
            MergePolicyArg::LastWins => MergePolicy::LastWins,
            MergePolicyArg::FirstWins => MergePolicy::FirstWins,
            MergePolicyArg::Error => MergePolicy::Error,
            MergePolicyArg::Sum => MergePolicy::Sum,
        }
    }
}

fn build_options(
    header_marker: Option<String>,
    unit_marker: Option<String>,
    entity_label: Option<String>,
    merge_policy: MergePolicy,
) -> ConsolidateOptions {
    let mut options = ConsolidateOptions::default();
    if let Some(marker) = header_marker {
        options.header_marker = marker;
    }
    if let Some(marker) = unit_marker {
        options.unit_marker = marker;
    }
    if let Some(label) = entity_label {
        options.entity_column_label = label;
    }
    options.merge_policy = merge_policy;
    options
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            merge_policy,
            header_marker,
            unit_marker,
            entity_label,
        } => {
            let options = build_options(
                header_marker,
                unit_marker,
                entity_label,
                merge_policy.into(),
            );
            let workbook = load_workbook(&input)?;
            let table = consolidate(&workbook, &options)?;
            save_table(&table, &output)?;
            println!(
                "Wrote {} ({} entities, {} metric columns)",
                output.display(),
                table.row_count(),
                table.column_count().saturating_sub(1)
            );
        }
        Commands::Inspect {
            input,
            header_marker,
            unit_marker,
        } => {
            let options =
                build_options(header_marker, unit_marker, None, MergePolicy::LastWins);
            let workbook = load_workbook(&input)?;
            for sheet in &workbook.sheets {
                let starts = find_block_starts(&sheet.grid, &options);
                println!(
                    "{}: {} rows x {} cols, {} block(s)",
                    sheet.name,
                    sheet.grid.rows(),
                    sheet.grid.cols(),
                    starts.len()
                );
                for start in starts {
                    // 1-based for people reading the sheet in Excel.
                    println!("  header at row {}", start + 1);
                }
            }
        }
    }

    Ok(())
}
