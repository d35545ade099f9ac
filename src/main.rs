//! Main entry point for the partx CLI
//!
//! Thin adapter over the itemization engine: turns the command-line
//! selections into an `ItemizeRequest`, runs the engine, and prints the
//! per-document summary.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use partx::{run, ComponentCategory, DocumentFormat, ItemizeRequest, RunSummary};

#[derive(Parser)]
#[command(name = "partx")]
#[command(version)]
#[command(about = "Split Office Open XML documents into their component parts")]
#[command(after_help = "Examples:\n  \
  partx report.docx -s out                 itemize one document into out/\n  \
  partx docs/ -r -t docx,xlsx -s out       all Word and Excel files, recursively\n  \
  partx docs/ -c image,content -s out      only images and primary content")]
struct Cli {
    /// File or directory to search for Office documents
    #[arg(value_name = "PATH")]
    search_path: PathBuf,

    /// Directory receiving the per-document output directories
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    save_dir: PathBuf,

    /// Descend into subdirectories of the search path
    #[arg(short, long)]
    recursive: bool,

    /// Document types to search for (default: all)
    #[arg(short = 't', long = "types", value_enum, value_delimiter = ',')]
    types: Vec<DocumentFormat>,

    /// Component categories to itemize (default: all)
    #[arg(short = 'c', long = "categories", value_enum, value_delimiter = ',')]
    categories: Vec<ComponentCategory>,

    /// Keep the temporary extraction subtree next to the itemized output
    #[arg(short = 'k', long)]
    keep_excess: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let request = ItemizeRequest {
        search_root: cli.search_path,
        recursive: cli.recursive,
        formats: if cli.types.is_empty() {
            DocumentFormat::ALL.to_vec()
        } else {
            cli.types
        },
        categories: if cli.categories.is_empty() {
            ComponentCategory::ALL.to_vec()
        } else {
            cli.categories
        },
        save_root: cli.save_dir,
        keep_excess: cli.keep_excess,
    };

    let summary = run(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

/// Print the per-document results: source path, each category's output
/// directory with its file count, and any recorded failures.
fn print_summary(summary: &RunSummary) {
    if summary.outcomes.is_empty() {
        println!("No matching documents found.");
        return;
    }

    for outcome in &summary.outcomes {
        match &outcome.components {
            Some(components) => {
                println!("{}", outcome.source.display());
                for (category, output) in &components.categories {
                    let note = if output.reused { ", reused" } else { "" };
                    println!(
                        "  {:<13} {} ({} files{note})",
                        category.dir_name(),
                        output.dir.display(),
                        output.files.len(),
                    );
                }
                for failure in &components.failures {
                    println!("  warning: {failure}");
                }
            }
            None => {
                println!(
                    "{}: failed: {}",
                    outcome.source.display(),
                    outcome.error.as_deref().unwrap_or("unknown error"),
                );
            }
        }
    }

    println!();
    println!(
        "{} document(s) itemized, {} failed",
        summary.succeeded(),
        summary.failed()
    );
}
