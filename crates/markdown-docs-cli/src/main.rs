// Command-line host for the markdown-docs engine.
//
// Reads a Markdown file, loads it into an in-memory rich-text document with
// one block per line, runs a conversion pass and prints the result.
//
// Usage:
//  markdown-docs <input> [--config <path>] [--format text|json]
//                [--no-cleanup] [--no-native-lists] [--verbose]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use markdown_docs_config::Config;
use markdown_docs_engine::{ConversionReport, ConvertOptions, MemoryDocument, convert_markdown};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// One line per block, styles indented beneath it
    #[default]
    Text,
    /// The converted document and the report as JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "markdown-docs", version, about = "Convert Markdown into rich text")]
struct Cli {
    /// Markdown file to convert
    input: PathBuf,

    /// Config file to use instead of ~/.config/markdown-docs/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip the final sweep for leftover `**` markers
    #[arg(long)]
    no_cleanup: bool,

    /// Approximate list items instead of emitting native ones
    #[arg(long)]
    no_native_lists: bool,

    /// Log every block as it is converted
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Config file options with the command-line switches applied on top.
    fn options(&self, config: Config) -> ConvertOptions {
        let mut options = config.convert;
        if self.no_cleanup {
            options.cleanup_pass = false;
        }
        if self.no_native_lists {
            options.prefer_native_lists = false;
        }
        options
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    document: &'a MemoryDocument,
    report: &'a ConversionReport,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display()))?,
        None => Config::load_or_default()?,
    };
    let options = cli.options(config);
    log::debug!("Using options: {options:?}");

    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let (doc, report) = convert_markdown(&source, &options);
    for warning in &report.warnings {
        log::warn!("{}: {warning}", cli.input.display());
    }
    log::debug!(
        "Converted {} blocks, {} markers applied",
        report.blocks,
        report.markers_applied
    );

    match cli.format {
        OutputFormat::Text => print!("{}", doc.render_text()),
        OutputFormat::Json => {
            let output = JsonOutput {
                document: &doc,
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
