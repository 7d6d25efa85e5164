//! Scan command - extract a draft expense from a receipt image.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use spense_core::{ReceiptParser, ReceiptScanner, TesseractRecognizer};

use super::load_config;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Receipt image (PNG or JPEG)
    #[arg(required = true)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text summary
    Text,
    /// JSON output
    Json,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Scanning receipt: {}", args.input.display());
    let bytes = tokio::fs::read(&args.input).await?;

    let recognizer = TesseractRecognizer::from_config(&config.ocr);
    let parser = ReceiptParser::new().with_lexicon(config.lexicon());
    let scanner = ReceiptScanner::new(recognizer).with_parser(parser);

    let draft = scanner.scan(&bytes).await?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&draft)?),
        OutputFormat::Text => {
            let or_none = |value: &str| {
                if value.is_empty() {
                    "(none)".to_string()
                } else {
                    value.to_string()
                }
            };
            println!("Category: {}", draft.category);
            println!("Amount:   {}", or_none(&draft.amount));
            println!("Date:     {}", or_none(&draft.date));
            if draft.amount.is_empty() && draft.date.is_empty() {
                println!(
                    "{}",
                    style("Nothing usable recognized; fill the expense in manually.").yellow()
                );
            }
        }
    }

    Ok(())
}
