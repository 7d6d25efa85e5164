//! Add command - validate and store an expense.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use spense_core::{
    DraftExpense, JsonStore, ReceiptParser, ReceiptScanner, Submission, SubmissionController,
    TesseractRecognizer,
};

use super::{ConsoleNotifier, load_config};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Receipt image to prefill the expense from
    #[arg(short, long)]
    receipt: Option<PathBuf>,

    /// Category label
    #[arg(long)]
    category: Option<String>,

    /// Amount, e.g. 12.34
    #[arg(long)]
    amount: Option<String>,

    /// Date in YYYY-MM-DD form
    #[arg(long)]
    date: Option<String>,

    /// Icon for the expense, e.g. an emoji
    #[arg(long)]
    icon: Option<String>,
}

pub async fn run(args: AddArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let mut draft = match &args.receipt {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Receipt image not found: {}", path.display());
            }
            let bytes = tokio::fs::read(path).await?;
            let recognizer = TesseractRecognizer::from_config(&config.ocr);
            let parser = ReceiptParser::new().with_lexicon(config.lexicon());
            let scanner = ReceiptScanner::new(recognizer).with_parser(parser);
            scanner.scan(&bytes).await?
        }
        None => DraftExpense::default(),
    };

    // Explicit flags win over extracted values
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(amount) = args.amount {
        draft.amount = amount;
    }
    if let Some(date) = args.date {
        draft.date = date;
    }
    if let Some(icon) = args.icon {
        draft.icon = icon;
    }

    let store = JsonStore::open(&config.store.data_file)?;
    let mut controller = SubmissionController::new(store, ConsoleNotifier);

    let mut outcome = controller.submit(draft)?;
    loop {
        match outcome {
            Submission::Completed(record) => {
                debug!(id = record.id, "expense stored");
                return Ok(());
            }
            Submission::AwaitingIcon => {
                let icon = prompt_icon()?;
                outcome = controller.icon_selected(&icon)?;
            }
        }
    }
}

fn prompt_icon() -> anyhow::Result<String> {
    print!("{} ", style("Pick an icon for this expense:").cyan());
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
