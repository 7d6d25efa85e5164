//! Export command - write the expense collection as CSV.

use std::path::PathBuf;

use clap::Args;
use console::style;

use spense_core::{ExpenseStore, JsonStore};

use super::load_config;

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let store = JsonStore::open(&config.store.data_file)?;
    let expenses = store.list()?;

    let sink: Box<dyn std::io::Write> = match &args.output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = csv::Writer::from_writer(sink);

    writer.write_record(["id", "category", "amount", "date", "icon"])?;
    for expense in &expenses {
        writer.write_record([
            expense.id.to_string(),
            expense.category.clone(),
            expense.amount.to_string(),
            expense.date.to_string(),
            expense.icon.clone(),
        ])?;
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        println!(
            "{} Exported {} expense(s) to {}",
            style("✓").green(),
            expenses.len(),
            path.display()
        );
    }

    Ok(())
}
