//! List command - show stored expenses.

use clap::Args;
use console::style;

use spense_core::{JsonStore, SubmissionController};

use super::{ConsoleNotifier, load_config};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ListArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let store = JsonStore::open(&config.store.data_file)?;

    let mut controller = SubmissionController::new(store, ConsoleNotifier);
    controller.refresh();

    if args.json {
        println!("{}", serde_json::to_string_pretty(controller.expenses())?);
        return Ok(());
    }

    if controller.expenses().is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    println!(
        "{:>4}  {:<12} {:>10}  {:<10}  {}",
        "id", "category", "amount", "date", "icon"
    );
    for expense in controller.expenses() {
        println!(
            "{:>4}  {:<12} {:>10}  {:<10}  {}",
            expense.id,
            expense.category,
            expense.amount.to_string(),
            expense.date.to_string(),
            expense.icon
        );
    }
    println!(
        "{}",
        style(format!("{} expense(s)", controller.expenses().len())).dim()
    );

    Ok(())
}
