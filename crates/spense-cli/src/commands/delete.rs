//! Delete command - remove a stored expense.

use clap::Args;

use spense_core::{ExpenseId, JsonStore, SubmissionController};

use super::{ConsoleNotifier, load_config};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the expense to delete
    #[arg(required = true)]
    id: ExpenseId,
}

pub fn run(args: DeleteArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let store = JsonStore::open(&config.store.data_file)?;

    let mut controller = SubmissionController::new(store, ConsoleNotifier);
    controller.remove(args.id)?;

    Ok(())
}
