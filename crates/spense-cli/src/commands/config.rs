//! Config command - inspect and initialize configuration.

use std::fs;

use clap::{Args, Subcommand};
use console::style;

use spense_core::SpenseConfig;

use super::{config_path, load_config};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Show the configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: ConfigArgs, override_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(override_path),
        ConfigCommand::Init(init_args) => init_config(init_args, override_path),
        ConfigCommand::Path => show_path(override_path),
    }
}

fn show_config(override_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path(override_path);

    let config = if path.exists() {
        load_config(override_path)?
    } else {
        println!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
        SpenseConfig::default()
    };

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs, override_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path(override_path);

    if path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    SpenseConfig::default().save(&path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        path.display()
    );

    Ok(())
}

fn show_path(override_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path(override_path);

    println!("Configuration file: {}", path.display());

    if path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'spense config init' to create a configuration file.");
    }

    Ok(())
}
