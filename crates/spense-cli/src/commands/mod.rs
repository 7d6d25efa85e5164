//! Subcommand implementations and shared CLI plumbing.

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod list;
pub mod scan;

use std::path::{Path, PathBuf};

use console::style;

use spense_core::{Notifier, Severity, SpenseConfig};

/// Notifier printing toast-like lines to the terminal.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => println!("{} {}", style("✓").green(), message),
            Severity::Info => println!("{} {}", style("ℹ").blue(), message),
            Severity::Error => eprintln!("{} {}", style("✗").red(), message),
        }
    }
}

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spense")
        .join("config.json")
}

/// Resolve the effective configuration file path.
pub fn config_path(override_path: Option<&str>) -> PathBuf {
    override_path.map_or_else(default_config_path, PathBuf::from)
}

/// Load configuration from the given or default path; defaults when absent.
///
/// An explicitly passed `--config` path must exist; the default path is
/// allowed to be missing.
pub fn load_config(override_path: Option<&str>) -> anyhow::Result<SpenseConfig> {
    match override_path {
        Some(path) => Ok(SpenseConfig::from_file(Path::new(path))?),
        None => {
            let path = default_config_path();
            if path.exists() {
                Ok(SpenseConfig::from_file(&path)?)
            } else {
                Ok(SpenseConfig::default())
            }
        }
    }
}
