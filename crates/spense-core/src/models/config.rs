//! Configuration structures for the spense pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, SpenseError};
use crate::receipt::rules::categories::{CategoryRule, default_lexicon};

/// Main configuration for spense.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpenseConfig {
    /// Expense store configuration.
    pub store: StoreConfig,

    /// OCR backend configuration.
    pub ocr: OcrConfig,

    /// Ordered category lexicon override; empty means built-ins.
    ///
    /// Order matters: the first rule with a keyword hit wins.
    pub categories: Vec<CategoryRule>,
}

/// Expense store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the JSON expense file.
    pub data_file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("expenses.json"),
        }
    }
}

/// OCR backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Binary to invoke for text recognition.
    pub binary: String,

    /// Recognition language passed to the backend.
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            binary: "tesseract".to_string(),
            language: "eng".to_string(),
        }
    }
}

impl SpenseConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| SpenseError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| SpenseError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the category lexicon: configured rules or the built-ins.
    pub fn lexicon(&self) -> Vec<CategoryRule> {
        if self.categories.is_empty() {
            default_lexicon()
        } else {
            self.categories.clone()
        }
    }
}
