//! Tesseract-backed text recognition.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::RecognizeError;
use crate::models::config::OcrConfig;

use super::TextRecognizer;

/// Recognizer that shells out to a locally installed `tesseract` binary.
pub struct TesseractRecognizer {
    binary: PathBuf,
    language: String,
}

impl TesseractRecognizer {
    /// Use the `tesseract` binary from `PATH` with English recognition.
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
            language: "eng".to_string(),
        }
    }

    /// Build a recognizer from OCR configuration.
    pub fn from_config(config: &OcrConfig) -> Self {
        Self {
            binary: PathBuf::from(&config.binary),
            language: config.language.clone(),
        }
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn recognize(&self, image: &[u8]) -> Result<String, RecognizeError> {
        // tesseract reads its input from a file, so stage the bytes
        let dir = tempfile::tempdir().map_err(RecognizeError::Spawn)?;
        let input = dir.path().join("receipt");
        tokio::fs::write(&input, image)
            .await
            .map_err(RecognizeError::Spawn)?;

        debug!(
            binary = %self.binary.display(),
            language = %self.language,
            "running OCR backend"
        );

        let output = Command::new(&self.binary)
            .arg(&input)
            .arg("stdout")
            .args(["-l", &self.language])
            .output()
            .await
            .map_err(RecognizeError::Spawn)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RecognizeError::Backend(stderr));
        }

        String::from_utf8(output.stdout).map_err(|_| RecognizeError::Encoding)
    }
}
