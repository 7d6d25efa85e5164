//! Image-to-text collaborator seam.
//!
//! The core never performs OCR itself; it validates the input type and
//! delegates to a [`TextRecognizer`]. The recognizer call is the single
//! suspension point in the scan pipeline; everything around it is
//! synchronous parsing.

#[cfg(feature = "tesseract")]
mod tesseract;

#[cfg(feature = "tesseract")]
pub use tesseract::TesseractRecognizer;

use async_trait::async_trait;
use image::ImageFormat;

use crate::error::{RecognizeError, ScanError};

/// An external service turning receipt image bytes into text.
#[async_trait]
pub trait TextRecognizer {
    /// Recognize the text on a receipt image.
    async fn recognize(&self, image: &[u8]) -> Result<String, RecognizeError>;
}

/// Reject anything that is not a PNG or JPEG image.
///
/// Sniffs the byte content rather than trusting a file extension or a
/// client-reported MIME type. Runs before any recognizer work.
pub fn ensure_receipt_image(bytes: &[u8]) -> Result<(), ScanError> {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png | ImageFormat::Jpeg) => Ok(()),
        _ => Err(ScanError::UnsupportedImage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    const JPEG_MAGIC: &[u8] = &[0xff, 0xd8, 0xff, 0xe0];

    #[test]
    fn accepts_png_and_jpeg() {
        assert!(ensure_receipt_image(PNG_MAGIC).is_ok());
        assert!(ensure_receipt_image(JPEG_MAGIC).is_ok());
    }

    #[test]
    fn rejects_other_image_formats() {
        let gif = b"GIF89a";
        assert!(matches!(
            ensure_receipt_image(gif),
            Err(ScanError::UnsupportedImage)
        ));
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(matches!(
            ensure_receipt_image(b"just some text"),
            Err(ScanError::UnsupportedImage)
        ));
        assert!(matches!(
            ensure_receipt_image(&[]),
            Err(ScanError::UnsupportedImage)
        ));
    }
}
