//! Document Extractor: plain text from uploaded CVs.
//!
//! Parsing is CPU-bound and runs inside `tokio::task::spawn_blocking`.

pub(crate) mod docx;
mod pdf;

use std::path::Path;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves the container format from the uploaded file name's extension.
    pub fn from_file_name(file_name: &str) -> Result<Self, AppError> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            _ => Err(AppError::UnsupportedFormat(
                "Only PDF and DOCX files are supported".to_string(),
            )),
        }
    }

    fn label(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
        }
    }
}

/// Extracts trimmed plain text from `bytes` interpreted as `format`.
pub async fn extract_text(bytes: Vec<u8>, format: DocumentFormat) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || match format {
        DocumentFormat::Pdf => pdf::extract(&bytes),
        DocumentFormat::Docx => docx::extract(&bytes),
    })
    .await
    .map_err(|e| AppError::Extraction(format!("Error parsing {}: {e}", format.label())))?
    .map_err(|e| AppError::Extraction(format!("Error parsing {}: {e}", format.label())))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Extraction(format!(
            "No readable text found in {} document",
            format.label()
        )));
    }
    Ok(text.to_string())
}
