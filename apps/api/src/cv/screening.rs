//! CV screening: uploaded document → extracted text → MatchAssessment.

use tracing::{info, warn};

use crate::cv::prompts::build_screen_prompt;
use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentFormat};
use crate::llm_client::CompletionClient;
use crate::models::assessment::MatchAssessment;
use crate::normalizer::normalize;

/// An uploaded CV as received from the multipart form.
#[derive(Debug)]
pub struct CvUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Validates the upload, extracts its text and screens it against `jd_text`.
///
/// Unsupported formats and unreadable documents are rejected before any
/// completion call is made.
pub async fn screen_upload(
    upload: CvUpload,
    jd_text: &str,
    llm: &dyn CompletionClient,
) -> Result<MatchAssessment, AppError> {
    let jd_text = jd_text.trim();
    if jd_text.is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    if upload.bytes.is_empty() {
        return Err(AppError::Validation("uploaded CV file is empty".to_string()));
    }

    let format = DocumentFormat::from_file_name(&upload.file_name)?;
    let cv_text = extract_text(upload.bytes, format).await?;
    info!(
        "Extracted {} chars from '{}' ({:?})",
        cv_text.len(),
        upload.file_name,
        format
    );

    screen_cv(&cv_text, jd_text, llm).await
}

pub async fn screen_cv(
    cv_text: &str,
    jd_text: &str,
    llm: &dyn CompletionClient,
) -> Result<MatchAssessment, AppError> {
    let prompt = build_screen_prompt(cv_text, jd_text);
    let raw = llm.complete(&prompt).await?;

    let normalized = normalize::<MatchAssessment>(&raw);
    if let Some(reason) = &normalized.fallback {
        warn!("CV screening response unparseable ({reason}); returning fallback assessment");
    }
    info!(
        "CV screened: match_score={} confidence={}",
        normalized.value.match_score,
        normalized.value.confidence_level.as_str()
    );
    Ok(normalized.value)
}
