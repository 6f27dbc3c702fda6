use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::errors::AppError;
use crate::interview::analysis::{analyze_audio, stage_audio};
use crate::llm_client::MediaKind;
use crate::models::interview::AudioAnalysis;
use crate::state::AppState;

/// POST /api/interview/analyze-audio
///
/// Multipart field: `file` (or `audio`) with the recorded answer.
pub async fn handle_analyze_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AudioAnalysis>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name != "file" && name != "audio" {
            continue;
        }

        let kind = MediaKind::detect(field.file_name(), field.content_type()).ok_or_else(|| {
            AppError::UnsupportedFormat(
                "Unsupported audio format; use wav, mp3, m4a, ogg, webm, flac or aac".to_string(),
            )
        })?;
        let bytes = field.bytes().await?;

        let staged = stage_audio(bytes.to_vec(), kind).await?;
        let analysis = analyze_audio(staged, state.llm.as_ref()).await?;
        return Ok(Json(analysis));
    }

    Err(AppError::Validation("audio file is required".to_string()))
}
