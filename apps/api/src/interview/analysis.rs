//! Interview audio analysis.
//!
//! The upload is staged in a request-scoped temporary file. `StagedAudio` owns
//! the file; dropping it deletes the file, so every exit path (success,
//! fallback, upstream error) cleans up.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::prompts::build_audio_prompt;
use crate::llm_client::{CompletionClient, MediaKind};
use crate::models::interview::AudioAnalysis;
use crate::normalizer::normalize;

#[derive(Debug)]
pub struct StagedAudio {
    file: NamedTempFile,
    kind: MediaKind,
}

impl StagedAudio {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}

/// Writes the uploaded audio to a temporary file named after its media kind.
pub async fn stage_audio(bytes: Vec<u8>, kind: MediaKind) -> Result<StagedAudio, AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation("uploaded audio file is empty".to_string()));
    }

    let file = tokio::task::spawn_blocking(move || -> anyhow::Result<NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("interview-audio-")
            .suffix(&format!(".{}", kind.extension()))
            .tempfile()
            .context("failed to create temporary audio file")?;
        file.write_all(&bytes)
            .context("failed to write temporary audio file")?;
        file.flush().context("failed to flush temporary audio file")?;
        Ok(file)
    })
    .await
    .context("audio staging task failed")??;

    Ok(StagedAudio { file, kind })
}

/// Sends the staged recording to the model and normalizes the reply.
/// Consumes `staged`; its file is gone when this returns.
pub async fn analyze_audio(
    staged: StagedAudio,
    llm: &dyn CompletionClient,
) -> Result<AudioAnalysis, AppError> {
    let media = tokio::fs::read(staged.path())
        .await
        .context("failed to read staged audio")?;

    info!(
        "Analyzing {} bytes of {} audio",
        media.len(),
        staged.kind().extension()
    );

    let raw = llm
        .complete_with_media(&build_audio_prompt(), &media, staged.kind())
        .await?;

    let normalized = normalize::<AudioAnalysis>(&raw);
    if let Some(reason) = &normalized.fallback {
        warn!("Audio analysis unparseable ({reason}); returning fallback analysis");
    }
    info!(
        "Audio analyzed: confidence_score={} tone={}",
        normalized.value.confidence_score, normalized.value.tone
    );
    Ok(normalized.value)
}
