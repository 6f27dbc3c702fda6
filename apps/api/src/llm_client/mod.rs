/// LLM Client: the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the completion provider directly.
/// Handlers receive an `Arc<dyn CompletionClient>` through `AppState`.
///
/// Model: gemini-2.0-flash (hardcoded)
use std::path::Path;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all completion calls.
pub const MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Media attachments the provider accepts inline alongside a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Wav,
    Mp3,
    M4a,
    Ogg,
    Webm,
    Flac,
    Aac,
}

impl MediaKind {
    pub fn mime_type(self) -> &'static str {
        match self {
            MediaKind::Wav => "audio/wav",
            MediaKind::Mp3 => "audio/mp3",
            MediaKind::M4a => "audio/mp4",
            MediaKind::Ogg => "audio/ogg",
            MediaKind::Webm => "audio/webm",
            MediaKind::Flac => "audio/flac",
            MediaKind::Aac => "audio/aac",
        }
    }

    /// File extension used when staging the media on disk.
    pub fn extension(self) -> &'static str {
        match self {
            MediaKind::Wav => "wav",
            MediaKind::Mp3 => "mp3",
            MediaKind::M4a => "m4a",
            MediaKind::Ogg => "ogg",
            MediaKind::Webm => "webm",
            MediaKind::Flac => "flac",
            MediaKind::Aac => "aac",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "wav" => Some(MediaKind::Wav),
            "mp3" => Some(MediaKind::Mp3),
            "m4a" | "mp4" => Some(MediaKind::M4a),
            "ogg" | "oga" => Some(MediaKind::Ogg),
            "webm" => Some(MediaKind::Webm),
            "flac" => Some(MediaKind::Flac),
            "aac" => Some(MediaKind::Aac),
            _ => None,
        }
    }

    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(MediaKind::Wav),
            "audio/mpeg" | "audio/mp3" => Some(MediaKind::Mp3),
            "audio/mp4" | "audio/x-m4a" | "audio/m4a" => Some(MediaKind::M4a),
            "audio/ogg" => Some(MediaKind::Ogg),
            "audio/webm" => Some(MediaKind::Webm),
            "audio/flac" | "audio/x-flac" => Some(MediaKind::Flac),
            "audio/aac" => Some(MediaKind::Aac),
            _ => None,
        }
    }

    /// Resolves the kind from the uploaded file name, then the declared content type.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Option<Self> {
        file_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .or_else(|| content_type.and_then(Self::from_content_type))
    }
}

/// Sends a prompt to the hosted model and returns the raw completion text.
///
/// Implementations do not retry and do not interpret the completion.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    async fn complete_with_media(
        &self,
        prompt: &str,
        media: &[u8],
        kind: MediaKind,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: &'static str,
    data: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The completion client used by all handlers.
/// Wraps the Gemini `generateContent` endpoint; one request per call.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
        })
    }

    async fn generate(&self, parts: Vec<RequestPart<'_>>) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent { role: "user", parts }],
        };

        let response = self
            .client
            .post(format!("{GEMINI_API_BASE}/{MODEL}:generateContent"))
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "Completion succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        parsed.text().ok_or(LlmError::EmptyContent)
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(vec![RequestPart::Text { text: prompt }]).await
    }

    async fn complete_with_media(
        &self,
        prompt: &str,
        media: &[u8],
        kind: MediaKind,
    ) -> Result<String, LlmError> {
        debug!("Attaching {} bytes of {}", media.len(), kind.mime_type());
        self.generate(vec![
            RequestPart::Text { text: prompt },
            RequestPart::InlineData {
                inline_data: InlineData {
                    mime_type: kind.mime_type(),
                    data: STANDARD.encode(media),
                },
            },
        ])
        .await
    }
}

/// Pulls `error.message` out of a provider error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
