//! JD generation: validate the request, call the model and derive a title.

use tracing::info;

use crate::errors::AppError;
use crate::jd::prompts::build_jd_prompt;
use crate::llm_client::CompletionClient;
use crate::models::jd::{JdRequest, JdResponse};

pub async fn generate_jd(
    request: JdRequest,
    llm: &dyn CompletionClient,
) -> Result<JdResponse, AppError> {
    let role = request.role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let skills: Vec<String> = request
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if skills.is_empty() {
        return Err(AppError::Validation(
            "skills must contain at least one entry".to_string(),
        ));
    }

    let company_type = request
        .company_type
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    info!(
        "Generating JD for role '{}' ({} skills, level={})",
        role,
        skills.len(),
        request.experience_level.as_str()
    );

    let prompt = build_jd_prompt(role, &skills, request.experience_level.as_str(), company_type);
    let content = llm.complete(&prompt).await?;

    let title = derive_title(&content).unwrap_or_else(|| role.to_string());

    Ok(JdResponse {
        title,
        job_description: content,
    })
}

/// First line of the completion with markdown emphasis and heading markers removed.
fn derive_title(content: &str) -> Option<String> {
    let first = content.trim().lines().next()?;
    let title = first.replace("**", "").replace('#', "");
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
