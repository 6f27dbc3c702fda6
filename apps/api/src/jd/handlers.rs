use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::jd::generator::generate_jd;
use crate::models::jd::{JdRequest, JdResponse};
use crate::state::AppState;

/// POST /api/jd/generate
pub async fn handle_generate_jd(
    State(state): State<AppState>,
    Json(request): Json<JdRequest>,
) -> Result<Json<JdResponse>, AppError> {
    let response = generate_jd(request, state.llm.as_ref()).await?;
    Ok(Json(response))
}
