use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::cv::screening::{screen_upload, CvUpload};
use crate::errors::AppError;
use crate::models::assessment::MatchAssessment;
use crate::state::AppState;

/// POST /api/cv/screen
///
/// Multipart fields: `cv_file` (or `file`) holding a PDF/DOCX upload, and `jd_text`.
pub async fn handle_screen_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchAssessment>, AppError> {
    let mut upload: Option<CvUpload> = None;
    let mut jd_text: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "cv_file" | "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                upload = Some(CvUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            "jd_text" => {
                jd_text = Some(field.text().await?);
            }
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| AppError::Validation("cv_file is required".to_string()))?;
    let jd_text = jd_text.ok_or_else(|| AppError::Validation("jd_text is required".to_string()))?;

    let assessment = screen_upload(upload, &jd_text, state.llm.as_ref()).await?;
    Ok(Json(assessment))
}
