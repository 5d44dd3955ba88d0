//! Axum route handlers for the content generation API.
//!
//! The handlers own everything the pipeline does not: multipart decoding,
//! enum validation, the mime allow-list, and the `content_requests` row
//! lifecycle (insert before the run, update with the result after).

use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::request::ContentRequestRow;
use crate::pipeline::models::{
    Category, ContentType, GeneratedContent, Platform, SelectionParameters, Submission, Tone,
    UploadedFile,
};
use crate::pipeline::orchestrator::run_pipeline;
use crate::state::AppState;

/// Accepted upload types. Anything else is rejected with a 400 before the
/// pipeline runs.
const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "video/mp4",
    "video/avi",
    "video/mov",
    "video/wmv",
    "video/flv",
    "video/webm",
    "text/plain",
    "application/pdf",
];

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateContentResponse {
    pub success: bool,
    pub data: GenerateContentData,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentData {
    pub id: Uuid,
    #[serde(rename = "generatedContent")]
    pub generated_content: GeneratedContent,
}

#[derive(Debug, Serialize)]
pub struct ContentRequestResponse {
    pub success: bool,
    pub data: ContentRequestRow,
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart decoding
// ────────────────────────────────────────────────────────────────────────────

struct GenerateForm {
    submission: Submission,
    selection: SelectionParameters,
}

async fn read_form(mut multipart: Multipart) -> Result<GenerateForm, AppError> {
    let mut content: Option<String> = None;
    let mut platform: Option<Platform> = None;
    let mut content_type: Option<ContentType> = None;
    let mut tone: Option<Tone> = None;
    let mut category: Option<Category> = None;
    let mut language: Option<String> = None;
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "content" => {
                content = Some(read_text_field(field, "content").await?);
            }
            "platform" => {
                let value = read_text_field(field, "platform").await?;
                platform = Some(Platform::parse(&value).map_err(|e| {
                    AppError::Validation(e.to_string())
                })?);
            }
            "contentType" => {
                let value = read_text_field(field, "contentType").await?;
                content_type = Some(ContentType::parse(&value).ok_or_else(|| {
                    AppError::Validation(format!("Unknown contentType: {value}"))
                })?);
            }
            "tone" => {
                let value = read_text_field(field, "tone").await?;
                if !value.is_empty() {
                    tone = Some(Tone::parse(&value).ok_or_else(|| {
                        AppError::Validation(format!("Unknown tone: {value}"))
                    })?);
                }
            }
            "category" => {
                let value = read_text_field(field, "category").await?;
                if !value.is_empty() {
                    category = Some(Category::parse(&value).ok_or_else(|| {
                        AppError::Validation(format!("Unknown category: {value}"))
                    })?);
                }
            }
            "language" => {
                let value = read_text_field(field, "language").await?;
                if !value.is_empty() {
                    language = Some(value);
                }
            }
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let mime_type = field.content_type().unwrap_or_default().to_string();
                if !ALLOWED_MIME_TYPES.contains(&mime_type.as_str()) {
                    return Err(AppError::Validation(format!(
                        "File type '{mime_type}' is not supported"
                    )));
                }
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read uploaded file: {e}"))
                })?;
                file = Some(UploadedFile {
                    file_name,
                    mime_type,
                    bytes,
                });
            }
            // Unknown fields are ignored, matching permissive form handling
            _ => {}
        }
    }

    let platform =
        platform.ok_or_else(|| AppError::Validation("platform is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::Validation("contentType is required".to_string()))?;

    Ok(GenerateForm {
        submission: Submission {
            text: content.filter(|c| !c.is_empty()),
            file,
        },
        selection: SelectionParameters::new(platform, content_type, tone, category, language),
    })
}

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read field '{name}': {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-content
///
/// Validates the multipart submission, records a `content_requests` row,
/// runs the generation pipeline, and stores the result against the row.
/// Nothing is persisted as "generated" if the pipeline fails.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateContentResponse>, AppError> {
    let form = read_form(multipart).await?;

    let request_id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO content_requests
            (id, content, platform, content_type, tone, category, language, file_name, file_type)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(request_id)
    .bind(&form.submission.text)
    .bind(form.selection.platform.as_str())
    .bind(form.selection.content_type.as_str())
    .bind(form.selection.tone.map(|t| t.as_str()))
    .bind(form.selection.category.map(|c| c.as_str()))
    .bind(&form.selection.language)
    .bind(form.submission.file.as_ref().map(|f| f.file_name.clone()))
    .bind(form.submission.file.as_ref().map(|f| f.mime_type.clone()))
    .execute(&state.db)
    .await?;

    info!(
        "content request {} created for {}",
        request_id,
        form.selection.platform.as_str()
    );

    let generated =
        run_pipeline(state.llm.as_ref(), &form.submission, &form.selection).await?;

    let generated_value = serde_json::to_value(&generated).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to serialize generated content: {e}"))
    })?;

    sqlx::query("UPDATE content_requests SET generated_content = $1 WHERE id = $2")
        .bind(&generated_value)
        .bind(request_id)
        .execute(&state.db)
        .await?;

    Ok(Json(GenerateContentResponse {
        success: true,
        data: GenerateContentData {
            id: request_id,
            generated_content: generated,
        },
    }))
}

/// GET /api/content-request/:id
///
/// Returns a stored content request, including its generated content when
/// the pipeline has completed.
pub async fn handle_get_content_request(
    State(state): State<AppState>,
    Path(request_id): Path<Uuid>,
) -> Result<Json<ContentRequestResponse>, AppError> {
    let row = sqlx::query_as::<_, ContentRequestRow>(
        "SELECT * FROM content_requests WHERE id = $1",
    )
    .bind(request_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Content request {request_id} not found")))?;

    Ok(Json(ContentRequestResponse {
        success: true,
        data: row,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::models::{AnalysisResult, PlatformContent, TwitterContent};

    #[test]
    fn test_allowed_mime_types_cover_the_upload_allow_list() {
        for mime in ["image/png", "video/mp4", "text/plain", "application/pdf"] {
            assert!(ALLOWED_MIME_TYPES.contains(&mime));
        }
        assert!(!ALLOWED_MIME_TYPES.contains(&"application/zip"));
        assert!(!ALLOWED_MIME_TYPES.contains(&"image/svg+xml"));
    }

    #[test]
    fn test_generate_response_envelope_shape() {
        let response = GenerateContentResponse {
            success: true,
            data: GenerateContentData {
                id: Uuid::nil(),
                generated_content: GeneratedContent {
                    analysis: AnalysisResult::default(),
                    content: PlatformContent::Twitter(TwitterContent::default()),
                },
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["data"]["generatedContent"]["twitter"].is_object());
        assert!(json["data"]["generatedContent"]["analysis"].is_object());
    }
}
