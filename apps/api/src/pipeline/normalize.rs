//! Content Normalizer — folds a heterogeneous submission (text and/or an
//! uploaded file) into one analyzable string, consumed by both model stages.
//!
//! Only the image branch touches the network (one vision call). A vision
//! failure propagates instead of silently degrading to text-only: generating
//! copy that ignores the uploaded image would be misleading.

use tracing::{info, warn};

use crate::llm_client::ModelProvider;
use crate::pipeline::models::{MimeCategory, PipelineError, SelectionParameters, Submission};
use crate::pipeline::prompts::IMAGE_ANALYSIS_PROMPT_TEMPLATE;

/// Upper bound for in-memory vision analysis. Oversized images skip binary
/// analysis and proceed text-only rather than loading arbitrary blobs.
pub const MAX_VISION_BYTES: usize = 20 * 1024 * 1024;

/// Builds the unified analysis string for one submission.
pub async fn normalize(
    provider: &dyn ModelProvider,
    submission: &Submission,
    selection: &SelectionParameters,
) -> Result<String, PipelineError> {
    let text = submission.text.as_deref().unwrap_or("");

    let Some(file) = &submission.file else {
        return Ok(text.to_string());
    };

    match file.mime_category() {
        MimeCategory::Image => {
            if file.bytes.len() > MAX_VISION_BYTES {
                warn!(
                    "image '{}' is {} bytes (cap {}), skipping vision analysis",
                    file.file_name,
                    file.bytes.len(),
                    MAX_VISION_BYTES
                );
                return Ok(text.to_string());
            }

            let instruction =
                IMAGE_ANALYSIS_PROMPT_TEMPLATE.replace("{language}", &selection.language);

            let description = provider
                .describe_image(&file.bytes, &file.mime_type, &instruction)
                .await
                .map_err(PipelineError::Normalization)?;

            info!(
                "vision analysis of '{}' produced {} chars",
                file.file_name,
                description.len()
            );

            if text.is_empty() {
                Ok(description)
            } else {
                Ok(format!("{description}\n\nUser Input: {text}"))
            }
        }
        MimeCategory::Video => {
            // No binary analysis for video — cost/latency guard. A synthetic
            // description from the name and content type stands in.
            let description = format!(
                "Video file uploaded: {}. Content type: {}",
                file.file_name,
                selection.content_type.as_str()
            );
            if text.is_empty() {
                Ok(description)
            } else {
                Ok(format!("{description}\n\nUser Description: {text}"))
            }
        }
        MimeCategory::Text => {
            let file_text = String::from_utf8_lossy(&file.bytes);
            if text.is_empty() {
                Ok(file_text.into_owned())
            } else {
                Ok(format!("{file_text}\n\nAdditional Context: {text}"))
            }
        }
        // Other allow-listed types (pdf) are accepted but not read.
        MimeCategory::Other => Ok(text.to_string()),
    }
}
