//! Analysis Stage — first model call, producing detected tone, audience,
//! and strategy for the normalized content.

use tracing::warn;

use crate::llm_client::ModelProvider;
use crate::pipeline::models::{AnalysisResult, PipelineError, SelectionParameters};
use crate::pipeline::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};

/// Runs the analysis call. Provider failure is fatal; a malformed reply
/// degrades to an all-empty `AnalysisResult` so the pipeline continues.
pub async fn analyze(
    provider: &dyn ModelProvider,
    normalized_content: &str,
    selection: &SelectionParameters,
) -> Result<AnalysisResult, PipelineError> {
    let prompt = build_analysis_prompt(normalized_content, selection);

    let raw = provider.complete_json(ANALYSIS_SYSTEM, &prompt).await?;

    Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!("analysis reply was not valid JSON ({e}), continuing with empty analysis");
        AnalysisResult::default()
    }))
}

fn build_analysis_prompt(normalized_content: &str, selection: &SelectionParameters) -> String {
    let tone_line = match selection.tone {
        Some(tone) => format!("Desired Tone: {}\n", tone.as_str()),
        None => String::new(),
    };
    let category_line = match selection.category {
        Some(category) => format!("Category: {}\n", category.as_str()),
        None => String::new(),
    };

    ANALYSIS_PROMPT_TEMPLATE
        .replace("{content}", normalized_content)
        .replace("{content_type}", selection.content_type.as_str())
        .replace("{platform}", selection.platform.as_str())
        .replace("{tone_line}", &tone_line)
        .replace("{category_line}", &category_line)
        .replace("{language}", &selection.language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::models::{Category, ContentType, Platform, Tone};
    use crate::pipeline::test_support::StubProvider;

    fn selection() -> SelectionParameters {
        SelectionParameters::new(
            Platform::Twitter,
            ContentType::Text,
            Some(Tone::Promotional),
            Some(Category::Business),
            None,
        )
    }

    #[test]
    fn test_analysis_prompt_embeds_all_parameters() {
        let prompt = build_analysis_prompt("Big launch today", &selection());
        assert!(prompt.contains(r#"Content: "Big launch today""#));
        assert!(prompt.contains("Content Type: text"));
        assert!(prompt.contains("Target Platform: twitter"));
        assert!(prompt.contains("Desired Tone: promotional"));
        assert!(prompt.contains("Category: business"));
        assert!(prompt.contains("Respond in English"));
    }

    #[test]
    fn test_analysis_prompt_omits_absent_hints() {
        let sel = SelectionParameters::new(Platform::Tiktok, ContentType::Video, None, None, None);
        let prompt = build_analysis_prompt("clip", &sel);
        assert!(!prompt.contains("Desired Tone:"));
        assert!(!prompt.contains("Category:"));
    }

    #[tokio::test]
    async fn test_analyze_parses_well_formed_reply() {
        let provider = StubProvider::with_json(&[
            r#"{"tone": ["bold", "urgent"], "audience": "founders", "strategy": "scarcity"}"#,
        ]);
        let result = analyze(&provider, "content", &selection()).await.unwrap();
        assert_eq!(result.tone, vec!["bold", "urgent"]);
        assert_eq!(result.audience, "founders");
        assert_eq!(result.strategy, "scarcity");
    }

    #[tokio::test]
    async fn test_analyze_degrades_malformed_reply_to_empty() {
        let provider = StubProvider::with_json(&["this is not json"]);
        let result = analyze(&provider, "content", &selection()).await.unwrap();
        assert_eq!(result, AnalysisResult::default());
    }

    #[tokio::test]
    async fn test_analyze_fails_on_provider_outage() {
        let provider = StubProvider::failing();
        let err = analyze(&provider, "content", &selection()).await.unwrap_err();
        assert!(err.is_provider_unavailable());
    }
}
