//! Generation Stage — second model call, producing the platform-specific
//! payload from the built prompt.

use tracing::warn;

use crate::llm_client::ModelProvider;
use crate::pipeline::models::{PipelineError, Platform, PlatformContent};
use crate::pipeline::platforms::PlatformPrompt;
use crate::pipeline::prompts::GENERATION_SYSTEM_TEMPLATE;

/// Runs the generation call. Provider failure is fatal; a malformed reply
/// degrades to an all-empty payload for the platform — the caller renders
/// whatever fields are present.
pub async fn generate(
    provider: &dyn ModelProvider,
    prompt: &PlatformPrompt,
    platform: Platform,
) -> Result<PlatformContent, PipelineError> {
    let system = GENERATION_SYSTEM_TEMPLATE.replace("{platform}", platform.as_str());
    let full_prompt = format!(
        "{}\n\nRespond with JSON in this exact format:\n{}",
        prompt.instruction, prompt.response_shape
    );

    let raw = provider.complete_json(&system, &full_prompt).await?;

    Ok(parse_payload(platform, &raw))
}

/// Deserializes the model reply into the typed payload for `platform`.
/// Unknown keys are dropped, missing keys default to empty, and anything
/// unparseable becomes the empty payload.
fn parse_payload(platform: Platform, raw: &str) -> PlatformContent {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            warn!("generation reply was not valid JSON ({e}), returning empty payload");
            return PlatformContent::empty(platform);
        }
    };

    // Tag the object with the platform key so it deserializes into the
    // externally-tagged PlatformContent enum.
    let mut tagged = serde_json::Map::new();
    tagged.insert(platform.as_str().to_string(), value);

    serde_json::from_value(serde_json::Value::Object(tagged)).unwrap_or_else(|e| {
        warn!("generation reply did not match the {} shape ({e})", platform.as_str());
        PlatformContent::empty(platform)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::models::{TwitterContent, YoutubeContent};
    use crate::pipeline::platforms::template_for;
    use crate::pipeline::test_support::StubProvider;

    fn prompt_for(platform: Platform) -> PlatformPrompt {
        PlatformPrompt {
            instruction: "Generate something".to_string(),
            response_shape: template_for(platform).response_shape,
        }
    }

    #[tokio::test]
    async fn test_generate_parses_twitter_payload() {
        let provider = StubProvider::with_json(&[
            r##"{"tweet": "We launched!", "hashtags": ["#launch", "#startup"]}"##,
        ]);
        let content = generate(&provider, &prompt_for(Platform::Twitter), Platform::Twitter)
            .await
            .unwrap();
        assert_eq!(
            content,
            PlatformContent::Twitter(TwitterContent {
                tweet: "We launched!".to_string(),
                hashtags: vec!["#launch".to_string(), "#startup".to_string()],
            })
        );
    }

    #[tokio::test]
    async fn test_generate_degrades_malformed_reply_to_empty_payload() {
        let provider = StubProvider::with_json(&["nope, not json"]);
        let content = generate(&provider, &prompt_for(Platform::Youtube), Platform::Youtube)
            .await
            .unwrap();
        assert_eq!(
            content,
            PlatformContent::Youtube(YoutubeContent::default())
        );
    }

    #[tokio::test]
    async fn test_generate_fails_on_provider_outage() {
        let provider = StubProvider::failing();
        let err = generate(&provider, &prompt_for(Platform::Twitter), Platform::Twitter)
            .await
            .unwrap_err();
        assert!(err.is_provider_unavailable());
    }

    #[test]
    fn test_parse_payload_defaults_missing_keys() {
        let content = parse_payload(Platform::Twitter, r#"{"tweet": "only a tweet"}"#);
        assert_eq!(
            content,
            PlatformContent::Twitter(TwitterContent {
                tweet: "only a tweet".to_string(),
                hashtags: vec![],
            })
        );
    }

    #[test]
    fn test_parse_payload_rejects_non_object_reply() {
        let content = parse_payload(Platform::Tiktok, r#"["a", "list"]"#);
        assert_eq!(content, PlatformContent::empty(Platform::Tiktok));
    }
}
