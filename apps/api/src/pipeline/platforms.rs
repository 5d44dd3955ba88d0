//! Platform Prompt Builder — a registry mapping each platform to its prompt
//! template and expected response shape.
//!
//! Adding a platform is a data addition here (plus a payload struct), not a
//! control-flow edit at the call sites.

use crate::pipeline::models::{AnalysisResult, Platform, SelectionParameters};
use crate::pipeline::prompts::{
    FACEBOOK_PROMPT_TEMPLATE, FACEBOOK_RESPONSE_SHAPE, INSTAGRAM_PROMPT_TEMPLATE,
    INSTAGRAM_RESPONSE_SHAPE, LINKEDIN_PROMPT_TEMPLATE, LINKEDIN_RESPONSE_SHAPE,
    TIKTOK_PROMPT_TEMPLATE, TIKTOK_RESPONSE_SHAPE, TWITTER_PROMPT_TEMPLATE,
    TWITTER_RESPONSE_SHAPE, YOUTUBE_PROMPT_TEMPLATE, YOUTUBE_RESPONSE_SHAPE,
};

/// One registry entry: the natural-language template and the JSON shape the
/// Generation stage sends back to the model verbatim as the output-format
/// directive.
#[derive(Debug, Clone, Copy)]
pub struct PlatformTemplate {
    pub platform: Platform,
    pub prompt_template: &'static str,
    pub response_shape: &'static str,
}

static TEMPLATES: [PlatformTemplate; 6] = [
    PlatformTemplate {
        platform: Platform::Instagram,
        prompt_template: INSTAGRAM_PROMPT_TEMPLATE,
        response_shape: INSTAGRAM_RESPONSE_SHAPE,
    },
    PlatformTemplate {
        platform: Platform::Linkedin,
        prompt_template: LINKEDIN_PROMPT_TEMPLATE,
        response_shape: LINKEDIN_RESPONSE_SHAPE,
    },
    PlatformTemplate {
        platform: Platform::Youtube,
        prompt_template: YOUTUBE_PROMPT_TEMPLATE,
        response_shape: YOUTUBE_RESPONSE_SHAPE,
    },
    PlatformTemplate {
        platform: Platform::Twitter,
        prompt_template: TWITTER_PROMPT_TEMPLATE,
        response_shape: TWITTER_RESPONSE_SHAPE,
    },
    PlatformTemplate {
        platform: Platform::Tiktok,
        prompt_template: TIKTOK_PROMPT_TEMPLATE,
        response_shape: TIKTOK_RESPONSE_SHAPE,
    },
    PlatformTemplate {
        platform: Platform::Facebook,
        prompt_template: FACEBOOK_PROMPT_TEMPLATE,
        response_shape: FACEBOOK_RESPONSE_SHAPE,
    },
];

/// Total lookup: `Platform` is a closed enum, so every variant has an entry.
/// Unknown platform strings are rejected earlier, at `Platform::parse`.
pub fn template_for(platform: Platform) -> &'static PlatformTemplate {
    TEMPLATES
        .iter()
        .find(|t| t.platform == platform)
        .expect("registry covers every Platform variant")
}

/// Fully-built instruction prompt plus the machine-readable shape the
/// Generation stage appends as the output-format directive.
#[derive(Debug, Clone)]
pub struct PlatformPrompt {
    pub instruction: String,
    pub response_shape: &'static str,
}

/// Fills the platform template with the normalized content, the analysis
/// context, and the user's explicit preferences.
///
/// The detected tone from analysis always leads; an explicit tone preference
/// is appended as "(Preferred: ...)" — an override hint the model may blend,
/// not a hard constraint.
pub fn build_prompt(
    normalized_content: &str,
    selection: &SelectionParameters,
    analysis: &AnalysisResult,
) -> PlatformPrompt {
    let template = template_for(selection.platform);

    let mut tone_line = analysis.tone.join(", ");
    if let Some(tone) = selection.tone {
        tone_line.push_str(&format!(" (Preferred: {})", tone.as_str()));
    }

    let category_line = match selection.category {
        Some(category) => format!("Category: {}\n", category.as_str()),
        None => String::new(),
    };

    let instruction = template
        .prompt_template
        .replace("{content_type}", selection.content_type.as_str())
        .replace("{content}", normalized_content)
        .replace("{tone_line}", &tone_line)
        .replace("{audience}", &analysis.audience)
        .replace("{category_line}", &category_line)
        .replace("{language}", &selection.language);

    PlatformPrompt {
        instruction,
        response_shape: template.response_shape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::models::{Category, ContentType, Tone};
    use std::collections::BTreeSet;

    fn shape_keys(shape: &str) -> BTreeSet<String> {
        let value: serde_json::Value =
            serde_json::from_str(shape).expect("response shape must be valid JSON");
        value
            .as_object()
            .expect("response shape must be a JSON object")
            .keys()
            .cloned()
            .collect()
    }

    fn expected_keys(platform: Platform) -> BTreeSet<String> {
        let keys: &[&str] = match platform {
            Platform::Instagram => &["caption", "hashtags", "description"],
            Platform::Linkedin => &["title", "description", "hashtags"],
            Platform::Youtube => &["title", "description", "tags"],
            Platform::Twitter => &["tweet", "hashtags"],
            Platform::Tiktok => &["caption", "hashtags"],
            Platform::Facebook => &["post", "hashtags"],
        };
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_registry_shapes_match_expected_keys_for_all_platforms() {
        for platform in Platform::ALL {
            let template = template_for(platform);
            assert_eq!(
                shape_keys(template.response_shape),
                expected_keys(platform),
                "shape key mismatch for {}",
                platform.as_str()
            );
        }
    }

    #[test]
    fn test_registry_has_entry_per_platform() {
        for platform in Platform::ALL {
            assert_eq!(template_for(platform).platform, platform);
        }
    }

    fn selection(platform: Platform) -> SelectionParameters {
        SelectionParameters::new(platform, ContentType::Text, None, None, None)
    }

    #[test]
    fn test_build_prompt_embeds_content_and_language() {
        let analysis = AnalysisResult {
            tone: vec!["playful".to_string(), "warm".to_string()],
            audience: "young travelers".to_string(),
            strategy: "short-form hooks".to_string(),
        };
        let prompt = build_prompt("Sunset over the bay", &selection(Platform::Tiktok), &analysis);

        assert!(prompt.instruction.contains("Sunset over the bay"));
        assert!(prompt.instruction.contains("playful, warm"));
        assert!(prompt.instruction.contains("young travelers"));
        assert!(prompt.instruction.contains("Respond in English"));
        assert!(!prompt.instruction.contains('{'), "unfilled placeholder left");
    }

    #[test]
    fn test_build_prompt_appends_preferred_tone_as_hint() {
        let mut sel = selection(Platform::Instagram);
        sel.tone = Some(Tone::Promotional);
        let analysis = AnalysisResult {
            tone: vec!["casual".to_string()],
            ..Default::default()
        };
        let prompt = build_prompt("launch day", &sel, &analysis);
        assert!(prompt.instruction.contains("casual (Preferred: promotional)"));
    }

    #[test]
    fn test_build_prompt_category_line_only_when_present() {
        let analysis = AnalysisResult::default();

        let without = build_prompt("x", &selection(Platform::Facebook), &analysis);
        assert!(!without.instruction.contains("Category:"));

        let mut sel = selection(Platform::Facebook);
        sel.category = Some(Category::Travel);
        let with = build_prompt("x", &sel, &analysis);
        assert!(with.instruction.contains("Category: travel"));
    }
}
