//! All LLM prompt constants for the content generation pipeline.
//!
//! Convention: every placeholder is `{snake_case}` and filled with
//! `str::replace` before the call. Prompt text always names the target
//! response language — the language contract is prompt-level only and is
//! not verified on the way back.

/// System prompt for the Analysis stage — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str = "You are a social media growth expert. \
    Analyze content and provide insights in JSON format only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Analysis prompt template.
/// Replace: {content}, {content_type}, {platform}, {tone_line},
///          {category_line}, {language}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following social media content and provide insights in JSON format:

Content: "{content}"
Content Type: {content_type}
Target Platform: {platform}
{tone_line}{category_line}Language: {language}

Provide analysis in this exact JSON format:
{
  "tone": ["tone1", "tone2", "tone3"],
  "audience": "target audience description",
  "strategy": "content strategy recommendation"
}

Focus on identifying emotional tone, target demographics, and engagement strategy. Respond in {language}."#;

/// Instruction for the vision call used during image normalization.
/// Replace: {language}
pub const IMAGE_ANALYSIS_PROMPT_TEMPLATE: &str = "Analyze this image for social media \
    content creation. Describe what you see, the mood, visual elements, and suggest \
    content ideas. Language: {language}";

/// System prompt for the Generation stage.
/// Replace: {platform}
pub const GENERATION_SYSTEM_TEMPLATE: &str = "You are a social media growth expert \
    specializing in {platform} optimization. Always respond with valid JSON only.";

// ────────────────────────────────────────────────────────────────────────────
// Per-platform generation templates
//
// Shared placeholders: {content_type}, {content}, {tone_line}, {audience},
// {category_line}, {language}. The matching response shape is the
// machine-readable half of the template pair — its keys are the contract
// the Generation stage enforces by deserializing into the typed payload.
// ────────────────────────────────────────────────────────────────────────────

pub const INSTAGRAM_PROMPT_TEMPLATE: &str = r#"Create Instagram-optimized content for this {content_type} post:
Content: "{content}"
Tone: {tone_line}
Audience: {audience}
{category_line}Language: {language}

Generate engaging Instagram content that matches the desired tone and encourages interaction.
Include emojis naturally within the caption. Respond in {language}."#;

pub const INSTAGRAM_RESPONSE_SHAPE: &str = r#"{
  "caption": "engaging Instagram caption with emojis",
  "hashtags": ["hashtag1", "hashtag2", "hashtag3", "hashtag4", "hashtag5"],
  "description": "brief bio-friendly description"
}"#;

pub const LINKEDIN_PROMPT_TEMPLATE: &str = r#"Create LinkedIn-optimized professional content for this {content_type} post:
Content: "{content}"
Tone: {tone_line}
Audience: {audience}
{category_line}Language: {language}

Generate professional LinkedIn content with SEO optimization that drives engagement.
Focus on value, insights, and professional growth. Respond in {language}."#;

pub const LINKEDIN_RESPONSE_SHAPE: &str = r#"{
  "title": "compelling professional title",
  "description": "detailed LinkedIn post with professional insights",
  "hashtags": ["professional1", "professional2", "professional3", "professional4", "professional5"]
}"#;

pub const YOUTUBE_PROMPT_TEMPLATE: &str = r#"Create YouTube-optimized content for this {content_type}:
Content: "{content}"
Tone: {tone_line}
Audience: {audience}
{category_line}Language: {language}

Generate SEO-optimized YouTube title, description, and tags that will rank well and attract clicks.
Include timestamps if applicable and call-to-action elements. Respond in {language}."#;

pub const YOUTUBE_RESPONSE_SHAPE: &str = r#"{
  "title": "SEO-optimized YouTube title under 60 characters",
  "description": "detailed YouTube description with timestamps, CTAs, and engagement hooks",
  "tags": ["tag1", "tag2", "tag3", "tag4", "tag5", "tag6", "tag7", "tag8", "tag9", "tag10"]
}"#;

pub const TWITTER_PROMPT_TEMPLATE: &str = r#"Create Twitter-optimized content for this {content_type} post:
Content: "{content}"
Tone: {tone_line}
Audience: {audience}
{category_line}Language: {language}

Generate concise, engaging Twitter content that fits character limits and drives retweets.
Respond in {language}."#;

pub const TWITTER_RESPONSE_SHAPE: &str = r#"{
  "tweet": "engaging tweet under 280 characters",
  "hashtags": ["hashtag1", "hashtag2", "hashtag3", "hashtag4", "hashtag5"]
}"#;

pub const TIKTOK_PROMPT_TEMPLATE: &str = r#"Create TikTok-optimized content for this {content_type}:
Content: "{content}"
Tone: {tone_line}
Audience: {audience}
{category_line}Language: {language}

Generate trendy TikTok caption with trending hashtags that will boost discoverability.
Respond in {language}."#;

pub const TIKTOK_RESPONSE_SHAPE: &str = r#"{
  "caption": "trendy TikTok caption with hooks",
  "hashtags": ["trending1", "trending2", "trending3", "trending4", "trending5"]
}"#;

pub const FACEBOOK_PROMPT_TEMPLATE: &str = r#"Create Facebook-optimized content for this {content_type} post:
Content: "{content}"
Tone: {tone_line}
Audience: {audience}
{category_line}Language: {language}

Generate Facebook content that encourages sharing and community engagement.
Respond in {language}."#;

pub const FACEBOOK_RESPONSE_SHAPE: &str = r#"{
  "post": "engaging Facebook post content",
  "hashtags": ["hashtag1", "hashtag2", "hashtag3", "hashtag4", "hashtag5"]
}"#;
