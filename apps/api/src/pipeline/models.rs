//! Data model for the content generation pipeline.
//!
//! Everything here is constructed fresh per request and carries no identity
//! beyond the request's lifetime. Persistence of the final result is the
//! HTTP layer's concern, not the pipeline's.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::ProviderError;

// ────────────────────────────────────────────────────────────────────────────
// Selection enums
// ────────────────────────────────────────────────────────────────────────────

/// Target platform. Closed enumeration — an unknown platform string is
/// rejected at parse time, never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Linkedin,
    Youtube,
    Twitter,
    Tiktok,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Youtube,
        Platform::Twitter,
        Platform::Tiktok,
        Platform::Facebook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Youtube => "youtube",
            Platform::Twitter => "twitter",
            Platform::Tiktok => "tiktok",
            Platform::Facebook => "facebook",
        }
    }

    /// Parses the wire value. Failure is the `UnsupportedPlatform` condition:
    /// there is no template for an unknown platform, so it must never fall
    /// through to a default.
    pub fn parse(value: &str) -> Result<Self, PipelineError> {
        match value {
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::Linkedin),
            "youtube" => Ok(Platform::Youtube),
            "twitter" => Ok(Platform::Twitter),
            "tiktok" => Ok(Platform::Tiktok),
            "facebook" => Ok(Platform::Facebook),
            other => Err(PipelineError::UnsupportedPlatform(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Image,
    Text,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::Image => "image",
            ContentType::Text => "text",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "video" => Some(ContentType::Video),
            "image" => Some(ContentType::Image),
            "text" => Some(ContentType::Text),
            _ => None,
        }
    }
}

/// Explicit tone preference. Presented to the model as an override hint,
/// never a hard constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Funny,
    Motivational,
    Educational,
    Emotional,
    Inspiring,
    Promotional,
    Storytelling,
    Controversial,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Funny => "funny",
            Tone::Motivational => "motivational",
            Tone::Educational => "educational",
            Tone::Emotional => "emotional",
            Tone::Inspiring => "inspiring",
            Tone::Promotional => "promotional",
            Tone::Storytelling => "storytelling",
            Tone::Controversial => "controversial",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "professional" => Some(Tone::Professional),
            "casual" => Some(Tone::Casual),
            "funny" => Some(Tone::Funny),
            "motivational" => Some(Tone::Motivational),
            "educational" => Some(Tone::Educational),
            "emotional" => Some(Tone::Emotional),
            "inspiring" => Some(Tone::Inspiring),
            "promotional" => Some(Tone::Promotional),
            "storytelling" => Some(Tone::Storytelling),
            "controversial" => Some(Tone::Controversial),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Lifestyle,
    Technology,
    Health,
    Fitness,
    Food,
    Travel,
    Fashion,
    Education,
    Entertainment,
    News,
    Sports,
    Art,
    Music,
    Gaming,
    Personal,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Lifestyle => "lifestyle",
            Category::Technology => "technology",
            Category::Health => "health",
            Category::Fitness => "fitness",
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Fashion => "fashion",
            Category::Education => "education",
            Category::Entertainment => "entertainment",
            Category::News => "news",
            Category::Sports => "sports",
            Category::Art => "art",
            Category::Music => "music",
            Category::Gaming => "gaming",
            Category::Personal => "personal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "business" => Some(Category::Business),
            "lifestyle" => Some(Category::Lifestyle),
            "technology" => Some(Category::Technology),
            "health" => Some(Category::Health),
            "fitness" => Some(Category::Fitness),
            "food" => Some(Category::Food),
            "travel" => Some(Category::Travel),
            "fashion" => Some(Category::Fashion),
            "education" => Some(Category::Education),
            "entertainment" => Some(Category::Entertainment),
            "news" => Some(Category::News),
            "sports" => Some(Category::Sports),
            "art" => Some(Category::Art),
            "music" => Some(Category::Music),
            "gaming" => Some(Category::Gaming),
            "personal" => Some(Category::Personal),
            _ => None,
        }
    }
}

/// Immutable selection parameters for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionParameters {
    pub platform: Platform,
    pub content_type: ContentType,
    pub tone: Option<Tone>,
    pub category: Option<Category>,
    pub language: String,
}

impl SelectionParameters {
    pub fn new(
        platform: Platform,
        content_type: ContentType,
        tone: Option<Tone>,
        category: Option<Category>,
        language: Option<String>,
    ) -> Self {
        Self {
            platform,
            content_type,
            tone,
            category,
            language: language.unwrap_or_else(|| "English".to_string()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Submission
// ────────────────────────────────────────────────────────────────────────────

/// Broad modality of an uploaded file, derived from its declared mime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeCategory {
    Image,
    Video,
    Text,
    Other,
}

impl MimeCategory {
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            MimeCategory::Image
        } else if mime_type.starts_with("video/") {
            MimeCategory::Video
        } else if mime_type == "text/plain" {
            MimeCategory::Text
        } else {
            MimeCategory::Other
        }
    }
}

/// An uploaded file, fully read into memory by the HTTP layer.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn mime_category(&self) -> MimeCategory {
        MimeCategory::from_mime(&self.mime_type)
    }
}

/// The user's raw input for one request. Both fields may be absent; the
/// pipeline still attempts a best-effort generation on an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub text: Option<String>,
    pub file: Option<UploadedFile>,
}

// ────────────────────────────────────────────────────────────────────────────
// Stage outputs
// ────────────────────────────────────────────────────────────────────────────

/// Output of the Analysis stage. Every field defaults to empty so a
/// malformed or partial model reply degrades instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub tone: Vec<String>,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub strategy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstagramContent {
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedinContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YoutubeContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwitterContent {
    #[serde(default)]
    pub tweet: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TiktokContent {
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacebookContent {
    #[serde(default)]
    pub post: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

/// Platform-specific payload, externally tagged so it serializes as
/// `{"<platform>": { ... }}` — the platform name is the JSON key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformContent {
    Instagram(InstagramContent),
    Linkedin(LinkedinContent),
    Youtube(YoutubeContent),
    Twitter(TwitterContent),
    Tiktok(TiktokContent),
    Facebook(FacebookContent),
}

impl PlatformContent {
    /// All-empty payload for a platform. This is the degrade target when the
    /// model returns something unparseable for the Generation stage.
    pub fn empty(platform: Platform) -> Self {
        match platform {
            Platform::Instagram => PlatformContent::Instagram(InstagramContent::default()),
            Platform::Linkedin => PlatformContent::Linkedin(LinkedinContent::default()),
            Platform::Youtube => PlatformContent::Youtube(YoutubeContent::default()),
            Platform::Twitter => PlatformContent::Twitter(TwitterContent::default()),
            Platform::Tiktok => PlatformContent::Tiktok(TiktokContent::default()),
            Platform::Facebook => PlatformContent::Facebook(FacebookContent::default()),
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            PlatformContent::Instagram(_) => Platform::Instagram,
            PlatformContent::Linkedin(_) => Platform::Linkedin,
            PlatformContent::Youtube(_) => Platform::Youtube,
            PlatformContent::Twitter(_) => Platform::Twitter,
            PlatformContent::Tiktok(_) => Platform::Tiktok,
            PlatformContent::Facebook(_) => Platform::Facebook,
        }
    }
}

/// The single combined output of one pipeline run:
/// `{"analysis": {...}, "<platform>": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub analysis: AnalysisResult,
    #[serde(flatten)]
    pub content: PlatformContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Fatal pipeline failures. Malformed model output is NOT here — it is
/// absorbed per stage with empty defaults so the pipeline completes and the
/// caller renders whatever fields are present.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("file analysis failed: {0}")]
    Normalization(#[source] ProviderError),

    #[error("model provider unavailable: {0}")]
    Provider(#[from] ProviderError),
}

impl PipelineError {
    /// True when the failure came from the model provider, which the HTTP
    /// layer maps to a 503 rather than a 500.
    pub fn is_provider_unavailable(&self) -> bool {
        matches!(
            self,
            PipelineError::Normalization(_) | PipelineError::Provider(_)
        )
    }
}
