use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the `content_requests` table: the user's submission parameters
/// plus, once the pipeline has run, the generated content JSON.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentRequestRow {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub content: Option<String>,
    pub platform: String,
    pub content_type: String,
    pub tone: Option<String>,
    pub category: Option<String>,
    pub language: String,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub generated_content: Option<Value>,
    pub created_at: DateTime<Utc>,
}
