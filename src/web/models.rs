use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub interests: String,
    pub industry: String,
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub ideas: Vec<String>,
    pub session_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub session_id: Uuid,
    /// Index into the session's current idea batch.
    pub idea_index: usize,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub industry: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: String,
    pub session_id: Uuid,
}
