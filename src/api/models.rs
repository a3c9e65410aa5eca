use serde::{Deserialize, Serialize};

use crate::chat::models::ChatMessage;

/// Body of `POST /chat/messages` (JSON) and `POST /chat` (form).
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub accepted: bool,
    pub message: ChatMessage,
}

/// Query of `GET /chat`: a quick-question index or a raw draft to prefill.
#[derive(Debug, Default, Deserialize)]
pub struct ChatPageQuery {
    pub pick: Option<usize>,
    pub draft: Option<String>,
}
