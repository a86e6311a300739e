use serde::{Deserialize, Serialize};

use crate::settings::dto::SummarySettings;

/// Name sent when the host has no display name for the document.
pub const DEFAULT_DOCUMENT_NAME: &str = "Untitled";

pub const TEMPERATURE: f32 = 1.0;
pub const TOP_P: f32 = 1.0;
pub const MAX_TOKENS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerConfig {
    pub endpoint: String,
    pub token: String,
    pub model_name: String,
}

impl From<&SummarySettings> for ComposerConfig {
    fn from(settings: &SummarySettings) -> Self {
        ComposerConfig {
            endpoint: settings.endpoint.clone(),
            token: settings.token.clone(),
            model_name: settings.model.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

#[derive(Deserialize, Debug)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, exactly as returned.
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}
