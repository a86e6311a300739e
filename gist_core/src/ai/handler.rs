use async_trait::async_trait;

use super::dto::{ChatCompletionResponse, ComposerConfig};
use super::helpers::{build_chat_request, completions_url};
use super::prompt::get_prompt;
use crate::error::{GistError, GistResult};

/// Turns a document into a summary.
#[async_trait]
pub trait SummaryComposer: Send + Sync {
    async fn generate_summary(
        &self,
        document_name: &str,
        document_text: &str,
        config: &ComposerConfig,
    ) -> GistResult<String>;
}

/// Sends one chat-completion request per summary.
#[derive(Clone)]
pub struct ChatCompletionComposer {
    http: reqwest::Client,
    system_prompt: String,
}

impl ChatCompletionComposer {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            system_prompt: get_prompt(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

impl Default for ChatCompletionComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummaryComposer for ChatCompletionComposer {
    async fn generate_summary(
        &self,
        document_name: &str,
        document_text: &str,
        config: &ComposerConfig,
    ) -> GistResult<String> {
        let url = completions_url(&config.endpoint);
        let request = build_chat_request(
            &self.system_prompt,
            document_name,
            document_text,
            &config.model_name,
        );

        log::info!(
            "Requesting summary of '{}' ({} chars) from {} with model {}",
            document_name,
            document_text.len(),
            url,
            config.model_name
        );

        let res = self
            .http
            .post(&url)
            .bearer_auth(&config.token)
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(GistError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        let summary = parsed.into_first_content().ok_or(GistError::EmptyResponse)?;

        log::debug!("Summary response content: {}", summary);

        Ok(summary)
    }
}
