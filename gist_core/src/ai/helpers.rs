use super::dto::{ChatCompletionRequest, ChatMessage, Role, MAX_TOKENS, TEMPERATURE, TOP_P};

pub fn build_user_message(document_name: &str, document_text: &str) -> String {
    format!("{}\n{}", document_name, document_text)
}

pub fn completions_url(endpoint: &str) -> String {
    format!("{}/chat/completions", endpoint.trim_end_matches('/'))
}

pub fn build_chat_request(
    system_prompt: &str,
    document_name: &str,
    document_text: &str,
    model: &str,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: Role::System,
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: build_user_message(document_name, document_text),
            },
        ],
        temperature: TEMPERATURE,
        top_p: TOP_P,
        max_tokens: MAX_TOKENS,
    }
}
