use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shepard_core::{
    error::{CompletionErrorKind, Error},
    llm::CompletionBackend,
    prompt,
};
use tracing::{info, warn};

/// Calls an OpenAI-compatible `chat/completions` endpoint.
///
/// One blocking-style exchange per run; no streaming, no tool use.
/// Low temperature because the output feeds a parser, not a reader.
pub struct OpenAiBackend {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiBackend {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    top_p: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

fn build_request(model: &str, user_prompt: &str) -> ChatRequest {
    let mut messages: Vec<ChatMessage> = prompt::SYSTEM_MESSAGES
        .iter()
        .map(|content| ChatMessage {
            role: "system".into(),
            content: (*content).into(),
        })
        .collect();
    messages.push(ChatMessage {
        role: "user".into(),
        content: user_prompt.into(),
    });

    ChatRequest {
        model: model.into(),
        messages,
        temperature: 0.1,
        top_p: 1.0,
    }
}

/// Map an API error status to a failure kind. The service reports an
/// unknown or not-enabled model as a 404 whose body names the model.
fn classify_error(status: reqwest::StatusCode, body: &str) -> CompletionErrorKind {
    use reqwest::StatusCode;
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionErrorKind::Auth,
        StatusCode::NOT_FOUND if body.contains("model") => CompletionErrorKind::ModelNotEnabled,
        _ => CompletionErrorKind::Transport,
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, user_prompt: &str) -> Result<String, Error> {
        let request_body = build_request(&self.model, user_prompt);
        let url = format!(
            "{}/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        info!(
            model = %self.model,
            prompt_len = user_prompt.len(),
            "calling chat completions API"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::completion(CompletionErrorKind::Transport, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let kind = classify_error(status, &body);
            warn!(status = %status, kind = %kind, "completion API returned error: {}", body);
            return Err(Error::completion(kind, format!("HTTP {status}: {body}")));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            Error::completion(
                CompletionErrorKind::Transport,
                format!("undecodable response body: {e}"),
            )
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                Error::completion(CompletionErrorKind::Transport, "response had no choices")
            })?;

        info!(response_len = content.len(), "completion response received");

        Ok(content)
    }
}
