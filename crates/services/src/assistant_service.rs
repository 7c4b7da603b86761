use std::env;
use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::error::AssistantError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// What the student asks the assistant to do with a piece of module text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantAction {
    Explain,
    Edit,
}

impl AssistantAction {
    pub const ALL: [AssistantAction; 2] = [AssistantAction::Explain, AssistantAction::Edit];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AssistantAction::Explain => "Explain",
            AssistantAction::Edit => "Edit",
        }
    }

    /// e.g. `Explain the following text:\n\n<selection>`.
    #[must_use]
    pub fn prompt(self, selection: &str) -> String {
        format!("{} the following text:\n\n{selection}", self.label())
    }
}

impl fmt::Display for AssistantAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug)]
pub struct AssistantConfig {
    pub base_url: Url,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl AssistantConfig {
    /// # Errors
    ///
    /// Returns `AssistantError::InvalidBaseUrl` if `base_url` does not parse.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, AssistantError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
            model: model.into(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `STUDYSYNC_AI_API_KEY`, `STUDYSYNC_AI_BASE_URL` and
    /// `STUDYSYNC_AI_MODEL`. Returns `None` without an API key or with an
    /// unusable base URL.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("STUDYSYNC_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("STUDYSYNC_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("STUDYSYNC_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Self::new(&base_url, api_key, model)
            .inspect_err(|err| log::warn!("assistant disabled: {err}"))
            .ok()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.base_url.as_str().trim_end_matches('/')
        )
    }
}

/// Chat-completion client behind the "Ask AI" buttons.
#[derive(Clone)]
pub struct AssistantService {
    client: Client,
    config: Option<AssistantConfig>,
}

impl AssistantService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AssistantConfig::from_env())
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None)
    }

    #[must_use]
    pub fn new(config: Option<AssistantConfig>) -> Self {
        let timeout = config.as_ref().map_or(DEFAULT_TIMEOUT, |config| config.timeout);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                log::warn!("falling back to default http client: {err}");
                Client::new()
            });
        Self { client, config }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Run `action` over `selection`.
    ///
    /// # Errors
    ///
    /// See [`AssistantService::ask`].
    pub async fn run(
        &self,
        action: AssistantAction,
        selection: &str,
        cancel: &CancellationToken,
    ) -> Result<String, AssistantError> {
        self.ask(&action.prompt(selection), cancel).await
    }

    /// Send `prompt` as a single user message and return the trimmed reply.
    ///
    /// Cancelling `cancel` drops the in-flight request.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Disabled` without configuration,
    /// `AssistantError::Cancelled` when `cancel` fires first,
    /// `AssistantError::TimedOut` when the client timeout elapses, and
    /// `HttpStatus`, `Http` or `EmptyResponse` for failed or empty replies.
    pub async fn ask(
        &self,
        prompt: &str,
        cancel: &CancellationToken,
    ) -> Result<String, AssistantError> {
        let config = self.config.as_ref().ok_or(AssistantError::Disabled)?;

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                log::info!("assistant request cancelled");
                Err(AssistantError::Cancelled)
            }
            result = self.complete(config, prompt) => result.map_err(|err| match err {
                AssistantError::Http(err) if err.is_timeout() => {
                    AssistantError::TimedOut(config.timeout)
                }
                other => other,
            }),
        }
    }

    async fn complete(
        &self,
        config: &AssistantConfig,
        prompt: &str,
    ) -> Result<String, AssistantError> {
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        log::debug!("assistant request to {} ({})", config.endpoint(), config.model);
        let response = self
            .client
            .post(config.endpoint())
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssistantError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(AssistantError::EmptyResponse)?;

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
