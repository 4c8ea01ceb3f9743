use async_openai::{
    Client,
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use tracing::debug;

/// The two conversational roles the generative backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    /// The lowercase role name used on the backend wire.
    pub fn as_str(self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Model => "model",
        }
    }

    /// The capitalized role name used when rendering history into a prompt.
    pub fn display_name(self) -> &'static str {
        match self {
            TurnRole::User => "User",
            TurnRole::Model => "Model",
        }
    }
}

/// One entry of the ordered turn history sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            text: text.into(),
        }
    }
}

/// A failed call to the generative backend. Covers transport errors as
/// well as structurally unusable output (no choices, empty content).
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("backend request failed: {0}")]
    Backend(#[from] OpenAIError),
    #[error("backend returned an empty reply")]
    EmptyReply,
}

/// A generic client for the generative-text backend.
///
/// The orchestrator receives this as an injected handle whose lifecycle
/// is owned by process startup, never as process-global state.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Produces one text reply for the given system instruction and
    /// ordered turn history.
    async fn generate(
        &self,
        system_instruction: Option<&str>,
        turns: &[Turn],
    ) -> Result<String, GenerationError>;
}

/// An implementation of `LlmClient` for any OpenAI-compatible API.
pub struct OpenAICompatibleClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAICompatibleClient {
    /// Creates a new client for an OpenAI-compatible service.
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration for the OpenAI client, including API key and base URL.
    /// * `model` - The specific model identifier to use for chat completions (e.g., "gpt-4o").
    pub fn new(config: OpenAIConfig, model: String) -> Self {
        Self {
            client: Client::with_config(config),
            model,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAICompatibleClient {
    async fn generate(
        &self,
        system_instruction: Option<&str>,
        turns: &[Turn],
    ) -> Result<String, GenerationError> {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::with_capacity(turns.len() + 1);

        if let Some(instruction) = system_instruction {
            messages.push(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(instruction)
                    .build()?
                    .into(),
            );
        }

        for turn in turns {
            let message: ChatCompletionRequestMessage = match turn.role {
                TurnRole::User => ChatCompletionRequestUserMessageArgs::default()
                    .content(turn.text.as_str())
                    .build()?
                    .into(),
                TurnRole::Model => ChatCompletionRequestAssistantMessageArgs::default()
                    .content(turn.text.as_str())
                    .build()?
                    .into(),
            };
            messages.push(message);
        }

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()?;

        debug!(model = %self.model, turns = turns.len(), "Dispatching generation request");
        let response = self.client.chat().create(request).await?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
            .ok_or(GenerationError::EmptyReply)?;

        Ok(content.to_string())
    }
}
