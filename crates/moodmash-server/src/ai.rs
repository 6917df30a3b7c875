//! Client for the generative-text collaborator.
//!
//! Talks to an OpenAI-compatible chat-completions endpoint and asks for a
//! vibe as a JSON object. Every failure mode here is recoverable: the
//! generation handler substitutes the deterministic fallback record and
//! the end caller never sees a hard error from this path.

use moodmash_core::{GeneratedVibe, NormalizedHandle, VibeType};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::ServerConfig;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Generation endpoint returned {0}")]
    Status(reqwest::StatusCode),

    #[error("Response contained no choices")]
    EmptyResponse,

    #[error("Generated content was not valid JSON: {0}")]
    InvalidContent(#[from] serde_json::Error),
}

const SYSTEM_PROMPT: &str =
    "You are a creative vibe generator that creates fun, chaotic digital aesthetics.";

/// Request a creative, unexpected, shareable vibe as strict JSON.
fn user_prompt(handle: &NormalizedHandle) -> String {
    let categories = VibeType::ALL
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Generate a creative, fun \"vibe\" for social media user @{handle}.\n\
         Return a JSON object with the following properties:\n\
         - quote: A unique, chaotic or fun quote that represents their vibe (witty, absurd, or philosophical)\n\
         - vibeType: One of [{categories}]\n\
         - colorPalette: Array of 3 hex color codes that match the vibe\n\
         - music: A specific music recommendation that matches the vibe (can be genre, artist, or specific song)\n\
         - emojiSet: Array of 5 emojis that represent the vibe\n\
         - background: A text description of a visual background pattern that fits the vibe\n\n\
         Make it creative, unexpected, and shareable. DO NOT include any explanation, ONLY return the valid JSON."
    )
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Generative-text client. Constructed once at startup; absent when no
/// API key is configured.
pub struct VibeGenerator {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl VibeGenerator {
    /// Build a generator from the server configuration. Returns `None`
    /// when no API key is set, putting the server in fallback-only mode.
    pub fn from_config(config: &ServerConfig) -> Option<Self> {
        config.ai_api_key.as_ref().map(|key| Self {
            http: reqwest::Client::new(),
            api_url: config.ai_api_url.clone(),
            api_key: key.clone(),
            model: config.ai_model.clone(),
        })
    }

    /// Ask the collaborator for a vibe. The result is untrusted: the
    /// caller reconciles it against the locally derived category.
    pub async fn generate(&self, handle: &NormalizedHandle) -> Result<GeneratedVibe, AiError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt(handle),
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: 0.9,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AiError::Status(response.status()));
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AiError::EmptyResponse)?;

        debug!(handle = %handle, bytes = content.len(), "generated vibe content");

        let generated: GeneratedVibe = serde_json::from_str(&content)?;
        Ok(generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_handle_and_every_category() {
        let handle = NormalizedHandle::parse("owl99").unwrap();
        let prompt = user_prompt(&handle);

        assert!(prompt.contains("@owl99"));
        for vibe in VibeType::ALL {
            assert!(prompt.contains(vibe.as_str()), "missing {vibe}");
        }
    }

    #[test]
    fn generator_requires_api_key() {
        let config = ServerConfig::default();
        assert!(VibeGenerator::from_config(&config).is_none());

        let config = ServerConfig {
            ai_api_key: Some("sk-test".to_string()),
            ..ServerConfig::default()
        };
        assert!(VibeGenerator::from_config(&config).is_some());
    }
}
