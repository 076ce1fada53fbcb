#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use super::FetchError;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// Groq rejects requests carrying more stop sequences than this.
pub const MAX_STOP_SEQUENCES: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: &str) -> ChatMessage {
        return ChatMessage {
            role,
            content: content.to_string(),
        };
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SamplingOptions {
    pub model: String,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub stop: Option<Vec<String>>,
}

impl Default for SamplingOptions {
    fn default() -> SamplingOptions {
        return SamplingOptions {
            model: "llama-3.1-8b-instant".to_string(),
            temperature: Some(0.7),
            max_tokens: Some(120),
            stop: Some(vec!["\n\n".to_string()]),
        };
    }
}

impl SamplingOptions {
    pub fn from_config() -> Result<SamplingOptions> {
        return SamplingOptions::parse(
            &Config::get(ConfigKey::Model),
            &Config::get(ConfigKey::Temperature),
            &Config::get(ConfigKey::MaxTokens),
        );
    }

    /// Empty values leave the option unset so the vendor default applies.
    pub fn parse(
        model: &str,
        temperature: &str,
        max_tokens: &str,
    ) -> Result<SamplingOptions> {
        if model.is_empty() {
            bail!("A model must be configured");
        }

        let mut options = SamplingOptions {
            model: model.to_string(),
            temperature: None,
            max_tokens: None,
            ..SamplingOptions::default()
        };

        if !temperature.is_empty() {
            let val = temperature.parse::<f64>().with_context(|| {
                return format!("temperature must be a number, got '{temperature}'");
            })?;
            options.temperature = Some(val);
        }

        if !max_tokens.is_empty() {
            let val = max_tokens.parse::<u32>().with_context(|| {
                return format!("max-tokens must be a positive integer, got '{max_tokens}'");
            })?;
            options.max_tokens = Some(val);
        }

        return Ok(options);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    stream: bool,
    pub stop: Option<Vec<String>>,
}

impl ChatRequest {
    /// Builds a non-streaming request. Responses are decoded as a single
    /// buffered body, so `stream` is never exposed to callers.
    pub fn new(messages: Vec<ChatMessage>, options: &SamplingOptions) -> ChatRequest {
        return ChatRequest {
            messages,
            model: options.model.to_string(),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            stream: false,
            stop: options.stop.clone(),
        };
    }

    pub fn encode(&self) -> Result<String, FetchError> {
        if let Some(stop) = &self.stop {
            if stop.len() > MAX_STOP_SEQUENCES {
                return Err(FetchError::Encoding(format!(
                    "{} stop sequences were provided, at most {MAX_STOP_SEQUENCES} are allowed",
                    stop.len()
                )));
            }
        }

        return serde_json::to_string(self).map_err(|err| {
            return FetchError::Encoding(err.to_string());
        });
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    pub role: Role,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    pub index: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub model: String,
}

impl ChatResponse {
    pub fn decode(body: &str) -> Result<ChatResponse, FetchError> {
        return Ok(serde_json::from_str::<ChatResponse>(body)?);
    }

    /// Content of the first choice, verbatim.
    pub fn first_content(&self) -> Result<String, FetchError> {
        let content = self
            .choices
            .first()
            .and_then(|choice| return choice.message.content.as_ref());

        match content {
            Some(text) => return Ok(text.to_string()),
            None => return Err(FetchError::EmptyResult),
        }
    }
}
