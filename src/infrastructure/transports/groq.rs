#[cfg(test)]
#[path = "groq_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::FetchError;
use crate::domain::models::RawResponse;
use crate::domain::models::Transport;

fn convert_err(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::Transport("the request timed out".to_string());
    }

    return FetchError::Transport(err.to_string());
}

pub struct Groq {
    url: String,
    token: String,
    timeout: String,
}

impl Default for Groq {
    fn default() -> Groq {
        return Groq {
            url: Config::get(ConfigKey::GroqURL),
            token: Config::get(ConfigKey::GroqToken),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

#[async_trait]
impl Transport for Groq {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Groq URL is not defined");
        }
        if self.token.is_empty() {
            bail!("Groq token is not defined. Set it with --groq-token, PAUSE_GROQ_TOKEN, or groq-token in your config file");
        }
        if self.timeout.parse::<u64>().is_err() {
            bail!(format!(
                "request-timeout must be a number of milliseconds, got '{}'",
                self.timeout
            ));
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn send(&self, body: String) -> Result<RawResponse, FetchError> {
        let timeout = self.timeout.parse::<u64>().unwrap_or(15000);

        let res = reqwest::Client::new()
            .post(format!("{url}/v1/chat/completions", url = self.url))
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.token))
            .timeout(Duration::from_millis(timeout))
            .body(body)
            .send()
            .await
            .map_err(convert_err)?;

        let status = res.status().as_u16();
        if !res.status().is_success() {
            tracing::error!(status = status, "Groq completion request failed");
        }

        let body = res.text().await.map_err(convert_err)?;

        return Ok(RawResponse { status, body });
    }
}
