#[cfg(test)]
#[path = "question_fetcher_test.rs"]
mod tests;

use super::Normalizer;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;
use crate::domain::models::FetchError;
use crate::domain::models::Prompt;
use crate::domain::models::SamplingOptions;
use crate::domain::models::TransportBox;

pub struct QuestionFetcher {
    transport: TransportBox,
    options: SamplingOptions,
}

impl QuestionFetcher {
    pub fn new(transport: TransportBox, options: SamplingOptions) -> QuestionFetcher {
        return QuestionFetcher { transport, options };
    }

    pub async fn health_check(&self) -> anyhow::Result<()> {
        return self.transport.health_check().await;
    }

    /// Runs the whole pipeline once: prompt, encode, send, validate, decode,
    /// normalize.
    pub async fn fetch(&self) -> Result<String, FetchError> {
        let body = ChatRequest::new(Prompt::messages(), &self.options).encode()?;

        tracing::debug!(model = self.options.model, "Requesting question");
        let res = self.transport.send(body).await?;
        let status = res.status;

        let content = ChatResponse::decode(&res.validate()?)?.first_content()?;
        tracing::debug!(status = status, content = content, "Received question");

        return Ok(Normalizer::question(&content));
    }
}
