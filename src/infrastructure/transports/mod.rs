pub mod groq;

use anyhow::Result;

use crate::domain::models::SamplingOptions;
use crate::domain::models::TransportBox;
use crate::domain::services::QuestionFetcher;

pub struct TransportManager {}

impl TransportManager {
    pub fn get() -> TransportBox {
        return Box::<groq::Groq>::default();
    }

    /// Builds a fetcher from the loaded config and refuses to continue
    /// without a usable endpoint and credential.
    pub async fn fetcher() -> Result<QuestionFetcher> {
        let fetcher = QuestionFetcher::new(TransportManager::get(), SamplingOptions::from_config()?);
        fetcher.health_check().await?;

        return Ok(fetcher);
    }
}
