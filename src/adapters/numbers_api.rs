use crate::domain::model::FunFact;
use crate::domain::ports::FactProvider;
use crate::utils::error::{ClassifierError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://numbersapi.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const CATEGORY: &str = "math";

/// Fun facts from the Numbers API (`GET {base}/{n}/math?json`).
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    client: Client,
    base_url: String,
}

impl NumbersApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn fact_url(&self, number: i64) -> String {
        format!("{}/{}/{}?json", self.base_url, number, CATEGORY)
    }

    async fn fetch_text(&self, number: i64) -> Result<Option<String>> {
        let url = self.fact_url(number);
        tracing::debug!("Requesting fun fact from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Fun fact response status: {}", status);

        if status != StatusCode::OK {
            return Err(ClassifierError::UpstreamUnavailable {
                message: format!("unexpected status {} from {}", status, url),
            });
        }

        let body: serde_json::Value = response.json().await?;
        Ok(body
            .get("text")
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }
}

#[async_trait]
impl FactProvider for NumbersApiClient {
    async fn lookup(&self, number: i64) -> FunFact {
        match self.fetch_text(number).await {
            Ok(text) => {
                let fact = FunFact::from_text(number, text);
                if fact.is_fallback() {
                    tracing::debug!("No usable fun fact text for {}", number);
                }
                fact
            }
            Err(e) => {
                tracing::warn!("⚠️ Fun fact lookup for {} failed: {}", number, e);
                FunFact::Fallback(number)
            }
        }
    }
}
