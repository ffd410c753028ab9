//! LLM-backed price checker over an OpenAI-compatible chat completions API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::prompt::{build_prompt, parse_anomalies};
use super::{PriceCheckItem, PriceChecker};
use crate::config::PriceCheckSettings;
use crate::error::{HourlyBuysError, HourlyBuysResult};
use crate::models::PriceAnomaly;

/// Price checker that asks a chat model to flag anomalous prices
pub struct LlmPriceChecker {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    threshold_percent: u32,
}

impl LlmPriceChecker {
    /// Build a checker from settings; the API key comes from the configured
    /// environment variable.
    pub fn from_settings(settings: &PriceCheckSettings) -> HourlyBuysResult<Self> {
        let api_key = settings.api_key().ok_or_else(|| {
            HourlyBuysError::PriceCheck(format!(
                "No API key configured (set {})",
                settings.api_key_env
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| {
                HourlyBuysError::PriceCheck(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            api_key,
            threshold_percent: settings.threshold_percent,
        })
    }

    async fn call_api(&self, prompt: &str) -> HourlyBuysResult<String> {
        debug!("Calling price check API with {} chars", prompt.len());

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: Some(0.2),
            response_format: Some(ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                HourlyBuysError::PriceCheck(format!(
                    "Failed to reach price check service: {}",
                    e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_http_error(status, &body));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            HourlyBuysError::PriceCheck(format!("Failed to parse API response: {}", e))
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| HourlyBuysError::PriceCheck("No response from API".into()))
    }
}

#[async_trait]
impl PriceChecker for LlmPriceChecker {
    async fn check(&self, items: &[PriceCheckItem]) -> HourlyBuysResult<Vec<PriceAnomaly>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        info!("Checking {} prices with model {}", items.len(), self.model);
        let prompt = build_prompt(items, self.threshold_percent);
        let content = self.call_api(&prompt).await?;
        let anomalies = parse_anomalies(&content)?;
        info!("Price check flagged {} anomalies", anomalies.len());
        Ok(anomalies)
    }
}

/// Map a non-success HTTP response to an error, separating overload from
/// other failures
fn classify_http_error(status: StatusCode, body: &str) -> HourlyBuysError {
    let lowered = body.to_lowercase();
    let message = format!("HTTP {}: {}", status, body.trim());

    if status == StatusCode::SERVICE_UNAVAILABLE
        || lowered.contains("service unavailable")
        || lowered.contains("overloaded")
    {
        HourlyBuysError::PriceCheckUnavailable(message)
    } else {
        HourlyBuysError::PriceCheck(message)
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
