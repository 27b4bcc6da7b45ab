//! External advisory service contract.
//!
//! The remote service accepts the same input tuple as the local estimator
//! and returns `{yieldIncrease, profit, fertilizerPlan, carePlan}`. Payload
//! parsing and validation are always compiled in; the async HTTP client is
//! behind the `remote` feature. The local estimator remains a complete
//! substitute whenever the service is absent, erroring, or returns a
//! structurally invalid payload. Such payloads are rejected whole as a
//! `ResponseFormat` error, never partially accepted.

use serde::{Deserialize, Serialize};

use crate::crop::Crop;
use crate::error::AdvisorError;
use crate::soil::SoilReading;

/// Request body for the advisory service.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryRequest {
    pub soil: SoilReading,
    pub crop: Crop,

    /// Field area in hectares
    pub area: f64,

    /// Center label, e.g. "62.02720, 129.73210"
    pub center: String,
}

/// Advisory payload. All four fields are required; serde rejects missing or
/// mis-typed fields, and [`AdvisoryResponse::validate`] rejects non-finite
/// numbers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AdvisoryResponse {
    #[serde(rename = "yieldIncrease")]
    pub yield_increase: f64,

    pub profit: f64,

    #[serde(rename = "fertilizerPlan")]
    pub fertilizer_plan: String,

    /// Care tasks as newline-separated items
    #[serde(rename = "carePlan")]
    pub care_plan: String,
}

impl AdvisoryResponse {
    /// Reject payloads whose numbers cannot be trusted.
    pub fn validate(&self) -> Result<(), AdvisorError> {
        if !self.yield_increase.is_finite() {
            return Err(AdvisorError::response_format("yieldIncrease is not a finite number"));
        }
        if !self.profit.is_finite() {
            return Err(AdvisorError::response_format("profit is not a finite number"));
        }
        Ok(())
    }

    /// Care tasks split out of the newline-separated field, blanks dropped.
    pub fn care_tasks(&self) -> Vec<String> {
        self.care_plan
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Strip a surrounding markdown code fence, if any. Advisory backends that
/// proxy an LLM sometimes wrap the JSON body in ```json fences despite being
/// asked not to.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse and validate an advisory payload.
///
/// Any structural problem (malformed JSON, missing field, wrong field type,
/// non-finite number) rejects the whole payload.
pub fn parse_advisory_payload(text: &str) -> Result<AdvisoryResponse, AdvisorError> {
    let body = strip_code_fence(text);
    let response: AdvisoryResponse = serde_json::from_str(body)
        .map_err(|e| AdvisorError::response_format(format!("invalid advisory JSON: {e}")))?;
    response.validate()?;
    Ok(response)
}

#[cfg(feature = "remote")]
pub use client::AdvisoryClient;

#[cfg(feature = "remote")]
mod client {
    use super::{parse_advisory_payload, AdvisoryRequest, AdvisoryResponse};
    use crate::error::AdvisorError;

    /// Async client for the advisory service. One outbound request per user
    /// action, fail-fast: no retry, no backoff. Callers fall back to the
    /// local estimator on any error.
    pub struct AdvisoryClient {
        endpoint: String,
        client: reqwest::Client,
    }

    impl AdvisoryClient {
        pub fn new(endpoint: impl Into<String>) -> Self {
            Self { endpoint: endpoint.into(), client: reqwest::Client::new() }
        }

        /// POST the request and parse the advisory payload.
        pub async fn fetch(&self, request: &AdvisoryRequest) -> Result<AdvisoryResponse, AdvisorError> {
            let resp = self
                .client
                .post(&self.endpoint)
                .header("Content-Type", "application/json")
                .json(request)
                .send()
                .await?;

            let status = resp.status();
            let body = resp.text().await?;

            if !status.is_success() {
                tracing::warn!("advisory service returned {}: {}", status, body);
                return Err(AdvisorError::response_format(format!(
                    "advisory service error (HTTP {status})"
                )));
            }

            parse_advisory_payload(&body).inspect_err(|e| {
                tracing::warn!("rejected advisory payload: {}", e);
            })
        }
    }
}
