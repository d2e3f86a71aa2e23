//! Ensembl VEP REST client
//!
//! Issues one `GET <base_url><variant>` per lookup and classifies the result.
//! There is no retry and no rate limiting beyond what the service enforces.

use super::annotator::{LookupOutcome, VariantAnnotator};
use crate::config::VepConfig;
use crate::domain::{RawAnnotation, Result, VariantId, VepServiceError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// VEP REST client
///
/// # Example
///
/// ```no_run
/// use vepflat::adapters::vep::{VariantAnnotator, VepClient};
/// use vepflat::config::VepConfig;
/// use vepflat::domain::VariantId;
///
/// # async fn example() -> vepflat::domain::Result<()> {
/// let client = VepClient::new(&VepConfig::default())?;
/// let variant = VariantId::new("NC_000001.11:g.40819893T>A").unwrap();
/// let outcome = client.lookup(&variant).await?;
/// # Ok(())
/// # }
/// ```
pub struct VepClient {
    /// Endpoint prefix, identifiers are appended verbatim
    base_url: String,

    /// HTTP client for making requests
    client: Client,
}

impl VepClient {
    /// Create a new client from configuration
    ///
    /// Timeouts of zero leave the corresponding client-side timeout unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &VepConfig) -> Result<Self> {
        let mut client_builder = ClientBuilder::new().user_agent(config.user_agent.as_str());

        if config.timeout_seconds > 0 {
            client_builder = client_builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        if config.connect_timeout_seconds > 0 {
            client_builder = client_builder
                .connect_timeout(Duration::from_secs(config.connect_timeout_seconds));
        }

        let client = client_builder
            .build()
            .map_err(|e| VepServiceError::ClientBuild(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// Request URL for a variant: base URL and identifier concatenated
    pub fn url_for(&self, variant: &VariantId) -> String {
        format!("{}{}", self.base_url, variant)
    }
}

#[async_trait]
impl VariantAnnotator for VepClient {
    async fn lookup(&self, variant: &VariantId) -> Result<LookupOutcome> {
        let url = self.url_for(variant);

        tracing::debug!(url = %url, variant = %variant, "Requesting annotation");

        let response = match self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Ok(classify_transport_error(&e)),
        };

        let status = response.status();
        let http_failure = (status.is_client_error() || status.is_server_error())
            .then(|| http_error_detail(status, response.url().as_str()));

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return Ok(classify_transport_error(&e)),
        };

        let json: Value = serde_json::from_slice(&body).map_err(|e| {
            VepServiceError::InvalidResponse {
                variant: variant.to_string(),
                message: format!("response body (status {status}) is not JSON: {e}"),
            }
        })?;

        match http_failure {
            Some(detail) => Ok(LookupOutcome::HttpError {
                status: status.as_u16(),
                detail,
                description: json,
            }),
            None => {
                let raw = RawAnnotation::from_json(variant.clone(), json).map_err(|message| {
                    VepServiceError::InvalidResponse {
                        variant: variant.to_string(),
                        message,
                    }
                })?;
                Ok(LookupOutcome::Success(raw))
            }
        }
    }

    fn endpoint(&self) -> &str {
        &self.base_url
    }
}

/// Classify a failure that happened before a complete response was received
///
/// Connection failures take precedence over timeouts, so a connect timeout
/// is reported as a connection error.
fn classify_transport_error(err: &reqwest::Error) -> LookupOutcome {
    let detail = describe_error(err);
    if err.is_connect() {
        LookupOutcome::ConnectionError(detail)
    } else if err.is_timeout() {
        LookupOutcome::TimeoutError(detail)
    } else {
        LookupOutcome::RequestError(detail)
    }
}

/// Status line in the form `404 Client Error: Not Found for url: <url>`
fn http_error_detail(status: StatusCode, url: &str) -> String {
    let class = if status.is_server_error() {
        "Server"
    } else {
        "Client"
    };
    let reason = status.canonical_reason().unwrap_or("Unknown");
    format!("{} {class} Error: {reason} for url: {url}", status.as_u16())
}

/// Error message followed by its source chain
fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
