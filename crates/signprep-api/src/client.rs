//! Blocking HTTP client for the e-signature provider.

use crate::payload::{
    SubmissionRequest, SubmissionResponse, TemplateRequest, TemplateResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors from provider API calls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, malformed response)
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The provider rejected the request
    #[error("provider returned {status}: {message}")]
    ProviderError {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        message: String,
    },
}

/// Type alias for [`Result<T, ApiError>`].
pub type Result<T> = std::result::Result<T, ApiError>;

/// Blocking client for the provider's template and submission endpoints.
///
/// Authentication uses the provider's token header on every request.
#[derive(Debug, Clone)]
pub struct EsignClient {
    base_url: String,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl EsignClient {
    /// Create a client for the given API base URL and token.
    #[must_use = "creates a client that should be used for API calls"]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Create a signable template from documents and fields.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success provider
    /// response.
    pub fn create_template(&self, request: &TemplateRequest) -> Result<TemplateResponse> {
        log::info!(
            "creating template {:?} with {} document(s), {} field(s)",
            request.name,
            request.documents.len(),
            request.fields.len()
        );
        self.post("/templates", request)
    }

    /// Create a submission (signing request) from an existing template.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success provider
    /// response.
    pub fn create_submission(&self, request: &SubmissionRequest) -> Result<SubmissionResponse> {
        log::info!(
            "creating submission for template {} with {} submitter(s)",
            request.template_id,
            request.submitters.len()
        );
        self.post("/submissions", request)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("X-Auth-Token", &self.api_key)
            .json(body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            log::warn!("provider call {url} failed with {status}");
            return Err(ApiError::ProviderError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = EsignClient::new("https://api.example.com/", "key");
        assert_eq!(client.base_url, "https://api.example.com");
    }

    #[test]
    fn test_provider_error_display() {
        let error = ApiError::ProviderError {
            status: 422,
            message: "missing documents".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "provider returned 422: missing documents"
        );
    }
}
