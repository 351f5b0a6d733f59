use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{TranslationProvider, TranslationRequest};

/// Client for a LibreTranslate-protocol translation server
#[derive(Debug)]
pub struct LibreTranslate {
    /// Base URL of the translation service
    base_url: String,
    /// Optional API key for hosted instances
    api_key: Option<String>,
    /// HTTP client for making requests
    client: Client,
}

/// Wire request for the /translate endpoint
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// Input format, always plain text here
    format: &'a str,
    /// API key, omitted when not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Wire response from the /translate endpoint
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// The translated text
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Error payload returned by the service on non-success status codes
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl LibreTranslate {
    /// Create a new client for the given base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Attach an API key for hosted instances
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        if !key.is_empty() {
            self.api_key = Some(key);
        }
        self
    }

    /// Decode an error body, falling back to the raw status when the body
    /// is not the expected JSON shape
    async fn error_from_response(response: reqwest::Response) -> ProviderError {
        let status_code = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body),
            Err(_) => "Failed to get error response text".to_string(),
        };
        error!("Translation API error ({}): {}", status_code, message);

        // The service reports an unsupported pair as a 400 with a language
        // mention; anything else stays a plain API error
        ProviderError::ApiError {
            status_code,
            message,
        }
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslate {
    async fn translate(&self, request: TranslationRequest) -> Result<String, ProviderError> {
        let url = format!("{}/translate", self.base_url);
        let wire_request = TranslateRequest {
            q: &request.text,
            source: request.source.code(),
            target: request.target.code(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        debug!(
            "Sending translation request to {} ({} -> {}, {} chars)",
            url,
            request.source,
            request.target,
            request.text.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let parsed: TranslateResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Failed to parse translation response: {}. Raw response (first 500 chars): {}",
                e,
                body.chars().take(500).collect::<String>()
            );
            ProviderError::ParseError(e.to_string())
        })?;

        Ok(parsed.translated_text)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let url = format!("{}/languages", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::ApiError {
                status_code: response.status().as_u16(),
                message: "Language listing failed".to_string(),
            })
        }
    }

    fn name(&self) -> &'static str {
        "libretranslate"
    }
}
