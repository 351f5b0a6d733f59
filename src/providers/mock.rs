/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock translation provider that simulates different
 * behaviors:
 * - `MockTranslator::working()` - Always succeeds with translated text
 * - `MockTranslator::failing()` - Always fails with an API error
 * - `MockTranslator::slow(ms)` - Succeeds after a delay (for timeout tests)
 *
 * Every request the mock receives is recorded so tests can assert how many
 * requests a flow issued and exactly what they carried.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::{TranslationProvider, TranslationRequest};

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a tagged translation
    Working,
    /// Always fails with an API error
    Failing,
    /// Returns an empty translation
    Empty,
    /// Succeeds after the given delay
    Slow {
        /// Delay before responding, in milliseconds
        delay_ms: u64,
    },
}

/// Mock translation provider for testing controller and service behavior
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Every request received, in order
    requests: Arc<Mutex<Vec<TranslationRequest>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&TranslationRequest) -> String>,
}

impl MockTranslator {
    /// Create a new mock with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    /// Create a working mock that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns empty translations
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock that responds after a delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&TranslationRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Snapshot of every request received so far
    pub fn recorded_requests(&self) -> Vec<TranslationRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("request log poisoned").len()
    }
}

impl Clone for MockTranslator {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            requests: Arc::clone(&self.requests),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate(&self, request: TranslationRequest) -> Result<String, ProviderError> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request.clone());

        match self.behavior {
            MockBehavior::Working => {
                let text = if let Some(generator) = self.custom_response {
                    generator(&request)
                } else {
                    format!("[{}] {}", request.target.code(), request.text)
                };
                Ok(text)
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::Empty => Ok(String::new()),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(format!("[{}] {}", request.target.code(), request.text))
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
