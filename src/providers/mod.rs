/*!
 * Provider implementations for the remote translation boundary.
 *
 * This module contains client implementations for translation services:
 * - LibreTranslate: self-hosted or hosted LibreTranslate-protocol server
 * - Mock: configurable in-process provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::language_utils::Language;

/// A single translation request handed to a provider
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    /// Text to translate, already sanitized
    pub text: String,
    /// Source language
    pub source: Language,
    /// Target language
    pub target: Language,
}

/// Common trait for all translation providers
///
/// Object safe so the application can hold an `Arc<dyn TranslationProvider>`
/// and swap the remote service for a mock in tests.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate the request text from its source to its target language
    ///
    /// # Arguments
    /// * `request` - The translation request to complete
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(&self, request: TranslationRequest) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Short provider name for logging
    fn name(&self) -> &'static str;
}

pub mod libretranslate;
pub mod mock;
