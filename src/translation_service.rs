/*!
 * Translation service sitting between the controller and the provider.
 *
 * Sanitizes the outgoing text, bounds the round trip with a timeout, and
 * maps provider failures into [`TranslationError`] so the controller can
 * surface them through the status line.
 */

use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::errors::TranslationError;
use crate::language_utils::Language;
use crate::providers::libretranslate::LibreTranslate;
use crate::providers::{TranslationProvider, TranslationRequest};
use crate::sanitize::sanitize_text;

/// Translation service wrapping a provider with sanitization and a timeout
#[derive(Clone)]
pub struct TranslationService {
    /// The provider performing the remote call
    provider: Arc<dyn TranslationProvider>,
    /// Upper bound on a single round trip
    request_timeout: Duration,
}

impl TranslationService {
    /// Create a service around an existing provider
    pub fn new(provider: Arc<dyn TranslationProvider>, request_timeout: Duration) -> Self {
        Self {
            provider,
            request_timeout,
        }
    }

    /// Create a service from the application configuration, using the
    /// LibreTranslate-protocol provider
    pub fn from_config(config: &Config) -> Self {
        let provider = LibreTranslate::new(
            config.translation.endpoint.clone(),
            Duration::from_secs(config.translation.timeout_secs),
        )
        .with_api_key(config.translation.api_key.clone());

        Self::new(
            Arc::new(provider),
            Duration::from_secs(config.translation.timeout_secs),
        )
    }

    /// Sanitize `text` and translate it from `source` to `target`.
    ///
    /// Digit runs are replaced before the text leaves the process. The call
    /// is bounded by the configured timeout; exceeding it yields
    /// [`TranslationError::Timeout`] instead of hanging.
    pub async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslationError> {
        let sanitized = sanitize_text(text);
        debug!(
            "Translating {} chars via {} ({} -> {})",
            sanitized.len(),
            self.provider.name(),
            source,
            target
        );

        let request = TranslationRequest {
            text: sanitized,
            source,
            target,
        };

        let translated =
            match tokio::time::timeout(self.request_timeout, self.provider.translate(request))
                .await
            {
                Ok(result) => result?,
                Err(_) => {
                    return Err(TranslationError::Timeout(self.request_timeout.as_secs()));
                }
            };

        info!(
            "Translation finished ({} -> {}, {} chars)",
            source,
            target,
            translated.len()
        );
        Ok(translated)
    }

    /// Timeout applied to each translation round trip
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
