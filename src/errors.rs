/*!
 * Error types for the pdfbabel application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to a translation provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The requested language pair is not supported by the service
    #[error("Unsupported language pair: {source_lang} -> {target}")]
    UnsupportedLanguagePair {
        /// Source language code
        source_lang: String,
        /// Target language code
        target: String,
    },
}

/// Errors that can occur while reading or rendering a PDF document
#[derive(Error, Debug)]
pub enum PdfError {
    /// Error reading the document from disk
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be parsed as a PDF
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    /// The document contains no pages
    #[error("Document contains no pages")]
    NoPages,

    /// A page could not be rasterized for preview
    #[error("Failed to render page {page}: {reason}")]
    Render {
        /// Zero-based page index
        page: usize,
        /// Failure detail from the rendering backend
        reason: String,
    },

    /// The PDF rendering library could not be loaded
    #[error("PDF rendering library unavailable: {0}")]
    RendererUnavailable(String),
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The request did not complete within the configured timeout
    #[error("Translation timed out after {0} seconds")]
    Timeout(u64),
}

/// Errors that can occur while handing a draft to the mail client
#[derive(Error, Debug)]
pub enum MailError {
    /// No usable mail client could be reached
    #[error("Mail client unavailable: {0}")]
    ClientUnavailable(String),

    /// The draft itself was malformed
    #[error("Invalid mail draft: {0}")]
    InvalidDraft(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from PDF processing
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from the mail integration
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
