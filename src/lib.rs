/*!
 * # pdfbabel
 *
 * A desktop utility for translating PDF documents.
 *
 * ## Features
 *
 * - Extract per-page plain text from PDF files
 * - Sanitize numeric identifiers before text leaves the process
 * - Translate via a remote translation service (LibreTranslate protocol)
 * - Render bounded-size page previews for on-screen display
 * - Hand the translated text to the local mail client as a draft with the
 *   original document attached
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: In-memory configuration and defaults
 * - `document_processor`: PDF text extraction
 * - `preview_renderer`: PDF page rasterization for the preview pane
 * - `sanitize`: Digit-run sanitization
 * - `translation_service`: Sanitization + timeout wrapper around a provider
 * - `providers`: Translation service clients:
 *   - `providers::libretranslate`: LibreTranslate-protocol client
 *   - `providers::mock`: Configurable mock for tests
 * - `mail_composer`: Outgoing draft composition and client handoff
 * - `app_controller`: Workflow state machine driven by the view
 * - `app_view`: egui projection of the controller state
 * - `language_utils`: The fixed supported-language set
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod app_view;
pub mod document_processor;
pub mod errors;
pub mod language_utils;
pub mod mail_composer;
pub mod preview_renderer;
pub mod providers;
pub mod sanitize;
pub mod translation_service;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{AppController, AppState};
pub use document_processor::PageTextCollection;
pub use errors::{AppError, MailError, PdfError, ProviderError, TranslationError};
pub use language_utils::Language;
pub use sanitize::sanitize_text;
pub use translation_service::TranslationService;
