use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::document_processor::{is_supported_document, PageTextCollection};
use crate::errors::TranslationError;
use crate::language_utils::Language;
use crate::mail_composer::{MailComposer, MailDraft};
use crate::preview_renderer::{PagePreview, PageRenderer};
use crate::translation_service::TranslationService;

// @module: Application controller for the PDF translation workflow

/// Number of leading pages whose text seeds the translation pane on browse
const SEED_PAGE_COUNT: usize = 5;

/// Discrete state of the interactive workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// No file chosen
    Idle,
    /// Path and preview populated, no translation yet
    FileLoaded,
    /// Translation request in flight
    Translating,
    /// Translation text populated
    Translated,
}

/// Severity of the single status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Neutral progress or input guidance
    Info,
    /// Completed operation
    Success,
    /// Failed operation
    Error,
}

/// The one user-visible status message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    /// Severity, used by the view for coloring
    pub level: StatusLevel,
    /// Message text
    pub text: String,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// An in-flight translation request
struct TranslationJob {
    /// Spawned task driving the remote call
    handle: JoinHandle<()>,
    /// Channel the task reports its outcome on
    receiver: mpsc::UnboundedReceiver<Result<String, TranslationError>>,
}

/// Main application controller.
///
/// Owns every piece of interactive state. Event handlers mutate this state
/// and the view projects it onto widgets each frame; no handler touches a
/// widget directly. The translation call runs on a spawned task so the
/// interface stays responsive, and [`AppController::poll`] folds the result
/// back in from the frame loop.
pub struct AppController {
    state: AppState,
    /// Contents of the file-path field; empty when nothing is chosen
    path_input: String,
    source_language: Language,
    target_language: Language,
    /// Rasterized preview pages, replaced wholesale on every browse
    preview: Vec<PagePreview>,
    /// Contents of the translation pane; user-editable in the view
    translation: String,
    status: Option<StatusMessage>,
    service: TranslationService,
    renderer: Box<dyn PageRenderer>,
    composer: Box<dyn MailComposer>,
    job: Option<TranslationJob>,
}

impl AppController {
    /// Create a controller with its collaborators and default languages
    pub fn new(
        service: TranslationService,
        renderer: Box<dyn PageRenderer>,
        composer: Box<dyn MailComposer>,
        source_language: Language,
        target_language: Language,
    ) -> Self {
        Self {
            state: AppState::Idle,
            path_input: String::new(),
            source_language,
            target_language,
            preview: Vec::new(),
            translation: String::new(),
            status: None,
            service,
            renderer,
            composer,
            job: None,
        }
    }

    /// Current workflow state
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Current contents of the file-path field
    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    /// Mutable access for the view's path text field
    pub fn path_input_mut(&mut self) -> &mut String {
        &mut self.path_input
    }

    /// Selected source language
    pub fn source_language(&self) -> Language {
        self.source_language
    }

    /// Selected target language
    pub fn target_language(&self) -> Language {
        self.target_language
    }

    /// Preview images for the currently loaded document
    pub fn preview(&self) -> &[PagePreview] {
        &self.preview
    }

    /// Current translation pane contents
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Mutable access for the view's translation text area
    pub fn translation_mut(&mut self) -> &mut String {
        &mut self.translation
    }

    /// Current status line, if any
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Whether a translation request is in flight
    pub fn is_translating(&self) -> bool {
        self.state == AppState::Translating
    }

    fn chosen_path(&self) -> Option<PathBuf> {
        let trimmed = self.path_input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }

    fn cancel_pending_job(&mut self) {
        if let Some(job) = self.job.take() {
            debug!("Cancelling in-flight translation");
            job.handle.abort();
        }
    }

    /// `browse`: the user selected a file through the picker.
    ///
    /// Discards any prior preview and translation, renders the new preview
    /// and seeds the translation pane with the leading pages' text. Moves
    /// to `FileLoaded` on success and back to `Idle` on failure.
    pub fn browse(&mut self, path: &Path) {
        self.cancel_pending_job();
        self.preview.clear();
        self.translation.clear();
        self.path_input.clear();
        self.state = AppState::Idle;

        if !is_supported_document(path) {
            self.status = Some(StatusMessage::error("Unsupported file format."));
            return;
        }

        match self.renderer.render_pages(path) {
            Ok(previews) => {
                self.preview = previews;
            }
            Err(e) => {
                warn!("Preview rendering failed for {:?}: {}", path, e);
                self.status = Some(StatusMessage::error(format!("Preview failed: {}", e)));
                return;
            }
        }

        // Seed the translation pane with the first pages, like the preview
        // of what will be translated
        match PageTextCollection::extract_from_file(path) {
            Ok(collection) => {
                self.translation = collection.leading_pages(SEED_PAGE_COUNT);
            }
            Err(e) => {
                warn!("Seed text extraction failed for {:?}: {}", path, e);
            }
        }

        self.path_input = path.display().to_string();
        self.state = AppState::FileLoaded;
        self.status = Some(StatusMessage::info(format!(
            "Loaded {} pages.",
            self.preview.len()
        )));
        info!("Loaded document {:?} ({} pages)", path, self.preview.len());
    }

    /// `start`: begin translating the loaded document.
    ///
    /// Validates the path, extracts the text and spawns the translation
    /// task. Input problems are reported through the status line without
    /// leaving the current state; on success the state moves to
    /// `Translating` until [`AppController::poll`] observes the outcome.
    pub fn start_translation(&mut self) {
        if self.state == AppState::Translating {
            return;
        }

        let path = match self.chosen_path() {
            Some(path) => path,
            None => {
                self.status = Some(StatusMessage::error("Please provide a file."));
                return;
            }
        };

        if !is_supported_document(&path) {
            self.status = Some(StatusMessage::error("Unsupported file format."));
            return;
        }

        let collection = match PageTextCollection::extract_from_file(&path) {
            Ok(collection) => collection,
            Err(e) => {
                self.status =
                    Some(StatusMessage::error(format!("Failed to read document: {}", e)));
                return;
            }
        };

        if !collection.has_text() {
            self.status = Some(StatusMessage::error("No text found in the file."));
            return;
        }

        let text = collection.concatenated();
        let (sender, receiver) = mpsc::unbounded_channel();
        let service = self.service.clone();
        let (source, target) = (self.source_language, self.target_language);

        let handle = tokio::spawn(async move {
            let result = service.translate(&text, source, target).await;
            let _ = sender.send(result);
        });

        self.job = Some(TranslationJob { handle, receiver });
        self.state = AppState::Translating;
        self.status = Some(StatusMessage::info(format!(
            "Translating {} -> {}...",
            source, target
        )));
    }

    /// Fold the outcome of an in-flight translation back into the state.
    ///
    /// Called from the frame loop. On success the translation pane is
    /// replaced and the state moves to `Translated`; on failure the prior
    /// pane contents stay untouched and the state falls back to
    /// `FileLoaded` with a distinct error status.
    pub fn poll(&mut self) {
        let Some(job) = &mut self.job else {
            return;
        };

        match job.receiver.try_recv() {
            Ok(Ok(translated)) => {
                self.job = None;
                self.translation = translated;
                self.state = AppState::Translated;
                self.status = Some(StatusMessage::success("Translation complete!"));
            }
            Ok(Err(e)) => {
                self.job = None;
                self.state = AppState::FileLoaded;
                self.status = Some(StatusMessage::error(format!("Translation failed: {}", e)));
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                self.job = None;
                self.state = AppState::FileLoaded;
                self.status = Some(StatusMessage::error("Translation was interrupted."));
            }
        }
    }

    /// `changeTargetLanguage`: clears the displayed translation and cancels
    /// any in-flight request. Never triggers a new translation by itself.
    pub fn change_target_language(&mut self, language: Language) {
        self.target_language = language;
        self.cancel_pending_job();
        self.translation.clear();
        if matches!(self.state, AppState::Translating | AppState::Translated) {
            self.state = AppState::FileLoaded;
        }
    }

    /// Change the source language; pending results stay valid, nothing is
    /// cleared
    pub fn change_source_language(&mut self, language: Language) {
        self.source_language = language;
    }

    /// `sendMail`: hand the current translation to the mail client as a
    /// draft with the original document attached. Never changes the
    /// workflow state.
    pub fn send_mail(&mut self) {
        let Some(path) = self.chosen_path() else {
            self.status = Some(StatusMessage::error("Please provide a file."));
            return;
        };
        if self.translation.trim().is_empty() {
            self.status = Some(StatusMessage::error("Nothing to send yet."));
            return;
        }

        let draft = MailDraft::for_translation(&self.translation, &path);
        match self.composer.compose(&draft) {
            Ok(()) => {
                self.status = Some(StatusMessage::success("Draft opened in mail client."));
            }
            Err(e) => {
                self.status = Some(StatusMessage::error(format!("Mail failed: {}", e)));
            }
        }
    }
}
