/*!
 * Tests for the application controller workflow
 */

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use pdfbabel::app_controller::{AppController, AppState, StatusLevel};
use pdfbabel::language_utils::Language;
use pdfbabel::mail_composer::MockMailComposer;
use pdfbabel::preview_renderer::MockPageRenderer;
use pdfbabel::providers::mock::MockTranslator;
use pdfbabel::translation_service::TranslationService;

use crate::common::{create_temp_dir, init_test_logging, write_test_pdf};

/// Build a controller around mocks, returning handles to the provider and
/// composer so tests can assert what reached them
fn controller_with(
    provider: MockTranslator,
    page_count: usize,
) -> (AppController, MockTranslator, MockMailComposer) {
    init_test_logging();
    let provider_handle = provider.clone();
    let composer = MockMailComposer::new();
    let composer_handle = composer.clone();

    let service = TranslationService::new(Arc::new(provider), Duration::from_secs(5));
    let controller = AppController::new(
        service,
        Box::new(MockPageRenderer::new(page_count)),
        Box::new(composer),
        Language::English,
        Language::Spanish,
    );
    (controller, provider_handle, composer_handle)
}

/// Poll the controller until the in-flight translation settles
async fn poll_until_settled(controller: &mut AppController) {
    for _ in 0..200 {
        controller.poll();
        if controller.state() != AppState::Translating {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("translation did not settle");
}

#[tokio::test]
async fn test_browse_withValidPdf_shouldLoadPreviewAndSeedTranslation() {
    let dir = create_temp_dir().unwrap();
    let path = write_test_pdf(dir.path(), "case.pdf", &["Case 12345 opened", "Follow up"]).unwrap();
    let (mut controller, _, _) = controller_with(MockTranslator::working(), 2);

    controller.browse(&path);

    assert_eq!(controller.state(), AppState::FileLoaded);
    assert_eq!(controller.path_input(), path.display().to_string());
    assert_eq!(controller.preview().len(), 2);
    assert!(controller.translation().contains("Case"));
    let status = controller.status().unwrap();
    assert_eq!(status.level, StatusLevel::Info);
    assert_eq!(status.text, "Loaded 2 pages.");
}

#[tokio::test]
async fn test_browse_withUnsupportedExtension_shouldStayIdle() {
    let (mut controller, provider, _) = controller_with(MockTranslator::working(), 1);

    controller.browse(Path::new("/tmp/notes.txt"));

    assert_eq!(controller.state(), AppState::Idle);
    assert!(controller.preview().is_empty());
    assert_eq!(controller.status().unwrap().text, "Unsupported file format.");
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_browse_withNewFile_shouldDiscardPriorDocument() {
    let dir = create_temp_dir().unwrap();
    let first = write_test_pdf(dir.path(), "first.pdf", &["Alpha"]).unwrap();
    let second = write_test_pdf(dir.path(), "second.pdf", &["Beta"]).unwrap();
    let (mut controller, _, _) = controller_with(MockTranslator::working(), 1);

    controller.browse(&first);
    controller.start_translation();
    poll_until_settled(&mut controller).await;
    assert_eq!(controller.state(), AppState::Translated);

    controller.browse(&second);

    assert_eq!(controller.state(), AppState::FileLoaded);
    assert_eq!(controller.path_input(), second.display().to_string());
    assert!(controller.translation().contains("Beta"));
    assert!(!controller.translation().contains("Alpha"));
}

#[tokio::test]
async fn test_startTranslation_withEmptyPath_shouldAskForFile() {
    let (mut controller, provider, _) = controller_with(MockTranslator::working(), 1);

    controller.start_translation();

    assert_eq!(controller.state(), AppState::Idle);
    assert_eq!(controller.status().unwrap().text, "Please provide a file.");
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_startTranslation_withTextlessPdf_shouldReportNoText() {
    let dir = create_temp_dir().unwrap();
    let path = write_test_pdf(dir.path(), "blank.pdf", &["", ""]).unwrap();
    let (mut controller, provider, _) = controller_with(MockTranslator::working(), 2);

    controller.browse(&path);
    controller.start_translation();

    assert_eq!(controller.state(), AppState::FileLoaded);
    assert_eq!(controller.status().unwrap().text, "No text found in the file.");
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_fullWorkflow_shouldTranslateSanitizedTextOnce() {
    let dir = create_temp_dir().unwrap();
    let path =
        write_test_pdf(dir.path(), "case.pdf", &["Case 12345 opened", "Closed on 2024"]).unwrap();
    let (mut controller, provider, _) = controller_with(MockTranslator::working(), 2);

    controller.browse(&path);
    controller.start_translation();
    assert_eq!(controller.state(), AppState::Translating);
    assert!(controller.is_translating());

    poll_until_settled(&mut controller).await;

    assert_eq!(controller.state(), AppState::Translated);
    assert_eq!(controller.status().unwrap().text, "Translation complete!");
    assert_eq!(controller.status().unwrap().level, StatusLevel::Success);
    assert!(controller.translation().starts_with("[es]"));

    let recorded = provider.recorded_requests();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].source, Language::English);
    assert_eq!(recorded[0].target, Language::Spanish);
    assert!(recorded[0].text.contains("xxxx"));
    assert!(!recorded[0].text.chars().any(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_startTranslation_whileTranslating_shouldNotIssueSecondRequest() {
    let dir = create_temp_dir().unwrap();
    let path = write_test_pdf(dir.path(), "case.pdf", &["Hello"]).unwrap();
    let (mut controller, provider, _) = controller_with(MockTranslator::slow(200), 1);

    controller.browse(&path);
    controller.start_translation();
    controller.start_translation();

    poll_until_settled(&mut controller).await;
    assert_eq!(provider.request_count(), 1);
}

#[tokio::test]
async fn test_poll_withFailingProvider_shouldKeepPriorTranslation() {
    let dir = create_temp_dir().unwrap();
    let path = write_test_pdf(dir.path(), "case.pdf", &["Hello there"]).unwrap();
    let (mut controller, _, _) = controller_with(MockTranslator::failing(), 1);

    controller.browse(&path);
    let seeded = controller.translation().to_string();
    controller.start_translation();
    poll_until_settled(&mut controller).await;

    assert_eq!(controller.state(), AppState::FileLoaded);
    let status = controller.status().unwrap();
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.starts_with("Translation failed:"));
    assert_eq!(controller.translation(), seeded);
}

#[tokio::test]
async fn test_changeTargetLanguage_shouldClearTranslationWithoutNewRequest() {
    let dir = create_temp_dir().unwrap();
    let path = write_test_pdf(dir.path(), "case.pdf", &["Hello"]).unwrap();
    let (mut controller, provider, _) = controller_with(MockTranslator::working(), 1);

    controller.browse(&path);
    controller.start_translation();
    poll_until_settled(&mut controller).await;
    assert_eq!(provider.request_count(), 1);

    controller.change_target_language(Language::German);

    assert_eq!(controller.target_language(), Language::German);
    assert_eq!(controller.state(), AppState::FileLoaded);
    assert!(controller.translation().is_empty());
    assert_eq!(provider.request_count(), 1);
}

#[tokio::test]
async fn test_changeTargetLanguage_whileTranslating_shouldCancelTheJob() {
    let dir = create_temp_dir().unwrap();
    let path = write_test_pdf(dir.path(), "case.pdf", &["Hello"]).unwrap();
    let (mut controller, _, _) = controller_with(MockTranslator::slow(10_000), 1);

    controller.browse(&path);
    controller.start_translation();
    assert_eq!(controller.state(), AppState::Translating);

    controller.change_target_language(Language::Italian);

    assert_eq!(controller.state(), AppState::FileLoaded);
    // The aborted job must never resurface a result
    controller.poll();
    assert!(controller.translation().is_empty());
}

#[tokio::test]
async fn test_changeSourceLanguage_shouldKeepTranslation() {
    let dir = create_temp_dir().unwrap();
    let path = write_test_pdf(dir.path(), "case.pdf", &["Hello"]).unwrap();
    let (mut controller, _, _) = controller_with(MockTranslator::working(), 1);

    controller.browse(&path);
    controller.start_translation();
    poll_until_settled(&mut controller).await;
    let translated = controller.translation().to_string();

    controller.change_source_language(Language::French);

    assert_eq!(controller.source_language(), Language::French);
    assert_eq!(controller.state(), AppState::Translated);
    assert_eq!(controller.translation(), translated);
}

#[tokio::test]
async fn test_sendMail_afterTranslation_shouldHandDraftToComposer() {
    let dir = create_temp_dir().unwrap();
    let path = write_test_pdf(dir.path(), "case.pdf", &["Hello"]).unwrap();
    let (mut controller, _, composer) = controller_with(MockTranslator::working(), 1);

    controller.browse(&path);
    controller.start_translation();
    poll_until_settled(&mut controller).await;
    controller.send_mail();

    assert_eq!(controller.state(), AppState::Translated);
    assert_eq!(controller.status().unwrap().text, "Draft opened in mail client.");

    let drafts = composer.recorded_drafts();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].attachment, path);
    assert!(drafts[0].body.contains(controller.translation()));
}

#[tokio::test]
async fn test_sendMail_withoutTranslation_shouldReportNothingToSend() {
    let dir = create_temp_dir().unwrap();
    let path = write_test_pdf(dir.path(), "blank.pdf", &[""]).unwrap();
    let (mut controller, _, composer) = controller_with(MockTranslator::working(), 1);

    controller.browse(&path);
    controller.send_mail();

    assert_eq!(controller.status().unwrap().text, "Nothing to send yet.");
    assert!(composer.recorded_drafts().is_empty());
}

#[tokio::test]
async fn test_sendMail_withUnavailableClient_shouldKeepState() {
    let dir = create_temp_dir().unwrap();
    let path = write_test_pdf(dir.path(), "case.pdf", &["Hello"]).unwrap();
    let provider = MockTranslator::working();
    let service = TranslationService::new(Arc::new(provider), Duration::from_secs(5));
    let mut controller = AppController::new(
        service,
        Box::new(MockPageRenderer::new(1)),
        Box::new(MockMailComposer::unavailable()),
        Language::English,
        Language::Spanish,
    );

    controller.browse(&path);
    controller.start_translation();
    poll_until_settled(&mut controller).await;
    controller.send_mail();

    assert_eq!(controller.state(), AppState::Translated);
    let status = controller.status().unwrap();
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.starts_with("Mail failed:"));
}
