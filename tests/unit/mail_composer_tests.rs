/*!
 * Tests for mail draft composition
 */

use std::path::{Path, PathBuf};

use pdfbabel::errors::MailError;
use pdfbabel::mail_composer::{MailComposer, MailDraft, MockMailComposer, MAIL_SUBJECT_TEMPLATE};

/// The standard draft quotes the translation under the fixed greeting
#[test]
fn test_forTranslation_shouldProduceGreetingBodyQuotingTranslation() {
    let draft = MailDraft::for_translation("Hola", Path::new("/tmp/original.pdf"));

    assert_eq!(draft.subject, "INCxxxx - <issue>");
    assert!(draft
        .body
        .starts_with("Hi, we received INCxxxx - <issue> saying :\n\n\"Hola\""));
}

/// The subject is a literal template, never derived from the document
#[test]
fn test_forTranslation_shouldKeepSubjectLiteral() {
    let draft = MailDraft::for_translation(
        "Translated text about INC9999",
        Path::new("/tmp/INC1234.pdf"),
    );
    assert_eq!(draft.subject, MAIL_SUBJECT_TEMPLATE);
    assert!(!draft.subject.contains("1234"));
}

/// Exactly one attachment, and it is the original document path
#[test]
fn test_forTranslation_shouldAttachTheOriginalDocument() {
    let original = Path::new("/home/user/docs/case report.pdf");
    let draft = MailDraft::for_translation("Hola", original);
    assert_eq!(draft.attachment, original.to_path_buf());
}

/// Drafts without a body or attachment are rejected before reaching a client
#[test]
fn test_validate_shouldRejectIncompleteDrafts() {
    let no_body = MailDraft {
        subject: "s".to_string(),
        body: String::new(),
        attachment: PathBuf::from("/tmp/a.pdf"),
    };
    assert!(matches!(no_body.validate(), Err(MailError::InvalidDraft(_))));

    let no_attachment = MailDraft {
        subject: "s".to_string(),
        body: "b".to_string(),
        attachment: PathBuf::new(),
    };
    assert!(no_attachment.validate().is_err());
}

/// Composing records the draft verbatim; the caller's copy is untouched
#[test]
fn test_mockComposer_shouldRecordDraftVerbatim() {
    let composer = MockMailComposer::new();
    let draft = MailDraft::for_translation("Hola amigo", Path::new("/tmp/case.pdf"));

    composer.compose(&draft).unwrap();

    let recorded = composer.recorded_drafts();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0], draft);
}

/// A missing client surfaces as ClientUnavailable and nothing is recorded
#[test]
fn test_unavailableComposer_shouldReportClientUnavailable() {
    let composer = MockMailComposer::unavailable();
    let draft = MailDraft::for_translation("Hola", Path::new("/tmp/case.pdf"));

    match composer.compose(&draft) {
        Err(MailError::ClientUnavailable(_)) => {}
        other => panic!("expected ClientUnavailable, got {:?}", other),
    }
    assert!(composer.recorded_drafts().is_empty());
}
