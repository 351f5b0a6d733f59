/*!
 * Outgoing mail draft composition.
 *
 * The application never sends mail itself. It builds a draft (subject, body,
 * one attachment) and hands it to the locally installed mail client for the
 * user to review. The concrete client integration sits behind the narrow
 * [`MailComposer`] trait so it can be swapped or stubbed in tests.
 */

use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use url::Url;

/// How long to watch a freshly spawned client before treating the launch
/// as successful
const LAUNCH_GRACE: Duration = Duration::from_millis(150);

use crate::errors::MailError;

/// Fixed subject template. The placeholder segment is literal, matching the
/// reference behavior; it is not populated from the document.
pub const MAIL_SUBJECT_TEMPLATE: &str = "INCxxxx - <issue>";

/// An outgoing mail draft, handed to the external client and then forgotten
#[derive(Debug, Clone, PartialEq)]
pub struct MailDraft {
    /// Subject line
    pub subject: String,
    /// Message body
    pub body: String,
    /// Path of the single attachment
    pub attachment: PathBuf,
}

impl MailDraft {
    /// Build the standard draft for a finished translation: templated
    /// subject, wrapper body quoting the translation, original document
    /// attached.
    pub fn for_translation(translation: &str, attachment: &Path) -> Self {
        Self {
            subject: MAIL_SUBJECT_TEMPLATE.to_string(),
            body: format!(
                "Hi, we received {} saying :\n\n\"{}\"",
                MAIL_SUBJECT_TEMPLATE, translation
            ),
            attachment: attachment.to_path_buf(),
        }
    }

    /// Reject drafts that cannot be meaningfully handed to a client
    pub fn validate(&self) -> Result<(), MailError> {
        if self.body.is_empty() {
            return Err(MailError::InvalidDraft("Draft body is empty".to_string()));
        }
        if self.attachment.as_os_str().is_empty() {
            return Err(MailError::InvalidDraft(
                "Draft has no attachment path".to_string(),
            ));
        }
        Ok(())
    }
}

/// Hands a draft to a mail client for user review
pub trait MailComposer: Send {
    /// Open the draft in the user's mail client, displayed but not sent
    fn compose(&self, draft: &MailDraft) -> Result<(), MailError>;
}

/// Desktop mail client integration.
///
/// Tries Thunderbird's compose interface first because it is the only
/// widespread client whose command line accepts an attachment. Falls back
/// to opening a `mailto:` URL through the platform opener, which carries
/// subject and body but drops the attachment.
pub struct DesktopMailComposer;

impl DesktopMailComposer {
    /// Create a new desktop composer
    pub fn new() -> Self {
        Self
    }

    fn thunderbird_args(draft: &MailDraft) -> String {
        format!(
            "subject='{}',body='{}',attachment='{}'",
            Self::escape_compose_value(&draft.subject),
            Self::escape_compose_value(&draft.body),
            draft.attachment.display()
        )
    }

    /// Escape a value for Thunderbird's `-compose` field syntax. A single
    /// quote inside a quoted value is written as two, so apostrophes
    /// round-trip into the draft.
    fn escape_compose_value(value: &str) -> String {
        value.replace('\'', "''")
    }

    /// Spawn a hand-off command and watch it briefly: an immediate non-zero
    /// exit counts as failure so the caller can try the next client. A child
    /// still running after the grace period is reaped on a background thread.
    fn launch_detached(command: &mut Command) -> Result<(), String> {
        let mut child = command.spawn().map_err(|e| e.to_string())?;
        thread::sleep(LAUNCH_GRACE);
        match child.try_wait() {
            Ok(Some(status)) if !status.success() => Err(format!("exited with {}", status)),
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                thread::spawn(move || {
                    let _ = child.wait();
                });
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        }
    }

    fn mailto_url(draft: &MailDraft) -> Result<Url, MailError> {
        let mut url = Url::parse("mailto:")
            .map_err(|e| MailError::InvalidDraft(format!("Failed to build mailto URL: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("subject", &draft.subject)
            .append_pair("body", &draft.body);
        Ok(url)
    }

    fn platform_opener() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        }
    }
}

impl Default for DesktopMailComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl MailComposer for DesktopMailComposer {
    fn compose(&self, draft: &MailDraft) -> Result<(), MailError> {
        draft.validate()?;

        // Thunderbird first: it is the one common client that takes the
        // attachment on the command line
        let mut thunderbird = Command::new("thunderbird");
        thunderbird.arg("-compose").arg(Self::thunderbird_args(draft));
        match Self::launch_detached(&mut thunderbird) {
            Ok(()) => {
                debug!("Opened draft in Thunderbird with attachment");
                return Ok(());
            }
            Err(e) => {
                debug!("Thunderbird not available ({}), falling back to mailto", e);
            }
        }

        let url = Self::mailto_url(draft)?;
        warn!("Falling back to mailto URL; the attachment must be added manually");
        let mut opener = Command::new(Self::platform_opener());
        opener.arg(url.as_str());
        Self::launch_detached(&mut opener).map_err(MailError::ClientUnavailable)?;
        Ok(())
    }
}

/// Mock composer recording every draft it receives, for tests
#[derive(Clone, Default)]
pub struct MockMailComposer {
    drafts: Arc<Mutex<Vec<MailDraft>>>,
    fail: bool,
}

impl MockMailComposer {
    /// Create a mock that accepts every draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that rejects every draft as client-unavailable
    pub fn unavailable() -> Self {
        Self {
            drafts: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Snapshot of every draft received so far
    pub fn recorded_drafts(&self) -> Vec<MailDraft> {
        self.drafts.lock().expect("draft log poisoned").clone()
    }
}

impl MailComposer for MockMailComposer {
    fn compose(&self, draft: &MailDraft) -> Result<(), MailError> {
        draft.validate()?;
        if self.fail {
            return Err(MailError::ClientUnavailable(
                "Simulated missing mail client".to_string(),
            ));
        }
        self.drafts
            .lock()
            .expect("draft log poisoned")
            .push(draft.clone());
        Ok(())
    }
}
