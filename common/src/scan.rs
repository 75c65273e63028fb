//! Scan page logic: routing a decoded QR payload to a batch and the
//! lifecycle of one camera session.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::batch::BatchId;

/// Payload behind the "Try Demo Code" button.
pub const DEMO_PAYLOAD: &str = "https://koji.cph/batch/KC2025-001";

// ASCII word characters plus hyphen, the same set the printed codes use.
static BATCH_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"batch/([A-Za-z0-9_-]+)").expect("valid batch pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Invalid QR code. Please scan a Koji Copenhagen product.")]
    InvalidCode,
    /// The reason is the browser's own text, kept for diagnostics only.
    #[error("Camera access denied. Please allow camera permissions and try again.")]
    CameraDenied(String),
}

impl ScanError {
    /// Invalid codes can be dismissed; camera errors stay until the next
    /// start attempt.
    pub fn is_dismissible(&self) -> bool {
        matches!(self, ScanError::InvalidCode)
    }
}

/// Extract the batch id from the first `batch/<id>` segment in `payload`.
pub fn route_scan(payload: &str) -> Result<BatchId, ScanError> {
    BATCH_PATH
        .captures(payload)
        .and_then(|caps| caps.get(1))
        .map(|m| BatchId::new(m.as_str()))
        .ok_or(ScanError::InvalidCode)
}

/// Options handed to the scanning library when the camera starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerConfig {
    pub fps: u32,
    /// Side of the square detection box, in CSS pixels.
    pub qrbox: u32,
    pub aspect_ratio: f64,
    pub show_torch_button_if_supported: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            fps: 10,
            qrbox: 280,
            aspect_ratio: 1.0,
            show_torch_button_if_supported: true,
        }
    }
}

/// Messages posted by the scanning library bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScannerEvent {
    PermissionGranted,
    PermissionDenied { reason: String },
    Decoded { text: String },
    /// No code in this frame. Arrives many times per second.
    FrameMiss,
    CameraFailure { reason: String },
}

impl ScannerEvent {
    /// False for events a live session always ignores, so callers can skip
    /// them without touching page state.
    pub fn changes_state(&self) -> bool {
        !matches!(self, ScannerEvent::FrameMiss)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    AwaitingPermission,
    Scanning,
    NavigatedAway(BatchId),
    Error(ScanError),
}

/// What the page should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Nothing changed.
    Ignored,
    /// The camera is live.
    Scanning,
    /// Stop the camera and open the batch page.
    Navigate(BatchId),
    /// Stop the camera and show the error.
    Failed(ScanError),
}

/// One visit to the scan page.
///
/// Events that arrive when no camera session is live are ignored, so late
/// callbacks from a stopped scanner cannot change the page.
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    state: ScanState,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn error(&self) -> Option<&ScanError> {
        match &self.state {
            ScanState::Error(e) => Some(e),
            _ => None,
        }
    }

    /// True while the camera is requested or running.
    pub fn is_active(&self) -> bool {
        matches!(
            self.state,
            ScanState::AwaitingPermission | ScanState::Scanning
        )
    }

    /// Request the camera. Also serves as retry from an error.
    /// Returns false when a session is already live or finished.
    pub fn start(&mut self) -> bool {
        match self.state {
            ScanState::Idle | ScanState::Error(_) => {
                self.state = ScanState::AwaitingPermission;
                true
            }
            _ => false,
        }
    }

    pub fn handle(&mut self, event: ScannerEvent) -> ScanOutcome {
        if !self.is_active() {
            return ScanOutcome::Ignored;
        }
        match event {
            ScannerEvent::FrameMiss => ScanOutcome::Ignored,
            ScannerEvent::PermissionGranted => {
                self.state = ScanState::Scanning;
                ScanOutcome::Scanning
            }
            ScannerEvent::PermissionDenied { reason } | ScannerEvent::CameraFailure { reason } => {
                self.fail(ScanError::CameraDenied(reason))
            }
            ScannerEvent::Decoded { text } => self.route(&text),
        }
    }

    /// Route a payload that did not come from the camera (the demo button).
    pub fn submit(&mut self, payload: &str) -> ScanOutcome {
        match self.state {
            ScanState::NavigatedAway(_) => ScanOutcome::Ignored,
            _ => self.route(payload),
        }
    }

    /// Manual stop. Returns to idle without an error.
    pub fn stop(&mut self) {
        if self.is_active() {
            self.state = ScanState::Idle;
        }
    }

    /// Close a dismissible error.
    pub fn dismiss(&mut self) {
        if self.error().is_some_and(ScanError::is_dismissible) {
            self.state = ScanState::Idle;
        }
    }

    fn route(&mut self, payload: &str) -> ScanOutcome {
        match route_scan(payload) {
            Ok(id) => {
                self.state = ScanState::NavigatedAway(id.clone());
                ScanOutcome::Navigate(id)
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: ScanError) -> ScanOutcome {
        self.state = ScanState::Error(error.clone());
        ScanOutcome::Failed(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanning() -> ScanSession {
        let mut session = ScanSession::new();
        assert!(session.start());
        assert_eq!(
            session.handle(ScannerEvent::PermissionGranted),
            ScanOutcome::Scanning
        );
        session
    }

    #[test]
    fn test_route_scan() {
        assert_eq!(route_scan(DEMO_PAYLOAD), Ok(BatchId::new("KC2025-001")));
        assert_eq!(route_scan("batch/abc_1-x?ref=qr"), Ok(BatchId::new("abc_1-x")));
        assert_eq!(route_scan("not-a-batch-code"), Err(ScanError::InvalidCode));
        assert_eq!(route_scan("https://koji.cph/batch/"), Err(ScanError::InvalidCode));
    }

    #[test]
    fn test_batch_pattern_compiles() {
        assert!(BATCH_PATH.is_match("batch/KC2025-001"));
        assert!(!BATCH_PATH.is_match("batch/"));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            route_scan("batch/ONE and batch/TWO"),
            Ok(BatchId::new("ONE"))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScanError::InvalidCode.to_string(),
            "Invalid QR code. Please scan a Koji Copenhagen product."
        );
        assert_eq!(
            ScanError::CameraDenied("NotAllowedError".into()).to_string(),
            "Camera access denied. Please allow camera permissions and try again."
        );
    }

    #[test]
    fn test_decoded_payload_navigates() {
        let mut session = scanning();
        assert_eq!(session.handle(ScannerEvent::FrameMiss), ScanOutcome::Ignored);
        let outcome = session.handle(ScannerEvent::Decoded {
            text: DEMO_PAYLOAD.into(),
        });
        assert_eq!(outcome, ScanOutcome::Navigate(BatchId::new("KC2025-001")));
        assert!(!session.is_active());
        assert_eq!(
            session.handle(ScannerEvent::Decoded {
                text: DEMO_PAYLOAD.into()
            }),
            ScanOutcome::Ignored
        );
    }

    #[test]
    fn test_frame_miss_changes_nothing() {
        assert!(!ScannerEvent::FrameMiss.changes_state());
        assert!(ScannerEvent::PermissionGranted.changes_state());
        assert!(ScannerEvent::Decoded { text: String::new() }.changes_state());

        let mut session = scanning();
        assert_eq!(session.handle(ScannerEvent::FrameMiss), ScanOutcome::Ignored);
        assert_eq!(session.state(), &ScanState::Scanning);
    }

    #[test]
    fn test_invalid_code_then_dismiss() {
        let mut session = scanning();
        let outcome = session.handle(ScannerEvent::Decoded {
            text: "not-a-batch-code".into(),
        });
        assert_eq!(outcome, ScanOutcome::Failed(ScanError::InvalidCode));
        assert_eq!(session.error(), Some(&ScanError::InvalidCode));

        session.dismiss();
        assert_eq!(session.state(), &ScanState::Idle);
    }

    #[test]
    fn test_denied_camera_persists_until_retry() {
        let mut session = ScanSession::new();
        session.start();
        let outcome = session.handle(ScannerEvent::PermissionDenied {
            reason: "NotAllowedError".into(),
        });
        assert!(matches!(outcome, ScanOutcome::Failed(ScanError::CameraDenied(_))));

        session.dismiss();
        assert!(matches!(session.state(), ScanState::Error(_)));

        assert!(session.start());
        assert_eq!(session.state(), &ScanState::AwaitingPermission);
    }

    #[test]
    fn test_stop_returns_to_idle_and_mutes_callbacks() {
        let mut session = scanning();
        session.stop();
        assert_eq!(session.state(), &ScanState::Idle);
        assert_eq!(
            session.handle(ScannerEvent::CameraFailure {
                reason: "track ended".into()
            }),
            ScanOutcome::Ignored
        );
    }

    #[test]
    fn test_start_while_live_is_noop() {
        let mut session = scanning();
        assert!(!session.start());
        assert_eq!(session.state(), &ScanState::Scanning);
    }

    #[test]
    fn test_demo_submit_from_idle() {
        let mut session = ScanSession::new();
        assert_eq!(
            session.submit(DEMO_PAYLOAD),
            ScanOutcome::Navigate(BatchId::new("KC2025-001"))
        );
    }

    #[test]
    fn test_bridge_messages_deserialize() {
        let ev: ScannerEvent =
            serde_json::from_str(r#"{"kind":"decoded","text":"batch/KC2025-001"}"#).unwrap();
        assert_eq!(
            ev,
            ScannerEvent::Decoded {
                text: "batch/KC2025-001".into()
            }
        );
        let ev: ScannerEvent = serde_json::from_str(r#"{"kind":"frame_miss"}"#).unwrap();
        assert_eq!(ev, ScannerEvent::FrameMiss);
    }

    #[test]
    fn test_scanner_config_wire_names() {
        let json = serde_json::to_value(ScannerConfig::default()).unwrap();
        assert_eq!(json["fps"], 10);
        assert_eq!(json["qrbox"], 280);
        assert_eq!(json["showTorchButtonIfSupported"], true);
    }
}
