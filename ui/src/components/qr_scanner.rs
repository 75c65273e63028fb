use dioxus::document::EvalError;
use dioxus::prelude::*;
use futures::{FutureExt, StreamExt};
use serde::Serialize;

use koji_common::scan::{ScanOutcome, ScanSession, ScannerConfig, ScannerEvent};

use super::app::Route;

/// DOM id the scanning library renders the camera feed into.
pub const SCANNER_ELEMENT_ID: &str = "qr-scanner";

/// Commands the scan page sends to the scanner coroutine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerCommand {
    Start,
    Stop,
}

/// First message to the bridge script.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BridgeInit {
    script: &'static str,
    element_id: &'static str,
    config: ScannerConfig,
}

// Probes camera permission, loads the library, then posts ScannerEvent JSON
// until it decodes a code, fails, or is stopped. A stop can arrive at any
// await point, either as a bridge message or through `__kojiScannerStop`, so
// every step rechecks it and a scanner still starting is released once its
// start settles.
const BRIDGE_JS: &str = r#"
const init = await dioxus.recv();
let scanner = null;
let starting = null;
let stopped = false;
const release = async () => {
    const s = scanner;
    scanner = null;
    if (!s) return;
    try {
        await s.stop();
    } catch (_) {}
    try {
        s.clear();
    } catch (_) {}
};
const stop = async () => {
    stopped = true;
    if (starting) {
        try {
            await starting;
        } catch (_) {}
    }
    await release();
};
window.__kojiScannerStop = stop;
const stopMessage = dioxus.recv().then(stop, stop);

try {
    const probe = await navigator.mediaDevices.getUserMedia({ video: true });
    probe.getTracks().forEach((track) => track.stop());
} catch (e) {
    if (!stopped) dioxus.send({ kind: "permission_denied", reason: String(e) });
    return;
}
if (stopped) return;
dioxus.send({ kind: "permission_granted" });

try {
    if (!window.Html5Qrcode) {
        await new Promise((resolve, reject) => {
            const tag = document.createElement("script");
            tag.src = init.script;
            tag.onload = resolve;
            tag.onerror = () => reject(new Error("could not load " + init.script));
            document.head.appendChild(tag);
        });
    }
    if (stopped) return;
    const c = init.config;
    scanner = new Html5Qrcode(init.elementId);
    starting = scanner.start(
        { facingMode: "environment" },
        {
            fps: c.fps,
            qrbox: { width: c.qrbox, height: c.qrbox },
            aspectRatio: c.aspectRatio,
            showTorchButtonIfSupported: c.showTorchButtonIfSupported,
        },
        (text) => {
            if (stopped) return;
            dioxus.send({ kind: "decoded", text });
            stop();
        },
        () => {},
    );
    await starting;
    starting = null;
} catch (e) {
    starting = null;
    if (!stopped) dioxus.send({ kind: "camera_failure", reason: String(e) });
    await release();
    return;
}
if (stopped) {
    await release();
    return;
}

await stopMessage;
"#;

const FORCE_STOP_JS: &str = "if (window.__kojiScannerStop) { window.__kojiScannerStop(); }";

enum Step {
    Event(Result<ScannerEvent, EvalError>),
    Command(Option<ScannerCommand>),
}

fn stop_bridge(bridge: &document::Eval) {
    if let Err(e) = bridge.send("stop") {
        tracing::debug!("Scanner bridge already finished: {e:?}");
    }
}

/// Start the scanner coroutine for one scan page.
///
/// The coroutine owns the camera bridge and feeds its events into `session`.
/// A decoded batch code navigates straight to the batch page. The camera is
/// released when the page unmounts, even mid-scan.
pub fn use_scanner(mut session: Signal<ScanSession>, script: &'static str) -> Coroutine<ScannerCommand> {
    let nav = use_navigator();

    use_drop(|| {
        let _ = document::eval(FORCE_STOP_JS);
    });

    use_coroutine(move |mut rx: UnboundedReceiver<ScannerCommand>| async move {
        while let Some(command) = rx.next().await {
            if command == ScannerCommand::Stop {
                session.write().stop();
                continue;
            }
            if !session.write().start() {
                continue;
            }
            tracing::info!("Starting camera");

            let mut bridge = document::eval(BRIDGE_JS);
            let init = BridgeInit {
                script,
                element_id: SCANNER_ELEMENT_ID,
                config: ScannerConfig::default(),
            };
            if let Err(e) = bridge.send(init) {
                tracing::error!("Failed to start scanner bridge: {e:?}");
                session.write().handle(ScannerEvent::CameraFailure {
                    reason: format!("{e:?}"),
                });
                continue;
            }

            loop {
                let step = futures::select! {
                    event = bridge.recv::<ScannerEvent>().fuse() => Step::Event(event),
                    command = rx.next() => Step::Command(command),
                };

                match step {
                    Step::Event(Ok(event)) if !event.changes_state() => {}
                    Step::Event(Ok(event)) => {
                        tracing::debug!("Scanner event: {:?}", event);
                        let outcome = session.write().handle(event);
                        match outcome {
                            ScanOutcome::Navigate(id) => {
                                tracing::info!("Scanned batch {id}");
                                stop_bridge(&bridge);
                                nav.push(Route::Batch { id: id.to_string() });
                                break;
                            }
                            ScanOutcome::Failed(e) => {
                                tracing::warn!("Scan failed: {e}");
                                stop_bridge(&bridge);
                                break;
                            }
                            ScanOutcome::Scanning | ScanOutcome::Ignored => {}
                        }
                        // The page may have settled the session itself (demo code).
                        if !session.read().is_active() {
                            stop_bridge(&bridge);
                            break;
                        }
                    }
                    Step::Event(Err(e)) => {
                        tracing::warn!("Scanner bridge closed: {e:?}");
                        session.write().handle(ScannerEvent::CameraFailure {
                            reason: format!("{e:?}"),
                        });
                        break;
                    }
                    Step::Command(Some(ScannerCommand::Stop)) | Step::Command(None) => {
                        tracing::info!("Stopping camera");
                        stop_bridge(&bridge);
                        session.write().stop();
                        break;
                    }
                    Step::Command(Some(ScannerCommand::Start)) => {}
                }
            }
        }
    })
}
