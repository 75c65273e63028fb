use serde::Deserialize;

use koji_common::batch_page::{batch_url, SharePayload, CLIPBOARD_NOTICE};
use koji_common::BatchId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareResult {
    /// The native share sheet completed.
    Shared,
    /// No share sheet; the link went to the clipboard.
    Copied,
    /// Cancelled by the user or refused by the browser.
    Failed,
}

/// The page's own address, or the public link when it cannot be read.
pub fn current_url(public_base: &str, id: &BatchId) -> String {
    #[cfg(target_family = "wasm")]
    {
        if let Some(href) = web_sys::window().and_then(|w| w.location().href().ok()) {
            return href;
        }
    }
    batch_url(public_base, id)
}

/// Offer `payload` to the native share sheet, falling back to copying the
/// link and telling the user so.
pub async fn share_batch(payload: SharePayload) -> ShareResult {
    #[cfg(target_family = "wasm")]
    let result = wasm_impl::share(&payload).await;
    #[cfg(not(target_family = "wasm"))]
    let result = native_impl::share(&payload).await;
    tracing::info!(url = %payload.url, ?result, "share requested");
    result
}

// ─── WASM implementation ─────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
mod wasm_impl {
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{ShareResult, CLIPBOARD_NOTICE};
    use koji_common::batch_page::SharePayload;

    pub async fn share(payload: &SharePayload) -> ShareResult {
        let Some(window) = web_sys::window() else {
            return ShareResult::Failed;
        };
        let navigator = window.navigator();

        let share_fn = Reflect::get(&navigator, &JsValue::from_str("share"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());

        if let Some(share_fn) = share_fn {
            let data = match serde_wasm_bindgen::to_value(payload) {
                Ok(data) => data,
                Err(e) => {
                    tracing::error!("Failed to encode share data: {e}");
                    return ShareResult::Failed;
                }
            };
            let promise = match share_fn.call1(&navigator, &data) {
                Ok(p) => Promise::from(p),
                Err(e) => {
                    tracing::warn!("navigator.share threw: {e:?}");
                    return ShareResult::Failed;
                }
            };
            return match JsFuture::from(promise).await {
                Ok(_) => ShareResult::Shared,
                Err(e) => {
                    tracing::info!("Share dismissed: {e:?}");
                    ShareResult::Failed
                }
            };
        }

        let copy = navigator.clipboard().write_text(&payload.url);
        if let Err(e) = JsFuture::from(copy).await {
            tracing::warn!("Clipboard write failed: {e:?}");
            return ShareResult::Failed;
        }
        if let Err(e) = window.alert_with_message(CLIPBOARD_NOTICE) {
            tracing::debug!("alert failed: {e:?}");
        }
        ShareResult::Copied
    }
}

// ─── Desktop/mobile implementation ───────────────────────────────────────────

#[cfg(not(target_family = "wasm"))]
mod native_impl {
    use dioxus::prelude::*;
    use serde_json::json;

    use super::{ShareResult, CLIPBOARD_NOTICE};
    use koji_common::batch_page::SharePayload;

    // Same fallback order as the browser build, run in the webview.
    const SHARE_JS: &str = r#"
const { share, notice } = await dioxus.recv();
try {
    if (navigator.share) {
        await navigator.share(share);
        dioxus.send("shared");
    } else {
        await navigator.clipboard.writeText(share.url);
        alert(notice);
        dioxus.send("copied");
    }
} catch (_) {
    dioxus.send("failed");
}
"#;

    pub async fn share(payload: &SharePayload) -> ShareResult {
        let mut eval = document::eval(SHARE_JS);
        if let Err(e) = eval.send(json!({ "share": payload, "notice": CLIPBOARD_NOTICE })) {
            tracing::warn!("Share bridge unavailable: {e:?}");
            return ShareResult::Failed;
        }
        match eval.recv::<ShareResult>().await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Share bridge closed: {e:?}");
                ShareResult::Failed
            }
        }
    }
}
