use chrono::Utc;
use dioxus::prelude::*;

use koji_common::format::{format_relative_time, format_weight};
use koji_common::scan::{ScanError, ScanOutcome, ScanSession, DEMO_PAYLOAD};

use super::app::Route;
use super::catalog_state::use_catalog;
use super::qr_scanner::{use_scanner, ScannerCommand, SCANNER_ELEMENT_ID};

const HOW_TO_STEPS: [(&str, &str, &str); 4] = [
    ("🔍", "Find the QR Code", "Look for the QR code on your product packaging"),
    ("📱", "Allow Camera Access", "Tap \"Start Scanning\" and allow camera permissions"),
    ("📸", "Scan the Code", "Position the QR code within the scanning frame"),
    ("🌱", "Explore the Journey", "See your product's story and environmental impact"),
];

const SCANNING_TIPS: [(&str, &str, &str); 3] = [
    ("💡", "Hold Steady & Good Lighting", "Ensure the QR code is well-lit for better detection"),
    ("🎯", "Position QR Code Within Frame", "Center the QR code within the scanning frame"),
    ("⚡", "Wait for Automatic Detection", "The scanner will automatically detect and redirect you"),
];

#[component]
pub fn ScanView() -> Element {
    let catalog = use_catalog();
    let script = catalog.read().config.scanner_script;
    let mut session = use_signal(ScanSession::new);
    let scanner = use_scanner(session, script);
    let nav = use_navigator();

    let active = session.read().is_active();
    let error = session.read().error().cloned();

    let try_demo = move |_: MouseEvent| {
        let outcome = session.write().submit(DEMO_PAYLOAD);
        if let ScanOutcome::Navigate(id) = outcome {
            scanner.send(ScannerCommand::Stop);
            nav.push(Route::Batch { id: id.to_string() });
        }
    };

    rsx! {
        div { class: "scan-view",
            section { class: "card scanner-card",
                if active {
                    div { class: "scanner-header",
                        h3 { "Scanning..." }
                        button {
                            class: "btn btn-ghost btn-icon",
                            onclick: move |_| scanner.send(ScannerCommand::Stop),
                            "✕"
                        }
                    }
                } else {
                    div { class: "scanner-preview", span { class: "scanner-camera", "📷" } }
                    h3 { "Scan Your Product" }
                    p { "Point your camera at the QR code on your Koji Copenhagen product to trace its journey" }
                    button {
                        class: "btn btn-primary btn-large btn-full",
                        onclick: move |_| scanner.send(ScannerCommand::Start),
                        "Start Scanning"
                    }
                }
                // Always mounted so the library finds it as soon as it starts.
                div {
                    id: SCANNER_ELEMENT_ID,
                    class: "qr-scanner-container",
                    hidden: !active,
                }
                if active {
                    p { class: "scanner-hint", "Position the QR code within the frame" }
                }
                button { class: "btn btn-ghost btn-small", onclick: try_demo, "⚡ Try Demo Code" }

                if let Some(err) = error {
                    ScanErrorNotice {
                        error: err,
                        on_retry: move |e: ScanError| {
                            if e.is_dismissible() {
                                session.write().dismiss();
                            } else {
                                scanner.send(ScannerCommand::Start);
                            }
                        },
                    }
                }
            }

            section { class: "how-to",
                h2 { "How to Scan" }
                for (i, (icon, title, description)) in HOW_TO_STEPS.into_iter().enumerate() {
                    StepCard { key: "{title}", number: i + 1, icon: icon, title: title, description: description }
                }
            }

            section { class: "impact-card demo-cta",
                h3 { "Don't have a product yet?" }
                p { "Experience the transparency of our products. Each batch has its own unique story." }
                Link {
                    to: Route::Batch { id: "KC2025-001".to_string() },
                    class: "btn btn-ghost btn-large btn-full",
                    "💡 View Demo Journey"
                }
            }

            section { class: "scan-tips",
                h2 { "Scanning Tips" }
                for (i, (icon, title, description)) in SCANNING_TIPS.into_iter().enumerate() {
                    StepCard { key: "{title}", number: i + 1, icon: icon, title: title, description: description }
                }
            }

            RecentDiscoveries {}
        }
    }
}

#[component]
fn ScanErrorNotice(error: ScanError, on_retry: EventHandler<ScanError>) -> Element {
    let message = error.to_string();
    rsx! {
        div { class: "card scan-error",
            p { "{message}" }
            button {
                class: "btn btn-ghost btn-small",
                onclick: move |_| on_retry.call(error.clone()),
                "Try Again"
            }
        }
    }
}

#[component]
fn StepCard(number: usize, icon: &'static str, title: &'static str, description: &'static str) -> Element {
    rsx! {
        div { class: "card step-card",
            span { class: "step-icon", "{icon}" }
            div {
                h3 { span { class: "step-number", "{number}" } " {title}" }
                p { "{description}" }
            }
        }
    }
}

/// Latest batches, newest first.
#[component]
fn RecentDiscoveries() -> Element {
    let catalog = use_catalog();
    let now = Utc::now();
    let mut batches: Vec<_> = catalog
        .read()
        .catalog
        .as_ref()
        .map(|c| c.batches().records().to_vec())
        .unwrap_or_default();
    batches.sort_by(|a, b| b.production_date.cmp(&a.production_date));

    rsx! {
        section { class: "recent-discoveries",
            h2 { "Recent Discoveries" }
            p { "See what others have found" }
            for batch in batches {
                {
                    let id = batch.batch_id.to_string();
                    let when = format_relative_time(&batch.production_date, &now);
                    let diverted = format_weight(batch.impact.waste_diverted);
                    rsx! {
                        Link {
                            key: "{id}",
                            to: Route::Batch { id: id.clone() },
                            class: "card discovery-card",
                            div { class: "discovery-header",
                                h4 { "{batch.product_name}" }
                                span { class: "badge badge-teal", "{when}" }
                            }
                            p { "From {batch.source.partner_name} • {diverted} waste diverted" }
                            div { class: "discovery-tags",
                                for cert in batch.certifications.iter().take(2) {
                                    span { class: "tag", key: "{cert}", "{cert}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
