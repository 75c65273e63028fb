use dioxus::prelude::*;

use koji_common::batch_page::{BatchPage, BatchTab, SharePayload};
use koji_common::format::{format_co2, format_weight};
use koji_common::BatchId;

use super::app::Route;
use super::batch_info::BatchInfo;
use super::catalog_state::use_catalog;
use super::journey_timeline::JourneyTimeline;
use super::share::{current_url, share_batch};
use super::timer::sleep;

/// Batch detail page. Shows a spinner for the configured delay, then the
/// batch or a not-found notice.
///
/// Mount with a `key` of the batch id so a new id starts a fresh page.
#[component]
pub fn BatchView(id: String) -> Element {
    let catalog = use_catalog();
    let mut page = use_signal(BatchPage::default);

    // Tasks spawned here belong to this component and are cancelled when it
    // unmounts, so a late lookup never writes into a page that is gone.
    use_hook(move || {
        let delay = catalog.peek().config.load_delay;
        let batch_id = BatchId::new(id.clone());
        spawn(async move {
            sleep(delay).await;
            let resolved = match catalog.peek().catalog.as_ref() {
                Some(c) => BatchPage::fetch(c.batches(), &batch_id),
                None => BatchPage::NotFound,
            };
            match &resolved {
                BatchPage::Loaded { .. } => tracing::info!("Loaded batch {batch_id}"),
                _ => tracing::info!("Batch {batch_id} not found"),
            }
            page.set(resolved);
        });
    });

    let current = page.read().clone();
    match current {
        BatchPage::Loading => rsx! {
            div { class: "page-center",
                div { class: "spinner" }
                p { class: "muted", "Loading batch information..." }
            }
        },
        BatchPage::NotFound => rsx! {
            div { class: "page-center",
                h2 { "Batch Not Found" }
                p { class: "muted", "We couldn't find the batch you're looking for." }
                Link { class: "btn btn-primary", to: Route::Scan {}, "Scan Another Product" }
            }
        },
        BatchPage::Loaded { batch, tab } => {
            let public_url = catalog.read().config.public_url;
            let url = current_url(public_url, &batch.batch_id);
            let payload = SharePayload::for_batch(&batch, url);
            let header_payload = payload.clone();
            let diverted = format_weight(batch.impact.waste_diverted);
            let co2 = format_co2(batch.impact.co2_saved);
            let duration = batch.fermentation.duration;
            let current_step = batch.current_step_index();

            rsx! {
                div { class: "batch-view",
                    div { class: "batch-view-header",
                        Link { class: "back-link", to: Route::Scan {}, "← Back to Scanner" }
                        button {
                            class: "btn btn-ghost btn-icon",
                            title: "Share",
                            onclick: move |_| {
                                let payload = header_payload.clone();
                                spawn(async move {
                                    share_batch(payload).await;
                                });
                            },
                            "🔗"
                        }
                    }

                    div { class: "tabs",
                        for option in BatchTab::ALL {
                            TabButton {
                                key: "{option:?}",
                                tab: option,
                                active: option == tab,
                                onclick: move |_| page.write().select_tab(option),
                            }
                        }
                    }

                    div { class: "batch-view-content",
                        {match tab {
                            BatchTab::Journey => rsx! {
                                div { class: "section-heading",
                                    h1 { "Product Journey" }
                                    p { class: "muted", "From food waste to fermented product in {duration} days" }
                                }
                                JourneyTimeline { steps: batch.journey.clone(), current: current_step }
                            },
                            BatchTab::Details => rsx! {
                                div { class: "section-heading",
                                    h1 { "Batch Details" }
                                    p { class: "muted", "Complete information about batch #{batch.batch_id}" }
                                }
                                BatchInfo { batch: (*batch).clone() }
                            },
                        }}
                    }

                    section { class: "card card-cta",
                        h3 { "Share Your Impact" }
                        p { "By choosing this product, you've helped divert {diverted} of food waste and saved {co2}" }
                        button {
                            class: "btn btn-light",
                            onclick: move |_| {
                                let payload = payload.clone();
                                spawn(async move {
                                    share_batch(payload).await;
                                });
                            },
                            "🔗 Share This Journey"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(tab: BatchTab, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let label = tab.label();
    let class = if active { "tab active" } else { "tab" };
    rsx! {
        button {
            class: "{class}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
