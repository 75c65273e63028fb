use dioxus::prelude::*;

use koji_common::batch::{Aging, Fermentation};
use koji_common::format::{format_co2, format_date, format_number, format_percent, format_weight};
use koji_common::Batch;

/// The "Details" tab of a batch page.
#[component]
pub fn BatchInfo(batch: Batch) -> Element {
    let status = batch.status.label();
    let badge = batch.status.badge_class();
    let produced = format_date(&batch.production_date);
    let duration = batch.fermentation.duration;
    let waste_upcycled = format_weight(batch.source.waste_weight);
    let co2 = format_co2(batch.impact.co2_saved);
    let diverted = format_weight(batch.impact.waste_diverted);
    let meals = format_number(batch.impact.meals_equivalent);
    let gallery: Vec<(usize, String)> = batch
        .media
        .gallery()
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, photo)| (i + 1, photo))
        .collect();

    rsx! {
        div { class: "batch-info",
            section { class: "card batch-info-header",
                div { class: "batch-info-title",
                    div {
                        h1 { "{batch.product_name}" }
                        p { class: "muted", "Batch #{batch.batch_id}" }
                    }
                    span { class: "badge {badge}", "{status}" }
                }
                div { class: "batch-info-dates",
                    span { "📅 Produced: {produced}" }
                    span { "⏱️ Fermentation: {duration} days" }
                }
            }

            section { class: "card",
                h2 { "📍 Source Partner" }
                p { class: "partner-name", "{batch.source.partner_name}" }
                p { class: "muted", "Copenhagen, Denmark" }
                div { class: "tag-list",
                    for waste in batch.source.waste_type.iter() {
                        span { key: "{waste}", class: "tag", "{waste}" }
                    }
                }
                p { class: "upcycled", "♻️ {waste_upcycled} of food waste upcycled" }
            }

            section { class: "card",
                h2 { "🌿 Environmental Impact" }
                div { class: "impact-grid",
                    div { class: "impact-cell",
                        p { class: "impact-value", "{co2}" }
                        p { class: "impact-label", "CO₂ Saved" }
                    }
                    div { class: "impact-cell",
                        p { class: "impact-value", "{diverted}" }
                        p { class: "impact-label", "Waste Diverted" }
                    }
                    div { class: "impact-cell",
                        p { class: "impact-value", "{meals}" }
                        p { class: "impact-label", "Meal Equivalent" }
                    }
                }
            }

            FermentationCard { fermentation: batch.fermentation.clone() }

            if let Some(aging) = batch.aging.clone() {
                AgingCard { aging: aging }
            }

            if !gallery.is_empty() {
                section { class: "card",
                    h2 { "Production Gallery" }
                    div { class: "gallery-grid",
                        for (n, photo) in gallery.into_iter() {
                            img {
                                key: "{n}",
                                class: "gallery-photo",
                                src: "{photo}",
                                alt: "Production photo {n}",
                            }
                        }
                    }
                }
            }

            if !batch.certifications.is_empty() {
                section { class: "card",
                    h2 { "🏅 Certifications" }
                    div { class: "tag-list",
                        for cert in batch.certifications.iter() {
                            span { key: "{cert}", class: "tag tag-cert", "{cert}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FermentationCard(fermentation: Fermentation) -> Element {
    let method = fermentation.method.label();
    let start = format_date(&fermentation.start_date);
    let end = format_date(&fermentation.end_date);

    rsx! {
        section { class: "card",
            h2 { "📦 Fermentation Process" }
            dl { class: "detail-list",
                div { class: "detail-row",
                    dt { "Method" }
                    dd { "{method}" }
                }
                if let Some(temperature) = fermentation.temperature {
                    div { class: "detail-row",
                        dt { "🌡️ Temperature" }
                        dd { "{temperature}°C" }
                    }
                }
                if let Some(humidity) = fermentation.humidity {
                    div { class: "detail-row",
                        dt { "💧 Humidity" }
                        dd { "{humidity}%" }
                    }
                }
                div { class: "detail-row",
                    dt { "Start" }
                    dd { "{start}" }
                }
                div { class: "detail-row",
                    dt { "End" }
                    dd { "{end}" }
                }
            }
        }
    }
}

#[component]
fn AgingCard(aging: Aging) -> Element {
    let fill = aging.fill_percent();
    let progress = format_percent(aging.progress());
    let expected = format_date(&aging.expected_end_date);
    let reached = aging.target_reached();

    rsx! {
        section { class: "card",
            h2 { "⏱️ Aging Process" }
            div { class: "detail-row",
                span { "Current Age" }
                span { class: "strong", "{aging.current_age} / {aging.target_age} days" }
            }
            div {
                class: "progress-track",
                title: "{progress}",
                div { class: "progress-fill", style: "width: {fill}%" }
            }
            p { class: "muted", "Expected completion: {expected}" }
            if reached {
                p { class: "caption", "Target age reached" }
            }
        }
    }
}
