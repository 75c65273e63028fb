use dioxus::prelude::*;

use koji_common::filter::{CategoryFilter, DirectoryState};
use koji_common::format::{format_month_year, format_number};
use koji_common::partner::{NetworkStats, Partner, PartnerType};

use super::catalog_state::use_catalog;
use super::partner_map::PartnerMap;

#[component]
pub fn PartnersView() -> Element {
    let catalog = use_catalog();
    let mut directory = use_signal(DirectoryState::<PartnerType>::new);

    let state = catalog.read();
    let partners = state.partners().to_vec();
    let mailto = state.config.partner_mailto();
    drop(state);

    let stats = NetworkStats::from_partners(&partners);
    let view = directory.read();
    let visible: Vec<Partner> = view.visible(&partners).into_iter().cloned().collect();
    let spotlight = view.spotlight(&partners).cloned();
    let selected = view.selection.selected().cloned();
    let active_filter = view.filter.category;
    let query = view.filter.query.clone();
    drop(view);

    let total_waste = format_number(stats.total_waste_kg);
    let co2 = format_number(stats.co2_saved_kg);
    let meals = format_number(stats.meals_created);

    rsx! {
        div { class: "partners-view",
            section { class: "page-header",
                h1 {
                    "Our Partner "
                    span { class: "gradient-text", "Network" }
                }
                p {
                    "Copenhagen's finest restaurants and bakeries committed to reducing food waste through koji fermentation"
                }
            }

            div { class: "network-stats",
                div { class: "card stat-card",
                    p { class: "stat-value", "{stats.partner_count}" }
                    p { class: "stat-label", "Partners" }
                }
                div { class: "card stat-card",
                    p { class: "stat-value", "{total_waste}kg" }
                    p { class: "stat-label", "Waste Upcycled" }
                }
                div { class: "card stat-card",
                    p { class: "stat-value", "{co2}kg" }
                    p { class: "stat-label", "CO₂ Saved" }
                }
                div { class: "card stat-card",
                    p { class: "stat-value", "{meals}" }
                    p { class: "stat-label", "Meals Created" }
                }
            }

            div { class: "card filters",
                div { class: "search-bar",
                    input {
                        r#type: "text",
                        placeholder: "Search partners or waste types...",
                        value: "{query}",
                        oninput: move |evt| directory.write().set_query(evt.value()),
                    }
                }
                div { class: "filter-buttons",
                    FilterButton {
                        label: "All",
                        active: active_filter == CategoryFilter::All,
                        onclick: move |_| directory.write().set_category(CategoryFilter::All),
                    }
                    for kind in PartnerType::FILTERABLE {
                        FilterButton {
                            key: "{kind:?}",
                            label: kind.plural_label(),
                            active: active_filter == CategoryFilter::Only(kind),
                            onclick: move |_| directory.write().set_category(CategoryFilter::Only(kind)),
                        }
                    }
                }
            }

            PartnerMap {
                partners: visible,
                selected: selected,
                on_select: move |partner: Partner| directory.write().select(&partner),
            }

            if let Some(partner) = spotlight {
                PartnerSpotlight { partner: partner }
            }

            section { class: "join-cta",
                h2 { "Become a Partner" }
                p {
                    "Join Copenhagen's circular economy. Transform your food waste into valuable fermented products while reducing your environmental impact."
                }
                a { class: "btn btn-glass btn-large", href: "{mailto}", "Get in Touch" }
            }
        }
    }
}

#[component]
pub fn FilterButton(label: &'static str, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let class = if active { "btn btn-small btn-primary" } else { "btn btn-small btn-ghost" };
    rsx! {
        button { class: "{class}", onclick: move |evt| onclick.call(evt), "{label}" }
    }
}

/// Highlighted partner. Stays visible even when the filter hides the
/// partner from the list.
#[component]
fn PartnerSpotlight(partner: Partner) -> Element {
    let since = format_month_year(&partner.joined_date);
    let description = partner.description.clone().unwrap_or_default();
    let upcycled = format_number(partner.total_waste_upcycled);

    rsx! {
        section { class: "partner-spotlight glass-effect",
            h2 { "{partner.name}" }
            p { class: "spotlight-description", "{description}" }
            if let Some(story) = partner.sustainability_story.as_ref() {
                p { class: "spotlight-story", "{story}" }
            }
            div { class: "spotlight-facts",
                div {
                    p { class: "fact-value", "{upcycled}kg" }
                    p { class: "fact-label", "Waste Upcycled" }
                }
                div {
                    p { class: "fact-label", "Waste Types" }
                    div { class: "badges",
                        for waste in partner.waste_types.iter() {
                            span { class: "badge badge-green", key: "{waste}", "{waste}" }
                        }
                    }
                }
                div {
                    p { class: "fact-value", "{since}" }
                    p { class: "fact-label", "Partner Since" }
                }
            }
        }
    }
}
