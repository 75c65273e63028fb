use dioxus::prelude::*;

use koji_common::format::format_weight;
use koji_common::partner::Partner;

const MAP_IMAGE: &str = "/copenhagen-google-map.jpg";
const WASTE_TYPE_PREVIEW: usize = 3;

/// City map with one marker per visible partner, followed by the partner
/// list. Clicking a marker or a card reports the partner to `on_select`.
#[component]
pub fn PartnerMap(
    partners: Vec<Partner>,
    #[props(!optional)]
    selected: Option<String>,
    on_select: EventHandler<Partner>,
) -> Element {
    let mut hovered = use_signal(|| None::<String>);

    let selected_partner = selected
        .as_ref()
        .and_then(|id| partners.iter().find(|p| &p.id.0 == id))
        .cloned();

    rsx! {
        div { class: "partner-map",
            div { class: "card map-frame",
                img {
                    src: MAP_IMAGE,
                    alt: "Copenhagen Partner Network",
                    width: "515",
                    height: "515",
                }
                for partner in partners.iter().cloned() {
                    if let Some(point) = partner.map_point() {
                        {
                            let id = partner.id.0.clone();
                            let is_selected = selected.as_deref() == Some(id.as_str());
                            let is_hovered = hovered.read().as_deref() == Some(id.as_str());
                            let marker_class = match (is_selected, is_hovered) {
                                (true, _) => "map-marker selected",
                                (false, true) => "map-marker hovered",
                                _ => "map-marker",
                            };
                            let name = partner.name.clone();
                            let enter_id = id.clone();
                            rsx! {
                                div {
                                    key: "{id}",
                                    class: "{marker_class}",
                                    style: "left: {point.left_pct}%; top: {point.top_pct}%;",
                                    onclick: move |_| on_select.call(partner.clone()),
                                    onmouseenter: move |_| hovered.set(Some(enter_id.clone())),
                                    onmouseleave: move |_| hovered.set(None),
                                    div { class: "map-marker-dot" }
                                    if is_hovered {
                                        div { class: "map-tooltip", "{name}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(partner) = selected_partner {
                SelectedPartnerCard { partner: partner }
            }

            div { class: "partner-list",
                if partners.is_empty() {
                    p { class: "empty-state", "No partners found." }
                }
                for partner in partners.iter().cloned() {
                    PartnerCard {
                        key: "{partner.id}",
                        highlighted: selected.as_deref() == Some(partner.id.0.as_str()),
                        partner: partner.clone(),
                        on_select: on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn SelectedPartnerCard(partner: Partner) -> Element {
    let upcycled = format_weight(partner.total_waste_upcycled);
    let description = partner.description.clone().unwrap_or_default();

    rsx! {
        div { class: "card selected-partner",
            h3 { "📍 {partner.name}" }
            p { "{description}" }
            div { class: "partner-facts",
                div {
                    p { class: "fact-label", "Location" }
                    p { "{partner.location.address}" }
                }
                div {
                    p { class: "fact-label", "Impact" }
                    p { class: "gradient-text", "{upcycled} upcycled" }
                }
            }
            p { class: "fact-label", "Waste Types" }
            div { class: "badges",
                for waste in partner.waste_types.iter() {
                    span { class: "badge badge-teal", key: "{waste}", "{waste}" }
                }
            }
            if let Some(site) = partner.website.as_ref() {
                a {
                    class: "btn btn-secondary btn-small",
                    href: "{site}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Visit Website ↗"
                }
            }
        }
    }
}

#[component]
fn PartnerCard(partner: Partner, highlighted: bool, on_select: EventHandler<Partner>) -> Element {
    let (shown, hidden) = partner.waste_type_preview(WASTE_TYPE_PREVIEW);
    let shown = shown.to_vec();
    let impact = format_weight(partner.total_waste_upcycled);
    let class = if highlighted { "card partner-card highlighted" } else { "card partner-card" };
    let kind = partner.partner_type.label();
    let clicked = partner.clone();

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| on_select.call(clicked.clone()),
            h3 { "{partner.name}" }
            p { class: "partner-type", "{kind}" }
            p { class: "partner-address", "{partner.location.address}" }
            div { class: "badges",
                for waste in shown {
                    span { class: "badge badge-teal", key: "{waste}", "{waste}" }
                }
                if hidden > 0 {
                    span { class: "badge badge-rust", "+{hidden} more" }
                }
            }
            div { class: "partner-impact",
                span { "Total Impact" }
                span { class: "gradient-text", "{impact}" }
            }
        }
    }
}
