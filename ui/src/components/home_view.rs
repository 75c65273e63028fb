use dioxus::prelude::*;

use koji_common::format::{format_co2, format_number, format_weight};
use koji_common::partner::NetworkStats;

use super::app::Route;
use super::catalog_state::use_catalog;

const PROCESS_STEPS: [(&str, &str, &str); 4] = [
    ("🍞", "Collect", "Partner restaurants save their high-quality food waste"),
    ("🧪", "Inoculate", "We add koji spores to start the fermentation process"),
    ("⏱️", "Ferment", "Controlled environment nurtures growth for 3-5 days"),
    ("📦", "Package", "QR-coded products ready for complete traceability"),
];

#[component]
pub fn HomeView() -> Element {
    let catalog = use_catalog();
    let state = catalog.read();
    let stats = NetworkStats::from_partners(state.partners());
    let partner_names: Vec<String> = state.partners().iter().map(|p| p.name.clone()).collect();
    drop(state);

    let co2 = format_co2(stats.co2_saved_kg);
    let diverted = format_weight(stats.total_waste_kg);
    let meals = format_number(stats.meals_created);
    let partner_count = stats.partner_count;

    rsx! {
        div { class: "home-view",
            section { class: "hero",
                h1 {
                    "Koji Copenhagen From Food Waste to "
                    span { class: "gradient-text", "Fermented Gold" }
                }
                p { "Scan any Koji Copenhagen product to trace its journey from local restaurant waste to your table" }
                Link { to: Route::Scan {}, class: "glass-btn", "📷 Scan Product Now" }
                Link { to: Route::Partners {}, class: "glass-btn-secondary", "📍 Explore Partners" }
            }

            section { class: "impact-stats",
                h2 { "Our Impact" }
                div { class: "impact-grid",
                    StatCard { icon: "🌿", value: co2, label: "CO₂ Saved" }
                    StatCard { icon: "📈", value: diverted, label: "Waste Diverted" }
                    StatCard { icon: "🤝", value: partner_count.to_string(), label: "Partners" }
                    StatCard { icon: "🏅", value: meals, label: "Meals" }
                }
            }

            section { class: "quick-actions",
                h2 { "What You Can Do" }
                Link { to: Route::Scan {}, class: "glass-card",
                    h3 { "Scan & Trace" }
                    p { "See your product's complete journey from waste to table" }
                }
                Link { to: Route::Partners {}, class: "glass-card",
                    h3 { "Find Partners" }
                    p { "Discover local restaurants helping build a sustainable future" }
                }
                Link { to: Route::Learn {}, class: "glass-card",
                    h3 { "Learn Koji" }
                    p { "Recipes, guides, and the science of fermentation" }
                }
            }

            section { class: "process-steps",
                h2 { "How It Works" }
                for (n, (icon, title, description)) in PROCESS_STEPS.into_iter().enumerate().map(|(i, step)| (i + 1, step)) {
                    div { class: "glass-card process-step", key: "{title}",
                        span { class: "step-icon", "{icon}" }
                        div {
                            h3 { "{n}. {title}" }
                            p { "{description}" }
                        }
                    }
                }
            }

            section { class: "featured-partners",
                h2 { "Our Partners" }
                p { "Copenhagen's finest establishments" }
                div { class: "partner-grid",
                    for name in partner_names {
                        div { class: "card", key: "{name}", p { "{name}" } }
                    }
                }
                Link { to: Route::Partners {}, class: "btn btn-ghost", "View All Partners" }
            }

            section { class: "final-cta",
                h2 { "Ready to Start?" }
                p { "Scan any Koji Copenhagen product to discover its unique story and environmental impact" }
                Link { to: Route::Scan {}, class: "btn btn-glass", "Scan Now" }
            }
        }
    }
}

#[component]
fn StatCard(icon: &'static str, value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "glass-card stat-card",
            span { class: "stat-icon", "{icon}" }
            p { class: "stat-value", "{value}" }
            p { class: "stat-label", "{label}" }
        }
    }
}
