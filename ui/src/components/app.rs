use std::time::Duration;

use dioxus::prelude::*;

use super::batch_view::BatchView;
use super::catalog_state::{use_catalog, CatalogState};
use super::home_view::HomeView;
use super::learn_view::LearnView;
use super::partners_view::PartnersView;
use super::scan_view::ScanView;
use super::timer::sleep;

const NAV_AUTO_COLLAPSE: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/scan")]
    Scan {},
    #[route("/partners")]
    Partners {},
    #[route("/learn")]
    Learn {},
    #[route("/batch/:id")]
    Batch { id: String },
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(CatalogState::load()));

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let catalog = use_catalog();
    let load_error = catalog.read().last_error.clone();

    rsx! {
        div { class: "koji-app",
            header { class: "glass-header",
                Link { to: Route::Home {}, class: "brand",
                    span { class: "brand-mark", "🍄" }
                    span { "Koji Copenhagen" }
                }
            }
            if let Some(err) = load_error {
                p { class: "connection-status error", "Data unavailable: {err}" }
            }
            main {
                Outlet::<Route> {}
            }
            FloatingNav {}
        }
    }
}

/// Top-level destinations in the floating menu.
fn nav_items() -> [(&'static str, &'static str, Route); 4] {
    [
        ("Home", "🏠", Route::Home {}),
        ("Scan", "📷", Route::Scan {}),
        ("Partners", "📍", Route::Partners {}),
        ("Learn", "📖", Route::Learn {}),
    ]
}

/// Collapsible navigation button. Collapses on its own a few seconds after
/// being opened.
#[component]
fn FloatingNav() -> Element {
    let current = use_route::<Route>();
    let mut expanded = use_signal(|| false);
    let mut opened_at = use_signal(|| 0u32);

    let mut toggle = move || {
        if expanded() {
            expanded.set(false);
            return;
        }
        expanded.set(true);
        let ticket = opened_at() + 1;
        opened_at.set(ticket);
        spawn(async move {
            sleep(NAV_AUTO_COLLAPSE).await;
            // A later open restarts the countdown.
            if opened_at() == ticket {
                expanded.set(false);
            }
        });
    };

    let nav_class = if expanded() { "floating-nav expanded" } else { "floating-nav" };

    rsx! {
        nav { class: "{nav_class}",
            if expanded() {
                ul { class: "floating-nav-items",
                    for (label, icon, route) in nav_items() {
                        {
                            let item_class = if route == current { "nav-item active" } else { "nav-item" };
                            rsx! {
                                li { key: "{label}",
                                    Link {
                                        to: route,
                                        class: "{item_class}",
                                        onclick: move |_| expanded.set(false),
                                        span { class: "nav-icon", "{icon}" }
                                        span { "{label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            button {
                class: "floating-nav-toggle",
                onclick: move |_| toggle(),
                if expanded() { "✕" } else { "☰" }
            }
        }
    }
}

/// Route component: landing page.
#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

/// Route component: camera scanner.
#[component]
fn Scan() -> Element {
    rsx! { ScanView {} }
}

/// Route component: partner directory.
#[component]
fn Partners() -> Element {
    rsx! { PartnersView {} }
}

/// Route component: learning hub.
#[component]
fn Learn() -> Element {
    rsx! { LearnView {} }
}

/// Route component: a batch's traceability page. Keyed by id so a new id
/// starts a fresh lookup.
#[component]
fn Batch(id: String) -> Element {
    rsx! { BatchView { key: "{id}", id: id.clone() } }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "not-found",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to home" }
        }
    }
}
