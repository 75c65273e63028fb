use chrono::Utc;
use dioxus::prelude::*;

use koji_common::format::{format_date, format_days_ago};
use koji_common::journey::{step_visual, JourneyStep, StepIcon, StepVisual};

#[derive(Clone, PartialEq)]
struct TimelineRow {
    id: String,
    heading: String,
    when: String,
    description: String,
    photo: Option<String>,
    title: String,
    glyph: &'static str,
    visual: StepVisual,
}

/// Vertical timeline of a batch's journey. Steps up to `current` are drawn
/// filled; with no current step every node is drawn inactive.
#[component]
pub fn JourneyTimeline(steps: Vec<JourneyStep>, #[props(!optional)] current: Option<usize>) -> Element {
    let now = Utc::now();
    let rows: Vec<TimelineRow> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let visual = step_visual(i, step, current);
            let glyph = if visual.checked {
                "✅"
            } else {
                StepIcon::for_title(&step.title).glyph()
            };
            TimelineRow {
                id: step.id.clone(),
                heading: format!("Day {}: {}", step.day, step.title),
                when: format!("{} • {}", format_date(&step.date), format_days_ago(&step.date, &now)),
                description: step.description.clone(),
                photo: step.photo.clone(),
                title: step.title.clone(),
                glyph,
                visual,
            }
        })
        .collect();

    rsx! {
        ol { class: "timeline",
            for row in rows.into_iter() {
                TimelineItem { key: "{row.id}", row: row }
            }
        }
    }
}

#[component]
fn TimelineItem(row: TimelineRow) -> Element {
    let node_class = match (row.visual.active, row.visual.current) {
        (true, true) => "timeline-node active current",
        (true, false) => "timeline-node active",
        _ => "timeline-node",
    };
    let card_class = if row.visual.current {
        "card timeline-card current"
    } else {
        "card timeline-card"
    };

    rsx! {
        li { class: "timeline-item",
            div { class: "{node_class}", "{row.glyph}" }
            div { class: "{card_class}",
                div { class: "timeline-card-header",
                    div {
                        h3 { "{row.heading}" }
                        p { class: "muted", "{row.when}" }
                    }
                    if row.visual.current {
                        span { class: "badge badge-current", "Current" }
                    }
                }
                p { "{row.description}" }
                if let Some(photo) = row.photo.clone() {
                    img { class: "timeline-photo", src: "{photo}", alt: "{row.title}" }
                }
            }
        }
    }
}
