use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Current => "current",
            StepStatus::Upcoming => "upcoming",
        }
    }

    fn rank(self) -> u8 {
        match self {
            StepStatus::Completed => 0,
            StepStatus::Current => 1,
            StepStatus::Upcoming => 2,
        }
    }
}

/// One event on a batch timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyStep {
    pub id: String,
    /// Days since the batch started.
    pub day: u32,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    pub status: StepStatus,
}

pub fn current_step_index(steps: &[JourneyStep]) -> Option<usize> {
    steps.iter().position(|s| s.status == StepStatus::Current)
}

/// How a timeline node is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepVisual {
    /// Filled node: at or before the current step.
    pub active: bool,
    /// Highlighted card with the "Current" badge.
    pub current: bool,
    /// Check mark instead of the step icon.
    pub checked: bool,
}

/// With no current step, every node is drawn inactive.
pub fn step_visual(index: usize, step: &JourneyStep, current: Option<usize>) -> StepVisual {
    let active = current.is_some_and(|c| index <= c);
    StepVisual {
        active,
        current: current == Some(index),
        checked: active && step.status == StepStatus::Completed,
    }
}

/// Icon family for a timeline node, picked from keywords in the step title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIcon {
    Package,
    Wheat,
    Timer,
    Clock,
    Award,
    Circle,
}

impl StepIcon {
    pub fn for_title(title: &str) -> Self {
        let t = title.to_lowercase();
        if t.contains("collect") {
            StepIcon::Package
        } else if t.contains("inoculat") {
            StepIcon::Wheat
        } else if t.contains("ferment") {
            StepIcon::Timer
        } else if t.contains("aging") {
            StepIcon::Clock
        } else if t.contains("ready") {
            StepIcon::Award
        } else {
            StepIcon::Circle
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            StepIcon::Package => "📦",
            StepIcon::Wheat => "🌾",
            StepIcon::Timer => "⏱️",
            StepIcon::Clock => "🕰️",
            StepIcon::Award => "🏅",
            StepIcon::Circle => "○",
        }
    }
}

/// Checks the timeline display contract: days never decrease, at most one
/// step is current, completed steps precede it and upcoming steps follow.
pub fn check_order(steps: &[JourneyStep]) -> Result<(), RecordError> {
    let current_count = steps
        .iter()
        .filter(|s| s.status == StepStatus::Current)
        .count();
    if current_count > 1 {
        return Err(RecordError::MultipleCurrentSteps(current_count));
    }

    for pair in steps.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.day < prev.day {
            return Err(RecordError::DayRegression {
                id: next.id.clone(),
                day: next.day,
                previous: prev.day,
            });
        }
        if next.status.rank() < prev.status.rank() {
            return Err(RecordError::StepOutOfOrder {
                id: next.id.clone(),
                status: next.status.as_str(),
            });
        }
    }
    Ok(())
}

pub fn is_well_ordered(steps: &[JourneyStep]) -> bool {
    check_order(steps).is_ok()
}
