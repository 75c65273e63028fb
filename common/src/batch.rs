use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::journey::{self, JourneyStep};
use crate::location::GeoLocation;
use crate::partner::PartnerId;
use crate::product::ProductType;
use crate::progress;

/// Production-run identifier printed in the QR code (e.g. `KC2025-001`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(pub String);

impl BatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the waste for a batch came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSource {
    pub partner_id: PartnerId,
    pub partner_name: String,
    pub location: GeoLocation,
    pub waste_type: Vec<String>,
    /// Kilograms.
    pub waste_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FermentationMethod {
    RiceKoji,
    BarleyKoji,
    WheatKoji,
}

impl FermentationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            FermentationMethod::RiceKoji => "rice_koji",
            FermentationMethod::BarleyKoji => "barley_koji",
            FermentationMethod::WheatKoji => "wheat_koji",
        }
    }

    /// `barley_koji` → `BARLEY KOJI`
    pub fn label(self) -> String {
        self.as_str().replacen('_', " ", 1).to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fermentation {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Days.
    pub duration: u32,
    pub method: FermentationMethod,
    /// Degrees Celsius.
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Relative humidity, percent.
    #[serde(default)]
    pub humidity: Option<f64>,
}

impl Fermentation {
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.end_date < self.start_date {
            return Err(RecordError::EndsBeforeStart {
                what: "fermentation",
            });
        }
        Ok(())
    }
}

/// Post-fermentation aging window. `current_age` may run past `target_age`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aging {
    pub start_date: DateTime<Utc>,
    pub expected_end_date: DateTime<Utc>,
    /// Days.
    pub current_age: u32,
    /// Days.
    pub target_age: u32,
}

impl Aging {
    /// Unclamped percentage of the target age reached.
    pub fn progress(&self) -> f64 {
        progress::progress_ratio(self.current_age as f64, self.target_age as f64)
    }

    /// Bar width, clamped to `[0, 100]`.
    pub fn fill_percent(&self) -> f64 {
        progress::fill_percent(self.current_age as f64, self.target_age as f64)
    }

    pub fn target_reached(&self) -> bool {
        self.progress() >= 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
    /// Kilograms.
    pub co2_saved: f64,
    /// Kilograms.
    pub waste_diverted: f64,
    pub meals_equivalent: f64,
    /// Litres.
    #[serde(default)]
    pub water_saved: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub live_stream_url: Option<String>,
    #[serde(default)]
    pub timelapse_url: Option<String>,
}

impl Media {
    const GALLERY_SIZE: usize = 4;

    /// Photos shown in the production gallery.
    pub fn gallery(&self) -> &[String] {
        &self.photos[..self.photos.len().min(Self::GALLERY_SIZE)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Inoculation,
    Fermentation,
    Aging,
    Ready,
    Sold,
}

impl BatchStatus {
    pub fn label(self) -> &'static str {
        match self {
            BatchStatus::Inoculation => "Inoculation",
            BatchStatus::Fermentation => "Fermentation",
            BatchStatus::Aging => "Aging",
            BatchStatus::Ready => "Ready",
            BatchStatus::Sold => "Sold",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            BatchStatus::Inoculation => "bg-yellow-100 text-yellow-800",
            BatchStatus::Fermentation => "bg-blue-100 text-blue-800",
            BatchStatus::Aging => "bg-orange-100 text-orange-800",
            BatchStatus::Ready => "bg-green-100 text-green-800",
            BatchStatus::Sold => "bg-gray-100 text-gray-800",
        }
    }
}

/// One production run of a fermented product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub batch_id: BatchId,
    pub product_type: ProductType,
    pub product_name: String,
    pub production_date: DateTime<Utc>,
    pub source: BatchSource,
    pub fermentation: Fermentation,
    #[serde(default)]
    pub aging: Option<Aging>,
    pub impact: Impact,
    #[serde(default)]
    pub media: Media,
    pub journey: Vec<JourneyStep>,
    pub qr_code: String,
    pub status: BatchStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl Batch {
    /// Position of the step marked current, if any.
    pub fn current_step_index(&self) -> Option<usize> {
        journey::current_step_index(&self.journey)
    }

    /// Data-quality check for fixtures and imports. Pages never call this;
    /// they render whatever they are given.
    pub fn validate(&self) -> Result<(), RecordError> {
        self.fermentation.validate()?;
        if let Some(aging) = &self.aging {
            if aging.expected_end_date < aging.start_date {
                return Err(RecordError::EndsBeforeStart { what: "aging" });
            }
        }
        journey::check_order(&self.journey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, m, d, 0, 0, 0).unwrap()
    }

    fn aging(current: u32, target: u32) -> Aging {
        Aging {
            start_date: day(1, 18),
            expected_end_date: day(7, 18),
            current_age: current,
            target_age: target,
        }
    }

    #[test]
    fn test_method_label() {
        assert_eq!(FermentationMethod::BarleyKoji.label(), "BARLEY KOJI");
        assert_eq!(FermentationMethod::RiceKoji.label(), "RICE KOJI");
    }

    #[test]
    fn test_status_label_and_badge() {
        assert_eq!(BatchStatus::Aging.label(), "Aging");
        assert_eq!(BatchStatus::Aging.badge_class(), "bg-orange-100 text-orange-800");
        assert_eq!(BatchStatus::Sold.badge_class(), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn test_aging_progress() {
        let a = aging(3, 180);
        assert!((a.fill_percent() - 1.6666666).abs() < 1e-6);
        assert!(!a.target_reached());

        let overdue = aging(200, 180);
        assert_eq!(overdue.fill_percent(), 100.0);
        assert!(overdue.progress() > 100.0);
        assert!(overdue.target_reached());
    }

    #[test]
    fn test_fermentation_window_check() {
        let mut f = Fermentation {
            start_date: day(1, 15),
            end_date: day(1, 18),
            duration: 3,
            method: FermentationMethod::BarleyKoji,
            temperature: Some(30.0),
            humidity: Some(75.0),
        };
        assert!(f.validate().is_ok());

        f.end_date = day(1, 14);
        assert_eq!(
            f.validate(),
            Err(RecordError::EndsBeforeStart {
                what: "fermentation"
            })
        );
    }

    #[test]
    fn test_gallery_caps_at_four() {
        let media = Media {
            photos: (1..=6).map(|i| format!("/images/batch-{i}.jpg")).collect(),
            ..Media::default()
        };
        assert_eq!(media.gallery().len(), 4);
        assert_eq!(Media::default().gallery().len(), 0);
    }
}
