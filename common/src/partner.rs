use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::location::{GeoLocation, MapBounds, MapPoint};

/// Waste-supplying establishment identifier (a slug such as `fjora-cph`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartnerId(pub String);

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of establishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerType {
    Restaurant,
    Bakery,
    Cafe,
    Other,
}

impl PartnerType {
    /// Types offered as directory filter buttons, in display order.
    pub const FILTERABLE: [PartnerType; 3] =
        [PartnerType::Restaurant, PartnerType::Bakery, PartnerType::Cafe];

    pub fn as_str(self) -> &'static str {
        match self {
            PartnerType::Restaurant => "restaurant",
            PartnerType::Bakery => "bakery",
            PartnerType::Cafe => "cafe",
            PartnerType::Other => "other",
        }
    }

    /// Singular card label.
    pub fn label(self) -> &'static str {
        match self {
            PartnerType::Restaurant => "Restaurant",
            PartnerType::Bakery => "Bakery",
            PartnerType::Cafe => "Cafe",
            PartnerType::Other => "Other",
        }
    }

    /// Plural filter-button label.
    pub fn plural_label(self) -> &'static str {
        match self {
            PartnerType::Restaurant => "Restaurants",
            PartnerType::Bakery => "Bakeries",
            PartnerType::Cafe => "Cafés",
            PartnerType::Other => "Others",
        }
    }
}

impl FromStr for PartnerType {
    type Err = RecordError;

    /// Case-sensitive: only the lowercase wire names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restaurant" => Ok(PartnerType::Restaurant),
            "bakery" => Ok(PartnerType::Bakery),
            "cafe" => Ok(PartnerType::Cafe),
            "other" => Ok(PartnerType::Other),
            _ => Err(RecordError::UnknownVariant {
                kind: "partner type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerLocation {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl PartnerLocation {
    pub fn geo(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lng)
    }
}

/// A restaurant, bakery or cafe that supplies food waste for fermentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    #[serde(rename = "type")]
    pub partner_type: PartnerType,
    pub location: PartnerLocation,
    pub waste_types: Vec<String>,
    /// Kilograms upcycled since joining.
    pub total_waste_upcycled: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub sustainability_story: Option<String>,
    pub joined_date: DateTime<Utc>,
}

impl Partner {
    /// Waste types shown on a list card, plus how many were cut off.
    pub fn waste_type_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.waste_types.len().min(limit);
        (&self.waste_types[..shown], self.waste_types.len() - shown)
    }

    /// Marker position on the city map, if the partner falls on it.
    pub fn map_point(&self) -> Option<MapPoint> {
        hand_placed_marker(&self.id)
            .or_else(|| MapBounds::COPENHAGEN.project(&self.location.geo()))
    }
}

/// Side length in pixels of the square city map image.
pub const MAP_IMAGE_SIZE: f64 = 515.0;

/// Markers hand-aligned to the street positions on the city map image.
fn hand_placed_marker(id: &PartnerId) -> Option<MapPoint> {
    let (x, y) = match id.0.as_str() {
        "fjora-cph" => (320.0, 180.0),
        "hart-bakery" => (280.0, 220.0),
        "mirabelle" => (350.0, 160.0),
        "amass" => (450.0, 320.0),
        _ => return None,
    };
    Some(MapPoint::from_pixels(x, y, MAP_IMAGE_SIZE))
}

/// Headline numbers for the partner network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkStats {
    pub partner_count: usize,
    pub total_waste_kg: f64,
    pub co2_saved_kg: f64,
    pub meals_created: f64,
}

impl NetworkStats {
    const CO2_PER_KG_WASTE: f64 = 0.5;
    const MEALS_PER_KG_WASTE: f64 = 4.0;

    pub fn from_partners(partners: &[Partner]) -> Self {
        let total_waste_kg: f64 = partners.iter().map(|p| p.total_waste_upcycled).sum();
        Self {
            partner_count: partners.len(),
            total_waste_kg,
            co2_saved_kg: (total_waste_kg * Self::CO2_PER_KG_WASTE).round(),
            meals_created: (total_waste_kg * Self::MEALS_PER_KG_WASTE).round(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn partner(id: &str, name: &str, t: PartnerType, waste: &[&str], kg: f64) -> Partner {
        Partner {
            id: PartnerId(id.into()),
            name: name.into(),
            partner_type: t,
            location: PartnerLocation {
                address: "Somewhere 1, Copenhagen".into(),
                lat: 55.68,
                lng: 12.57,
            },
            waste_types: waste.iter().map(|w| w.to_string()).collect(),
            total_waste_upcycled: kg,
            description: None,
            logo: None,
            website: None,
            sustainability_story: None,
            joined_date: Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_type_parse_is_case_sensitive() {
        assert_eq!("bakery".parse::<PartnerType>(), Ok(PartnerType::Bakery));
        assert!("Bakery".parse::<PartnerType>().is_err());
        assert!("all".parse::<PartnerType>().is_err());
    }

    #[test]
    fn test_waste_type_preview() {
        let p = partner("m", "Mirabelle", PartnerType::Bakery, &["bread", "pastries", "croissants", "cake"], 1.0);
        let (shown, more) = p.waste_type_preview(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(more, 1);

        let (shown, more) = p.waste_type_preview(10);
        assert_eq!(shown.len(), 4);
        assert_eq!(more, 0);
    }

    #[test]
    fn test_network_stats() {
        let partners = vec![
            partner("a", "A", PartnerType::Restaurant, &[], 450.0),
            partner("b", "B", PartnerType::Bakery, &[], 320.0),
            partner("c", "C", PartnerType::Bakery, &[], 280.0),
            partner("d", "D", PartnerType::Restaurant, &[], 520.0),
        ];
        let stats = NetworkStats::from_partners(&partners);
        assert_eq!(stats.partner_count, 4);
        assert_eq!(stats.total_waste_kg, 1570.0);
        assert_eq!(stats.co2_saved_kg, 785.0);
        assert_eq!(stats.meals_created, 6280.0);
    }

    #[test]
    fn test_map_point_prefers_hand_placed_marker() {
        let p = partner("amass", "Amass", PartnerType::Restaurant, &[], 0.0);
        let point = p.map_point().unwrap();
        assert!((point.left_pct - 450.0 / 515.0 * 100.0).abs() < 1e-9);

        let unknown = partner("new-place", "New", PartnerType::Cafe, &[], 0.0);
        assert!(unknown.map_point().is_some());
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "id": "hart-bakery",
            "name": "Hart Bakery",
            "type": "bakery",
            "location": { "address": "Gammel Kongevej 109, Copenhagen", "lat": 55.6745, "lng": 12.5492 },
            "wasteTypes": ["bread", "pastries"],
            "totalWasteUpcycled": 320,
            "joinedDate": "2024-04-20T00:00:00Z"
        }"#;
        let p: Partner = serde_json::from_str(json).unwrap();
        assert_eq!(p.partner_type, PartnerType::Bakery);
        assert_eq!(p.total_waste_upcycled, 320.0);
        assert!(p.website.is_none());
    }
}
