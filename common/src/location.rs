use serde::{Deserialize, Serialize};

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
}

impl GeoLocation {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A point on a rendered map image, as percentages of its width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub left_pct: f64,
    pub top_pct: f64,
}

impl MapPoint {
    /// Convert a pixel position on a square image of `size` pixels.
    pub fn from_pixels(x: f64, y: f64, size: f64) -> Self {
        Self {
            left_pct: x / size * 100.0,
            top_pct: y / size * 100.0,
        }
    }
}

/// Rectangular lat/lng window covered by a static map image.
///
/// Used to place markers for partners that have no hand-tuned pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl MapBounds {
    /// Window shown by the Copenhagen partner map.
    pub const COPENHAGEN: MapBounds = MapBounds {
        north: 55.7200,
        south: 55.6300,
        west: 12.4900,
        east: 12.6500,
    };

    /// Linear projection onto the image; `None` when the point lies outside.
    pub fn project(&self, loc: &GeoLocation) -> Option<MapPoint> {
        if loc.lat > self.north || loc.lat < self.south || loc.lng < self.west || loc.lng > self.east
        {
            return None;
        }
        let left_pct = (loc.lng - self.west) / (self.east - self.west) * 100.0;
        let top_pct = (self.north - loc.lat) / (self.north - self.south) * 100.0;
        Some(MapPoint { left_pct, top_pct })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_to_percent() {
        let p = MapPoint::from_pixels(257.5, 515.0, 515.0);
        assert!((p.left_pct - 50.0).abs() < 1e-9);
        assert!((p.top_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_inside_bounds() {
        let centre = GeoLocation::new(55.675, 12.57);
        let p = MapBounds::COPENHAGEN.project(&centre).expect("inside");
        assert!((p.left_pct - 50.0).abs() < 0.01);
        assert!((p.top_pct - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_project_outside_bounds() {
        // Aarhus
        let far = GeoLocation::new(56.1629, 10.2039);
        assert!(MapBounds::COPENHAGEN.project(&far).is_none());
    }
}
